use crate::models::{CheckStatus, Finding, ScanResult};

pub fn format_finding_markdown(finding: &Finding) -> String {
    let status = match finding.status {
        CheckStatus::Crit => "Critical",
        CheckStatus::Warn => "Warning",
        CheckStatus::Ok => "Passed",
    };
    format!(
        "### {}\n\n**Status:** {}\n\n{}\n",
        finding.label, status, finding.detail,
    )
}

pub fn format_summary(result: &ScanResult) -> String {
    let counts = result.status_counts();
    let crit = counts.get(&CheckStatus::Crit).copied().unwrap_or(0);
    let warn = counts.get(&CheckStatus::Warn).copied().unwrap_or(0);
    let ok = counts.get(&CheckStatus::Ok).copied().unwrap_or(0);

    format!(
        "## Summary\n\n**Score: {} / 100**\n\n| Status | Count |\n|---|---|\n| Critical | {} |\n| Warning | {} |\n| Passed | {} |\n| **Total** | **{}** |\n",
        result.score,
        crit,
        warn,
        ok,
        result.total_checks(),
    )
}
