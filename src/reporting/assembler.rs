use chrono::Utc;

use super::formatter::{format_finding_markdown, format_summary};
use crate::models::{CheckStatus, ScanResult};

/// Assemble a full markdown report: metadata header, summary table, then
/// findings grouped by severity bucket. Empty buckets are omitted.
pub fn assemble_report(result: &ScanResult, target: &str) -> String {
    let mut report = format!(
        "# Compliance Scan Report\n\n- Target: {}\n- Tool: lexia v{}\n- Scan Date: {}\n\n{}",
        target,
        env!("CARGO_PKG_VERSION"),
        Utc::now().to_rfc3339(),
        format_summary(result),
    );

    for (status, heading) in [
        (CheckStatus::Crit, "Critical Findings"),
        (CheckStatus::Warn, "Warnings"),
        (CheckStatus::Ok, "Passed Checks"),
    ] {
        let findings = result.by_status(status);
        if findings.is_empty() {
            continue;
        }
        report.push_str(&format!("\n## {heading}\n\n"));
        for finding in findings {
            report.push_str(&format_finding_markdown(finding));
            report.push('\n');
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Finding;

    #[test]
    fn test_report_omits_empty_buckets() {
        let result = ScanResult {
            score: 100,
            checks: vec![Finding {
                key: "cdn".into(),
                label: "External CDNs".into(),
                status: CheckStatus::Ok,
                detail: "No external library CDNs detected.".into(),
            }],
        };
        let report = assemble_report(&result, "https://example.com");
        assert!(report.contains("## Passed Checks"));
        assert!(!report.contains("## Critical Findings"));
        assert!(!report.contains("## Warnings"));
        assert!(report.contains("Target: https://example.com"));
    }
}
