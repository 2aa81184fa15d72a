use console::{style, StyledObject};

use super::score::render_score;
use crate::models::{CheckStatus, Finding, ScanResult};

fn status_badge(status: CheckStatus) -> StyledObject<&'static str> {
    match status {
        CheckStatus::Crit => style("✗ Critical").red().bold(),
        CheckStatus::Warn => style("⚠ Alert").yellow().bold(),
        CheckStatus::Ok => style("✓ Verified").green(),
    }
}

fn render_bucket(heading: &str, findings: &[&Finding]) {
    // Empty buckets hide their section label entirely.
    if findings.is_empty() {
        return;
    }
    println!("\n{}", style(heading).bold().underlined());
    for finding in findings {
        println!(
            "  {} {} — {}",
            status_badge(finding.status),
            style(&finding.label).bold(),
            finding.detail,
        );
    }
}

/// Render a scan result as styled terminal output: the animated score
/// first, then findings grouped into three severity buckets.
pub fn render_result(result: &ScanResult, animate: bool) {
    render_score(result.score, animate);

    render_bucket("Critical", &result.by_status(CheckStatus::Crit));
    render_bucket("Warnings", &result.by_status(CheckStatus::Warn));
    render_bucket("Passed", &result.by_status(CheckStatus::Ok));
}
