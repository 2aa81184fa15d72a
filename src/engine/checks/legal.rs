use crate::engine::page::PageState;
use crate::engine::scorecard::Scorecard;
use crate::models::CheckStatus;

const IMPRESSUM_TERMS: [&str; 4] = ["impressum", "legal notice", "legal disclosure", "rechtliches"];
const PRIVACY_TERMS: [&str; 3] = ["datenschutz", "privacy policy", "datenschutzerklärung"];

/// True when any anchor's visible text or href contains one of the terms,
/// case-insensitively.
fn has_link_term(page: &dyn PageState, terms: &[&str]) -> bool {
    page.anchors().iter().any(|anchor| {
        let text = anchor.text.to_lowercase();
        let href = anchor.href.to_lowercase();
        terms.iter().any(|term| text.contains(term) || href.contains(term))
    })
}

/// Requires a legal-notice (imprint) link; the penalty applies when absent.
pub fn run_impressum(page: &dyn PageState, card: &mut Scorecard) {
    if has_link_term(page, &IMPRESSUM_TERMS) {
        card.pass("impressum", "Legal Notice", "Legal notice link detected.");
    } else {
        card.record(
            "impressum",
            "Legal Notice",
            CheckStatus::Crit,
            "No legal notice/imprint found!".to_string(),
            20,
        );
    }
}

/// Requires a privacy-policy link; the penalty applies when absent.
pub fn run_privacy(page: &dyn PageState, card: &mut Scorecard) {
    if has_link_term(page, &PRIVACY_TERMS) {
        card.pass("privacy", "Privacy Policy", "Privacy policy detected.");
    } else {
        card.record(
            "privacy",
            "Privacy Policy",
            CheckStatus::Crit,
            "No privacy policy found!".to_string(),
            20,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::page::{AnchorTag, PageSnapshot};

    fn page_with_anchor(text: &str, href: &str) -> PageSnapshot {
        PageSnapshot {
            anchors: vec![AnchorTag {
                text: text.to_string(),
                href: href.to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_match_is_case_insensitive_on_text() {
        let page = page_with_anchor("IMPRESSUM", "https://example.com/legal");
        let mut card = Scorecard::new();
        run_impressum(&page, &mut card);
        assert_eq!(card.into_result().checks[0].status, CheckStatus::Ok);
    }

    #[test]
    fn test_href_alone_is_sufficient() {
        let page = page_with_anchor("Read more", "https://example.com/privacy-policy");
        let mut card = Scorecard::new();
        run_privacy(&page, &mut card);
        assert_eq!(card.into_result().checks[0].status, CheckStatus::Ok);
    }

    #[test]
    fn test_datenschutz_anchor_resolves_privacy_only() {
        let page = page_with_anchor("Datenschutz", "https://example.com/datenschutz");
        let mut card = Scorecard::new();
        run_impressum(&page, &mut card);
        run_privacy(&page, &mut card);
        let result = card.into_result();
        assert_eq!(result.checks[0].key, "impressum");
        assert_eq!(result.checks[0].status, CheckStatus::Crit);
        assert_eq!(result.checks[1].key, "privacy");
        assert_eq!(result.checks[1].status, CheckStatus::Ok);
    }

    #[test]
    fn test_both_absent_costs_forty() {
        let page = PageSnapshot::default();
        let mut card = Scorecard::new();
        run_impressum(&page, &mut card);
        run_privacy(&page, &mut card);
        assert_eq!(card.into_result().score, 60);
    }

    #[test]
    fn test_umlaut_term_matches() {
        let page = page_with_anchor("Datenschutzerklärung", "/de/legal");
        let mut card = Scorecard::new();
        run_privacy(&page, &mut card);
        assert_eq!(card.into_result().checks[0].status, CheckStatus::Ok);
    }
}
