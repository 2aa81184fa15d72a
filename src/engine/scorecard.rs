use crate::models::{CheckStatus, Finding, ScanResult};

/// Accumulates findings and the weighted compliance score during one scan.
///
/// The score starts at 100. A `crit` finding subtracts its full severity, a
/// `warn` finding half of it, an `ok` finding nothing. Penalties are additive
/// and commutative, so check order never changes the final score; it only
/// fixes the display order of findings. Saturating arithmetic floors the
/// score at 0.
pub struct Scorecard {
    score: u32,
    checks: Vec<Finding>,
}

impl Scorecard {
    pub fn new() -> Self {
        Self {
            score: 100,
            checks: Vec::new(),
        }
    }

    /// Record one finding and apply its penalty.
    ///
    /// Warn penalties use integer division; severities are even by
    /// convention except `storage` (see DESIGN.md).
    pub fn record(
        &mut self,
        key: &'static str,
        label: &'static str,
        status: CheckStatus,
        detail: String,
        severity: u32,
    ) {
        self.checks.push(Finding {
            key: key.to_string(),
            label: label.to_string(),
            status,
            detail,
        });
        match status {
            CheckStatus::Crit => self.score = self.score.saturating_sub(severity),
            CheckStatus::Warn => self.score = self.score.saturating_sub(severity / 2),
            CheckStatus::Ok => {}
        }
    }

    /// Record a passing finding. No penalty applies.
    pub fn pass(&mut self, key: &'static str, label: &'static str, detail: &str) {
        self.record(key, label, CheckStatus::Ok, detail.to_string(), 0);
    }

    pub fn into_result(self) -> ScanResult {
        ScanResult {
            score: self.score,
            checks: self.checks,
        }
    }
}

impl Default for Scorecard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crit_subtracts_full_severity() {
        let mut card = Scorecard::new();
        card.record("fonts", "Google Fonts", CheckStatus::Crit, "found".into(), 30);
        assert_eq!(card.into_result().score, 70);
    }

    #[test]
    fn test_warn_subtracts_half_severity() {
        let mut card = Scorecard::new();
        card.record("embeds", "Media Embeds", CheckStatus::Warn, "found".into(), 10);
        assert_eq!(card.into_result().score, 95);
    }

    #[test]
    fn test_ok_ignores_severity() {
        let mut card = Scorecard::new();
        card.pass("privacy", "Privacy Policy", "detected");
        assert_eq!(card.into_result().score, 100);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let mut card = Scorecard::new();
        card.record("a", "a", CheckStatus::Crit, String::new(), 40);
        card.record("b", "b", CheckStatus::Crit, String::new(), 40);
        card.record("c", "c", CheckStatus::Crit, String::new(), 40);
        assert_eq!(card.into_result().score, 0);
    }

    #[test]
    fn test_penalties_commute() {
        let mut forward = Scorecard::new();
        forward.record("a", "a", CheckStatus::Crit, String::new(), 30);
        forward.record("b", "b", CheckStatus::Warn, String::new(), 10);
        forward.record("c", "c", CheckStatus::Crit, String::new(), 20);

        let mut reversed = Scorecard::new();
        reversed.record("c", "c", CheckStatus::Crit, String::new(), 20);
        reversed.record("b", "b", CheckStatus::Warn, String::new(), 10);
        reversed.record("a", "a", CheckStatus::Crit, String::new(), 30);

        assert_eq!(forward.into_result().score, reversed.into_result().score);
    }

    #[test]
    fn test_findings_keep_record_order() {
        let mut card = Scorecard::new();
        card.pass("first", "First", "");
        card.pass("second", "Second", "");
        let result = card.into_result();
        assert_eq!(result.checks[0].key, "first");
        assert_eq!(result.checks[1].key, "second");
    }

    #[test]
    fn test_odd_warn_severity_uses_integer_division() {
        let mut card = Scorecard::new();
        card.record("storage", "Storage & Cookies", CheckStatus::Warn, String::new(), 5);
        assert_eq!(card.into_result().score, 98);
    }
}
