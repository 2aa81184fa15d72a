use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::finding::{CheckStatus, Finding};

/// The result of one compliance scan of a page.
///
/// Constructed fresh on every scan, immutable once returned. The wire shape
/// is exactly `{ score, checks }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Compliance score in [0, 100]. Starts at 100 and only decreases.
    pub score: u32,
    /// One finding per check, in check execution order.
    pub checks: Vec<Finding>,
}

impl ScanResult {
    /// Returns a map of status to the count of findings with that status.
    pub fn status_counts(&self) -> HashMap<CheckStatus, usize> {
        let mut counts = HashMap::new();
        for finding in &self.checks {
            *counts.entry(finding.status).or_insert(0) += 1;
        }
        counts
    }

    /// Findings with the given status, in execution order.
    pub fn by_status(&self, status: CheckStatus) -> Vec<&Finding> {
        self.checks.iter().filter(|f| f.status == status).collect()
    }

    pub fn total_checks(&self) -> usize {
        self.checks.len()
    }
}
