use serde::{Deserialize, Serialize};

/// Outcome of a single compliance check, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Crit,
    Warn,
    Ok,
}

impl CheckStatus {
    /// Returns a numeric rank where lower values indicate higher severity.
    /// Crit = 0, Warn = 1, Ok = 2.
    pub fn rank(&self) -> u8 {
        match self {
            CheckStatus::Crit => 0,
            CheckStatus::Warn => 1,
            CheckStatus::Ok => 2,
        }
    }
}

/// A single finding produced by one compliance check during a scan.
///
/// Exactly one finding exists per check category per run, and findings keep
/// the order in which the checks executed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Stable identifier of the check (e.g. "fonts", "tracking").
    pub key: String,
    /// Human-readable check name.
    pub label: String,
    pub status: CheckStatus,
    /// Human-readable explanation, may embed matched values.
    pub detail: String,
}
