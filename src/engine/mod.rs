//! The detection-and-scoring engine.
//!
//! `scan` runs a fixed battery of independent heuristic checks against a
//! snapshot of observable page state and aggregates their findings into a
//! weighted compliance score. It performs no I/O and holds no state between
//! invocations; every scan is a fresh, isolated computation.

pub mod checks;
pub mod page;
pub mod scorecard;

use tracing::debug;

pub use page::{AccessDenied, AnchorTag, PageSnapshot, PageState, ScriptTag};
pub use scorecard::Scorecard;

use crate::models::ScanResult;

/// Run the full check battery against a page.
///
/// Checks execute in a fixed order which determines the display order of
/// findings; the score itself is order-independent. Every run yields exactly
/// one finding per check category.
pub fn scan(page: &dyn PageState) -> ScanResult {
    let mut card = Scorecard::new();

    checks::fonts::run(page, &mut card);
    checks::tracking::run(page, &mut card);
    checks::cdn::run(page, &mut card);
    checks::embeds::run(page, &mut card);
    checks::legal::run_impressum(page, &mut card);
    checks::legal::run_privacy(page, &mut card);
    checks::storage::run(page, &mut card);

    let result = card.into_result();
    debug!(score = result.score, checks = result.total_checks(), "Scan complete");
    result
}
