use crate::engine::page::PageState;
use crate::engine::scorecard::Scorecard;
use crate::models::CheckStatus;

const FONT_HOSTS: [&str; 2] = ["fonts.googleapis.com", "fonts.gstatic.com"];

/// Detects fonts loaded from Google's font hosts.
///
/// Loaded resource URLs are checked first (method "Network"); if nothing
/// matches there, the raw markup is searched (method "Source Code"). The
/// detection method only affects the finding text, never the penalty.
pub fn run(page: &dyn PageState, card: &mut Scorecard) {
    let method = if page
        .resources()
        .iter()
        .any(|url| FONT_HOSTS.iter().any(|host| url.contains(host)))
    {
        Some("Network")
    } else if FONT_HOSTS.iter().any(|host| page.markup().contains(host)) {
        Some("Source Code")
    } else {
        None
    };

    match method {
        Some(method) => card.record(
            "fonts",
            "Google Fonts",
            CheckStatus::Crit,
            format!(
                "External fonts detected ({method}). Loading from third-party servers transfers IP addresses."
            ),
            30,
        ),
        None => card.pass("fonts", "Google Fonts", "No external Google Fonts found."),
    }
}
