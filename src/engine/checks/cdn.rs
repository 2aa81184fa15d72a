use crate::engine::page::PageState;
use crate::engine::scorecard::Scorecard;
use crate::models::CheckStatus;

const CDN_HOSTS: [&str; 5] = [
    "cdnjs.cloudflare.com",
    "unpkg.com",
    "jsdelivr.net",
    "bootstrapcdn.com",
    "ajax.googleapis.com",
];

/// Detects resources served from well-known public CDNs. The finding lists
/// each matched domain once, in table order.
pub fn run(page: &dyn PageState, card: &mut Scorecard) {
    let found: Vec<&str> = CDN_HOSTS
        .iter()
        .filter(|host| page.resources().iter().any(|url| url.contains(*host)))
        .copied()
        .collect();

    if found.is_empty() {
        card.pass("cdn", "External CDNs", "No external library CDNs detected.");
    } else {
        card.record(
            "cdn",
            "External CDNs",
            CheckStatus::Crit,
            format!(
                "Resources loaded from CDNs: {}. IP consent required.",
                found.join(", ")
            ),
            20,
        );
    }
}
