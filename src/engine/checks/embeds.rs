use std::sync::OnceLock;

use regex::Regex;

use crate::engine::page::PageState;
use crate::engine::scorecard::Scorecard;
use crate::models::CheckStatus;

struct EmbedProvider {
    name: &'static str,
    pattern: &'static str,
}

const PROVIDERS: [EmbedProvider; 3] = [
    EmbedProvider {
        name: "YouTube",
        pattern: r"youtube\.com|youtu\.be",
    },
    EmbedProvider {
        name: "Vimeo",
        pattern: r"vimeo\.com",
    },
    EmbedProvider {
        name: "Google Maps",
        pattern: r"google\.com/maps",
    },
];

fn compiled() -> &'static Vec<(&'static str, Regex)> {
    static COMPILED: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        PROVIDERS
            .iter()
            .filter_map(|p| Regex::new(p.pattern).ok().map(|re| (p.name, re)))
            .collect()
    })
}

/// Detects third-party media embedded via iframes. Providers are listed
/// once even when several iframes match the same one.
pub fn run(page: &dyn PageState, card: &mut Scorecard) {
    let found: Vec<&str> = compiled()
        .iter()
        .filter(|(_, re)| page.iframes().iter().any(|src| re.is_match(src)))
        .map(|(name, _)| *name)
        .collect();

    if found.is_empty() {
        card.pass("embeds", "Media Embeds", "No external video/map embeds found.");
    } else {
        card.record(
            "embeds",
            "Media Embeds",
            CheckStatus::Warn,
            format!(
                "External media found: {}. Two-click solution recommended.",
                found.join(", ")
            ),
            10,
        );
    }
}
