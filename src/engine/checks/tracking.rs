use std::sync::OnceLock;

use regex::Regex;

use crate::engine::page::PageState;
use crate::engine::scorecard::Scorecard;
use crate::models::CheckStatus;

struct TrackerSignature {
    name: &'static str,
    pattern: &'static str,
}

const SIGNATURES: [TrackerSignature; 5] = [
    TrackerSignature {
        name: "Google Analytics",
        pattern: r"gtag|ga\.js|analytics\.js|googletagmanager",
    },
    TrackerSignature {
        name: "Facebook Pixel",
        pattern: r"fbevents\.js|connect\.facebook\.net",
    },
    TrackerSignature {
        name: "Matomo",
        pattern: r"matomo\.js|piwik\.js",
    },
    TrackerSignature {
        name: "Hotjar",
        pattern: r"hotjar\.com",
    },
    TrackerSignature {
        name: "LinkedIn Insight",
        pattern: r"snap\.licdn\.com",
    },
];

fn compiled() -> &'static Vec<(&'static str, Regex)> {
    static COMPILED: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        SIGNATURES
            .iter()
            .filter_map(|sig| Regex::new(sig.pattern).ok().map(|re| (sig.name, re)))
            .collect()
    })
}

/// Detects known tracking and analytics vendors in script sources, inline
/// script text, and loaded resource URLs.
pub fn run(page: &dyn PageState, card: &mut Scorecard) {
    let mut found: Vec<&str> = Vec::new();

    for (name, re) in compiled() {
        let in_scripts = page.scripts().iter().any(|script| {
            script.src.as_deref().is_some_and(|src| re.is_match(src)) || re.is_match(&script.text)
        });
        let in_resources = page.resources().iter().any(|url| re.is_match(url));
        if in_scripts || in_resources {
            found.push(*name);
        }
    }

    if found.is_empty() {
        card.pass(
            "tracking",
            "Tracking & Analytics",
            "No known tracking scripts found.",
        );
    } else {
        card.record(
            "tracking",
            "Tracking & Analytics",
            CheckStatus::Crit,
            format!("Active trackers: {}. Consent required.", found.join(", ")),
            40,
        );
    }
}
