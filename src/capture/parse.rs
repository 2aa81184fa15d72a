use reqwest::Url;
use scraper::{Html, Selector};

use crate::engine::page::{AnchorTag, PageSnapshot, ScriptTag};

/// Attribute holding the URL for each element kind that loads a resource.
const RESOURCE_SELECTORS: [(&str, &str); 4] = [
    ("script[src]", "src"),
    ("link[href]", "href"),
    ("img[src]", "src"),
    ("iframe[src]", "src"),
];

/// Parse a fetched document into the snapshot the engine consumes.
///
/// Synchronous on purpose: `scraper::Html` is not `Send`, so it must never
/// be held across an await point. All URLs are resolved against the final
/// response URL before they enter the snapshot.
pub fn parse_document(html: &str, base: &Url, cookies: String) -> PageSnapshot {
    let doc = Html::parse_document(html);

    let mut resources = Vec::new();
    for (selector, attr) in RESOURCE_SELECTORS {
        if let Ok(sel) = Selector::parse(selector) {
            for el in doc.select(&sel) {
                if let Some(url) = el.value().attr(attr).and_then(|raw| resolve(base, raw)) {
                    resources.push(url);
                }
            }
        }
    }

    let mut scripts = Vec::new();
    if let Ok(sel) = Selector::parse("script") {
        for el in doc.select(&sel) {
            scripts.push(ScriptTag {
                src: el.value().attr("src").and_then(|raw| resolve(base, raw)),
                text: el.text().collect(),
            });
        }
    }

    let mut iframes = Vec::new();
    if let Ok(sel) = Selector::parse("iframe") {
        for el in doc.select(&sel) {
            if let Some(url) = el.value().attr("src").and_then(|raw| resolve(base, raw)) {
                iframes.push(url);
            }
        }
    }

    let mut anchors = Vec::new();
    if let Ok(sel) = Selector::parse("a") {
        for el in doc.select(&sel) {
            anchors.push(AnchorTag {
                text: el.text().collect::<Vec<_>>().join(" ").trim().to_string(),
                href: el
                    .value()
                    .attr("href")
                    .and_then(|raw| resolve(base, raw))
                    .unwrap_or_default(),
            });
        }
    }

    let body_text = Selector::parse("body")
        .ok()
        .and_then(|sel| {
            doc.select(&sel)
                .next()
                .map(|body| body.text().collect::<Vec<_>>().join(" "))
        })
        .unwrap_or_default();

    PageSnapshot {
        resources,
        scripts,
        iframes,
        anchors,
        markup: doc.root_element().html(),
        body_text,
        cookies,
        // No script runtime in this host; reported through the same
        // best-effort capability surface the engine already tolerates.
        local_storage_items: 0,
        session_storage_items: 0,
    }
}

fn resolve(base: &Url, raw: &str) -> Option<String> {
    base.join(raw).ok().map(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/page/").unwrap()
    }

    #[test]
    fn test_relative_urls_resolved_against_base() {
        let snapshot = parse_document(
            r#"<html><body><a href="/datenschutz">Datenschutz</a></body></html>"#,
            &base(),
            String::new(),
        );
        assert_eq!(snapshot.anchors.len(), 1);
        assert_eq!(snapshot.anchors[0].href, "https://example.com/datenschutz");
        assert_eq!(snapshot.anchors[0].text, "Datenschutz");
    }

    #[test]
    fn test_resources_enumerated_from_dom() {
        let snapshot = parse_document(
            r#"<html><head>
                <script src="https://cdnjs.cloudflare.com/lib.js"></script>
                <link rel="stylesheet" href="style.css">
            </head><body><img src="logo.png"></body></html>"#,
            &base(),
            String::new(),
        );
        assert!(snapshot
            .resources
            .contains(&"https://cdnjs.cloudflare.com/lib.js".to_string()));
        assert!(snapshot
            .resources
            .contains(&"https://example.com/page/style.css".to_string()));
        assert!(snapshot
            .resources
            .contains(&"https://example.com/page/logo.png".to_string()));
    }

    #[test]
    fn test_inline_scripts_keep_text() {
        let snapshot = parse_document(
            r#"<html><body><script>window.gtag('config');</script></body></html>"#,
            &base(),
            String::new(),
        );
        assert_eq!(snapshot.scripts.len(), 1);
        assert!(snapshot.scripts[0].src.is_none());
        assert!(snapshot.scripts[0].text.contains("gtag"));
    }

    #[test]
    fn test_iframes_collected() {
        let snapshot = parse_document(
            r#"<html><body><iframe src="https://www.youtube.com/embed/x"></iframe></body></html>"#,
            &base(),
            String::new(),
        );
        assert_eq!(snapshot.iframes, ["https://www.youtube.com/embed/x"]);
    }

    #[test]
    fn test_markup_and_body_text_populated() {
        let snapshot = parse_document(
            r#"<html><body><p>Visible text</p></body></html>"#,
            &base(),
            String::new(),
        );
        assert!(snapshot.markup.contains("Visible text"));
        assert!(snapshot.body_text.contains("Visible text"));
    }

    #[test]
    fn test_storage_counts_are_zero_in_this_host() {
        let snapshot = parse_document("<html></html>", &base(), String::new());
        assert_eq!(snapshot.local_storage_items, 0);
        assert_eq!(snapshot.session_storage_items, 0);
    }
}
