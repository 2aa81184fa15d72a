use reqwest::header::SET_COOKIE;
use tracing::{debug, info};

use super::parse::parse_document;
use crate::config::FetchSettings;
use crate::engine::page::PageSnapshot;
use crate::errors::LexiaError;

/// Reject page contexts the scanner cannot analyze (browser-internal and
/// local schemes). Checked before any request is attempted.
pub fn ensure_supported_target(target: &str) -> Result<(), LexiaError> {
    if target.starts_with("http://") || target.starts_with("https://") {
        Ok(())
    } else {
        Err(LexiaError::InvalidTarget(format!(
            "Analysis limited to http(s) pages: {target}"
        )))
    }
}

/// Fetch a live page and materialize it into a `PageSnapshot`.
///
/// The cookie string is assembled from the response's `Set-Cookie` headers;
/// URLs are resolved against the final URL after redirects.
pub async fn fetch_snapshot(
    target: &str,
    settings: &FetchSettings,
) -> Result<PageSnapshot, LexiaError> {
    ensure_supported_target(target)?;

    info!(target = %target, "Fetching page");

    let client = reqwest::Client::builder()
        .user_agent(&settings.user_agent)
        .timeout(settings.timeout)
        .build()
        .map_err(|e| LexiaError::Internal(format!("HTTP client build failed: {e}")))?;

    let response = client.get(target).send().await.map_err(|e| {
        if e.is_timeout() {
            LexiaError::Timeout(format!("Fetching {target} timed out"))
        } else {
            LexiaError::Upstream(format!("{target}: {e}"))
        }
    })?;

    if !response.status().is_success() {
        return Err(LexiaError::Upstream(format!(
            "{target} answered {}",
            response.status()
        )));
    }

    let cookies = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .collect::<Vec<_>>()
        .join("; ");

    let final_url = response.url().clone();
    let html = response
        .text()
        .await
        .map_err(|e| LexiaError::Upstream(format!("Reading body of {target} failed: {e}")))?;

    debug!(bytes = html.len(), final_url = %final_url, "Page fetched");

    Ok(parse_document(&html, &final_url, cookies))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_and_https_supported() {
        assert!(ensure_supported_target("http://example.com").is_ok());
        assert!(ensure_supported_target("https://example.com/page").is_ok());
    }

    #[test]
    fn test_internal_pages_rejected() {
        for target in ["chrome://settings", "about:blank", "file:///etc/passwd", "example.com"] {
            let err = ensure_supported_target(target).unwrap_err();
            assert!(matches!(err, LexiaError::InvalidTarget(_)), "{target}");
        }
    }
}
