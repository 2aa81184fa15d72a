use thiserror::Error;

/// Raised when the host environment denies access to cookies or storage.
///
/// The engine never propagates this: denied reads count as zero items.
#[derive(Debug, Clone, Error)]
#[error("page state access denied: {0}")]
pub struct AccessDenied(pub String);

/// A script element as observed on the page.
#[derive(Debug, Clone, Default)]
pub struct ScriptTag {
    /// Resolved source URL, if the script is external.
    pub src: Option<String>,
    /// Inline script text, empty for external scripts.
    pub text: String,
}

/// An anchor element with its visible text and resolved href.
#[derive(Debug, Clone, Default)]
pub struct AnchorTag {
    pub text: String,
    pub href: String,
}

/// Read capabilities the scan engine requires from its host environment.
///
/// The engine is pure with respect to these inputs: it mutates nothing and
/// performs no I/O of its own. Cookie and storage reads are best-effort and
/// may be denied by the host.
pub trait PageState {
    /// URLs of network resources the page loaded.
    fn resources(&self) -> &[String];

    /// All script elements with source URL and inline text.
    fn scripts(&self) -> &[ScriptTag];

    /// Source URLs of all iframe elements.
    fn iframes(&self) -> &[String];

    /// All anchor elements with visible text and resolved href.
    fn anchors(&self) -> &[AnchorTag];

    /// The page's full rendered markup.
    fn markup(&self) -> &str;

    /// The page's visible body text. Captured but not consulted by any
    /// current check; reserved for future text-based checks.
    fn body_text(&self) -> &str;

    /// Raw cookie string, entries separated by `;`. Best-effort.
    fn cookies(&self) -> Result<String, AccessDenied>;

    /// Number of local storage items. Best-effort.
    fn local_storage_len(&self) -> Result<usize, AccessDenied>;

    /// Number of session storage items. Best-effort.
    fn session_storage_len(&self) -> Result<usize, AccessDenied>;
}

/// Materialized page state captured by an adapter (HTTP fetch, test stub).
#[derive(Debug, Clone, Default)]
pub struct PageSnapshot {
    pub resources: Vec<String>,
    pub scripts: Vec<ScriptTag>,
    pub iframes: Vec<String>,
    pub anchors: Vec<AnchorTag>,
    pub markup: String,
    pub body_text: String,
    pub cookies: String,
    pub local_storage_items: usize,
    pub session_storage_items: usize,
}

impl PageState for PageSnapshot {
    fn resources(&self) -> &[String] {
        &self.resources
    }

    fn scripts(&self) -> &[ScriptTag] {
        &self.scripts
    }

    fn iframes(&self) -> &[String] {
        &self.iframes
    }

    fn anchors(&self) -> &[AnchorTag] {
        &self.anchors
    }

    fn markup(&self) -> &str {
        &self.markup
    }

    fn body_text(&self) -> &str {
        &self.body_text
    }

    fn cookies(&self) -> Result<String, AccessDenied> {
        Ok(self.cookies.clone())
    }

    fn local_storage_len(&self) -> Result<usize, AccessDenied> {
        Ok(self.local_storage_items)
    }

    fn session_storage_len(&self) -> Result<usize, AccessDenied> {
        Ok(self.session_storage_items)
    }
}
