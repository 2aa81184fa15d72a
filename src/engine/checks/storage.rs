use tracing::warn;

use crate::engine::page::PageState;
use crate::engine::scorecard::Scorecard;
use crate::models::CheckStatus;

const ITEM_LIMIT: usize = 5;

/// Flags heavy cookie or web-storage usage.
///
/// Cookie and storage reads are best-effort: the host may deny them, in
/// which case the denial is logged and the count treated as zero. Denial
/// never fails the scan.
pub fn run(page: &dyn PageState, card: &mut Scorecard) {
    let cookie_count = match page.cookies() {
        Ok(raw) if raw.trim().is_empty() => 0,
        Ok(raw) => raw.split(';').count(),
        Err(e) => {
            warn!(error = %e, "Access to cookies denied by host");
            0
        }
    };

    let storage_count = page.local_storage_len().unwrap_or_else(|e| {
        warn!(error = %e, "Access to local storage denied by host");
        0
    }) + page.session_storage_len().unwrap_or_else(|e| {
        warn!(error = %e, "Access to session storage denied by host");
        0
    });

    if cookie_count > ITEM_LIMIT || storage_count > ITEM_LIMIT {
        card.record(
            "storage",
            "Storage & Cookies",
            CheckStatus::Warn,
            format!(
                "{cookie_count} cookies and {storage_count} storage items active. Check for consent requirement."
            ),
            5,
        );
    } else {
        card.pass(
            "storage",
            "Storage & Cookies",
            "Low number of cookies/storage items.",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::page::{AccessDenied, AnchorTag, PageSnapshot, PageState, ScriptTag};

    /// Stub host that denies every cookie/storage read.
    #[derive(Default)]
    struct DeniedPage {
        inner: PageSnapshot,
    }

    impl PageState for DeniedPage {
        fn resources(&self) -> &[String] {
            self.inner.resources()
        }
        fn scripts(&self) -> &[ScriptTag] {
            self.inner.scripts()
        }
        fn iframes(&self) -> &[String] {
            self.inner.iframes()
        }
        fn anchors(&self) -> &[AnchorTag] {
            self.inner.anchors()
        }
        fn markup(&self) -> &str {
            self.inner.markup()
        }
        fn body_text(&self) -> &str {
            self.inner.body_text()
        }
        fn cookies(&self) -> Result<String, AccessDenied> {
            Err(AccessDenied("cookies blocked".into()))
        }
        fn local_storage_len(&self) -> Result<usize, AccessDenied> {
            Err(AccessDenied("storage blocked".into()))
        }
        fn session_storage_len(&self) -> Result<usize, AccessDenied> {
            Err(AccessDenied("storage blocked".into()))
        }
    }

    #[test]
    fn test_denied_access_counts_as_zero() {
        let page = DeniedPage::default();
        let mut card = Scorecard::new();
        run(&page, &mut card);
        let result = card.into_result();
        assert_eq!(result.checks[0].status, CheckStatus::Ok);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_many_cookies_warns() {
        let page = PageSnapshot {
            cookies: "a=1; b=2; c=3; d=4; e=5; f=6".into(),
            ..Default::default()
        };
        let mut card = Scorecard::new();
        run(&page, &mut card);
        let result = card.into_result();
        assert_eq!(result.checks[0].status, CheckStatus::Warn);
        assert!(result.checks[0].detail.starts_with("6 cookies"));
    }

    #[test]
    fn test_combined_storage_counts() {
        let page = PageSnapshot {
            local_storage_items: 3,
            session_storage_items: 3,
            ..Default::default()
        };
        let mut card = Scorecard::new();
        run(&page, &mut card);
        assert_eq!(card.into_result().checks[0].status, CheckStatus::Warn);
    }

    #[test]
    fn test_empty_cookie_string_is_zero_entries() {
        let page = PageSnapshot {
            cookies: "  ".into(),
            ..Default::default()
        };
        let mut card = Scorecard::new();
        run(&page, &mut card);
        assert_eq!(card.into_result().checks[0].status, CheckStatus::Ok);
    }

    #[test]
    fn test_exactly_five_is_not_flagged() {
        let page = PageSnapshot {
            cookies: "a=1; b=2; c=3; d=4; e=5".into(),
            ..Default::default()
        };
        let mut card = Scorecard::new();
        run(&page, &mut card);
        assert_eq!(card.into_result().checks[0].status, CheckStatus::Ok);
    }
}
