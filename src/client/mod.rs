//! Client side of the message protocol.
//!
//! Mirrors the presentation adapter's failure handling: if the scan endpoint
//! does not answer, wait a short fixed delay and retry exactly once. A
//! second failure is terminal for the invocation; the caller must re-trigger
//! manually.

use std::time::Duration;

use serde_json::json;
use tracing::{debug, warn};

use crate::api::routes::ACTION_GET_RESULTS;
use crate::errors::LexiaError;
use crate::models::ScanResult;

/// Delay before the single retry, matching the engine-injection settle time.
const RETRY_DELAY: Duration = Duration::from_millis(200);

pub struct MessageClient {
    http: reqwest::Client,
    endpoint: String,
}

impl MessageClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Issue a scan request, retrying once on transport failure.
    pub async fn request_scan(&self, target: &str) -> Result<ScanResult, LexiaError> {
        match self.send(target).await {
            Ok(result) => Ok(result),
            Err(e) if e.classify().retryable => {
                warn!(error = %e, "Scan endpoint not reachable, retrying once");
                tokio::time::sleep(RETRY_DELAY).await;
                self.send(target).await
            }
            Err(e) => Err(e),
        }
    }

    async fn send(&self, target: &str) -> Result<ScanResult, LexiaError> {
        let url = format!("{}/api/message", self.endpoint);
        debug!(url = %url, target = %target, "Sending scan request");

        let response = self
            .http
            .post(&url)
            .json(&json!({ "action": ACTION_GET_RESULTS, "target": target }))
            .send()
            .await
            .map_err(|e| LexiaError::Network(format!("Request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v["error"].as_str().map(str::to_string))
                .unwrap_or_else(|| format!("endpoint answered {status}"));
            return match status.as_u16() {
                422 => Err(LexiaError::InvalidTarget(detail)),
                502 => Err(LexiaError::Upstream(detail)),
                _ => Err(LexiaError::Internal(detail)),
            };
        }

        response
            .json::<ScanResult>()
            .await
            .map_err(|e| LexiaError::Internal(format!("Invalid scan response: {e}")))
    }
}
