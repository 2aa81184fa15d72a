use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::AppState;
use crate::capture;
use crate::engine;
use crate::errors::LexiaError;

/// The one action this component recognizes.
pub const ACTION_GET_RESULTS: &str = "getGDPRResults";

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub action: String,
    #[serde(default)]
    pub target: Option<String>,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "lexia",
        "version": env!("CARGO_PKG_VERSION"),
        "built_at": env!("BUILD_TIMESTAMP"),
        "git_hash": option_env!("GIT_HASH").unwrap_or("unknown"),
    }))
}

/// Request/response exchange of the scan protocol.
///
/// `{ "action": "getGDPRResults", "target": url }` answers with the
/// ScanResult `{ score, checks }`. Unrecognized actions receive no response
/// body. Failures are all-or-nothing: no partial result is ever returned.
pub async fn message(State(state): State<AppState>, Json(request): Json<MessageRequest>) -> Response {
    if request.action != ACTION_GET_RESULTS {
        warn!(action = %request.action, "Ignoring unrecognized message action");
        return StatusCode::NO_CONTENT.into_response();
    }

    let Some(target) = request.target else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "Missing target URL" })),
        )
            .into_response();
    };

    match capture::fetch_snapshot(&target, &state.fetch).await {
        Ok(snapshot) => {
            let result = engine::scan(&snapshot);
            info!(target = %target, score = result.score, "Scan served");
            Json(result).into_response()
        }
        Err(e @ LexiaError::InvalidTarget(_)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
        Err(e) => {
            warn!(target = %target, error = %e, "Scan failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
