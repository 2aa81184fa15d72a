use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::{self, FetchSettings, LexiaConfig};
use crate::errors::LexiaError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), LexiaError> {
    let file_config = match &args.config {
        Some(path) => config::parse_config(std::path::Path::new(path)).await?,
        None => LexiaConfig::default(),
    };

    info!(host = %args.host, port = args.port, "Starting scan server");

    let state = api::AppState {
        fetch: FetchSettings::resolve(&file_config),
    };
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| LexiaError::Internal(format!("Server error: {e}")))?;

    Ok(())
}
