use tracing::info;

use crate::capture;
use crate::cli::commands::QueryArgs;
use crate::client::MessageClient;
use crate::errors::LexiaError;
use crate::render;

pub async fn handle_query(args: QueryArgs, quiet: bool) -> Result<(), LexiaError> {
    // Reject unsupported page contexts before bothering the server.
    capture::ensure_supported_target(&args.target)?;

    info!(target = %args.target, endpoint = %args.endpoint, "Requesting remote scan");

    let client = MessageClient::new(&args.endpoint);
    let result = client.request_scan(&args.target).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render::render_result(&result, !quiet);
    }

    Ok(())
}
