use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::capture;
use crate::cli::commands::ScanArgs;
use crate::config::{self, FetchSettings, LexiaConfig, OutputFormat};
use crate::engine;
use crate::errors::LexiaError;
use crate::render;
use crate::reporting;

pub async fn handle_scan(args: ScanArgs, quiet: bool) -> Result<(), LexiaError> {
    let file_config = load_config(args.config.as_deref()).await?;
    let settings = FetchSettings::resolve(&file_config);

    let format = resolve_format(args.format.as_deref(), &file_config)?;

    info!(target = %args.target, format = %format, "Starting compliance scan");

    let spinner = if quiet || format != OutputFormat::Text {
        None
    } else {
        let bar = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}")
        {
            bar.set_style(spinner_style);
        }
        bar.set_message(format!("Analyzing {}", args.target));
        bar.enable_steady_tick(std::time::Duration::from_millis(120));
        Some(bar)
    };

    let scan_outcome = async {
        let snapshot = capture::fetch_snapshot(&args.target, &settings).await?;
        Ok::<_, LexiaError>(engine::scan(&snapshot))
    }
    .await;

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let result = scan_outcome?;

    match format {
        OutputFormat::Text => {
            render::render_result(&result, !args.no_animate && !quiet);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Markdown => {
            println!("{}", reporting::assemble_report(&result, &args.target))
        }
    }

    if let Some(path) = &args.output {
        let contents = match format {
            OutputFormat::Json => serde_json::to_string_pretty(&result)?,
            _ => reporting::assemble_report(&result, &args.target),
        };
        tokio::fs::write(path, contents).await?;
        info!(path = %path, "Report written");
    }

    Ok(())
}

async fn load_config(path: Option<&str>) -> Result<LexiaConfig, LexiaError> {
    match path {
        Some(path) => config::parse_config(std::path::Path::new(path)).await,
        None => Ok(LexiaConfig::default()),
    }
}

/// An explicitly passed flag always wins; the config file's `output.format`
/// applies only when the flag is absent.
fn resolve_format(
    flag: Option<&str>,
    file_config: &LexiaConfig,
) -> Result<OutputFormat, LexiaError> {
    match flag {
        Some(value) => value.parse(),
        None => Ok(file_config
            .output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or(OutputFormat::Text)),
    }
}
