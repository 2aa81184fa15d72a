use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lexia", version, about = "Heuristic GDPR compliance scanner for web pages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress spinners and score animation
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a page and render the compliance findings
    Scan(ScanArgs),
    /// Request a scan from a running lexia server
    Query(QueryArgs),
    /// Start the HTTP message endpoint
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// Target page URL (http or https)
    pub target: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: text, json, markdown (defaults to the config file's
    /// output.format, else text)
    #[arg(long)]
    pub format: Option<String>,

    /// Write the report to a file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the final score without the count-up animation
    #[arg(long)]
    pub no_animate: bool,
}

#[derive(Args, Clone)]
pub struct QueryArgs {
    /// Target page URL to scan remotely
    pub target: String,

    /// Scan server endpoint
    #[arg(long, default_value = "http://localhost:8080")]
    pub endpoint: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
