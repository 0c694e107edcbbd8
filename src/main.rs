use std::path::PathBuf;

use clap::Parser;
use igloo_sync_lib::bootstrap;

/// Keep a client's view of igloo spaces in sync over line-delimited JSON on
/// stdin/stdout.
#[derive(Parser, Debug)]
#[command(name = "igloo-sync", version, about)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::config::resolve_config(cli.config)?;
    if let Err(err) = bootstrap::tracing::init_tracing_subscriber(&config) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    bootstrap::run::run_stdio(config).await
}
