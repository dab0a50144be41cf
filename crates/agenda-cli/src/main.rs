use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use agenda_cli::DataDir;

/// Terminal app for managing local cultural events.
#[derive(Parser)]
#[command(name = "agenda", version, about)]
struct Cli {
    /// Directory holding events.json, users.json, and settings.json.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    agenda_cli::run(&DataDir::new(cli.data_dir))
}
