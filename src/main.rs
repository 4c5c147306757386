use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use connectx::api::Router;
use connectx::config::AppConfig;

/// Resolve a move request the way the game host would.
#[derive(Parser)]
#[command(name = "connectx", about = "Resolve a Connect Four move request")]
struct Cli {
    /// File holding the JSON request body (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connectx.toml")]
    config: PathBuf,

    /// HTTP method of the simulated request
    #[arg(long, default_value = "POST")]
    method: String,

    /// Request path (defaults to the configured move path)
    #[arg(long)]
    path: Option<String>,

    /// Pretty-print the response body
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    init_logging(&config)?;

    if !cli.config.exists() {
        info!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let body = read_body(cli.input.as_ref())?;
    let router = Router::new(&config.api);
    let path = cli.path.unwrap_or_else(|| router.move_path().to_string());
    let method = cli.method.to_ascii_uppercase();

    let Some(response) = router.dispatch(&method, &path, &body) else {
        bail!("no handler for {method} {path}");
    };

    info!(
        status = response.status,
        content_type = response.content_type(),
        "request handled"
    );
    println!("{}", response.to_json(cli.pretty)?);
    Ok(())
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let default_level = config.logging.level_filter()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn read_body(input: Option<&PathBuf>) -> Result<Vec<u8>> {
    match input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("reading request from {}", path.display()))
        }
        None => {
            let mut body = Vec::new();
            io::stdin()
                .read_to_end(&mut body)
                .context("reading request from stdin")?;
            Ok(body)
        }
    }
}
