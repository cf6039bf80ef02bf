//! Responder server entry point.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use responder_api::{ApiConfig, AppState};
use responder_persistence::QuestionStore;
use responder_repository::QuestionRepository;

/// Minimal question/answer forum service.
#[derive(Debug, Parser)]
#[command(name = "responder", version, about)]
struct Cli {
    /// Host to bind to.
    #[arg(long, env = "RESPONDER_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to.
    #[arg(long, env = "RESPONDER_PORT", default_value_t = 3000)]
    port: u16,

    /// Path of the dataset file.
    #[arg(long, env = "RESPONDER_STORAGE", default_value = "questions.json")]
    storage: PathBuf,

    /// Log level when RUST_LOG is not set (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));

    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = QuestionStore::new(&cli.storage);
    store.ensure_exists().await?;
    tracing::info!("dataset file: {}", cli.storage.display());

    let repository = QuestionRepository::new(store);
    let state = AppState::new(ApiConfig::new(cli.host, cli.port), repository);

    responder_api::serve(state).await?;
    Ok(())
}
