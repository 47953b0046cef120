//! Dossier — contract-text summarizer CLI and HTTP server.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dossier_core::DossierConfig;
use dossier_server::cli::{self, Cli, Command};
use dossier_server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `summarize --json` output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve {
        port: None,
        bind: None,
    }) {
        Command::Serve { port, bind } => serve(port, bind).await,
        Command::Summarize { files, json } => {
            let mut stdout = std::io::stdout().lock();
            cli::summarize_files(&files, json, &mut stdout)
        }
        Command::Categories => cli::print_categories(&mut std::io::stdout().lock()),
    }
}

async fn serve(port: Option<u16>, bind: Option<String>) -> anyhow::Result<()> {
    let mut config = DossierConfig::from_env()?;
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(bind) = bind {
        config.bind = bind;
    }

    let addr = config.addr();
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Dossier server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
