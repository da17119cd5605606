mod cli;
mod commands;

use std::process::ExitCode;
use std::sync::Arc;

use imekeys_common::ImeKeysError;
use imekeys_config::{KeymapManager, TomlFileStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("imekeys=info");
    let directive = log_directive.parse().or_else(|_| "imekeys=info".parse());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Args) -> Result<(), ImeKeysError> {
    let store = match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {path}");
            TomlFileStore::new(path)
        }
        None => TomlFileStore::at_default_path()?,
    };
    tracing::debug!(path = %store.path().display(), "config store");

    let mut manager = KeymapManager::new(Arc::new(store));
    let mut stdout = std::io::stdout().lock();
    commands::run(args.command, &mut manager, &mut stdout).await
}
