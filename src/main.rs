//! CLI entry point for parrot.

mod cli;

use clap::Parser;
use parrot::api::{generate, lookup, ApiClient};
use parrot::config::load_config;
use parrot::error::ParrotError;
use parrot::present::{Presenter, StdoutPresenter, TmuxPresenter};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_tracing();

    // Load config.
    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if let Some(secs) = args.timeout {
        config.timeout_secs = secs;
    }
    if args.tmux {
        config.display.tmux = true;
    }

    let presenter: Box<dyn Presenter> = if config.display.tmux {
        Box::new(TmuxPresenter::new(
            config.display.window_name.clone(),
            config.display.viewer.clone(),
        ))
    } else {
        Box::new(StdoutPresenter)
    };

    let client = ApiClient::new(Duration::from_secs(config.timeout_secs));

    let result: Result<String, ParrotError> = match &args.command {
        cli::Command::Ask { endpoint, prompt } => {
            // Credential precondition is checked before any request exists.
            match config.require_api_key() {
                Ok(api_key) => generate(&client, endpoint, api_key, prompt)
                    .await
                    .map_err(ParrotError::from),
                Err(e) => Err(ParrotError::from(e)),
            }
        }
        cli::Command::Get { template, param } => lookup(&client, template, param)
            .await
            .map_err(ParrotError::from),
    };

    let text = match result {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = presenter.display(&text).await {
        eprintln!("error: {}", ParrotError::from(e));
        std::process::exit(1);
    }
}

fn init_tracing() {
    // Diagnostics go to stderr; stdout carries only the response text.
    let filter = EnvFilter::try_from_env("PARROT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
