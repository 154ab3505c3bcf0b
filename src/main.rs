//! # Main Entry Point
//!
//! Initializes the layout assistant:
//! - Domain: Configuration and Types
//! - Application: Classifier, Assistant, Logging
//! - Infrastructure: HTTP surface
//!

mod application;
mod domain;
mod infrastructure;
mod strings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::application::assistant::KeywordAssistant;
use crate::application::logging::{self, ConsoleTarget};
use crate::domain::config::AppConfig;
use crate::domain::paths;
use crate::domain::traits::LayoutAssistant;
use crate::domain::types::AssistRequest;
use crate::infrastructure::http::{self, AppState};
use crate::strings::logs;

#[derive(Debug, Parser)]
#[command(
    name = "layout-assistant",
    version,
    about = "Keyword-driven layout assistant for the visual blog editor"
)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, global = true, default_value_os_t = paths::config_path())]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the HTTP endpoint
    Serve {
        /// Override `server.bind` from the config file
        #[arg(long)]
        bind: Option<String>,
    },
    /// Classify one instruction and print the response as JSON
    Classify {
        prompt: String,
        #[arg(long, default_value = "")]
        context: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let mut config = AppConfig::load(&cli.config)?;
    let config_exists = cli.config.exists();

    // 2. Logging Setup
    let console = match cli.command {
        Command::Serve { .. } => ConsoleTarget::Stdout,
        Command::Classify { .. } => ConsoleTarget::Stderr,
    };
    let _guard = logging::init(&config.logging, console)?;

    let config_display = cli.config.display().to_string();
    if config_exists {
        tracing::info!("{}", logs::config_loaded(&config_display));
    } else {
        tracing::info!("{}", logs::config_defaulted(&config_display));
    }

    // 3. Dispatch
    match cli.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            serve(config).await
        }
        Command::Classify { prompt, context } => classify(prompt, context).await,
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    tracing::info!("{}", logs::STARTING);

    let assistant: Arc<dyn LayoutAssistant> = Arc::new(KeywordAssistant::new(
        Duration::from_millis(config.assistant.simulated_latency_ms),
    ));
    let router = http::build_router(AppState::new(assistant), &config.server);

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    let addr = listener.local_addr()?.to_string();
    tracing::info!("{}", logs::listening(&addr, &config.server.endpoint));

    http::serve(listener, router).await
}

async fn classify(prompt: String, context: String) -> Result<()> {
    let request = AssistRequest::new(prompt).with_context(context);
    let response = KeywordAssistant::default().assist(&request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
