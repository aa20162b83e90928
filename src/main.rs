//! clientcards - a terminal UI for client card requests
//!
//! Talks to the Client API backend: lists, adds, finds and deletes client
//! records and submits card status updates, either interactively or one
//! command at a time.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clientcards::cli::{self, ClientCommand, ConfigSubcommand};
use clientcards::config::ConfigLoader;
use clientcards::services::ClientService;
use clientcards::tui::{self, App, Theme};
use std::process::ExitCode;

/// clientcards - a terminal UI for client card requests
#[derive(Parser, Debug)]
#[command(name = "clientcards", version)]
#[command(about = "A terminal UI for managing client card requests", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    /// Client API base URL (overrides CLIENTCARDS_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Run one command instead of the TUI
    #[command(subcommand)]
    command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    #[command(flatten)]
    Client(ClientCommand),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Handle config subcommand
    let command = match args.command {
        Some(Command::Config { subcommand }) => {
            cli::handle_config_command(subcommand)?;
            return Ok(ExitCode::SUCCESS);
        }
        other => other,
    };

    // Initialize logging if debug flag is set
    let log_file = cli::init_logging(args.debug)?;

    // Print log file location to stderr before starting TUI (so it doesn't interfere)
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    // Load configuration
    let mut config = ConfigLoader::load().unwrap_or_else(|e| {
        eprintln!("Warning: {:#}; using default configuration", e);
        ConfigLoader::load_defaults()
    });
    if let Some(api_url) = args.api_url {
        config.api.base_url = api_url;
    }

    tracing::debug!(
        "Configuration loaded: api.baseUrl={}, headless={}",
        config.api.base_url,
        config.ui.headless
    );

    let service = ClientService::connect(&config.api.base_url)
        .with_context(|| format!("Cannot use API base URL '{}'", config.api.base_url))?;

    match command {
        Some(Command::Client(cmd)) => {
            let mut input = std::io::stdin().lock();
            let mut out = std::io::stdout();
            let succeeded = cli::handle_client_command(cmd, &service, &mut input, &mut out).await?;
            Ok(if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Some(Command::Config { .. }) | None => {
            let app = App::new(config, Theme::default());
            tui::run_tui(app, service).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
