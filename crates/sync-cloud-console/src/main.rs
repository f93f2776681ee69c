/*
[INPUT]:  CLI arguments, YAML configuration file, SYNC_CLOUD__* environment
[OUTPUT]: Interactive TUI or one-shot task commands against the server
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or subcommands
*/

mod cli;
mod tui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use sync_cloud_adapter::{SyncCloudApi, SyncCloudClient};
use sync_cloud_console::logging::{self, LOG_BUFFER_CAPACITY, LogBuffer};
use sync_cloud_console::{ConsoleConfig, TaskAction};

use cli::commands::CreateArgs;

#[derive(Parser, Debug)]
#[command(name = "sync-cloud", version, about = "Manage cloud sync tasks of a file server")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    /// Overrides `log.level` from the config file
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    log_level: Option<String>,
    /// Overrides `server.base_url` from the config file
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive terminal UI (default)
    Tui,
    /// Print all sync tasks
    List {
        #[arg(long)]
        json: bool,
    },
    /// Register a new sync destination
    Create(CreateArgs),
    /// Enable a task
    Start { id: String },
    /// Disable a task
    Stop { id: String },
    /// Delete a task
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Write a configuration file interactively
    Init {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let command = args.command.unwrap_or(Command::Tui);

    if let Command::Init { output } = command {
        let output = match output.or_else(ConsoleConfig::default_path) {
            Some(path) => path,
            None => anyhow::bail!("no config directory on this platform; pass --output"),
        };
        return cli::init::run_init(output);
    }

    let mut config = ConsoleConfig::load(args.config_path.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.server.base_url = base_url;
    }
    if let Some(level) = args.log_level {
        config.log.level = level;
    }

    let client = SyncCloudClient::with_config(config.client_config())
        .context("create sync cloud client")?;

    if let Command::Tui = command {
        let log_buffer = LogBuffer::handle(LOG_BUFFER_CAPACITY);
        let _file_guard = logging::init_tui_tracing(
            &config.log.level,
            log_buffer.clone(),
            config.log.dir.as_deref(),
        )?;
        let base_url = client.base_url().to_string();
        let api: Arc<dyn SyncCloudApi> = Arc::new(client);
        return tui::run_tui(api, base_url, log_buffer).await;
    }

    logging::init_cli_tracing(&config.log.level)?;
    info!(base_url = %client.base_url(), "running command");
    match command {
        Command::List { json } => cli::commands::run_list(&client, json).await,
        Command::Create(create_args) => cli::commands::run_create(&client, create_args).await,
        Command::Start { id } => cli::commands::run_action(&client, &id, TaskAction::Start).await,
        Command::Stop { id } => cli::commands::run_action(&client, &id, TaskAction::Stop).await,
        Command::Delete { id, yes } => cli::commands::run_delete(&client, &id, yes).await,
        Command::Tui | Command::Init { .. } => Ok(()),
    }
}
