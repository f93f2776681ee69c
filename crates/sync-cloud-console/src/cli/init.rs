/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When ConsoleConfig schema changes
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use sync_cloud_console::config::{ConsoleConfig, HttpConfig, LogConfig, ServerConfig};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

pub fn run_init(output: PathBuf) -> Result<()> {
    println!("{}", style("Welcome to sync-cloud init").bold().cyan());
    println!(
        "{}",
        style("This will write the console configuration file.").dim()
    );

    let theme = ColorfulTheme::default();
    let defaults = ConsoleConfig::default();

    if output.exists() {
        let overwrite = Confirm::with_theme(&theme)
            .with_prompt(format!("{} exists. Overwrite?", output.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("{}", style("Aborted").yellow());
            return Ok(());
        }
    }

    println!("\n{}", style("--- Server ---").bold());
    let base_url: String = Input::with_theme(&theme)
        .with_prompt("Server base URL")
        .default(defaults.server.base_url.clone())
        .interact_text()?;

    let timeout_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Request timeout (seconds)")
        .default(defaults.http.timeout_secs)
        .interact_text()?;

    println!("\n{}", style("--- Logging ---").bold());
    let default_level = LOG_LEVELS
        .iter()
        .position(|level| *level == defaults.log.level)
        .unwrap_or(2);
    let level_selection = Select::with_theme(&theme)
        .with_prompt("Log level")
        .items(&LOG_LEVELS)
        .default(default_level)
        .interact()?;

    let log_dir: String = Input::with_theme(&theme)
        .with_prompt("Log directory for the TUI (empty to disable)")
        .allow_empty(true)
        .interact_text()?;

    let config = ConsoleConfig {
        server: ServerConfig { base_url },
        http: HttpConfig {
            timeout_secs,
            ..defaults.http
        },
        log: LogConfig {
            level: LOG_LEVELS[level_selection].to_string(),
            dir: non_empty_path(&log_dir),
        },
    };

    write_config(&config, &output)?;
    println!(
        "\n{} {}",
        style("Configuration written to").green(),
        style(output.display()).bold()
    );
    Ok(())
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

fn write_config(config: &ConsoleConfig, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
    }
    let yaml = config.to_yaml()?;
    std::fs::write(output, yaml)
        .with_context(|| format!("write config file {}", output.display()))
}
