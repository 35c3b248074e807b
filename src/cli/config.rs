//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Directory for the local layout store
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory for server-side widget layouts
    #[arg(long, value_name = "DIR")]
    layouts_dir: Option<PathBuf>,

    /// Web server host
    #[arg(long)]
    host: Option<String>,

    /// Web server port
    #[arg(long)]
    port: Option<u16>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    storage: StorageOutput,
    server: ServerOutput,
}

#[derive(Serialize, Debug)]
struct StorageOutput {
    data_dir: String,
}

#[derive(Serialize, Debug)]
struct ServerOutput {
    host: String,
    port: u16,
    layouts_dir: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

fn load_config() -> CliResult<Config> {
    Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let output = config_output(&config)?;

        if self.json {
            print_json(&output)?;
        } else {
            println!("Button Studio Configuration");
            println!("===========================");
            println!();
            println!("Storage:");
            println!("  Data Directory: {}", output.storage.data_dir);
            println!();
            println!("Server:");
            println!("  Address: {}:{}", output.server.host, output.server.port);
            println!("  Layouts Directory: {}", output.server.layouts_dir);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.data_dir.is_none()
            && self.layouts_dir.is_none()
            && self.host.is_none()
            && self.port.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --data-dir, --layouts-dir, --host, or --port",
            ));
        }

        let mut config = load_config()?;

        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.layouts_dir {
            config.server.layouts_dir = Some(dir.clone());
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

fn config_output(config: &Config) -> CliResult<ConfigOutput> {
    let data_dir = config
        .data_dir()
        .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e:#}")))?;
    let layouts_dir = config
        .layouts_dir()
        .map_err(|e| CliError::io(format!("Failed to resolve layouts directory: {e:#}")))?;

    Ok(ConfigOutput {
        storage: StorageOutput {
            data_dir: data_dir.to_string_lossy().to_string(),
        },
        server: ServerOutput {
            host: config.server.host.clone(),
            port: config.server.port,
            layouts_dir: layouts_dir.to_string_lossy().to_string(),
        },
    })
}
