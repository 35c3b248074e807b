//! `serve` command: runs the widget layout web API.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Args;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::services::LayoutRepository;
use crate::web::{self, AppState};

/// Run the widget layout web API
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Directory holding server-side widget layouts (overrides config)
    #[arg(long, value_name = "DIR")]
    layouts_dir: Option<PathBuf>,
}

impl ServeArgs {
    /// Execute serve command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.layouts_dir {
            config.server.layouts_dir = Some(dir.clone());
        }
        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;

        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| CliError::validation(format!("Invalid listen address: {e}")))?;
        let layouts_dir = config
            .layouts_dir()
            .map_err(|e| CliError::io(format!("Failed to resolve layouts directory: {e:#}")))?;
        let state = AppState::with_repository(config, LayoutRepository::new(layouts_dir));

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))?;
        runtime
            .block_on(web::run_server(state, addr))
            .map_err(|e| CliError::io(format!("Server error: {e:#}")))
    }
}
