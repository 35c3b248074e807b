//! CLI command handlers for Button Studio.
//!
//! This module provides headless, scriptable access to the widget layout
//! store and the layout web API.

pub mod common;
pub mod config;
pub mod layout;
#[cfg(feature = "web")]
pub mod serve;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use layout::LayoutArgs;
#[cfg(feature = "web")]
pub use serve::ServeArgs;
