//! Button Studio - widget layout tool for the CSS button designer
//!
//! This binary manages the designer's widget layout from the command line and
//! serves the widget layout web API.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use button_studio::cli::{self, CliResult};
use button_studio::constants::APP_NAME;

/// Button Studio - widget layout tool for the CSS button designer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect and rearrange the widget layout
    Layout(cli::LayoutArgs),
    /// Show or change configuration
    Config(cli::ConfigArgs),
    /// Run the widget layout web API
    #[cfg(feature = "web")]
    Serve(cli::ServeArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: &Command) -> CliResult<()> {
    match command {
        Command::Layout(args) => args.execute(),
        Command::Config(args) => args.execute(),
        #[cfg(feature = "web")]
        Command::Serve(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli.command) {
        eprintln!("{APP_NAME}: {e}");
        std::process::exit(e.exit_code());
    }
}
