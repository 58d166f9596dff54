//! docnav CLI - Site navigation config checker.
//!
//! Provides commands for:
//! - `check`: Validate the configuration and report every problem
//! - `sidebar`: Print the sidebar resolved for a page path
//! - `dump`: Print the validated model as JSON for the renderer

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, DumpArgs, SidebarArgs};
use output::Output;

/// docnav - Site navigation config checker.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site configuration.
    Check(CheckArgs),
    /// Print the sidebar groups for a page path.
    Sidebar(SidebarArgs),
    /// Print the validated configuration as JSON.
    Dump(DumpArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Check(args) => args.config.verbose,
            Self::Sidebar(args) => args.config.verbose,
            Self::Dump(args) => args.config.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
        Commands::Dump(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
