//! Dynconf — generate configuration files from templates.
//!
//! # Usage
//!
//! ```text
//! dynconf generate [--settings <file>] [--dry-run]
//! ```
//!
//! Reads a definitions file (itself a template) listing `output=template`
//! pairs, renders each template with the application settings plus process
//! identity as context, and rewrites outputs only when the content changed.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use commands::generate::GenerateArgs;

#[derive(Parser, Debug)]
#[command(
    name = "dynconf",
    version,
    about = "Generate configuration files from templates using application settings",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render all configured templates and write changed outputs.
    Generate(GenerateArgs),
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => args.run(),
    }
}
