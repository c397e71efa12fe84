//! Siteplan CLI - navigation and configuration model for documentation sites.
//!
//! Provides commands for:
//! - `check`: Validate site configuration and sidebar declarations
//! - `emit`: Emit the validated site bundle as JSON for the renderer

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, EmitArgs};
use output::Output;

/// Siteplan - where a documentation site's navigation gets its shape.
#[derive(Parser)]
#[command(name = "siteplan", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site configuration and sidebar declarations.
    Check(CheckArgs),
    /// Emit the validated site bundle as JSON.
    Emit(EmitArgs),
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let output = Output::new();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Emit(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
