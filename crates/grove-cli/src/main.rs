//! Grove CLI
//!
//! Command-line interface for building, rendering and checking groves

use clap::{Parser, Subcommand};
use grove_core::logging_facility::{init, Profile};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "grove")]
#[command(about = "Grove - edge-set documents rendered to HTML", long_about = None)]
struct Cli {
    /// Logging profile (dev or prod)
    #[arg(long, global = true, default_value = "dev")]
    log_profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build and render the sample document
    Demo(commands::demo::DemoArgs),
    /// Render an edge log or legacy edge list to HTML
    Render(commands::render::RenderArgs),
    /// Validate the structural invariants of a grove
    Check(commands::check::CheckArgs),
    /// Print the content digest of a grove
    Digest(commands::digest::DigestArgs),
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_profile);
    tracing::debug!(command = ?cli.command, "dispatch");

    let result = match cli.command {
        Commands::Demo(args) => commands::demo::execute(args),
        Commands::Render(args) => commands::render::execute(args),
        Commands::Check(args) => commands::check::execute(args),
        Commands::Digest(args) => commands::digest::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
