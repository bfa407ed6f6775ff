//! Stride CLI - Command line tool for the Stride storefront catalog.
//!
//! Commands:
//! - `stride render` - Render a catalog JSON file to an HTML page
//! - `stride validate` - Validate a catalog JSON file

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{RenderArgs, ValidateArgs};

/// Stride CLI - Render and inspect shoe catalog pages
#[derive(Parser)]
#[command(name = "stride")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a catalog to a full HTML page
    Render(RenderArgs),

    /// Validate a catalog file and summarize its listings
    Validate(ValidateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Validate(args) => commands::validate::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
