//! Infill CLI — the main entry point.
//!
//! Commands:
//! - `complete` — Run a completion at a cursor position
//! - `prompt`   — Print the assembled prompt without calling the model
//! - `doctor`   — Diagnose configuration and backend health

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "infill",
    about = "Infill — fill-in-the-middle code completion over Ollama",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Complete code at a cursor position
    Complete(CursorArgs),

    /// Print the assembled prompt for a cursor position
    Prompt(CursorArgs),

    /// Diagnose configuration and backend health
    Doctor,
}

#[derive(Args)]
struct CursorArgs {
    /// Source file to complete, relative to the workspace root
    file: String,

    /// One-based cursor line
    #[arg(short, long)]
    line: u32,

    /// One-based cursor column
    #[arg(short, long)]
    column: u32,

    /// Workspace root scanned for cross-file context
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    /// Override the configured model
    #[arg(short, long)]
    model: Option<String>,

    /// Override the configured token limit
    #[arg(long)]
    token_limit: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Complete(args) => commands::complete::run(args).await?,
        Commands::Prompt(args) => commands::prompt::run(args).await?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}
