//! transito CLI - offline dynamics processing of WAV files.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "transito")]
#[command(author, version, about = "Compressor, expander and transient shaping CLI", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a WAV file through a processor chain
    Process(commands::process::ProcessArgs),

    /// List, show and export presets
    Presets(commands::presets::PresetsArgs),

    /// List available processors and their parameters
    Processors(commands::processors::ProcessorsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Presets(args) => commands::presets::run(args),
        Commands::Processors(args) => commands::processors::run(args),
    }
}
