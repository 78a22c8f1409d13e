//! Sonido reverb CLI - offline WAV processing, preset management, and RT60
//! analysis for sonido-reverb.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sonido-reverb-cli")]
#[command(author, version, about = "Sonido reverb CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a WAV file through the reverb engine
    Process(commands::process::ProcessArgs),

    /// Manage reverb presets (list, show, save, delete)
    Presets(commands::presets::PresetsArgs),

    /// Measure RT60 from a captured impulse response
    Analyze(commands::analyze::AnalyzeArgs),

    /// Display WAV file information
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    tracing::debug!(command = ?std::mem::discriminant(&cli.command), "dispatching command");

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Presets(args) => commands::presets::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
