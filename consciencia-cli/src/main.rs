use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "consciencia", about = "Security maturity self-assessment")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the questionnaire and save a scored report
    Assess(commands::assess::AssessArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Browse saved reports
    Reports(commands::reports::ReportsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Assess(args) => commands::assess::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Reports(args) => commands::reports::run(args),
    }
}
