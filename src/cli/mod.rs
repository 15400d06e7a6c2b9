pub mod screening;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Retinopathy screening CLI
#[derive(Parser, Debug)]
#[command(name = "retscreen")]
#[command(version = "0.1.0")]
#[command(about = "Client tools for retinal image screening", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a retinal image
    Analyze(screening::AnalyzeArgs),

    /// Check classification server health
    Health(screening::HealthArgs),
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze(args) => screening::analyze(args).await,
        Commands::Health(args) => screening::health(args).await,
    }
}
