use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Offline LoveBrain percentile ranking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank one set of scores against a population CSV (or estimate without one).
    Rank(cmd::rank::RankArgs),
    /// Write a simulated reference population to CSV.
    Simulate(cmd::simulate::SimulateArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Rank(args) => cmd::rank::run(args).await,
        Commands::Simulate(args) => cmd::simulate::run(args),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
