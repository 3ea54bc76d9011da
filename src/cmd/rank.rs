use crate::reports;
use clap::Args;
use lovebrain_core::config::RankingConfig;
use lovebrain_core::dimension::ScoreVector;
use lovebrain_core::error::{LbResult, LoveBrainError};
use lovebrain_core::loader::load_population_csv;
use lovebrain_core::ranking::RankingEngine;
use lovebrain_core::store::{MemoryPopulation, PopulationStore};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub config: RankingConfig,

    /// Population CSV; omit to use the estimated ranking.
    #[arg(short, long)]
    pub population: Option<PathBuf>,

    /// Five comma-separated scores in canonical dimension order.
    #[arg(short, long, value_delimiter = ',', required_unless_present = "json")]
    pub scores: Vec<f64>,

    /// Scores as a JSON object keyed by dimension name.
    #[arg(long, conflicts_with = "scores")]
    pub json: Option<String>,

    /// Print the result as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json_output: bool,

    /// Seed for the estimate jitter.
    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_scores(args: &RankArgs) -> LbResult<ScoreVector> {
    match &args.json {
        Some(raw) => {
            let value: serde_json::Value = serde_json::from_str(raw)?;
            Ok(ScoreVector::from_json(&value)?)
        }
        None => {
            let scores = ScoreVector::from_slice(&args.scores).ok_or_else(|| {
                LoveBrainError::Config(format!(
                    "--scores requires 5 values, got {}",
                    args.scores.len()
                ))
            })?;
            scores.validate()?;
            Ok(scores)
        }
    }
}

pub async fn run(args: RankArgs) -> LbResult<()> {
    let engine = RankingEngine::new(&args.config)?;
    let scores = parse_scores(&args)?;

    let population = match &args.population {
        Some(path) => {
            let records = load_population_csv(path)?;
            if records.len() as u64 != engine.total_simulations() {
                warn!(
                    "⚠️  Population has {} records but --total-simulations is {}",
                    records.len(),
                    engine.total_simulations()
                );
            }
            Some(MemoryPopulation::new(records))
        }
        None => {
            info!("No population given; estimating percentiles");
            None
        }
    };

    let store = match &population {
        Some(p) => PopulationStore::Live(p),
        None => PopulationStore::Unavailable,
    };

    let mut rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let result = engine.rank_with_rng(&scores, store, &mut rng).await?;

    if args.json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        reports::print_rank_report(&scores, &result);
    }
    Ok(())
}
