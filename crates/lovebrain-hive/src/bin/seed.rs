use anyhow::Context;
use clap::Parser;
use lovebrain_core::consts::DEFAULT_TOTAL_SIMULATIONS;
use lovebrain_core::simulation::simulate_population;
use lovebrain_hive::db::{self, ConnectPolicy};
use lovebrain_hive::store::SqlPopulation;
use tracing::info;

/// Replaces the reference population with freshly simulated assessments.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Number of records; keep equal to the server's TOTAL_SIMULATIONS.
    #[arg(long, env = "TOTAL_SIMULATIONS", default_value_t = DEFAULT_TOTAL_SIMULATIONS)]
    count: u64,

    #[arg(long, default_value_t = 500)]
    batch_size: usize,

    /// Fixed RNG seed for a reproducible population.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let pool = db::init_db(&args.database_url, ConnectPolicy::default())
        .await
        .context("[SEED] Could not connect to the database")?;
    let store = SqlPopulation::new(pool);

    let records = simulate_population(args.count as usize, &mut rng);
    info!("[SEED] Generated {} simulated assessments", records.len());

    let inserted = store
        .replace_population(&records, args.batch_size)
        .await
        .context("[SEED] Failed to write population")?;
    info!("[SEED] Inserted {} records into simulated_tests", inserted);

    store.db.close().await;
    info!("[SEED] Database connection closed");
    Ok(())
}
