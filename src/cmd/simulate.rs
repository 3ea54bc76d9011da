use crate::reports;
use clap::Args;
use lovebrain_core::consts::DEFAULT_TOTAL_SIMULATIONS;
use lovebrain_core::error::LbResult;
use lovebrain_core::loader::write_population_csv;
use lovebrain_core::simulation::simulate_population;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[arg(long, default_value_t = DEFAULT_TOTAL_SIMULATIONS)]
    pub count: u64,

    #[arg(short, long)]
    pub out: PathBuf,

    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: SimulateArgs) -> LbResult<()> {
    let mut rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let records = simulate_population(args.count as usize, &mut rng);
    write_population_csv(&args.out, &records)?;
    info!("💾 Wrote {} records to {:?}", records.len(), args.out);

    reports::print_population_summary(&records);
    Ok(())
}
