use anyhow::Context;
use clap::Parser;
use lovebrain_core::config::RankingConfig;
use lovebrain_core::ranking::RankingEngine;
use lovebrain_hive::auth::AccessGate;
use lovebrain_hive::db::{self, ConnectPolicy};
use lovebrain_hive::state::AppState;
use lovebrain_hive::store::SqlPopulation;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about = "LoveBrain percentile ranking service")]
struct Args {
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Postgres URL of the reference population. Without it every ranking is estimated.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(long, env = "ACCESS_CODE", hide_env_values = true)]
    access_code: Option<String>,

    #[arg(long, default_value_t = 5)]
    connect_retries: u32,

    #[arg(long, default_value_t = 1000)]
    connect_delay_ms: u64,

    #[command(flatten)]
    ranking: RankingConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    info!("💘 LoveBrain Hive is initializing...");

    let engine = RankingEngine::new(&args.ranking).context("Invalid ranking configuration")?;
    info!(
        "📐 Reference population size: {} (query timeout {}ms)",
        engine.total_simulations(),
        args.ranking.query_timeout_ms
    );

    let gate = AccessGate::new(args.access_code.clone());
    let state = Arc::new(AppState::new(engine, gate, args.port));

    // Listen first; the population is attached once the database answers.
    match args.database_url.clone() {
        Some(url) => {
            let policy = ConnectPolicy {
                max_retries: args.connect_retries,
                delay: Duration::from_millis(args.connect_delay_ms),
                ..Default::default()
            };
            let state = state.clone();
            tokio::spawn(async move {
                match db::init_db(&url, policy).await {
                    Ok(pool) => {
                        state.attach_population(Arc::new(SqlPopulation::new(pool)));
                        info!("✅ Live population attached");
                    }
                    Err(e) => warn!(
                        "⚠️  Database unavailable ({}). Serving estimated rankings only.",
                        e
                    ),
                }
            });
        }
        None => warn!("⚠️  DATABASE_URL not set. Serving estimated rankings only."),
    }

    let app = lovebrain_hive::app(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Hive listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(population) = state.population() {
        population.close().await;
        info!("✅ Database connections closed");
    }
    info!("👋 Hive shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("📦 Received Ctrl-C, shutting down..."),
        _ = terminate => info!("📦 Received SIGTERM, shutting down..."),
    }
}
