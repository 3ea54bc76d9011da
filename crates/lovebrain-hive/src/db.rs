use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

const SCHEMA: &str = include_str!("../schema.sql");

#[derive(Debug, Clone, Copy)]
pub struct ConnectPolicy {
    pub max_retries: u32,
    pub delay: Duration,
    pub max_connections: u32,
}

impl Default for ConnectPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            delay: Duration::from_secs(1),
            max_connections: 20,
        }
    }
}

/// Connects and applies the schema.
pub async fn init_db(db_url: &str, policy: ConnectPolicy) -> Result<PgPool, sqlx::Error> {
    info!("🔌 Connecting to PostgreSQL...");

    let pool = connect_with_retry(db_url, policy).await?;

    if let Err(e) = apply_schema(&pool, SCHEMA).await {
        tracing::error!("❌ Database schema migration failed: {}", e);
        pool.close().await;
        return Err(e);
    }

    info!("✅ Database connected and schema applied.");
    Ok(pool)
}

async fn connect_with_retry(db_url: &str, policy: ConnectPolicy) -> Result<PgPool, sqlx::Error> {
    let attempts = policy.max_retries.max(1);
    let mut attempt = 1;

    loop {
        match PgPoolOptions::new()
            .max_connections(policy.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(db_url)
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) if attempt < attempts => {
                warn!(
                    "⚠️  DB Connection attempt {}/{} failed: {}. Retrying...",
                    attempt, attempts, e
                );
                attempt += 1;
                sleep(policy.delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn apply_schema(pool: &PgPool, schema: &str) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for (i, sql) in split_sql(schema).iter().enumerate() {
        if let Err(e) = sqlx::query(sql).execute(&mut *tx).await {
            tracing::error!("🚨 Schema Error in statement #{}:\n{}", i + 1, sql);
            return Err(e);
        }
    }

    tx.commit().await?;
    Ok(())
}

/// Splits a trusted schema file on statement-terminating semicolons,
/// dropping `--` line comments.
pub fn split_sql(raw: &str) -> Vec<String> {
    let mut cmds = Vec::new();
    let mut current = String::new();

    for line in raw.lines() {
        let code = match line.find("--") {
            Some(idx) => &line[..idx],
            None => line,
        };
        let code = code.trim();
        if code.is_empty() {
            continue;
        }

        current.push_str(code);
        current.push('\n');

        if code.ends_with(';') {
            cmds.push(current.trim().to_string());
            current.clear();
        }
    }

    if !current.trim().is_empty() {
        cmds.push(current.trim().to_string());
    }
    cmds
}
