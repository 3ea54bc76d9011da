use async_trait::async_trait;
use lovebrain_core::dimension::{Dimension, ScoreVector};
use lovebrain_core::store::{PopulationQuery, StoreError};
use sqlx::postgres::PgPool;
use sqlx::{Postgres, QueryBuilder};

/// Postgres-backed reference population (`simulated_tests`).
#[derive(Clone)]
pub struct SqlPopulation {
    pub db: PgPool,
}

// Column names come from the fixed dimension list, never from request data.
fn column_list() -> String {
    Dimension::ALL.map(Dimension::as_str).join(", ")
}

impl SqlPopulation {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Deletes the current population and inserts `records` in one transaction.
    pub async fn replace_population(
        &self,
        records: &[ScoreVector],
        batch_size: usize,
    ) -> Result<u64, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let deleted = sqlx::query("DELETE FROM simulated_tests")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tracing::info!("🧹 Cleared {} existing population records", deleted);

        let mut inserted = 0;
        for chunk in records.chunks(batch_size.max(1)) {
            let mut query_builder: QueryBuilder<Postgres> =
                QueryBuilder::new(format!("INSERT INTO simulated_tests ({}) ", column_list()));

            query_builder.push_values(chunk, |mut b, record| {
                for (_, value) in record.iter() {
                    b.push_bind(value);
                }
            });

            inserted += query_builder.build().execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}

#[async_trait]
impl PopulationQuery for SqlPopulation {
    async fn count_below(&self, dimension: Dimension, value: f64) -> Result<u64, StoreError> {
        let sql = format!(
            "SELECT COUNT(*) FROM simulated_tests WHERE {} < $1",
            dimension.as_str()
        );

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(value)
            .fetch_one(&self.db)
            .await
            .map_err(|e| StoreError::Query {
                dimension,
                message: e.to_string(),
            })?;

        Ok(count.max(0) as u64)
    }

    async fn population_size(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM simulated_tests")
            .fetch_one(&self.db)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(count.max(0) as u64)
    }

    async fn close(&self) {
        self.db.close().await;
    }
}
