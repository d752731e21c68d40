use uuid::Uuid;

use tonewise_common::types::Benchmark;

use super::{StoreClient, StoreError};

impl StoreClient {
    /// The benchmark communicator catalog. Read-only reference data seeded
    /// by migration.
    pub async fn list_benchmarks(&self) -> Result<Vec<Benchmark>, StoreError> {
        let rows = sqlx::query_as::<_, BenchmarkRow>(
            r#"
            SELECT id, communicator_name, description,
                   empathy_score, formality_score, directness_score, warmth_score
            FROM benchmarks
            ORDER BY communicator_name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Benchmark::from).collect())
    }
}

/// Internal row type for sqlx deserialization.
#[derive(sqlx::FromRow)]
struct BenchmarkRow {
    id: Uuid,
    communicator_name: String,
    description: String,
    empathy_score: i16,
    formality_score: i16,
    directness_score: i16,
    warmth_score: i16,
}

impl From<BenchmarkRow> for Benchmark {
    fn from(row: BenchmarkRow) -> Self {
        Self {
            id: row.id,
            communicator_name: row.communicator_name,
            description: row.description,
            empathy_score: row.empathy_score.clamp(0, 100) as u8,
            formality_score: row.formality_score.clamp(0, 100) as u8,
            directness_score: row.directness_score.clamp(0, 100) as u8,
            warmth_score: row.warmth_score.clamp(0, 100) as u8,
        }
    }
}
