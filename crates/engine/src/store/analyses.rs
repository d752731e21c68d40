use chrono::Utc;
use uuid::Uuid;

use tonewise_common::types::{
    Audience, ContentMedium, Language, Severity, ToneRecord, ToneScores,
};

use super::{StoreClient, StoreError};

impl StoreClient {
    /// Append an analysis record to the history. Records are immutable once
    /// inserted.
    pub async fn insert_analysis(&self, record: &ToneRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO tone_analyses (id, input_text, language, audience, content_medium,
                                       passive_agg_score, sarcasm_score, empathy_score,
                                       formality_score, aggression_score, defensiveness_score,
                                       condescension_score, manipulation_score,
                                       dismissiveness_score, anxiety_score,
                                       severity, rewritten_text, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            "#,
        )
        .bind(record.id)
        .bind(&record.input_text)
        .bind(record.language.as_str())
        .bind(record.audience.as_str())
        .bind(record.content_medium.as_str())
        .bind(record.scores.passive_agg_score as i16)
        .bind(record.scores.sarcasm_score as i16)
        .bind(record.scores.empathy_score as i16)
        .bind(record.scores.formality_score as i16)
        .bind(record.scores.aggression_score as i16)
        .bind(record.scores.defensiveness_score as i16)
        .bind(record.scores.condescension_score as i16)
        .bind(record.scores.manipulation_score as i16)
        .bind(record.scores.dismissiveness_score as i16)
        .bind(record.scores.anxiety_score as i16)
        .bind(record.severity.as_db_str())
        .bind(&record.rewritten_text)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }

    /// The most recent analyses, newest first. This is the read-only window
    /// the trend analyzer consumes.
    pub async fn recent_analyses(&self, limit: i64) -> Result<Vec<ToneRecord>, StoreError> {
        let rows = sqlx::query_as::<_, ToneRecordRow>(
            r#"
            SELECT id, input_text, language, audience, content_medium,
                   passive_agg_score, sarcasm_score, empathy_score,
                   formality_score, aggression_score, defensiveness_score,
                   condescension_score, manipulation_score,
                   dismissiveness_score, anxiety_score,
                   severity, rewritten_text, created_at
            FROM tone_analyses
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(ToneRecord::from).collect())
    }
}

/// Internal row type for sqlx deserialization.
#[derive(sqlx::FromRow)]
struct ToneRecordRow {
    id: Uuid,
    input_text: String,
    language: String,
    audience: String,
    content_medium: String,
    passive_agg_score: i16,
    sarcasm_score: i16,
    empathy_score: i16,
    formality_score: i16,
    aggression_score: i16,
    defensiveness_score: i16,
    condescension_score: i16,
    manipulation_score: i16,
    dismissiveness_score: i16,
    anxiety_score: i16,
    severity: String,
    rewritten_text: Option<String>,
    created_at: chrono::DateTime<Utc>,
}

fn clamp_db_score(raw: i16) -> u8 {
    raw.clamp(0, 100) as u8
}

impl From<ToneRecordRow> for ToneRecord {
    fn from(row: ToneRecordRow) -> Self {
        let scores = ToneScores {
            passive_agg_score: clamp_db_score(row.passive_agg_score),
            sarcasm_score: clamp_db_score(row.sarcasm_score),
            empathy_score: clamp_db_score(row.empathy_score),
            formality_score: clamp_db_score(row.formality_score),
            aggression_score: clamp_db_score(row.aggression_score),
            defensiveness_score: clamp_db_score(row.defensiveness_score),
            condescension_score: clamp_db_score(row.condescension_score),
            manipulation_score: clamp_db_score(row.manipulation_score),
            dismissiveness_score: clamp_db_score(row.dismissiveness_score),
            anxiety_score: clamp_db_score(row.anxiety_score),
        };

        Self {
            id: row.id,
            input_text: row.input_text,
            language: Language::from_tag(&row.language),
            audience: Audience::from_tag(&row.audience),
            content_medium: ContentMedium::from_tag(&row.content_medium),
            scores,
            severity: parse_severity(&row.severity, &scores),
            rewritten_text: row.rewritten_text,
            created_at: row.created_at,
        }
    }
}

fn parse_severity(s: &str, scores: &ToneScores) -> Severity {
    Severity::parse_lossy(s).unwrap_or_else(|| {
        tracing::warn!(severity = s, "Unknown stored severity, re-deriving");
        Severity::derive(scores)
    })
}
