use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::context::{Audience, ContentMedium, Language};
use super::scores::ToneScores;

/// Coarse severity bucket summarizing how concerning a score vector is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// The authoritative derivation rule: high if any negative axis > 70,
    /// medium if any > 40, low otherwise. The model returns its own severity
    /// string but this rule is the single source of truth.
    pub fn derive(scores: &ToneScores) -> Self {
        match scores.max_negative() {
            s if s > 70 => Self::High,
            s if s > 40 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Lenient parse for the model-supplied severity string.
    pub fn parse_lossy(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn as_db_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A validated analyze response: the full score vector plus the model's
/// qualitative findings. Immutable once created.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToneAnalysis {
    #[serde(flatten)]
    pub scores: ToneScores,
    pub severity: Severity,
    /// 2–4 primary emotions the model detected.
    #[serde(default)]
    pub emotion_flags: Vec<String>,
    #[serde(default)]
    pub analysis_summary: String,
    /// Up to 3 phrases that contribute most to the tone.
    #[serde(default)]
    pub key_phrases: Vec<String>,
}

/// A persisted analysis with provenance, keyed by creation time for the
/// "most recent N" history query. Append-only: never mutated or deleted by
/// the engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToneRecord {
    pub id: Uuid,
    pub input_text: String,
    pub language: Language,
    pub audience: Audience,
    pub content_medium: ContentMedium,
    #[serde(flatten)]
    pub scores: ToneScores,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewritten_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ToneRecord {
    pub fn new(
        input_text: String,
        language: Language,
        audience: Audience,
        content_medium: ContentMedium,
        analysis: &ToneAnalysis,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            input_text,
            language,
            audience,
            content_medium,
            scores: analysis.scores,
            severity: analysis.severity,
            rewritten_text: None,
            created_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
