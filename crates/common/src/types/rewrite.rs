use serde::{Deserialize, Serialize};

use super::scores::ToneScores;

/// A validated rewrite response. Not persisted by the engine; callers may
/// attach `rewritten_text` to an existing record if they choose.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RewriteResult {
    pub rewritten_text: String,
    #[serde(default)]
    pub changes_summary: String,
    /// How well the model believes the original intent survived. Expected
    /// 85–100 but not enforced beyond the usual [0,100] clamp.
    #[serde(default, deserialize_with = "clamp_confidence")]
    pub intent_preserved_confidence: u8,
    /// Scores for the rewritten text, validated like any analyze vector.
    #[serde(default)]
    pub new_scores: ToneScores,
}

fn clamp_confidence<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(raw.round().clamp(0.0, 100.0) as u8)
}
