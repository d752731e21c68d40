use serde::{Deserialize, Deserializer, Serialize};

/// A tone measurement: a fixed, closed set of named axes, each an integer
/// in [0,100].
///
/// The first five axes are the original schema; the rest were added later
/// and default to 0 when absent, so older persisted records keep working in
/// aggregate math. Clamping happens at the deserialization boundary — an
/// in-memory `ToneScores` always satisfies the range invariant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneScores {
    #[serde(default, deserialize_with = "clamp_axis")]
    pub passive_agg_score: u8,
    #[serde(default, deserialize_with = "clamp_axis")]
    pub sarcasm_score: u8,
    #[serde(default, deserialize_with = "clamp_axis")]
    pub empathy_score: u8,
    #[serde(default, deserialize_with = "clamp_axis")]
    pub formality_score: u8,
    #[serde(default, deserialize_with = "clamp_axis")]
    pub aggression_score: u8,
    #[serde(default, deserialize_with = "clamp_axis")]
    pub defensiveness_score: u8,
    #[serde(default, deserialize_with = "clamp_axis")]
    pub condescension_score: u8,
    #[serde(default, deserialize_with = "clamp_axis")]
    pub manipulation_score: u8,
    #[serde(default, deserialize_with = "clamp_axis")]
    pub dismissiveness_score: u8,
    #[serde(default, deserialize_with = "clamp_axis")]
    pub anxiety_score: u8,
}

impl ToneScores {
    /// The highest score across the negative axes (everything except
    /// empathy and formality) — the input to severity derivation.
    pub fn max_negative(&self) -> u8 {
        [
            self.passive_agg_score,
            self.sarcasm_score,
            self.aggression_score,
            self.defensiveness_score,
            self.condescension_score,
            self.manipulation_score,
            self.dismissiveness_score,
            self.anxiety_score,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    /// Implied directness, defined as 100 − passive-aggression. Not a
    /// measured axis; used for benchmark comparison only. Saturates so a
    /// hand-built out-of-range vector floors at 0 instead of panicking.
    pub fn directness(&self) -> u8 {
        100u8.saturating_sub(self.passive_agg_score)
    }
}

/// Accepts integers or floats from the model, rounds, and clamps to [0,100].
fn clamp_axis<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(raw.round().clamp(0.0, 100.0) as u8)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_axes_default_to_zero() {
        // Older schema: only the original five axes present.
        let json = r#"{
            "passive_agg_score": 30,
            "sarcasm_score": 10,
            "empathy_score": 70,
            "formality_score": 55,
            "aggression_score": 20
        }"#;

        let scores: ToneScores = serde_json::from_str(json).unwrap();
        assert_eq!(scores.passive_agg_score, 30);
        assert_eq!(scores.defensiveness_score, 0);
        assert_eq!(scores.anxiety_score, 0);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let json = r#"{"passive_agg_score": 150, "empathy_score": -4, "sarcasm_score": 49.6}"#;

        let scores: ToneScores = serde_json::from_str(json).unwrap();
        assert_eq!(scores.passive_agg_score, 100);
        assert_eq!(scores.empathy_score, 0);
        assert_eq!(scores.sarcasm_score, 50);
    }

    #[test]
    fn test_max_negative_ignores_positive_axes() {
        let scores = ToneScores {
            empathy_score: 95,
            formality_score: 90,
            condescension_score: 42,
            ..Default::default()
        };

        assert_eq!(scores.max_negative(), 42);
    }

    #[test]
    fn test_directness_is_inverted_passive_agg() {
        let scores = ToneScores {
            passive_agg_score: 35,
            ..Default::default()
        };

        assert_eq!(scores.directness(), 65);
    }

    #[test]
    fn test_directness_saturates_on_out_of_range_vector() {
        // The deserializer clamps, but the fields are public; a hand-built
        // vector above 100 must floor at 0 rather than underflow.
        let scores = ToneScores {
            passive_agg_score: 250,
            ..Default::default()
        };

        assert_eq!(scores.directness(), 0);
    }
}
