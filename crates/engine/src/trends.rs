//! Trend derivation over historical analyses and benchmark comparison.
//!
//! Pure math over immutable records; degrades gracefully on short or empty
//! histories instead of erroring.

use serde::Serialize;

use tonewise_common::types::{Benchmark, ToneRecord, ToneScores};

/// Direction of change across the history window. The ±10 band maps to
/// Stable on purpose: hysteresis against flapping on small samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

/// Summary of a user's recent tone history.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ToneProfile {
    pub avg_passive_agg: u8,
    pub avg_empathy: u8,
    pub trend: Trend,
    pub total_analyses: usize,
}

/// Negative-tone composite used for trend direction: mean of
/// passive-aggression and aggression.
fn composite(scores: &ToneScores) -> f64 {
    (scores.passive_agg_score as f64 + scores.aggression_score as f64) / 2.0
}

fn rounded_mean(values: impl Iterator<Item = u8>, n: usize) -> u8 {
    let sum: u32 = values.map(u32::from).sum();
    (sum as f64 / n as f64).round() as u8
}

/// Derive a profile from a newest-first history window.
///
/// Empty history yields `None` (not an error). A single record reports its
/// own scores with a forced Stable trend; from two records on, the newest
/// composite is compared against the oldest with strict ±10 thresholds.
pub fn derive_profile(records: &[ToneRecord]) -> Option<ToneProfile> {
    if records.is_empty() {
        return None;
    }

    let n = records.len();
    let avg_passive_agg = rounded_mean(records.iter().map(|r| r.scores.passive_agg_score), n);
    let avg_empathy = rounded_mean(records.iter().map(|r| r.scores.empathy_score), n);

    let trend = if n < 2 {
        Trend::Stable
    } else {
        let recent = composite(&records[0].scores);
        let older = composite(&records[n - 1].scores);
        if recent < older - 10.0 {
            Trend::Improving
        } else if recent > older + 10.0 {
            Trend::Declining
        } else {
            Trend::Stable
        }
    };

    Some(ToneProfile {
        avg_passive_agg,
        avg_empathy,
        trend,
        total_analyses: n,
    })
}

/// Per-axis and overall match percentages against one benchmark profile.
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkMatch {
    pub benchmark: Benchmark,
    pub empathy_match: u8,
    pub formality_match: u8,
    pub directness_match: u8,
    pub warmth_match: u8,
    pub overall: u8,
}

fn axis_match(user: u8, benchmark: u8) -> u8 {
    100 - user.abs_diff(benchmark)
}

/// Compare a score vector to a benchmark. Directness is implied
/// (100 − passive_agg); warmth reuses empathy as its proxy.
pub fn compare_to_benchmark(scores: &ToneScores, benchmark: &Benchmark) -> BenchmarkMatch {
    let empathy_match = axis_match(scores.empathy_score, benchmark.empathy_score);
    let formality_match = axis_match(scores.formality_score, benchmark.formality_score);
    let directness_match = axis_match(scores.directness(), benchmark.directness_score);
    let warmth_match = axis_match(scores.empathy_score, benchmark.warmth_score);

    let overall = ((empathy_match as f64
        + formality_match as f64
        + directness_match as f64
        + warmth_match as f64)
        / 4.0)
        .round() as u8;

    BenchmarkMatch {
        benchmark: benchmark.clone(),
        empathy_match,
        formality_match,
        directness_match,
        warmth_match,
        overall,
    }
}

/// Rank benchmarks by overall match, best first. Ties keep catalog order.
pub fn rank_benchmarks(scores: &ToneScores, benchmarks: &[Benchmark]) -> Vec<BenchmarkMatch> {
    let mut matches: Vec<_> = benchmarks
        .iter()
        .map(|b| compare_to_benchmark(scores, b))
        .collect();
    matches.sort_by(|a, b| b.overall.cmp(&a.overall));
    matches
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tonewise_common::types::{
        Audience, ContentMedium, Language, Severity, ToneAnalysis,
    };
    use uuid::Uuid;

    fn record(passive_agg: u8, aggression: u8, empathy: u8) -> ToneRecord {
        let scores = ToneScores {
            passive_agg_score: passive_agg,
            aggression_score: aggression,
            empathy_score: empathy,
            ..Default::default()
        };
        ToneRecord::new(
            "sample text".into(),
            Language::En,
            Audience::General,
            ContentMedium::Email,
            &ToneAnalysis {
                scores,
                severity: Severity::derive(&scores),
                emotion_flags: vec![],
                analysis_summary: String::new(),
                key_phrases: vec![],
            },
        )
    }

    fn benchmark(empathy: u8, formality: u8, directness: u8, warmth: u8) -> Benchmark {
        Benchmark {
            id: Uuid::new_v4(),
            communicator_name: "Test Communicator".into(),
            description: "reference".into(),
            empathy_score: empathy,
            formality_score: formality,
            directness_score: directness,
            warmth_score: warmth,
        }
    }

    #[test]
    fn test_empty_history_yields_no_profile() {
        assert!(derive_profile(&[]).is_none());
    }

    #[test]
    fn test_single_record_is_stable_with_own_averages() {
        let profile = derive_profile(&[record(30, 20, 70)]).unwrap();

        assert_eq!(profile.avg_passive_agg, 30);
        assert_eq!(profile.avg_empathy, 70);
        assert_eq!(profile.trend, Trend::Stable);
        assert_eq!(profile.total_analyses, 1);
    }

    #[test]
    fn test_improving_when_newest_composite_drops_enough() {
        // Newest composite (10+10)/2 = 10, oldest (40+20)/2 = 30: 10 < 30 - 10.
        let history = vec![record(10, 10, 50), record(40, 20, 50)];
        assert_eq!(derive_profile(&history).unwrap().trend, Trend::Improving);
    }

    #[test]
    fn test_declining_when_newest_composite_rises_enough() {
        let history = vec![record(60, 40, 50), record(20, 20, 50)];
        assert_eq!(derive_profile(&history).unwrap().trend, Trend::Declining);
    }

    #[test]
    fn test_exactly_ten_point_gap_is_stable_both_ways() {
        // Comparisons are strict: a difference of exactly 10 never trips.
        let drop_of_ten = vec![record(20, 20, 50), record(30, 30, 50)];
        assert_eq!(derive_profile(&drop_of_ten).unwrap().trend, Trend::Stable);

        let rise_of_ten = vec![record(30, 30, 50), record(20, 20, 50)];
        assert_eq!(derive_profile(&rise_of_ten).unwrap().trend, Trend::Stable);
    }

    #[test]
    fn test_middle_records_do_not_affect_trend() {
        // Wild middle values; only newest vs oldest matter.
        let history = vec![
            record(10, 10, 50),
            record(100, 100, 0),
            record(0, 0, 100),
            record(40, 20, 50),
        ];
        assert_eq!(derive_profile(&history).unwrap().trend, Trend::Improving);
    }

    #[test]
    fn test_averages_are_rounded_means() {
        let history = vec![record(10, 0, 33), record(15, 0, 34)];
        let profile = derive_profile(&history).unwrap();

        // (10+15)/2 = 12.5 → 13, (33+34)/2 = 33.5 → 34.
        assert_eq!(profile.avg_passive_agg, 13);
        assert_eq!(profile.avg_empathy, 34);
        assert_eq!(profile.total_analyses, 2);
    }

    #[test]
    fn test_identical_vector_matches_benchmark_perfectly() {
        let scores = ToneScores {
            empathy_score: 70,
            formality_score: 60,
            passive_agg_score: 20, // implied directness 80
            ..Default::default()
        };
        // warmth compares against empathy's proxy value.
        let result = compare_to_benchmark(&scores, &benchmark(70, 60, 80, 70));

        assert_eq!(result.empathy_match, 100);
        assert_eq!(result.formality_match, 100);
        assert_eq!(result.directness_match, 100);
        assert_eq!(result.warmth_match, 100);
        assert_eq!(result.overall, 100);
    }

    #[test]
    fn test_overall_is_rounded_mean_of_axes() {
        let scores = ToneScores {
            empathy_score: 50,
            formality_score: 50,
            passive_agg_score: 50, // implied directness 50
            ..Default::default()
        };
        let result = compare_to_benchmark(&scores, &benchmark(60, 55, 50, 52));

        assert_eq!(result.empathy_match, 90);
        assert_eq!(result.formality_match, 95);
        assert_eq!(result.directness_match, 100);
        assert_eq!(result.warmth_match, 98);
        // (90+95+100+98)/4 = 95.75 → 96.
        assert_eq!(result.overall, 96);
    }

    #[test]
    fn test_ranking_sorts_best_first() {
        let scores = ToneScores {
            empathy_score: 80,
            formality_score: 40,
            passive_agg_score: 10,
            ..Default::default()
        };
        let far = benchmark(10, 90, 20, 10);
        let near = benchmark(80, 40, 90, 80);

        let ranked = rank_benchmarks(&scores, &[far.clone(), near.clone()]);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].benchmark.id, near.id);
        assert!(ranked[0].overall > ranked[1].overall);
    }

    #[test]
    fn test_rewrite_scores_fold_back_into_history_math() {
        // Feeding a rewrite's new_scores in as a fresh record keeps the
        // averages a plain arithmetic mean over the enlarged history.
        let mut history = vec![record(40, 10, 20), record(60, 30, 40)];
        let profile = derive_profile(&history).unwrap();
        assert_eq!(profile.avg_passive_agg, 50);
        assert_eq!(profile.avg_empathy, 30);

        history.insert(0, record(5, 0, 90));
        let profile = derive_profile(&history).unwrap();
        assert_eq!(profile.avg_passive_agg, 35); // (5+40+60)/3
        assert_eq!(profile.avg_empathy, 50); // (90+20+40)/3
        assert_eq!(profile.total_analyses, 3);
        // Newest composite 2.5 vs oldest 45: well past the band.
        assert_eq!(profile.trend, Trend::Improving);
    }
}
