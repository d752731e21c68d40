//! Quick heuristic tone scorer.
//!
//! A deterministic, stateless pure function: weighted pattern counts over
//! the raw text, no network, no clock. This is the instant "live" estimate
//! shown while typing; the real scoring happens at the gateway.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Texts shorter than this produce no quick scores at all.
const MIN_TEXT_CHARS: usize = 10;

/// Display thresholds: a category only appears once its score clears these.
const PASSIVE_AGG_FLOOR: u8 = 20;
const AGGRESSION_FLOOR: u8 = 15;
const EMPATHY_FLOOR: u8 = 10;

/// At most this many entries are shown.
const MAX_RESULTS: usize = 4;

/// Signal category of a quick score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum QuickLabel {
    #[serde(rename = "Passive-Agg")]
    PassiveAgg,
    Aggression,
    Empathy,
    Formality,
}

/// Presentation-only severity band. Not part of the numeric contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// High-concern negative signal.
    Alert,
    /// Noticeable but moderate negative signal.
    Watch,
    /// Positive signal.
    Good,
    /// Context-dependent, neither good nor bad.
    Neutral,
}

/// One heuristic estimate. Ephemeral: recomputed from scratch on every
/// invocation, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuickScore {
    pub label: QuickLabel,
    pub score: u8,
    pub band: Band,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static pattern"))
        .collect()
}

static PASSIVE_AGG_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\bfine\b",
        r"(?i)\bwhatever\b",
        r"(?i)\bif you say so\b",
        r"(?i)\bI guess\b",
        r"(?i)\bno worries\b",
        r"(?i)\bsure\.\.\.",
        r"(?i)\bI'm not mad\b",
        r"(?i)\bdo what you want\b",
        r"(?i)\bas per my last\b",
        r"(?i)\bper our conversation\b",
        r"(?i)\bjust saying\b",
        r"(?i)\bI mean\.\.\.",
    ])
});

static AGGRESSIVE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"!",
        r"(?i)\bstop\b",
        r"(?i)\bdon't\b",
        r"(?i)\bnever\b",
        r"(?i)\balways\b",
        r"(?i)\byou\s+(?:never|always)\b",
        r"(?i)\bwrong\b",
        r"(?i)\bterrible\b",
        r"(?i)\bstupid\b",
        r"(?i)\bidiot\b",
        r"(?i)\bshut up\b",
    ])
});

static EMPATHY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\bunderstand\b",
        r"(?i)\bsorry\b",
        r"(?i)\bthank you\b",
        r"(?i)\bappreciate\b",
        r"(?i)\bhelp\b",
        r"(?i)\bplease\b",
        r"(?i)\bhope\b",
        r"(?i)\bfeel\b",
        r"(?i)\bsupport\b",
        r"(?i)\bconsider\b",
    ])
});

static INFORMAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\blol\b",
        r"(?i)\bomg\b",
        r"(?i)\bbtw\b",
        r"(?i)\bgonna\b",
        r"(?i)\bwanna\b",
        r"(?i)\bcool\b",
        r"(?i)\bawesome\b",
        r"(?i)\bhey\b",
        r"(?i)\byeah\b",
        r"(?i)\bnope\b",
    ])
});

static FORMAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\bregards\b",
        r"(?i)\bsincerely\b",
        r"(?i)\brespectfully\b",
        r"(?i)\bkindly\b",
        r"(?i)\bfurthermore\b",
        r"(?i)\bhowever\b",
        r"(?i)\btherefore\b",
        r"(?i)\baccordingly\b",
    ])
});

/// Total pattern occurrences across the text. Every occurrence counts, and
/// a phrase matching several patterns counts once per pattern.
fn count_matches(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|p| p.find_iter(text).count()).sum()
}

/// Density-weighted score: matches per word scaled up, plus a flat bonus per
/// raw match, capped at 100.
fn density_score(matches: usize, words: usize, density_weight: f64, per_match: f64) -> u8 {
    let raw = (matches as f64 / words as f64) * density_weight + matches as f64 * per_match;
    raw.round().min(100.0) as u8
}

/// What the live indicator endpoint returns: the quick estimate plus the
/// quiet period the client must leave between text changes and calls.
#[derive(Clone, Debug, Serialize)]
pub struct LiveEstimate {
    pub debounce_ms: u64,
    pub scores: Vec<QuickScore>,
}

/// Assemble the live indicator payload. The quiet period comes from config
/// so operators can tune client pacing without a client release.
pub fn live_estimate(text: &str, debounce_ms: u64) -> LiveEstimate {
    LiveEstimate {
        debounce_ms,
        scores: quick_scores(text),
    }
}

/// Compute the quick tone estimate for a text.
///
/// Same input always yields the same output. Blank or sub-10-character
/// texts return an empty list without doing any pattern work; callers should
/// suppress the indicator entirely in that case.
pub fn quick_scores(text: &str) -> Vec<QuickScore> {
    if text.trim().is_empty() || text.chars().count() < MIN_TEXT_CHARS {
        return Vec::new();
    }

    // Minimum denominator 1 so density math never divides by zero.
    let words = text.split_whitespace().count().max(1);

    let passive_agg = density_score(count_matches(&PASSIVE_AGG_PATTERNS, text), words, 500.0, 15.0);
    let aggression = density_score(count_matches(&AGGRESSIVE_PATTERNS, text), words, 300.0, 10.0);
    let empathy = density_score(count_matches(&EMPATHY_PATTERNS, text), words, 400.0, 12.0);

    // Formality is baseline-centered rather than density-based: opposing
    // marker lists pull it away from 50.
    let formal = count_matches(&FORMAL_PATTERNS, text) as i64;
    let informal = count_matches(&INFORMAL_PATTERNS, text) as i64;
    let formality = (50 + formal * 15 - informal * 20).clamp(0, 100) as u8;

    let mut results = Vec::new();

    if passive_agg > PASSIVE_AGG_FLOOR {
        results.push(QuickScore {
            label: QuickLabel::PassiveAgg,
            score: passive_agg,
            band: if passive_agg > 50 { Band::Alert } else { Band::Watch },
        });
    }

    if aggression > AGGRESSION_FLOOR {
        results.push(QuickScore {
            label: QuickLabel::Aggression,
            score: aggression,
            band: if aggression > 40 { Band::Alert } else { Band::Watch },
        });
    }

    if empathy > EMPATHY_FLOOR {
        results.push(QuickScore {
            label: QuickLabel::Empathy,
            score: empathy,
            band: Band::Good,
        });
    }

    results.push(QuickScore {
        label: QuickLabel::Formality,
        score: formality,
        band: Band::Neutral,
    });

    results.truncate(MAX_RESULTS);
    results
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
