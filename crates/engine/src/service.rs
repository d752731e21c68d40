//! The scoring/rewrite client protocol: request validation, action dispatch,
//! and response-contract enforcement against the external tone gateway.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use tonewise_common::types::{
    Audience, ContentMedium, Language, RewriteResult, Severity, ToneAnalysis, ToneScores,
};
use tonewise_common::{Result, TonewiseError};

use crate::gateway::ChatCaller;
use crate::prompts::{build_analyze_prompts, build_rewrite_prompts, PromptContext};

/// Fields an analyze response must carry. Extended axes are optional for
/// backward compatibility and default to 0 downstream.
const REQUIRED_ANALYZE_FIELDS: [&str; 5] = [
    "passive_agg_score",
    "sarcasm_score",
    "empathy_score",
    "formality_score",
    "severity",
];

/// Which gateway action a request maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneAction {
    Analyze,
    Rewrite,
}

/// An incoming tone request, matching the wire shape the original client
/// sends. Unknown language/audience/medium tags fall back during
/// deserialization; only blank text is rejected outright.
#[derive(Clone, Debug, Deserialize)]
pub struct ToneRequest {
    pub text: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub audience: Audience,
    #[serde(default, rename = "contentMedium")]
    pub content_medium: ContentMedium,
    pub action: ToneAction,
    #[serde(default, rename = "toneAdjustments")]
    pub tone_adjustments: Option<ToneScores>,
}

/// The tone service. Holds the gateway behind a trait object so tests can
/// script the transport. One outbound call per analyze/rewrite, no retries,
/// no persistence — storing the record is the caller's separate step.
pub struct ToneService {
    gateway: Arc<dyn ChatCaller>,
}

impl ToneService {
    pub fn new(gateway: Arc<dyn ChatCaller>) -> Self {
        Self { gateway }
    }

    /// Score a text. Returns a validated analysis with severity re-derived
    /// from the returned scores (the authoritative rule), not the model's
    /// own severity string.
    pub async fn analyze(&self, request: &ToneRequest) -> Result<ToneAnalysis> {
        let text = validated_text(request)?;
        metrics::counter!("tone.analyze.requests").increment(1);

        let ctx = prompt_context(request);
        let (system, user) = build_analyze_prompts(text, &ctx);

        let content = self.gateway.complete(&system, &user).await?;
        let value = extract_json(&content)?;

        for field in REQUIRED_ANALYZE_FIELDS {
            if value.get(field).is_none() {
                metrics::counter!("tone.analyze.invalid_responses").increment(1);
                return Err(TonewiseError::InvalidResponse {
                    field: field.to_string(),
                });
            }
        }

        let wire: AnalyzeWire = serde_json::from_value(value)
            .map_err(|e| TonewiseError::ResponseParse(e.to_string()))?;

        let derived = Severity::derive(&wire.scores);
        match Severity::parse_lossy(&wire.severity) {
            Some(reported) if reported == derived => {}
            Some(reported) => {
                tracing::warn!(
                    reported = reported.as_db_str(),
                    derived = derived.as_db_str(),
                    "Model severity disagrees with derivation rule, using derived"
                );
            }
            None => {
                tracing::warn!(
                    reported = %wire.severity,
                    "Unrecognized model severity, using derived"
                );
            }
        }

        Ok(ToneAnalysis {
            scores: wire.scores,
            severity: derived,
            emotion_flags: wire.emotion_flags,
            analysis_summary: wire.analysis_summary,
            key_phrases: wire.key_phrases,
        })
    }

    /// Rewrite a text diplomatically, optionally steered toward a target
    /// tone vector.
    pub async fn rewrite(&self, request: &ToneRequest) -> Result<RewriteResult> {
        let text = validated_text(request)?;
        metrics::counter!("tone.rewrite.requests").increment(1);

        let ctx = prompt_context(request);
        let seed = rewrite_seed();
        let (system, user) =
            build_rewrite_prompts(text, &ctx, request.tone_adjustments.as_ref(), seed);

        let content = self.gateway.complete(&system, &user).await?;
        let value = extract_json(&content)?;

        let has_text = value
            .get("rewritten_text")
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty());
        if !has_text {
            metrics::counter!("tone.rewrite.invalid_responses").increment(1);
            return Err(TonewiseError::InvalidResponse {
                field: "rewritten_text".to_string(),
            });
        }

        serde_json::from_value(value).map_err(|e| TonewiseError::ResponseParse(e.to_string()))
    }
}

/// Wire shape of an analyze response. Severity stays a raw string so an
/// unexpected value degrades to the derived rule instead of a parse failure.
#[derive(Deserialize)]
struct AnalyzeWire {
    #[serde(flatten)]
    scores: ToneScores,
    severity: String,
    #[serde(default)]
    emotion_flags: Vec<String>,
    #[serde(default)]
    analysis_summary: String,
    #[serde(default)]
    key_phrases: Vec<String>,
}

fn validated_text(request: &ToneRequest) -> Result<&str> {
    let trimmed = request.text.trim();
    if trimmed.is_empty() {
        return Err(TonewiseError::Validation(
            "Text is required for analysis".into(),
        ));
    }
    Ok(&request.text)
}

fn prompt_context(request: &ToneRequest) -> PromptContext {
    PromptContext {
        language: request.language,
        audience: request.audience,
        medium: request.content_medium,
    }
}

/// Per-request variety seed for rewrites, derived from the wall clock.
fn rewrite_seed() -> u16 {
    (std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        % 1000) as u16
}

static FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)```(?:json)?\s*").unwrap());

/// Clean model output (markdown fences, preamble) and locate the outermost
/// JSON object. Anything without a locatable object is a parse failure.
fn extract_json(content: &str) -> Result<Value> {
    let cleaned = FENCE_RE.replace_all(content, "");
    let cleaned = cleaned.trim();

    let start = cleaned.find('{');
    let end = cleaned.rfind('}');
    let object = match (start, end) {
        (Some(s), Some(e)) if s < e => &cleaned[s..=e],
        _ => {
            return Err(TonewiseError::ResponseParse(
                "no JSON object in model output".into(),
            ))
        }
    };

    serde_json::from_str(object).map_err(|e| TonewiseError::ResponseParse(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
