//! Prompt construction for the tone gateway.
//!
//! The semantic analysis itself lives in the external model; these templates
//! are configuration-shaped data, not an algorithm. Cultural and audience
//! tables steer the model per request context.

use tonewise_common::types::{Audience, ContentMedium, Language, ToneScores};

fn cultural_context(language: Language) -> &'static str {
    match language {
        Language::En => {
            "Use direct communication. Be clear and concise. American/British professional standards."
        }
        Language::Hi => {
            "Indian English: Use respectful language, soften criticism, acknowledge hierarchy. Use 'ji' for respect where appropriate."
        }
        Language::Es => {
            "Spanish: Warm and personal, maintain politeness, use formal 'usted' when appropriate. Latin warmth."
        }
        Language::Fr => {
            "French: Formal and elegant, maintain professional distance, use proper titles and vous form."
        }
        Language::De => {
            "German: Direct and precise, focus on facts, maintain professional tone. Sachlich approach."
        }
        Language::Pt => {
            "Portuguese: Warm and friendly, maintain personal connection. Brazilian or Portuguese style."
        }
        Language::Zh => {
            "Chinese: Respectful and indirect, preserve face, use humble language. Relationship-focused."
        }
    }
}

fn audience_style(audience: Audience) -> &'static str {
    match audience {
        Audience::Boss => {
            "Professional and respectful. Acknowledge authority while being confident. Solution-oriented."
        }
        Audience::Client => "Service-oriented and accommodating. Focus on value and partnership.",
        Audience::Peer => "Collaborative and friendly. Equal footing, supportive tone.",
        Audience::Hr => "Formal and policy-aware. Professional, documented approach.",
        Audience::General => "Neutral professional tone suitable for any audience.",
        Audience::Investor => {
            "Confident and data-driven. Focus on ROI, metrics, and strategic value."
        }
        Audience::Team => "Supportive and motivating. Clear direction with encouragement.",
        Audience::Vendor => "Professional and transactional. Clear expectations and terms.",
        Audience::Partner => "Collaborative and mutually beneficial. Win-win framing.",
        Audience::Customer => "Helpful and solution-focused. Empathetic to their needs.",
    }
}

const UNIQUENESS_TECHNIQUES: [&str; 8] = [
    "Use varied sentence structures - mix short punchy sentences with longer explanatory ones",
    "Employ active voice predominantly for clarity and directness",
    "Include transitional phrases that feel natural, not formulaic",
    "Vary paragraph lengths for visual and cognitive rhythm",
    "Use specific, concrete language instead of vague generalities",
    "Incorporate the writer's apparent intent with fresh phrasing",
    "Avoid clichés and overused business jargon",
    "Make the tone feel human and authentic, not robotic",
];

/// Request context shared by both prompt builders.
#[derive(Clone, Copy, Debug)]
pub struct PromptContext {
    pub language: Language,
    pub audience: Audience,
    pub medium: ContentMedium,
}

/// Build the (system, user) prompt pair for an analyze request.
pub fn build_analyze_prompts(text: &str, ctx: &PromptContext) -> (String, String) {
    let system = format!(
        "You are an expert emotional intelligence analyzer with deep expertise in communication psychology and cultural nuances. Your analysis must be precise, insightful, and actionable.\n\
         \n\
         Cultural Context: {}\n\
         Target Audience: {} - {}\n\
         Content Medium: {}\n\
         \n\
         CRITICAL RULES:\n\
         1. Return ONLY valid JSON - no markdown, no code blocks, no explanations outside JSON\n\
         2. Be nuanced - scores should rarely be 0 or 100 unless text is extreme\n\
         3. Consider context and intent, not just words\n\
         4. Identify subtle emotional undertones",
        cultural_context(ctx.language),
        ctx.audience.as_str(),
        audience_style(ctx.audience),
        ctx.medium.as_str(),
    );

    let user = format!(
        "Analyze this {} text for emotional intelligence and tone:\n\
         \n\
         TEXT TO ANALYZE:\n\
         \"{}\"\n\
         \n\
         Provide a comprehensive JSON analysis:\n\
         {{\n\
           \"passive_agg_score\": <0-100, where 0=none, 50=moderate, 100=severe>,\n\
           \"sarcasm_score\": <0-100, detect irony, mockery, eye-roll tone>,\n\
           \"empathy_score\": <0-100, understanding and compassion shown>,\n\
           \"formality_score\": <0-100, 0=very casual, 100=highly formal>,\n\
           \"aggression_score\": <0-100, direct hostility or anger>,\n\
           \"defensiveness_score\": <0-100, self-protective justifications>,\n\
           \"condescension_score\": <0-100, talking down, patronizing>,\n\
           \"manipulation_score\": <0-100, guilt-tripping, emotional control>,\n\
           \"dismissiveness_score\": <0-100, ignoring or belittling>,\n\
           \"anxiety_score\": <0-100, nervous energy, over-explaining>,\n\
           \"severity\": \"<high if any negative score >70, medium if >40, low otherwise>\",\n\
           \"emotion_flags\": [\"<list 2-4 primary emotions detected>\"],\n\
           \"analysis_summary\": \"<2-3 sentences explaining the overall emotional tone and potential impact on {}>\",\n\
           \"key_phrases\": [\"<up to 3 specific phrases that contribute most to the tone>\"]\n\
         }}\n\
         \n\
         SCORING CALIBRATION:\n\
         - 0-20: Minimal/absent\n\
         - 21-40: Slight presence\n\
         - 41-60: Moderate/noticeable\n\
         - 61-80: Strong presence\n\
         - 81-100: Dominant/severe",
        ctx.language.as_str(),
        text,
        ctx.audience.as_str(),
    );

    (system, user)
}

/// Build the (system, user) prompt pair for a rewrite request.
///
/// `seed` keeps repeated rewrites of the same text from converging on a
/// single template; the caller derives it from the wall clock.
pub fn build_rewrite_prompts(
    text: &str,
    ctx: &PromptContext,
    adjustments: Option<&ToneScores>,
    seed: u16,
) -> (String, String) {
    let techniques = UNIQUENESS_TECHNIQUES
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {}", i + 1, t))
        .collect::<Vec<_>>()
        .join("\n");

    let system = format!(
        "You are an expert diplomatic communication writer and emotional intelligence specialist. Your rewrites must be UNIQUE, NATURAL, and EFFECTIVE.\n\
         \n\
         Cultural Context: {}\n\
         Target Audience: {} - {}\n\
         Content Medium: {}\n\
         \n\
         UNIQUENESS GUIDELINES (Seed: {}):\n\
         {}\n\
         \n\
         CRITICAL RULES:\n\
         1. Return ONLY valid JSON - no markdown, no code blocks\n\
         2. Preserve 100% of the original INTENT and key information\n\
         3. Transform the TONE, not the message\n\
         4. Make it sound like a skilled human wrote it, not AI\n\
         5. The rewrite should feel fresh and natural, never templated",
        cultural_context(ctx.language),
        ctx.audience.as_str(),
        audience_style(ctx.audience),
        ctx.medium.as_str(),
        seed,
        techniques,
    );

    let adjustment_instructions = match adjustments {
        Some(t) => format!(
            "TARGET TONE ADJUSTMENTS (adjust toward these percentages):\n\
             - Passive-aggressive: reduce to {}%\n\
             - Sarcasm: reduce to {}%\n\
             - Empathy: increase to {}%\n\
             - Formality: adjust to {}%\n\
             - Aggression: reduce to {}%\n\
             - Defensiveness: reduce to {}%\n\
             - Condescension: reduce to {}%\n\
             - Manipulation: eliminate ({}%)\n\
             - Dismissiveness: reduce to {}%\n\
             - Anxiety: reduce to {}%",
            t.passive_agg_score,
            t.sarcasm_score,
            t.empathy_score,
            t.formality_score,
            t.aggression_score,
            t.defensiveness_score,
            t.condescension_score,
            t.manipulation_score,
            t.dismissiveness_score,
            t.anxiety_score,
        ),
        None => format!(
            "DEFAULT TRANSFORMATION GOALS:\n\
             - Remove ALL passive-aggressive undertones\n\
             - Eliminate sarcasm while keeping wit if appropriate\n\
             - Maximize empathy and understanding\n\
             - Match formality to {} and {}\n\
             - Remove any aggression or hostility\n\
             - Reduce defensiveness, focus on solutions\n\
             - Eliminate condescension completely\n\
             - Remove any manipulation tactics\n\
             - Replace dismissiveness with engagement\n\
             - Reduce anxiety, project calm confidence",
            ctx.medium.as_str(),
            ctx.audience.as_str(),
        ),
    };

    let user = format!(
        "Transform this text into a diplomatic, professional message while preserving its complete intent:\n\
         \n\
         ORIGINAL TEXT:\n\
         \"{}\"\n\
         \n\
         {}\n\
         \n\
         REWRITE REQUIREMENTS:\n\
         1. Keep all factual content and requests intact\n\
         2. Transform emotional tone to be constructive\n\
         3. Make it appropriate for {} via {}\n\
         4. Sound authentic and human, not like a template\n\
         5. Use varied sentence structure for natural flow\n\
         \n\
         Return JSON:\n\
         {{\n\
           \"rewritten_text\": \"<your diplomatic rewrite - must be unique and natural sounding>\",\n\
           \"changes_summary\": \"<1-2 sentences on what was transformed and why>\",\n\
           \"intent_preserved_confidence\": <85-100, how well intent was preserved>,\n\
           \"new_scores\": {{\n\
             \"passive_agg_score\": <new score 0-100>,\n\
             \"sarcasm_score\": <new score 0-100>,\n\
             \"empathy_score\": <new score 0-100>,\n\
             \"formality_score\": <new score 0-100>,\n\
             \"aggression_score\": <new score 0-100>,\n\
             \"defensiveness_score\": <new score 0-100>,\n\
             \"condescension_score\": <new score 0-100>,\n\
             \"manipulation_score\": <new score 0-100>,\n\
             \"dismissiveness_score\": <new score 0-100>,\n\
             \"anxiety_score\": <new score 0-100>\n\
           }}\n\
         }}",
        text,
        adjustment_instructions,
        ctx.audience.as_str(),
        ctx.medium.as_str(),
    );

    (system, user)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
