mod analysis;
mod benchmark;
mod context;
mod rewrite;
mod scores;

pub use analysis::{Severity, ToneAnalysis, ToneRecord};
pub use benchmark::Benchmark;
pub use context::{Audience, ContentMedium, Language};
pub use rewrite::RewriteResult;
pub use scores::ToneScores;
