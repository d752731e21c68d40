use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reference tone signature for a named communicator. Read-only catalog
/// data, seeded by migration, never mutated by the engine.
///
/// Directness is stored as its own axis here even though user vectors only
/// imply it (100 − passive_agg).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Benchmark {
    pub id: Uuid,
    pub communicator_name: String,
    pub description: String,
    pub empathy_score: u8,
    pub formality_score: u8,
    pub directness_score: u8,
    pub warmth_score: u8,
}
