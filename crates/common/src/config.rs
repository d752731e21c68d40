use serde::{Deserialize, Serialize};

/// Top-level system configuration, deserialized from system.toml.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SystemConfig {
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
    pub history: HistoryConfig,
    pub heuristic: HeuristicConfig,
}

/// HTTP server parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

/// External tone-scoring gateway configuration.
///
/// The gateway client receives this struct plus the API key explicitly —
/// it never reads the environment itself, so tests can construct it with a
/// fake transport.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Chat-completions endpoint URL.
    pub endpoint: String,
    /// Model identifier (e.g. "google/gemini-2.5-flash").
    pub model: String,
    /// Max tokens in the response.
    pub max_tokens: u32,
    /// Sampling temperature. Nonzero so rewrites vary between runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

/// Historical-record windowing for the trend analyzer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// How many recent analyses feed the tone profile.
    pub window: u32,
}

/// Client-side quick-scorer parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Quiet period after the last text change before the scorer runs.
    pub debounce_ms: u64,
}
