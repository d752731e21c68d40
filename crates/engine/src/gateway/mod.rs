mod wire;

use std::future::Future;
use std::pin::Pin;

use tonewise_common::config::GatewayConfig;

/// Client for the external tone-scoring gateway (OpenAI-compatible
/// chat-completions endpoint).
///
/// Exactly one attempt per call — retry/backoff is a caller policy, never
/// performed here, so a user action maps to at most one outbound request.
pub struct GatewayClient {
    http: reqwest::Client,
    config: GatewayConfig,
    api_key: String,
}

/// Errors from gateway API calls.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway HTTP error: {0}")]
    Http(String),

    #[error("gateway auth error: {0}")]
    Auth(String),

    #[error("gateway rate limited (retry after {retry_after:?}s)")]
    RateLimited { retry_after: Option<u64> },

    #[error("gateway credits exhausted: {0}")]
    CreditsExhausted(String),

    #[error("gateway API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("gateway response parse error: {0}")]
    Parse(String),
}

impl GatewayError {
    /// The HTTP status this error should surface as to our own callers.
    /// Rate-limit and credit exhaustion keep their original statuses since
    /// the UI messages differ; everything else is a bad-gateway condition.
    pub fn surface_status(&self) -> u16 {
        match self {
            Self::RateLimited { .. } => 429,
            Self::CreditsExhausted(_) => 402,
            Self::Api { status, .. } => *status,
            _ => 502,
        }
    }
}

impl From<GatewayError> for tonewise_common::TonewiseError {
    fn from(e: GatewayError) -> Self {
        tonewise_common::TonewiseError::Service {
            status: e.surface_status(),
            message: e.to_string(),
        }
    }
}

impl GatewayClient {
    /// Create a new gateway client. Configuration and the API key are passed
    /// explicitly; the client never reads the environment itself.
    pub fn new(config: GatewayConfig, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            api_key,
        }
    }

    /// Send a single system+user completion request and return the raw
    /// assistant content.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, GatewayError> {
        wire::send_chat_completion(
            &self.http,
            &self.config.endpoint,
            &self.api_key,
            &self.config.model,
            self.config.max_tokens,
            self.config.temperature,
            system,
            user,
        )
        .await
    }
}

/// Object-safe trait for testability (dyn dispatch).
/// Tests provide scripted fakes; production uses GatewayClient.
pub trait ChatCaller: Send + Sync {
    fn complete<'a>(
        &'a self,
        system: &'a str,
        user: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, GatewayError>> + Send + 'a>>;
}

impl ChatCaller for GatewayClient {
    fn complete<'a>(
        &'a self,
        system: &'a str,
        user: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, GatewayError>> + Send + 'a>> {
        Box::pin(self.complete(system, user))
    }
}
