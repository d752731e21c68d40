use thiserror::Error;

/// Top-level error type for Tonewise operations.
///
/// The four protocol kinds (Validation, Service, ResponseParse,
/// InvalidResponse) map to distinct user-facing messages and must stay
/// distinguishable all the way up to the HTTP layer.
#[derive(Debug, Error)]
pub enum TonewiseError {
    // --- Protocol errors (one per user-visible failure message) ---
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Tone service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("Response parse error: {0}")]
    ResponseParse(String),

    #[error("Invalid response: missing {field}")]
    InvalidResponse { field: String },

    // --- Collaborator errors ---
    #[error("Store error: {0}")]
    Store(String),

    // --- Operational errors ---
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Tonewise operations.
pub type Result<T> = std::result::Result<T, TonewiseError>;
