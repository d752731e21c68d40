//! Error-to-response mapping for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use tonewise_common::TonewiseError;

/// Map internal errors to HTTP responses. Rate-limit and credit statuses
/// pass through so the client can show the right message; other upstream
/// failures collapse to bad-gateway.
pub fn error_response(err: TonewiseError) -> Response {
    let status = match &err {
        TonewiseError::Validation(_) => StatusCode::BAD_REQUEST,
        TonewiseError::Service { status, .. } => match *status {
            429 => StatusCode::TOO_MANY_REQUESTS,
            402 => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::BAD_GATEWAY,
        },
        TonewiseError::ResponseParse(_) | TonewiseError::InvalidResponse { .. } => {
            StatusCode::BAD_GATEWAY
        }
        TonewiseError::Store(_) | TonewiseError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(error = %err, status = status.as_u16(), "Request failed");
    }

    let body = serde_json::json!({ "error": err.to_string() });
    (status, Json(body)).into_response()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn service(status: u16) -> TonewiseError {
        TonewiseError::Service {
            status,
            message: "upstream failed".into(),
        }
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = error_response(TonewiseError::Validation("Text is required".into()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_rate_limit_and_credit_statuses_pass_through() {
        assert_eq!(
            error_response(service(429)).status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            error_response(service(402)).status(),
            StatusCode::PAYMENT_REQUIRED
        );
    }

    #[test]
    fn test_other_upstream_failures_collapse_to_bad_gateway() {
        assert_eq!(error_response(service(500)).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            error_response(TonewiseError::ResponseParse("no JSON object".into())).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            error_response(TonewiseError::InvalidResponse {
                field: "severity".into()
            })
            .status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_store_failures_are_internal_errors() {
        assert_eq!(
            error_response(TonewiseError::Store("connection reset".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
