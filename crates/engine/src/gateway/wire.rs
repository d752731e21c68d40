use serde::{Deserialize, Serialize};

use super::GatewayError;

// ---------------------------------------------------------------------------
// Request wire types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

// ---------------------------------------------------------------------------
// Response wire types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<WireChoice>,
}

#[derive(Deserialize)]
struct WireChoice {
    message: WireChoiceMessage,
}

#[derive(Deserialize)]
struct WireChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct WireError {
    error: WireErrorDetail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireErrorDetail {
    Structured {
        message: String,
    },
    Plain(String),
}

impl WireErrorDetail {
    fn message(self) -> String {
        match self {
            Self::Structured { message } => message,
            Self::Plain(message) => message,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
/// Send a chat-completion request to the gateway and return the assistant
/// message content.
pub async fn send_chat_completion(
    http: &reqwest::Client,
    endpoint: &str,
    api_key: &str,
    model: &str,
    max_tokens: u32,
    temperature: Option<f64>,
    system: &str,
    user: &str,
) -> Result<String, GatewayError> {
    let start = std::time::Instant::now();

    let request = ChatCompletionRequest {
        model,
        messages: vec![
            WireMessage {
                role: "system",
                content: system,
            },
            WireMessage {
                role: "user",
                content: user,
            },
        ],
        max_tokens,
        temperature,
    };

    let response = http
        .post(endpoint)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .map_err(|e| GatewayError::Http(e.to_string()))?;

    let status = response.status();
    let latency = start.elapsed().as_secs_f64();
    metrics::histogram!("gateway.latency", "model" => model.to_string()).record(latency);

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::Auth(format!("{}: {}", status, body)));
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok());
        return Err(GatewayError::RateLimited { retry_after });
    }

    if status == reqwest::StatusCode::PAYMENT_REQUIRED {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::CreditsExhausted(body));
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<WireError>(&body)
            .map(|e| e.error.message())
            .unwrap_or(body);
        metrics::counter!("gateway.errors").increment(1);
        return Err(GatewayError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body: ChatCompletionResponse = response
        .json()
        .await
        .map_err(|e| GatewayError::Parse(format!("failed to parse gateway response: {}", e)))?;

    let content = body
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| GatewayError::Parse("no choices in gateway response".into()))?;

    Ok(content)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
