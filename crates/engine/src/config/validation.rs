use super::loader::{ConfigError, EngineConfig};

/// Validate the complete engine configuration.
///
/// Checks sane ranges on numeric parameters; the engine refuses to start on
/// validation failure.
pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_server(config, &mut errors);
    validate_gateway(config, &mut errors);
    validate_history(config, &mut errors);
    validate_heuristic(config, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors.join("; ")))
    }
}

fn validate_server(config: &EngineConfig, errors: &mut Vec<String>) {
    if config.system.server.port == 0 {
        errors.push("server.port must be > 0".into());
    }
}

fn validate_gateway(config: &EngineConfig, errors: &mut Vec<String>) {
    let g = &config.system.gateway;

    if !g.endpoint.starts_with("http://") && !g.endpoint.starts_with("https://") {
        errors.push("gateway.endpoint must be an http(s) URL".into());
    }
    if g.model.is_empty() {
        errors.push("gateway.model must not be empty".into());
    }
    if g.max_tokens == 0 {
        errors.push("gateway.max_tokens must be > 0".into());
    }
    if let Some(temp) = g.temperature {
        if !(0.0..=2.0).contains(&temp) {
            errors.push("gateway.temperature must be between 0.0 and 2.0".into());
        }
    }
    if g.api_key_env.is_empty() {
        errors.push("gateway.api_key_env must not be empty".into());
    }
}

fn validate_history(config: &EngineConfig, errors: &mut Vec<String>) {
    if config.system.history.window == 0 {
        errors.push("history.window must be > 0".into());
    }
}

fn validate_heuristic(config: &EngineConfig, errors: &mut Vec<String>) {
    if config.system.heuristic.debounce_ms == 0 {
        errors.push("heuristic.debounce_ms must be > 0".into());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tonewise_common::config::{
        GatewayConfig, HeuristicConfig, HistoryConfig, ServerConfig, SystemConfig,
    };

    fn valid_config() -> EngineConfig {
        EngineConfig {
            system: SystemConfig {
                server: ServerConfig { port: 8080 },
                gateway: GatewayConfig {
                    endpoint: "https://gateway.example.dev/v1/chat/completions".into(),
                    model: "google/gemini-2.5-flash".into(),
                    max_tokens: 1024,
                    temperature: Some(0.7),
                    api_key_env: "TONE_GATEWAY_API_KEY".into(),
                },
                history: HistoryConfig { window: 5 },
                heuristic: HeuristicConfig { debounce_ms: 300 },
            },
            config_dir: PathBuf::from("config"),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let mut config = valid_config();
        config.system.gateway.endpoint = "gateway.example.dev".into();

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("gateway.endpoint"));
    }

    #[test]
    fn test_errors_accumulate() {
        let mut config = valid_config();
        config.system.gateway.model = String::new();
        config.system.gateway.temperature = Some(3.5);
        config.system.history.window = 0;

        let err = validate(&config).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("gateway.model"));
        assert!(message.contains("gateway.temperature"));
        assert!(message.contains("history.window"));
    }
}
