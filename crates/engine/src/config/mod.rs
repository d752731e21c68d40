mod loader;
mod validation;

pub use loader::{load_config, ConfigError, EngineConfig};
