mod loader;
mod types;

pub use loader::{ConfigError, ConfigOverrides, ENV_MODE_VAR};
pub use types::{
    Config, EndpointConfig, HttpConfig, LoggingConfig, MockConfig, DEFAULT_BASE_URL, DEFAULT_PATH,
};
