use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub mock: MockConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Location of the fact service. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Scheme and host (e.g., "https://cat-fact.herokuapp.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path plus fixed query string, must start with '/'.
    #[serde(default = "default_path")]
    pub path: String,
}

/// HTTP transport timeouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Development mock that answers requests with synthetic sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MockConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Fixed RNG seed for reproducible sentences.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Set to false to run the TUI without any log output.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Filter directive used when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. The TUI owns stdout, so logs go here.
    #[serde(default)]
    pub file: Option<String>,
}

pub const DEFAULT_BASE_URL: &str = "https://cat-fact.herokuapp.com";
pub const DEFAULT_PATH: &str = "/facts/random?animal_type=cat&amount=1";

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_path() -> String {
    DEFAULT_PATH.to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl EndpointConfig {
    /// Full request URL, `{base_url}{path}`.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_path(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: default_connect_timeout(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            file: None,
        }
    }
}
