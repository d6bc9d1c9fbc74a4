//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::HttpApiConfig;
use crate::logging::LogFormat;
use crate::render::Locale;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn http_config(&self) -> HttpApiConfig {
        HttpApiConfig {
            base_url: self.base_url.clone(),
            request_timeout_ms: self.request_timeout_secs.saturating_mul(1000),
        }
    }
}

/// Number formatting in tables and bar labels
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub locale: Locale,
}

/// Dev server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built front end (output of `trunk build`)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dashboard-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("gdpscope").join("config.toml")),
            Some(PathBuf::from("/etc/gdpscope/config.toml")),
            Some(PathBuf::from("./gdpscope.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `GDPSCOPE_*` overrides from the given lookup.
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // API overrides
        if let Some(url) = lookup("GDPSCOPE_API_URL") {
            self.api.base_url = url;
        }
        if let Some(secs) = lookup("GDPSCOPE_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(secs) => self.api.request_timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring invalid GDPSCOPE_TIMEOUT_SECS: {}", secs),
            }
        }

        // Display overrides
        if let Some(locale) = lookup("GDPSCOPE_LOCALE") {
            match locale.parse() {
                Ok(locale) => self.display.locale = locale,
                Err(e) => tracing::warn!("Ignoring GDPSCOPE_LOCALE: {}", e),
            }
        }

        // Server overrides
        if let Some(host) = lookup("GDPSCOPE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GDPSCOPE_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid GDPSCOPE_PORT: {}", port),
            }
        }
        if let Some(dir) = lookup("GDPSCOPE_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dir);
        }

        // Logging overrides
        if let Some(level) = lookup("GDPSCOPE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("GDPSCOPE_LOG_FORMAT") {
            match format.parse() {
                Ok(format) => self.logging.format = format,
                Err(e) => tracing::warn!("Ignoring GDPSCOPE_LOG_FORMAT: {}", e),
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# gdpscope Configuration
#
# Environment variables override these settings:
# - GDPSCOPE_API_URL
# - GDPSCOPE_TIMEOUT_SECS
# - GDPSCOPE_LOCALE
# - GDPSCOPE_HOST
# - GDPSCOPE_PORT
# - GDPSCOPE_DIST_DIR
# - GDPSCOPE_LOG_LEVEL
# - GDPSCOPE_LOG_FORMAT

[api]
# Base URL of the economic data API
base_url = "http://localhost:5000"

# Request timeout in seconds
request_timeout_secs = 30

[display]
# Number formatting: en-US or pt-BR
locale = "en-US"

[server]
# Dev server host
host = "127.0.0.1"

# Dev server port
port = 8084

# Built front end served at /
dist_dir = "dashboard-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.api.base_url, defaults.api.base_url);
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.display.locale, Locale::EnUs);
        assert_eq!(config.server.port, defaults.server.port);
        assert_eq!(config.server.dist_dir, defaults.server.dist_dir);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nlocale = \"pt-BR\"\n\n[server]\nport = 9000").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.display.locale, Locale::PtBr);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/gdpscope.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = \"not a port\"").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("GDPSCOPE_API_URL", "http://api.internal:8000"),
            ("GDPSCOPE_TIMEOUT_SECS", "5"),
            ("GDPSCOPE_LOCALE", "pt-BR"),
            ("GDPSCOPE_PORT", "not-a-number"),
            ("GDPSCOPE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://api.internal:8000");
        assert_eq!(config.api.http_config().request_timeout_ms, 5_000);
        assert_eq!(config.display.locale, Locale::PtBr);
        assert_eq!(config.server.port, 8084);
        assert_eq!(config.logging.format, LogFormat::Json);
    }
}
