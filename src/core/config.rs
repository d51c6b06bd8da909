//! Server configuration from environment variables.
//!
//! Load configuration using `ServerConfig::from_env()` after calling `dotenvy::dotenv()`.
//! The site address itself is read by Leptos (`LEPTOS_SITE_ADDR`).

/// Default tracing filter when neither `PIXPLORER_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "info,pixplorer=debug";

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false/1/0), got `{value}`")]
    InvalidBool { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Tracing filter directive
    /// Example: info,pixplorer=trace
    pub log_filter: Option<String>,

    /// Whether responses are compressed (brotli/gzip)
    pub compression: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = lookup("PIXPLORER_LOG").or_else(|| lookup("RUST_LOG"));
        let compression = match lookup("PIXPLORER_COMPRESSION") {
            Some(value) => parse_bool("PIXPLORER_COMPRESSION", &value)?,
            None => true,
        };

        Ok(Self {
            log_filter,
            compression,
        })
    }

    /// Filter directive to hand to the tracing subscriber
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: None,
            compression: true,
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_with_no_vars() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.log_filter_or_default(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_pixplorer_log_wins_over_rust_log() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PIXPLORER_LOG", "trace"),
            ("RUST_LOG", "warn"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter.as_deref(), Some("trace"));
    }

    #[test]
    fn test_rust_log_fallback() {
        let config = ServerConfig::from_lookup(lookup(&[("RUST_LOG", "warn")])).unwrap();
        assert_eq!(config.log_filter_or_default(), "warn");
    }

    #[test]
    fn test_compression_flag() {
        for (value, expected) in [("false", false), ("0", false), ("On", true), (" yes ", true)] {
            let config =
                ServerConfig::from_lookup(lookup(&[("PIXPLORER_COMPRESSION", value)])).unwrap();
            assert_eq!(config.compression, expected, "value {value:?}");
        }
    }

    #[test]
    fn test_invalid_compression_flag() {
        let err = ServerConfig::from_lookup(lookup(&[("PIXPLORER_COMPRESSION", "maybe")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "PIXPLORER_COMPRESSION must be a boolean (true/false/1/0), got `maybe`"
        );
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so only check it does not panic
        let _ = ServerConfig::from_env();
    }
}
