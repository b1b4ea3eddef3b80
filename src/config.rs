// Service configuration, read from the environment (and a .env file if present).

use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing {0} environment variable")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Endpoint the moderation request is POSTed to
    pub moderation_api_url: String,
    /// Bearer credential for the moderation API
    pub api_token: String,
    /// Upper bound on a single moderation call
    pub moderation_timeout: Duration,
}

impl ServiceConfig {
    pub fn new(moderation_api_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            moderation_api_url: moderation_api_url.into(),
            api_token: api_token.into(),
            moderation_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load `MODERATION_API_URL`, `MODERATION_API_TOKEN` and the optional
    /// `MODERATION_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let mut config = Self::new(
            required("MODERATION_API_URL")?,
            required("MODERATION_API_TOKEN")?,
        );

        if let Some(raw) = lookup("MODERATION_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    name: "MODERATION_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config.moderation_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_timeout_to_five_seconds() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("MODERATION_API_URL", "https://api.example.com"),
            ("MODERATION_API_TOKEN", "token"),
        ]))
        .unwrap();

        assert_eq!(config.moderation_api_url, "https://api.example.com");
        assert_eq!(config.api_token, "token");
        assert_eq!(config.moderation_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_custom_timeout() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("MODERATION_API_URL", "https://api.example.com"),
            ("MODERATION_API_TOKEN", "token"),
            ("MODERATION_TIMEOUT_SECS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.moderation_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_missing_token_is_reported() {
        let err = ServiceConfig::from_lookup(lookup_from(&[(
            "MODERATION_API_URL",
            "https://api.example.com",
        )]))
        .unwrap_err();

        assert_eq!(err.to_string(), "Missing MODERATION_API_TOKEN environment variable");
    }

    #[test]
    fn test_zero_timeout_is_invalid() {
        let err = ServiceConfig::from_lookup(lookup_from(&[
            ("MODERATION_API_URL", "https://api.example.com"),
            ("MODERATION_API_TOKEN", "token"),
            ("MODERATION_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
