use std::fmt;

use chrono::{DateTime, Datelike};
use thiserror::Error;

/// Name of the relay function that forwards contact messages.
pub const CONTACT_FUNCTION: &str = "send-contact-email";
pub const DEFAULT_ANALYTICS_DOMAIN: &str = "muthuajay.com";
pub const ANALYTICS_ENDPOINT: &str = "https://plausible.io/api/event";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} was not set at build time")]
    Missing(&'static str),
    #[error("{0} is not an http(s) URL")]
    InvalidUrl(String),
}

/// Endpoint and credential for the contact relay, baked in at build time.
#[derive(Clone, PartialEq, Eq)]
pub struct RelayConfig {
    base_url: String,
    token: String,
}

impl RelayConfig {
    pub fn new(base_url: Option<&str>, token: Option<&str>) -> Result<Self, ConfigError> {
        let base_url = non_blank(base_url).ok_or(ConfigError::Missing("CONTACT_RELAY_URL"))?;
        let token = non_blank(token).ok_or(ConfigError::Missing("CONTACT_RELAY_TOKEN"))?;
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(
            option_env!("CONTACT_RELAY_URL"),
            option_env!("CONTACT_RELAY_TOKEN"),
        )
    }

    pub fn endpoint(&self) -> String {
        format!("{}/functions/v1/{}", self.base_url, CONTACT_FUNCTION)
    }

    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// keep the token out of logs
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn analytics_domain() -> &'static str {
    match option_env!("ANALYTICS_DOMAIN") {
        Some(d) if !d.trim().is_empty() => d,
        _ => DEFAULT_ANALYTICS_DOMAIN,
    }
}

/// Year the bundle was built, used for the footer copyright line.
pub fn build_year() -> i32 {
    year_of(env!("BUILD_TIME")).unwrap_or(2024)
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_config_valid() {
        let cfg = RelayConfig::new(Some("https://relay.example.co/"), Some("tok_123")).unwrap();
        assert_eq!(
            cfg.endpoint(),
            "https://relay.example.co/functions/v1/send-contact-email"
        );
        assert_eq!(cfg.authorization(), "Bearer tok_123");
    }

    #[test]
    fn test_relay_config_missing_values() {
        assert_eq!(
            RelayConfig::new(None, Some("t")),
            Err(ConfigError::Missing("CONTACT_RELAY_URL"))
        );
        assert_eq!(
            RelayConfig::new(Some("https://relay.example.co"), Some("   ")),
            Err(ConfigError::Missing("CONTACT_RELAY_TOKEN"))
        );
    }

    #[test]
    fn test_relay_config_rejects_bad_scheme() {
        let err = RelayConfig::new(Some("relay.example.co"), Some("t")).unwrap_err();
        assert_eq!(err, ConfigError::InvalidUrl("relay.example.co".to_string()));
    }

    #[test]
    fn test_debug_redacts_token() {
        let cfg = RelayConfig::new(Some("https://relay.example.co"), Some("secret")).unwrap();
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("secret"));
        assert!(dbg.contains("redacted"));
    }

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2025-03-04T10:00:00+00:00"), Some(2025));
        assert_eq!(year_of("yesterday"), None);
        assert!(build_year() >= 2024);
    }
}
