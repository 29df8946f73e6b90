//! Link configuration.
//!
//! Holds the public web host and the app URL scheme used when building and
//! recognizing EventShare links. Values are loaded from environment variables
//! with defaults matching the production app.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the web host.
pub const WEB_HOST_VAR: &str = "EVENTSHARE_WEB_HOST";

/// Environment variable holding the app URL scheme.
pub const APP_SCHEME_VAR: &str = "EVENTSHARE_APP_SCHEME";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Hosts and schemes recognized in EventShare links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Public web host without scheme (e.g. "eventshare.app").
    pub web_host: String,

    /// App URL scheme without "://" (e.g. "eventshare").
    pub app_scheme: String,
}

impl Default for LinkConfig {
    /// Returns the production link configuration.
    fn default() -> Self {
        Self {
            web_host: "eventshare.app".to_string(),
            app_scheme: "eventshare".to_string(),
        }
    }
}

impl LinkConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTSHARE_WEB_HOST`: Web host (default: eventshare.app)
    /// - `EVENTSHARE_APP_SCHEME`: App URL scheme (default: eventshare)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Missing keys fall back to the defaults; the result is validated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let config = Self {
            web_host: lookup(WEB_HOST_VAR)
                .map(|s| s.trim().to_lowercase())
                .unwrap_or(default.web_host),
            app_scheme: lookup(APP_SCHEME_VAR)
                .map(|s| s.trim().to_lowercase())
                .unwrap_or(default.app_scheme),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the host and scheme can appear in a link.
    ///
    /// The host must be a dotted name of letters, digits and hyphens. The
    /// scheme must start with a letter and contain only letters, digits,
    /// `+`, `-` and `.`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let host_ok = !self.web_host.is_empty()
            && self.web_host.split('.').all(|label| {
                !label.is_empty()
                    && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            });
        if !host_ok {
            return Err(ConfigError::InvalidValue {
                key: WEB_HOST_VAR.to_string(),
                message: format!("'{}' is not a valid host name", self.web_host),
            });
        }

        let mut chars = self.app_scheme.chars();
        let scheme_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !scheme_ok {
            return Err(ConfigError::InvalidValue {
                key: APP_SCHEME_VAR.to_string(),
                message: format!("'{}' is not a valid URL scheme", self.app_scheme),
            });
        }

        Ok(())
    }

    /// Base URL of the web app (e.g. "https://eventshare.app").
    pub fn web_base_url(&self) -> String {
        format!("https://{}", self.web_host)
    }

    /// Prefix of app links (e.g. "eventshare://").
    pub fn app_prefix(&self) -> String {
        format!("{}://", self.app_scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LinkConfig::default();
        assert_eq!(config.web_base_url(), "https://eventshare.app");
        assert_eq!(config.app_prefix(), "eventshare://");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = LinkConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, LinkConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = LinkConfig::from_lookup(|key| match key {
            WEB_HOST_VAR => Some(" Staging.EventShare.app ".to_string()),
            APP_SCHEME_VAR => Some("eventshare-dev".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.web_host, "staging.eventshare.app");
        assert_eq!(config.app_scheme, "eventshare-dev");
    }

    #[test]
    fn test_invalid_host() {
        for host in ["", "event share.app", "eventshare..app", "https://eventshare.app"] {
            let config = LinkConfig {
                web_host: host.to_string(),
                ..LinkConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidValue { ref key, .. }) if key == WEB_HOST_VAR),
                "{host}"
            );
        }
    }

    #[test]
    fn test_invalid_scheme() {
        for scheme in ["", "1share", "event share", "eventshare://"] {
            let result = LinkConfig::from_lookup(|key| {
                (key == APP_SCHEME_VAR).then(|| scheme.to_string())
            });
            assert!(result.is_err(), "{scheme}");
        }
    }
}
