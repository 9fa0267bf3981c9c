//! Review API endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("patrev/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash, ready for `format!("{base}{path}")`.
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Reject base URLs that are not absolute `http(s)` URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming `api.base_url`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.normalized_base_url();
        let host = base
            .strip_prefix("https://")
            .or_else(|| base.strip_prefix("http://"));

        match host {
            Some(rest) if !rest.is_empty() => Ok(()),
            _ => Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("expected an http:// or https:// URL, got '{}'", self.base_url),
            }),
        }
    }
}
