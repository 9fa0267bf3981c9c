//! Session persistence and login configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_keyring_service() -> String {
    "patrev-cli".to_string()
}

const fn default_use_keyring() -> bool {
    true
}

fn default_expected_email() -> String {
    "test@example.com".to_string()
}

fn default_expected_password() -> String {
    "password123".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Keyring service name the session token is stored under.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Store the token in the OS keyring. When false only the credentials
    /// file is used.
    #[serde(default = "default_use_keyring")]
    pub use_keyring: bool,

    /// Override for the credentials file. Empty means `~/.patrev/credentials`.
    #[serde(default)]
    pub credentials_path: String,

    /// Email accepted by the stand-in credential check.
    #[serde(default = "default_expected_email")]
    pub expected_email: String,

    /// Password accepted by the stand-in credential check.
    #[serde(default = "default_expected_password")]
    pub expected_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            keyring_service: default_keyring_service(),
            use_keyring: default_use_keyring(),
            credentials_path: String::new(),
            expected_email: default_expected_email(),
            expected_password: default_expected_password(),
        }
    }
}

impl AuthConfig {
    /// Resolved credentials file path, if one can be determined.
    #[must_use]
    pub fn credentials_file(&self) -> Option<PathBuf> {
        if self.credentials_path.is_empty() {
            dirs::home_dir().map(|home| home.join(".patrev").join("credentials"))
        } else {
            Some(PathBuf::from(&self.credentials_path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AuthConfig::default();
        assert_eq!(config.keyring_service, "patrev-cli");
        assert!(config.use_keyring);
        assert_eq!(config.expected_email, "test@example.com");
        assert_eq!(config.expected_password, "password123");
    }

    #[test]
    fn credentials_file_defaults_under_home() {
        let config = AuthConfig::default();
        if let Some(path) = config.credentials_file() {
            assert!(path.ends_with(".patrev/credentials"));
        }
    }

    #[test]
    fn credentials_file_override() {
        let config = AuthConfig {
            credentials_path: "/tmp/patrev-creds".into(),
            ..Default::default()
        };
        assert_eq!(
            config.credentials_file(),
            Some(PathBuf::from("/tmp/patrev-creds"))
        );
    }
}
