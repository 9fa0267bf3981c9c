use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use patrev_config::AuthConfig;

use crate::error::AuthError;

const KEYRING_USER: &str = "session-token";

/// Environment variable consulted (read-only) after the keyring.
pub const TOKEN_ENV_VAR: &str = "PATREV_AUTH__TOKEN";

/// Persistent storage for the session token.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the token cannot be written.
    fn store(&self, token: &str) -> Result<(), AuthError>;

    /// Remove the persisted token. Succeeds when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the token cannot be removed.
    fn clear(&self) -> Result<(), AuthError>;

    /// A token is supplied from outside the store, so [`clear`](Self::clear)
    /// cannot remove it and the next [`load`](Self::load) returns it again.
    fn has_external_token(&self) -> bool {
        false
    }
}

/// Non-empty `PATREV_AUTH__TOKEN`, if set.
#[must_use]
pub fn env_token() -> Option<String> {
    std::env::var(TOKEN_ENV_VAR)
        .ok()
        .filter(|token| !token.is_empty())
}

/// Build the token store described by `config`.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if no credentials file location can be
/// resolved (no home directory and no explicit path).
pub fn from_config(config: &AuthConfig) -> Result<Box<dyn TokenStore>, AuthError> {
    let path = config.credentials_file().ok_or_else(|| {
        AuthError::TokenStoreError("home directory not found; cannot store credentials".into())
    })?;
    let file = FileTokenStore::new(path);

    if config.use_keyring {
        Ok(Box::new(KeyringTokenStore::new(&config.keyring_service, file)))
    } else {
        Ok(Box::new(file))
    }
}

// ---------------------------------------------------------------------------
// Keyring
// ---------------------------------------------------------------------------

/// OS keychain storage with a credentials-file fallback.
///
/// Load priority: keyring → `PATREV_AUTH__TOKEN` env → file.
pub struct KeyringTokenStore {
    service: String,
    fallback: FileTokenStore,
}

impl KeyringTokenStore {
    #[must_use]
    pub fn new(service: &str, fallback: FileTokenStore) -> Self {
        Self {
            service: service.to_string(),
            fallback,
        }
    }

    fn entry(&self) -> Result<keyring::Entry, keyring::Error> {
        keyring::Entry::new(&self.service, KEYRING_USER)
    }

    fn reads_back(&self, token: &str) -> bool {
        self.entry()
            .and_then(|entry| entry.get_password())
            .is_ok_and(|stored| stored == token)
    }
}

impl TokenStore for KeyringTokenStore {
    fn load(&self) -> Option<String> {
        if let Ok(entry) = self.entry()
            && let Ok(token) = entry.get_password()
            && !token.is_empty()
        {
            return Some(token);
        }

        env_token().or_else(|| self.fallback.load())
    }

    fn store(&self, token: &str) -> Result<(), AuthError> {
        match self.entry().and_then(|entry| entry.set_password(token)) {
            Ok(()) if self.reads_back(token) => Ok(()),
            Ok(()) => {
                // Platforms without a native backend get keyring's in-process
                // mock store, which does not survive the process.
                tracing::warn!("keyring did not persist the token; falling back to file");
                self.fallback.store(token)
            }
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                self.fallback.store(token)
            }
        }
    }

    fn clear(&self) -> Result<(), AuthError> {
        // May not exist in the keyring; the file is authoritative for errors.
        if let Ok(entry) = self.entry() {
            let _ = entry.delete_credential();
        }
        self.fallback.clear()
    }

    fn has_external_token(&self) -> bool {
        env_token().is_some()
    }
}

// ---------------------------------------------------------------------------
// File
// ---------------------------------------------------------------------------

/// Plain credentials file, `0600` on Unix inside a `0700` directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn store(&self, token: &str) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(&self.path, token).map_err(|e| {
            AuthError::TokenStoreError(format!("write {}: {e}", self.path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::TokenStoreError(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                AuthError::TokenStoreError(format!("failed to delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Memory
// ---------------------------------------------------------------------------

/// In-process store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn store(&self, token: &str) -> Result<(), AuthError> {
        *self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}
