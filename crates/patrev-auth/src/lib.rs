//! # patrev-auth
//!
//! Session state for the patent review client.
//!
//! Provides the [`SessionStore`] (restore / login / logout), pluggable token
//! persistence (OS keychain via `keyring` with a credentials-file fallback, or
//! in-memory), and the [`TokenSource`] seam the request layer reads the bearer
//! token through.

pub mod credentials;
pub mod error;
pub mod session;
pub mod token_store;

pub use credentials::MockCredentials;
pub use error::AuthError;
pub use session::{Session, SessionStore, SharedSession, TokenSource};
pub use token_store::TokenStore;

use patrev_config::AuthConfig;

/// Build a session store from configuration and restore any persisted token.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the token backend cannot be built.
pub fn open_session(config: &AuthConfig) -> Result<SharedSession, AuthError> {
    let backend = token_store::from_config(config)?;
    let session = SharedSession::new(SessionStore::new(
        backend,
        MockCredentials::from_config(config),
    ));
    session.restore();
    Ok(session)
}
