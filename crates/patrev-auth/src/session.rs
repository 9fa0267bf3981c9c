use std::sync::{Arc, PoisonError, RwLock};

use patrev_core::entities::User;

use crate::credentials::MockCredentials;
use crate::error::AuthError;
use crate::token_store::TokenStore;

/// Anything the request layer can ask for the current bearer token.
pub trait TokenSource: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// A fixed token (or none), for tests and one-off clients.
impl TokenSource for Option<String> {
    fn bearer_token(&self) -> Option<String> {
        self.clone()
    }
}

/// Client-held authentication state.
///
/// A present token means authenticated. `user` is only known after an
/// interactive login; a restored session carries the token alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Session state plus the backend it is persisted to.
///
/// Every operation writes the backend first and updates memory only once the
/// write succeeded, so a failed write leaves the previous state in place.
pub struct SessionStore {
    backend: Box<dyn TokenStore>,
    credentials: MockCredentials,
    session: Session,
}

impl SessionStore {
    /// Create an unauthenticated store. Call [`restore`](Self::restore) to pick
    /// up a persisted token.
    #[must_use]
    pub fn new(backend: Box<dyn TokenStore>, credentials: MockCredentials) -> Self {
        Self {
            backend,
            credentials,
            session: Session::default(),
        }
    }

    /// Load a persisted token, if any. The token is not checked against the
    /// server.
    pub fn restore(&mut self) -> &Session {
        match self.backend.load() {
            Some(token) => {
                tracing::debug!("restored persisted session token");
                self.session = Session {
                    token: Some(token),
                    user: None,
                };
            }
            None => self.session = Session::default(),
        }
        &self.session
    }

    /// Log in with the stand-in credential check and persist the token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on a mismatch (nothing is
    /// persisted), or [`AuthError::TokenStoreError`] if the token cannot be
    /// written.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&Session, AuthError> {
        let (token, user) = self.credentials.verify(email, password).inspect_err(|_| {
            tracing::warn!(email, "login rejected");
        })?;

        self.backend.store(&token)?;
        self.session = Session {
            token: Some(token),
            user: Some(user),
        };
        Ok(&self.session)
    }

    /// Clear the persisted token. Idempotent; no server call.
    ///
    /// A token supplied through `PATREV_AUTH__TOKEN` is outside the store and
    /// stays set: the next [`restore`](Self::restore) is authenticated again.
    /// Check [`token_survives_logout`](Self::token_survives_logout).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStoreError`] if the backend cannot clear it.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.backend.clear()?;
        self.session = Session::default();
        Ok(())
    }

    /// Whether [`logout`](Self::logout) leaves a token the next restore finds.
    #[must_use]
    pub fn token_survives_logout(&self) -> bool {
        self.backend.has_external_token()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }
}

/// Cloneable handle to a [`SessionStore`] shared with the request layer.
///
/// The request layer only reads; login and logout are the only writers.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<RwLock<SessionStore>>,
}

impl SharedSession {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// See [`SessionStore::restore`]. Returns whether a token was found.
    pub fn restore(&self) -> bool {
        self.write(|store| store.restore().is_authenticated())
    }

    /// See [`SessionStore::login`].
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::login`].
    pub fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.write(|store| store.login(email, password).cloned())
    }

    /// See [`SessionStore::logout`].
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::logout`].
    pub fn logout(&self) -> Result<(), AuthError> {
        self.write(SessionStore::logout)
    }

    /// See [`SessionStore::token_survives_logout`].
    #[must_use]
    pub fn token_survives_logout(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token_survives_logout()
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .session()
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    fn write<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl TokenSource for SharedSession {
    fn bearer_token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token()
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MOCK_TOKEN;
    use crate::token_store::MemoryTokenStore;
    use pretty_assertions::assert_eq;

    /// Backend that refuses every write.
    struct ReadOnlyStore(Option<String>);

    impl TokenStore for ReadOnlyStore {
        fn load(&self) -> Option<String> {
            self.0.clone()
        }
        fn store(&self, _token: &str) -> Result<(), AuthError> {
            Err(AuthError::TokenStoreError("read-only".into()))
        }
        fn clear(&self) -> Result<(), AuthError> {
            Err(AuthError::TokenStoreError("read-only".into()))
        }
    }

    fn memory_store() -> SessionStore {
        SessionStore::new(Box::new(MemoryTokenStore::default()), MockCredentials::default())
    }

    #[test]
    fn login_with_expected_pair_persists_token() {
        let mut store = memory_store();
        let session = store
            .login("test@example.com", "password123")
            .expect("login")
            .clone();

        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some(MOCK_TOKEN));
        assert_eq!(store.backend.load().as_deref(), Some(MOCK_TOKEN));
        assert_eq!(store.user().map(|u| u.email.as_str()), Some("test@example.com"));
    }

    #[test]
    fn failed_login_persists_nothing() {
        let mut store = memory_store();
        let err = store.login("test@example.com", "wrong").unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(!store.is_authenticated());
        assert!(store.backend.load().is_none());
    }

    #[test]
    fn restore_marks_authenticated_without_user() {
        let mut store = SessionStore::new(
            Box::new(MemoryTokenStore::with_token("persisted")),
            MockCredentials::default(),
        );
        assert!(!store.is_authenticated());

        let session = store.restore();
        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("persisted"));
        assert!(session.user.is_none());
    }

    #[test]
    fn restore_without_token_stays_unauthenticated() {
        let mut store = memory_store();
        assert!(!store.restore().is_authenticated());
    }

    #[test]
    fn logout_is_idempotent() {
        let mut store = memory_store();
        store.login("test@example.com", "password123").unwrap();

        store.logout().expect("first logout");
        let after_once = store.session().clone();
        store.logout().expect("second logout");

        assert_eq!(store.session(), &after_once);
        assert!(!store.is_authenticated());
        assert!(store.backend.load().is_none());
    }

    #[test]
    fn failed_persist_leaves_state_unchanged() {
        let mut store = SessionStore::new(
            Box::new(ReadOnlyStore(Some("old".into()))),
            MockCredentials::default(),
        );
        store.restore();

        assert!(store.login("test@example.com", "password123").is_err());
        assert_eq!(store.token(), Some("old"));
        assert!(store.user().is_none());

        assert!(store.logout().is_err());
        assert!(store.is_authenticated());
    }

    #[test]
    fn shared_session_feeds_token_source() {
        let shared = SharedSession::new(memory_store());
        assert_eq!(shared.bearer_token(), None);

        shared.login("test@example.com", "password123").unwrap();
        assert_eq!(shared.bearer_token().as_deref(), Some(MOCK_TOKEN));

        shared.logout().unwrap();
        assert_eq!(shared.bearer_token(), None);
        assert!(!shared.is_authenticated());
    }
}
