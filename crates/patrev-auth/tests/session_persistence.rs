//! A session written by one process is picked up by the next.

use patrev_auth::credentials::MOCK_TOKEN;
use patrev_auth::token_store::TOKEN_ENV_VAR;
use patrev_auth::{AuthError, TokenSource, open_session};
use patrev_config::AuthConfig;

fn file_config(dir: &tempfile::TempDir) -> AuthConfig {
    AuthConfig {
        use_keyring: false,
        credentials_path: dir
            .path()
            .join("credentials")
            .to_string_lossy()
            .into_owned(),
        ..Default::default()
    }
}

#[test]
fn login_survives_restart() {
    let dir = tempfile::TempDir::new().expect("tmp dir");
    let config = file_config(&dir);

    let first = open_session(&config).expect("open");
    assert!(!first.is_authenticated());
    first
        .login("test@example.com", "password123")
        .expect("login");
    drop(first);

    let second = open_session(&config).expect("reopen");
    assert!(second.is_authenticated());
    assert_eq!(second.bearer_token().as_deref(), Some(MOCK_TOKEN));
    assert!(second.snapshot().user.is_none());
}

#[test]
fn logout_survives_restart() {
    let dir = tempfile::TempDir::new().expect("tmp dir");
    let config = file_config(&dir);

    let first = open_session(&config).expect("open");
    first
        .login("test@example.com", "password123")
        .expect("login");
    first.logout().expect("logout");
    first.logout().expect("logout again");

    let second = open_session(&config).expect("reopen");
    assert!(!second.is_authenticated());
}

#[test]
fn rejected_login_writes_no_file() {
    let dir = tempfile::TempDir::new().expect("tmp dir");
    let config = file_config(&dir);

    let session = open_session(&config).expect("open");
    let err = session.login("someone@example.com", "password123").unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(!dir.path().join("credentials").exists());
}

#[test]
fn configured_pair_replaces_default() {
    let dir = tempfile::TempDir::new().expect("tmp dir");
    let config = AuthConfig {
        expected_email: "reviewer@firm.example".into(),
        expected_password: "s3cret".into(),
        ..file_config(&dir)
    };

    let session = open_session(&config).expect("open");
    assert!(session.login("test@example.com", "password123").is_err());
    assert!(session.login("reviewer@firm.example", "s3cret").is_ok());
}

#[test]
fn env_token_comes_back_after_logout() {
    figment::Jail::expect_with(|jail| {
        jail.set_env(TOKEN_ENV_VAR, "env-token");
        let config = AuthConfig {
            use_keyring: true,
            keyring_service: "patrev-session-persistence-test".into(),
            credentials_path: jail
                .directory()
                .join("credentials")
                .to_string_lossy()
                .into_owned(),
            ..Default::default()
        };

        let first = open_session(&config).expect("open");
        first
            .login("test@example.com", "password123")
            .expect("login");
        first.logout().expect("logout");
        assert!(!first.is_authenticated());
        assert!(first.token_survives_logout());

        let second = open_session(&config).expect("reopen");
        assert!(second.is_authenticated());
        assert_eq!(second.bearer_token().as_deref(), Some("env-token"));
        Ok(())
    });
}

#[test]
fn file_backend_logout_is_final_even_with_env_token() {
    figment::Jail::expect_with(|jail| {
        jail.set_env(TOKEN_ENV_VAR, "env-token");
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let session = open_session(&file_config(&dir)).expect("open");
        assert!(!session.token_survives_logout());
        assert!(!session.is_authenticated());
        Ok(())
    });
}
