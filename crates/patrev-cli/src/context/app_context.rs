use std::sync::Arc;

use patrev_auth::SharedSession;
use patrev_client::{ApiClient, HttpTransport};
use patrev_config::PatrevConfig;

/// The API client every command talks through.
pub type Client = ApiClient<HttpTransport<SharedSession>>;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PatrevConfig,
    pub client: Arc<Client>,
}

impl AppContext {
    /// Build the HTTP client against the configured base URL, reading the
    /// bearer token from `session`.
    pub fn init(config: PatrevConfig, session: SharedSession) -> anyhow::Result<Self> {
        let transport = HttpTransport::new(&config.api, session)?;
        tracing::debug!(base_url = transport.base_url(), "api client ready");

        Ok(Self {
            config,
            client: Arc::new(ApiClient::new(transport)),
        })
    }
}
