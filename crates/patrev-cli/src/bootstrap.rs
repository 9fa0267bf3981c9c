use anyhow::Context;
use patrev_config::PatrevConfig;

/// Load `.env` (if present) and the layered configuration.
pub fn load_config() -> anyhow::Result<PatrevConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded dotenv file"),
        Err(error) if error.not_found() => {}
        Err(error) => {
            return Err(anyhow::Error::new(error).context("failed to load .env file"));
        }
    }

    PatrevConfig::load().context("failed to load patrev configuration")
}
