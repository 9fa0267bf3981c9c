use patrev_client::ClientError;
use patrev_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error(transparent)]
    Request(#[from] ClientError),
}
