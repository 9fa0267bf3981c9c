//! # patrev-client
//!
//! Authenticated request layer and typed client for the patent review API.
//!
//! - [`Transport`]: the `request(path, options)` capability
//! - [`HttpTransport`]: reqwest implementation (bearer token + cookie store,
//!   JSON/multipart header negotiation, `detail` error extraction)
//! - [`ScriptedTransport`]: in-process fake for tests
//! - [`ApiClient`]: one method per API endpoint, grouped by resource:
//!   - projects (`/api/projects`)
//!   - documents (`/api/projects/{id}/documents`)
//!   - chat (`/api/projects/{id}/chat`)
//!   - review (`/api/review/parameters`, `/api/projects/{id}/review`)

pub mod chat;
pub mod documents;
pub mod projects;
pub mod review;

mod error;
mod http;
mod request;
mod transport;

pub use error::ClientError;
pub use http::{HttpTransport, error_message, negotiate_headers, read_response};
pub use request::{FormPart, MultipartBody, RequestBody, RequestOptions, UploadFile};
pub use reqwest::Method;
pub use transport::{RecordedCall, ScriptedTransport, Transport};

use serde::de::DeserializeOwned;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Typed operations over a [`Transport`].
///
/// Every operation is a single independent request; nothing is sequenced,
/// batched, or cached.
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<R, ClientError> {
        let body = self.transport.request(path, options).await?;
        decode(path, body)
    }

    async fn call(&self, path: &str, options: RequestOptions) -> Result<(), ClientError> {
        self.transport.request(path, options).await.map(|_| ())
    }
}

fn decode<R: DeserializeOwned>(path: &str, body: Option<Value>) -> Result<R, ClientError> {
    let value = body.ok_or_else(|| ClientError::Decode(format!("{path}: empty response body")))?;
    serde_json::from_value(value).map_err(|e| ClientError::Decode(format!("{path}: {e}")))
}

fn project_path(project_id: &str) -> String {
    format!("/api/projects/{}", urlencoding::encode(project_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_path_encodes_id() {
        assert_eq!(project_path("abc"), "/api/projects/abc");
        assert_eq!(project_path("a/b c"), "/api/projects/a%2Fb%20c");
    }

    #[test]
    fn decode_rejects_empty_body() {
        let err = decode::<Vec<String>>("/api/projects", None).unwrap_err();
        assert!(matches!(err, ClientError::Decode(msg) if msg.contains("empty response body")));
    }

    #[test]
    fn decode_reports_shape_mismatch() {
        let err = decode::<Vec<String>>("/api/projects", Some(serde_json::json!({"a": 1})))
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(msg) if msg.starts_with("/api/projects")));
    }
}
