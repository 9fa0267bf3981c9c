//! The reqwest-backed request wrapper.
//!
//! Centralizes header negotiation (JSON vs multipart, bearer token), error
//! body parsing, and content-type sniffing so the typed client stays focused
//! on paths and payload shapes.

use patrev_auth::TokenSource;
use patrev_config::ApiConfig;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::error::ClientError;
use crate::request::{RequestBody, RequestOptions};
use crate::transport::Transport;

/// Default headers for `body`, then `overrides` on top. A name present in
/// `overrides` replaces the default entirely and keeps every caller value.
///
/// Multipart bodies get no `Content-Type` (reqwest adds one with the
/// boundary); everything else is declared JSON. The bearer header is added
/// only when a token is present.
///
/// # Errors
///
/// Returns [`ClientError::InvalidRequest`] if the token is not a valid header
/// value.
pub fn negotiate_headers(
    body: &RequestBody,
    token: Option<&str>,
    overrides: &HeaderMap,
) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();

    if !body.is_multipart() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ClientError::InvalidRequest(format!("bearer token: {e}")))?;
        headers.insert(AUTHORIZATION, value);
    }

    for name in overrides.keys() {
        headers.remove(name);
    }
    for (name, value) in overrides {
        headers.append(name.clone(), value.clone());
    }

    Ok(headers)
}

/// Human-readable message for a failed response.
///
/// Uses the body's `detail` field when the body is JSON and `detail` is
/// non-empty; otherwise `API error: <status text>`.
#[must_use]
pub fn error_message(body: Option<&[u8]>, status_text: &str) -> String {
    let detail = body
        .and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok())
        .and_then(|value| match value.get("detail") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Null | Value::Bool(false)) | None => None,
            Some(Value::String(_)) => None,
            Some(other) => Some(other.to_string()),
        });

    detail.unwrap_or_else(|| format!("API error: {status_text}"))
}

/// Turn a response into the wrapper's result.
///
/// # Errors
///
/// - [`ClientError::RequestFailed`] for a non-success status
/// - [`ClientError::Decode`] for a JSON content type with an invalid body
/// - [`ClientError::NetworkUnavailable`] if the body cannot be read
pub async fn read_response(resp: reqwest::Response) -> Result<Option<Value>, ClientError> {
    let status = resp.status();

    if !status.is_success() {
        let status_text = status.canonical_reason().unwrap_or("Unknown Status");
        let body = resp.bytes().await.ok();
        return Err(ClientError::RequestFailed {
            status: status.as_u16(),
            message: error_message(body.as_deref(), status_text),
        });
    }

    let is_json = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));
    if !is_json {
        return Ok(None);
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| ClientError::NetworkUnavailable(format!("read body: {e}")))?;
    if bytes.is_empty() {
        return Ok(None);
    }

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| ClientError::Decode(format!("response body: {e}")))
}

/// HTTP transport against the configured base URL.
///
/// Keeps a cookie store so cookie-based auth works alongside the bearer
/// header. No timeout, retry, or caching is applied.
pub struct HttpTransport<S> {
    http: reqwest::Client,
    base_url: String,
    tokens: S,
}

impl<S: TokenSource> HttpTransport<S> {
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] if the underlying
    /// `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig, tokens: S) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::InvalidRequest(format!("http client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
            tokens,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, path: &str, options: RequestOptions) -> Result<Option<Value>, ClientError> {
        let url = format!("{}{path}", self.base_url);
        let token = self.tokens.bearer_token();
        let headers = negotiate_headers(&options.body, token.as_deref(), &options.headers)?;

        let builder = self.http.request(options.method, &url).headers(headers);
        let builder = match options.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(
                serde_json::to_vec(&value)
                    .map_err(|e| ClientError::InvalidRequest(format!("serialize body: {e}")))?,
            ),
            RequestBody::Multipart(body) => builder.multipart(body.into_form()?),
        };

        let resp = builder.send().await.map_err(|e| {
            if e.is_builder() {
                ClientError::InvalidRequest(e.to_string())
            } else {
                ClientError::NetworkUnavailable(e.to_string())
            }
        })?;

        read_response(resp).await
    }
}

impl<S: TokenSource> Transport for HttpTransport<S> {
    async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ClientError> {
        let method = options.method.clone();
        tracing::debug!(%method, path, "api request");

        self.send(path, options).await.inspect_err(|error| {
            tracing::error!(%method, path, %error, "api request failed");
        })
    }
}
