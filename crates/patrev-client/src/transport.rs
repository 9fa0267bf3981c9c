//! The request capability the typed client is written against.

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use reqwest::Method;
use serde_json::Value;

use crate::error::ClientError;
use crate::request::{RequestBody, RequestOptions};

/// Issue one request against the review API.
///
/// Returns the parsed JSON body, or `None` when the response carried no JSON.
pub trait Transport: Send + Sync {
    fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> impl Future<Output = Result<Option<Value>, ClientError>> + Send;
}

/// A request as seen by [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
}

type Reply = Result<Option<Value>, ClientError>;

/// In-process transport that answers from a script and records every call.
///
/// Replies for a route are consumed in order; the last one repeats. Routes
/// with no script answer `404 Not Found`.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for `method path`.
    #[must_use]
    pub fn on(self, method: Method, path: &str, reply: Reply) -> Self {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    /// Queue a JSON reply.
    #[must_use]
    pub fn json(self, method: Method, path: &str, body: Value) -> Self {
        self.on(method, path, Ok(Some(body)))
    }

    /// Queue an empty (no content) reply.
    #[must_use]
    pub fn empty(self, method: Method, path: &str) -> Self {
        self.on(method, path, Ok(None))
    }

    /// Queue an error reply.
    #[must_use]
    pub fn fail(self, method: Method, path: &str, error: ClientError) -> Self {
        self.on(method, path, Err(error))
    }

    /// Every call received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Calls received for `method path`.
    #[must_use]
    pub fn calls_to(&self, method: &Method, path: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| &call.method == method && call.path == path)
            .collect()
    }

    fn reply(&self, method: &Method, path: &str) -> Reply {
        let mut routes = self.routes.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(queue) = routes.get_mut(&(method.clone(), path.to_string())) else {
            return Err(ClientError::RequestFailed {
                status: 404,
                message: "API error: Not Found".into(),
            });
        };
        if queue.len() > 1 {
            queue.pop_front().unwrap_or(Ok(None))
        } else {
            queue.front().cloned().unwrap_or(Ok(None))
        }
    }
}

impl Transport for ScriptedTransport {
    async fn request(&self, path: &str, options: RequestOptions) -> Reply {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                method: options.method.clone(),
                path: path.to_string(),
                body: options.body,
            });
        self.reply(&options.method, path)
    }
}
