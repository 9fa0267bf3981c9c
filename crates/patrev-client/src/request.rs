//! Request description passed to a [`Transport`](crate::Transport).

use std::path::Path;

use patrev_core::enums::{DocumentType, mime_for_file_name};
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::Serialize;

use crate::error::ClientError;

/// Method, body, and extra headers for one call.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: RequestBody,
    /// Applied last; override the negotiated defaults.
    pub headers: HeaderMap,
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            ..Self::default()
        }
    }

    /// `POST` with a JSON-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] if `body` cannot be serialized.
    pub fn post_json<B: Serialize>(body: &B) -> Result<Self, ClientError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ClientError::InvalidRequest(format!("serialize body: {e}")))?;
        Ok(Self {
            method: Method::POST,
            body: RequestBody::Json(value),
            ..Self::default()
        })
    }

    #[must_use]
    pub fn post_multipart(body: MultipartBody) -> Self {
        Self {
            method: Method::POST,
            body: RequestBody::Multipart(body),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartBody),
}

impl RequestBody {
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

/// A `multipart/form-data` body, kept inspectable until it reaches the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    pub parts: Vec<FormPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file: UploadFile,
    },
}

impl MultipartBody {
    #[must_use]
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(FormPart::Text {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    #[must_use]
    pub fn file(mut self, name: &str, file: UploadFile) -> Self {
        self.parts.push(FormPart::File {
            name: name.to_string(),
            file,
        });
        self
    }

    /// Body for a document upload: the file plus its type tag.
    #[must_use]
    pub fn document(file: UploadFile, kind: DocumentType) -> Self {
        Self::default().file("file", file).text("type", kind.as_str())
    }

    /// Value of the first text part called `name`.
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub(crate) fn into_form(self) -> Result<reqwest::multipart::Form, ClientError> {
        let mut form = reqwest::multipart::Form::new();
        for part in self.parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File { name, file } => {
                    let part = reqwest::multipart::Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.mime)
                        .map_err(|e| ClientError::InvalidRequest(format!("mime type: {e}")))?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

/// File contents queued for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl UploadFile {
    /// Wrap in-memory contents; the MIME type is guessed from `file_name`.
    #[must_use]
    pub fn from_bytes(file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime: mime_for_file_name(file_name).to_string(),
            bytes,
        }
    }

    /// Read a file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the file cannot be read or has no name.
    pub async fn from_path(path: &Path) -> Result<Self, ClientError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ClientError::Io(format!("{} has no file name", path.display())))?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ClientError::Io(format!("read {}: {e}", path.display())))?;
        Ok(Self::from_bytes(file_name, bytes))
    }
}
