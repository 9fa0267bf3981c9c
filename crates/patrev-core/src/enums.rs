//! Status and kind enums for review API entities.
//!
//! All enums use `snake_case` serialization to match the API payloads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a project on the review server.
///
/// ```text
/// pending → in_review → completed
/// ```
///
/// Transitions happen server-side; the client only displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Pending,
    InReview,
    Completed,
}

impl ProjectStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InReview => "in_review",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DocumentType
// ---------------------------------------------------------------------------

/// The role an uploaded file plays in a patent review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// The patent specification under review.
    Specification,
    /// The invention disclosure the specification is checked against.
    Disclosure,
    /// Patent drawings.
    Drawing,
}

impl DocumentType {
    pub const ALL: [Self; 3] = [Self::Specification, Self::Disclosure, Self::Drawing];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Specification => "specification",
            Self::Disclosure => "disclosure",
            Self::Drawing => "drawing",
        }
    }

    /// Lowercase file extensions (without the dot) the upload form accepts.
    #[must_use]
    pub const fn accepted_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Specification => &["doc", "docx"],
            Self::Disclosure => &["doc", "docx", "pdf", "ppt", "pptx"],
            Self::Drawing => &["pdf", "jpg", "jpeg", "png"],
        }
    }

    /// Check that `file_name` carries an extension accepted for this type.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedFile`] when the extension is missing or
    /// not in [`accepted_extensions`](Self::accepted_extensions).
    pub fn check_file_name(self, file_name: &str) -> Result<(), CoreError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension {
            Some(ext) if self.accepted_extensions().contains(&ext.as_str()) => Ok(()),
            _ => Err(CoreError::UnsupportedFile {
                kind: self.as_str(),
                file_name: file_name.to_string(),
                accepted: self
                    .accepted_extensions()
                    .iter()
                    .map(|ext| format!(".{ext}"))
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// MIME type for an upload, guessed from the file extension.
///
/// Covers every extension any [`DocumentType`] accepts; anything else is sent
/// as `application/octet-stream`.
#[must_use]
pub fn mime_for_file_name(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("pdf") => "application/pdf",
        Some("ppt") => "application/vnd.ms-powerpoint",
        Some("pptx") => {
            "application/vnd.openxmlformats-officedocument.presentationml.presentation"
        }
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

// ---------------------------------------------------------------------------
// Sender
// ---------------------------------------------------------------------------

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReviewStatus
// ---------------------------------------------------------------------------

/// Outcome of a finished review run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Completed,
    Failed,
}

impl ReviewStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn project_status_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&ProjectStatus::InReview).unwrap();
        assert_eq!(json, "\"in_review\"");
        let parsed: ProjectStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, ProjectStatus::Completed);
    }

    #[test]
    fn display_matches_serde_names() {
        for kind in DocumentType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[rstest]
    #[case(DocumentType::Specification, "claims.docx")]
    #[case(DocumentType::Specification, "CLAIMS.DOC")]
    #[case(DocumentType::Disclosure, "invention.pptx")]
    #[case(DocumentType::Drawing, "fig1.jpeg")]
    #[case(DocumentType::Drawing, "sheet.pdf")]
    fn accepts_allowed_extensions(#[case] kind: DocumentType, #[case] file_name: &str) {
        assert!(kind.check_file_name(file_name).is_ok());
    }

    #[rstest]
    #[case(DocumentType::Specification, "claims.pdf")]
    #[case(DocumentType::Drawing, "fig1.docx")]
    #[case(DocumentType::Disclosure, "no_extension")]
    fn rejects_other_extensions(#[case] kind: DocumentType, #[case] file_name: &str) {
        let err = kind.check_file_name(file_name).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedFile { .. }));
        assert!(err.to_string().contains(file_name));
    }

    #[test]
    fn mime_guess_covers_accepted_extensions() {
        for kind in DocumentType::ALL {
            for ext in kind.accepted_extensions() {
                let mime = mime_for_file_name(&format!("file.{ext}"));
                assert_ne!(mime, "application/octet-stream", "no MIME type for .{ext}");
            }
        }
        assert_eq!(mime_for_file_name("notes.txt"), "application/octet-stream");
    }
}
