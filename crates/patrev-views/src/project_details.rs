//! One project: its documents and the assistant chat.

use std::sync::Arc;

use chrono::Utc;
use patrev_client::{ApiClient, ClientError, Transport, UploadFile};
use patrev_core::entities::{ChatMessage, Document, Project};
use patrev_core::enums::{DocumentType, Sender};

use crate::confirm::{Confirm, DELETE_PROJECT_PROMPT, REMOVE_DOCUMENT_PROMPT};
use crate::reconcile;
use crate::state::{LoadGuard, LoadTicket, PageState};

pub const PLACEHOLDER_REPLY: &str = "I received your message and am processing it...";

/// Stand-in assistant message appended after every sent chat message.
///
/// The API has no assistant endpoint yet; this message is fabricated
/// client-side and never persisted. Its id is the current time in
/// milliseconds plus one.
#[must_use]
pub fn placeholder_assistant_reply() -> ChatMessage {
    let now = Utc::now();
    ChatMessage {
        id: (now.timestamp_millis() + 1).to_string(),
        content: PLACEHOLDER_REPLY.to_string(),
        sender: Sender::Assistant,
        timestamp: now,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetails {
    pub project: Project,
    pub documents: Vec<Document>,
    pub messages: Vec<ChatMessage>,
}

impl ProjectDetails {
    /// Documents of one type, in upload order.
    pub fn documents_of(&self, kind: DocumentType) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(move |doc| doc.kind == kind)
    }
}

pub struct ProjectDetailsView<T> {
    client: Arc<ApiClient<T>>,
    project_id: String,
    state: PageState<ProjectDetails>,
    guard: LoadGuard,
    deleted: bool,
}

impl<T: Transport> ProjectDetailsView<T> {
    #[must_use]
    pub fn new(client: Arc<ApiClient<T>>, project_id: &str) -> Self {
        Self {
            client,
            project_id: project_id.to_string(),
            state: PageState::Loading,
            guard: LoadGuard::default(),
            deleted: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &PageState<ProjectDetails> {
        &self.state
    }

    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// The project was deleted from this page; callers should navigate away.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.fetch().await;
        self.finish_load(ticket, result);
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.state = PageState::Loading;
        self.guard.begin()
    }

    /// Project, documents, and chat history, fetched concurrently. The first
    /// failure wins; there is no partial result.
    ///
    /// # Errors
    ///
    /// Returns the first client error.
    pub async fn fetch(&self) -> Result<ProjectDetails, ClientError> {
        let id = self.project_id.as_str();
        let (project, documents, messages) = tokio::try_join!(
            self.client.get_project(id),
            self.client.list_documents(id),
            self.client.chat_history(id),
        )?;
        Ok(ProjectDetails {
            project,
            documents,
            messages,
        })
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<ProjectDetails, ClientError>,
    ) -> bool {
        if !self.guard.accepts(ticket) {
            tracing::debug!(project_id = %self.project_id, "dropping stale project details");
            return false;
        }
        if let Err(error) = &result {
            tracing::error!(project_id = %self.project_id, %error, "failed to load project details");
        }
        self.state = PageState::from_result(result);
        true
    }

    pub fn unmount(&mut self) {
        self.guard.unmount();
    }

    /// Upload a document and append it to the list. Files whose extension
    /// does not fit `kind` are rejected without a request.
    pub async fn upload_document(&mut self, file: UploadFile, kind: DocumentType) -> bool {
        if let Err(error) = kind.check_file_name(&file.file_name) {
            tracing::error!(operation = "upload_document", %error, "upload rejected");
            return false;
        }
        match self.client.upload_document(&self.project_id, file, kind).await {
            Ok(document) => {
                if let Some(details) = self.state.ready_mut() {
                    details.documents = reconcile::append(&details.documents, [document]);
                }
                true
            }
            Err(error) => {
                tracing::error!(operation = "upload_document", project_id = %self.project_id, %error, "mutation failed");
                false
            }
        }
    }

    pub async fn remove_document(&mut self, document_id: &str, confirm: &impl Confirm) -> bool {
        if !confirm.confirm(REMOVE_DOCUMENT_PROMPT) {
            return false;
        }
        if let Err(error) = self
            .client
            .remove_document(&self.project_id, document_id)
            .await
        {
            tracing::error!(operation = "remove_document", document_id, %error, "mutation failed");
            return false;
        }
        if let Some(details) = self.state.ready_mut() {
            details.documents = reconcile::remove_by_id(&details.documents, document_id);
        }
        true
    }

    /// Send a chat message. On success the echoed user message and then a
    /// [`placeholder_assistant_reply`] are appended. Blank input is ignored.
    pub async fn send_message(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        match self.client.send_chat_message(&self.project_id, text).await {
            Ok(echoed) => {
                if let Some(details) = self.state.ready_mut() {
                    details.messages = reconcile::append(
                        &details.messages,
                        [echoed, placeholder_assistant_reply()],
                    );
                }
                true
            }
            Err(error) => {
                tracing::error!(operation = "send_message", project_id = %self.project_id, %error, "mutation failed");
                false
            }
        }
    }

    pub async fn delete_project(&mut self, confirm: &impl Confirm) -> bool {
        if !confirm.confirm(DELETE_PROJECT_PROMPT) {
            return false;
        }
        match self.client.delete_project(&self.project_id).await {
            Ok(()) => {
                self.deleted = true;
                true
            }
            Err(error) => {
                tracing::error!(operation = "delete_project", project_id = %self.project_id, %error, "mutation failed");
                false
            }
        }
    }
}
