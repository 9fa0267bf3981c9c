//! `/api/projects/{id}/chat` endpoints.

use patrev_core::entities::{ChatMessage, NewChatMessage};

use crate::{ApiClient, ClientError, RequestOptions, Transport, project_path};

fn chat_path(project_id: &str) -> String {
    format!("{}/chat", project_path(project_id))
}

impl<T: Transport> ApiClient<T> {
    /// `GET /api/projects/{id}/chat`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not a
    /// message list.
    pub async fn chat_history(&self, project_id: &str) -> Result<Vec<ChatMessage>, ClientError> {
        self.fetch(&chat_path(project_id), RequestOptions::get())
            .await
    }

    /// `POST /api/projects/{id}/chat`. Returns the stored user message.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not a
    /// message.
    pub async fn send_chat_message(
        &self,
        project_id: &str,
        content: &str,
    ) -> Result<ChatMessage, ClientError> {
        let body = NewChatMessage {
            content: content.to_string(),
        };
        self.fetch(&chat_path(project_id), RequestOptions::post_json(&body)?)
            .await
    }
}
