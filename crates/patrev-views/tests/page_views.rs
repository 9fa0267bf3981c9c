//! View-model behavior over a scripted transport.

use std::cell::RefCell;
use std::sync::Arc;

use patrev_client::{ApiClient, ClientError, Method, RequestBody, ScriptedTransport, UploadFile};
use patrev_core::enums::{DocumentType, Sender};
use patrev_views::dashboard::{CONNECT_ERROR, EMPTY_MESSAGE};
use patrev_views::project_details::PLACEHOLDER_REPLY;
use patrev_views::{
    ConfirmWith, DashboardView, NewProjectView, PageState, ProjectDetailsView, ReviewResultsView,
    ReviewerView, ViewError,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn project(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Project {id}"),
        "lastUpdated": "2024-03-01T12:00:00Z",
        "status": "pending"
    })
}

fn document(id: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "name": format!("{id}.pdf"),
        "type": kind,
        "uploadedAt": "2024-03-01T12:00:00Z",
        "url": format!("https://files.example.com/{id}.pdf")
    })
}

fn message(id: &str, content: &str) -> Value {
    json!({
        "id": id,
        "content": content,
        "sender": "user",
        "timestamp": "2024-03-01T12:00:00Z"
    })
}

fn parameter(id: &str, enabled: bool) -> Value {
    json!({
        "id": id,
        "name": id,
        "description": format!("{id} check"),
        "defaultPrompt": format!("Run the {id} check"),
        "isEnabled": enabled
    })
}

fn server_error() -> ClientError {
    ClientError::RequestFailed {
        status: 500,
        message: "API error: Internal Server Error".into(),
    }
}

fn client(transport: ScriptedTransport) -> Arc<ApiClient<ScriptedTransport>> {
    Arc::new(ApiClient::new(transport))
}

fn details_script() -> ScriptedTransport {
    ScriptedTransport::new()
        .json(Method::GET, "/api/projects/p1", project("p1"))
        .json(
            Method::GET,
            "/api/projects/p1/documents",
            json!([document("d1", "specification"), document("d2", "drawing")]),
        )
        .json(Method::GET, "/api/projects/p1/chat", json!([message("m1", "hello")]))
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_empty_list_is_ready_not_error() {
    let mut view = DashboardView::new(client(
        ScriptedTransport::new().json(Method::GET, "/api/projects", json!([])),
    ));
    assert!(view.state().is_loading());

    view.load().await;

    assert_eq!(view.state(), &PageState::Ready(vec![]));
    assert!(view.is_empty());
    assert!(!EMPTY_MESSAGE.is_empty());
}

#[tokio::test]
async fn dashboard_loads_projects_with_offsetless_timestamps() {
    let mut view = DashboardView::new(client(ScriptedTransport::new().json(
        Method::GET,
        "/api/projects",
        json!([{
            "id": "p1",
            "name": "Widget",
            "lastUpdated": "2024-03-01T12:00:00.123456",
            "status": "pending"
        }]),
    )));

    view.load().await;

    let projects = view.state().ready().expect("ready");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, "p1");
}

#[tokio::test]
async fn dashboard_failure_shows_connect_message_and_retries() {
    let client = client(
        ScriptedTransport::new()
            .fail(Method::GET, "/api/projects", ClientError::NetworkUnavailable("refused".into()))
            .json(Method::GET, "/api/projects", json!([project("a")])),
    );
    let mut view = DashboardView::new(client);

    view.load().await;
    assert_eq!(view.state().error_message(), Some(CONNECT_ERROR));

    view.load().await;
    assert_eq!(view.state().ready().map(Vec::len), Some(1));
}

#[tokio::test]
async fn dashboard_delete_removes_exactly_that_project() {
    let client = client(
        ScriptedTransport::new()
            .json(
                Method::GET,
                "/api/projects",
                json!([project("a"), project("b"), project("c")]),
            )
            .empty(Method::DELETE, "/api/projects/b"),
    );
    let mut view = DashboardView::new(Arc::clone(&client));
    view.load().await;

    let prompts = RefCell::new(Vec::new());
    let confirm = ConfirmWith(|prompt: &str| {
        prompts.borrow_mut().push(prompt.to_string());
        true
    });
    assert!(view.delete_project("b", &confirm).await);

    let ids: Vec<_> = view.state().ready().unwrap().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    assert_eq!(prompts.borrow().len(), 1);
    assert!(prompts.borrow()[0].contains("cannot be undone"));
    assert_eq!(client.transport().calls_to(&Method::GET, "/api/projects").len(), 1);
}

#[tokio::test]
async fn declined_confirmation_sends_nothing() {
    let client = client(
        ScriptedTransport::new()
            .json(Method::GET, "/api/projects", json!([project("a")]))
            .empty(Method::DELETE, "/api/projects/a"),
    );
    let mut view = DashboardView::new(Arc::clone(&client));
    view.load().await;

    assert!(!view.delete_project("a", &false).await);
    assert!(client.transport().calls_to(&Method::DELETE, "/api/projects/a").is_empty());
    assert_eq!(view.state().ready().map(Vec::len), Some(1));
}

#[tokio::test]
async fn failed_delete_keeps_list() {
    let client = client(
        ScriptedTransport::new()
            .json(Method::GET, "/api/projects", json!([project("a")]))
            .fail(Method::DELETE, "/api/projects/a", server_error()),
    );
    let mut view = DashboardView::new(client);
    view.load().await;
    let before = view.state().clone();

    assert!(!view.delete_project("a", &true).await);
    assert_eq!(view.state(), &before);
}

#[tokio::test]
async fn stale_load_is_dropped() {
    let client = client(ScriptedTransport::new().json(Method::GET, "/api/projects", json!([project("a")])));
    let mut view = DashboardView::new(client);

    let old = view.begin_load();
    let old_result = view.fetch().await;
    let current = view.begin_load();

    assert!(!view.finish_load(old, old_result));
    assert!(view.state().is_loading());

    let result = view.fetch().await;
    assert!(view.finish_load(current, result));
    assert!(view.state().ready().is_some());
}

#[tokio::test]
async fn unmounted_view_ignores_results() {
    let client = client(ScriptedTransport::new().json(Method::GET, "/api/projects", json!([])));
    let mut view = DashboardView::new(client);

    let ticket = view.begin_load();
    let result = view.fetch().await;
    view.unmount();

    assert!(!view.finish_load(ticket, result));
    assert!(view.state().is_loading());
}

// ---------------------------------------------------------------------------
// New project
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_project_blank_name_never_reaches_server() {
    let client = client(ScriptedTransport::new());
    let mut view = NewProjectView::new(Arc::clone(&client));

    let err = view.create("   ").await.unwrap_err();
    assert!(matches!(err, ViewError::Invalid(_)));
    assert!(view.error().is_some());
    assert!(client.transport().calls().is_empty());
}

#[tokio::test]
async fn new_project_sends_trimmed_name() {
    let client = client(ScriptedTransport::new().json(Method::POST, "/api/projects", project("p7")));
    let mut view = NewProjectView::new(Arc::clone(&client));

    let created = view.create("  Widget  ").await.unwrap();
    assert_eq!(created.id, "p7");
    assert_eq!(view.error(), None);
    assert_eq!(
        client.transport().calls()[0].body,
        RequestBody::Json(json!({"name": "Widget"}))
    );
}

// ---------------------------------------------------------------------------
// Project details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn details_load_all_three() {
    let mut view = ProjectDetailsView::new(client(details_script()), "p1");
    view.load().await;

    let details = view.state().ready().unwrap();
    assert_eq!(details.project.id, "p1");
    assert_eq!(details.documents.len(), 2);
    assert_eq!(details.documents_of(DocumentType::Drawing).count(), 1);
    assert_eq!(details.messages.len(), 1);
}

#[tokio::test]
async fn details_chat_failure_is_error_not_partial() {
    let transport = ScriptedTransport::new()
        .json(Method::GET, "/api/projects/p1", project("p1"))
        .json(Method::GET, "/api/projects/p1/documents", json!([]))
        .fail(Method::GET, "/api/projects/p1/chat", server_error());
    let mut view = ProjectDetailsView::new(client(transport), "p1");
    view.load().await;

    assert_eq!(
        view.state(),
        &PageState::Error("API error: Internal Server Error".into())
    );
}

#[tokio::test]
async fn details_missing_project_is_not_found() {
    let transport = ScriptedTransport::new()
        .json(Method::GET, "/api/projects/gone/documents", json!([]))
        .json(Method::GET, "/api/projects/gone/chat", json!([]));
    let mut view = ProjectDetailsView::new(client(transport), "gone");
    view.load().await;

    assert_eq!(view.state(), &PageState::NotFound);
}

#[tokio::test]
async fn send_appends_echo_then_placeholder() {
    let transport = details_script().json(
        Method::POST,
        "/api/projects/p1/chat",
        message("m2", "Is claim 3 supported?"),
    );
    let mut view = ProjectDetailsView::new(client(transport), "p1");
    view.load().await;

    assert!(view.send_message("Is claim 3 supported?").await);

    let messages = &view.state().ready().unwrap().messages;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].id, "m2");
    assert_eq!(messages[1].sender, Sender::User);
    assert_eq!(messages[2].sender, Sender::Assistant);
    assert_eq!(messages[2].content, PLACEHOLDER_REPLY);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
#[tokio::test]
async fn blank_message_is_ignored(#[case] text: &str) {
    let client = client(details_script());
    let mut view = ProjectDetailsView::new(Arc::clone(&client), "p1");
    view.load().await;

    assert!(!view.send_message(text).await);
    assert!(client.transport().calls_to(&Method::POST, "/api/projects/p1/chat").is_empty());
    assert_eq!(view.state().ready().unwrap().messages.len(), 1);
}

#[tokio::test]
async fn failed_send_leaves_messages_unchanged() {
    let transport = details_script().fail(Method::POST, "/api/projects/p1/chat", server_error());
    let mut view = ProjectDetailsView::new(client(transport), "p1");
    view.load().await;

    assert!(!view.send_message("hello again").await);
    assert_eq!(view.state().ready().unwrap().messages.len(), 1);
}

#[tokio::test]
async fn upload_appends_document() {
    let transport = details_script().json(
        Method::POST,
        "/api/projects/p1/documents",
        document("d3", "disclosure"),
    );
    let mut view = ProjectDetailsView::new(client(transport), "p1");
    view.load().await;

    let file = UploadFile::from_bytes("invention.pptx", vec![1, 2, 3]);
    assert!(view.upload_document(file, DocumentType::Disclosure).await);

    let docs = &view.state().ready().unwrap().documents;
    assert_eq!(docs.last().map(|d| d.id.as_str()), Some("d3"));
}

#[tokio::test]
async fn upload_with_wrong_extension_sends_nothing() {
    let client = client(details_script());
    let mut view = ProjectDetailsView::new(Arc::clone(&client), "p1");
    view.load().await;

    let file = UploadFile::from_bytes("figure.png", vec![0]);
    assert!(!view.upload_document(file, DocumentType::Specification).await);
    assert!(client.transport().calls_to(&Method::POST, "/api/projects/p1/documents").is_empty());
}

#[tokio::test]
async fn remove_document_after_confirmation() {
    let transport = details_script().empty(Method::DELETE, "/api/projects/p1/documents/d1");
    let mut view = ProjectDetailsView::new(client(transport), "p1");
    view.load().await;

    assert!(view.remove_document("d1", &true).await);
    let ids: Vec<_> = view
        .state()
        .ready()
        .unwrap()
        .documents
        .iter()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(ids, vec!["d2"]);
}

#[tokio::test]
async fn delete_from_details_marks_deleted() {
    let transport = details_script().empty(Method::DELETE, "/api/projects/p1");
    let mut view = ProjectDetailsView::new(client(transport), "p1");
    view.load().await;

    assert!(!view.delete_project(&false).await);
    assert!(!view.is_deleted());
    assert!(view.delete_project(&true).await);
    assert!(view.is_deleted());
}

// ---------------------------------------------------------------------------
// Reviewer
// ---------------------------------------------------------------------------

fn reviewer_script() -> ScriptedTransport {
    ScriptedTransport::new()
        .json(Method::GET, "/api/projects/p1", project("p1"))
        .json(
            Method::GET,
            "/api/review/parameters",
            json!([parameter("antecedent", false), parameter("support", false)]),
        )
}

#[tokio::test]
async fn review_cannot_start_with_nothing_enabled() {
    let client = client(reviewer_script().empty(Method::POST, "/api/projects/p1/review"));
    let mut view = ReviewerView::new(Arc::clone(&client), "p1");
    view.load().await;

    assert!(!view.can_start_review());
    assert!(!view.start_review().await);
    assert!(client.transport().calls_to(&Method::POST, "/api/projects/p1/review").is_empty());
}

#[tokio::test]
async fn start_review_submits_enabled_parameters_verbatim() {
    let client = client(reviewer_script().empty(Method::POST, "/api/projects/p1/review"));
    let mut view = ReviewerView::new(Arc::clone(&client), "p1");
    view.load().await;

    view.toggle_parameter("support");
    view.set_custom_prompt("support", "Check every claim element");
    view.set_guidelines("US practice");
    assert!(view.can_start_review());
    assert!(view.start_review().await);
    assert!(view.is_started());

    let calls = client.transport().calls_to(&Method::POST, "/api/projects/p1/review");
    assert_eq!(
        calls[0].body,
        RequestBody::Json(json!({
            "parameters": [{
                "id": "support",
                "name": "support",
                "description": "support check",
                "defaultPrompt": "Run the support check",
                "isEnabled": true,
                "customPrompt": "Check every claim element"
            }],
            "guidelines": "US practice"
        }))
    );
}

#[tokio::test]
async fn failed_start_is_not_started() {
    let transport = reviewer_script().fail(Method::POST, "/api/projects/p1/review", server_error());
    let mut view = ReviewerView::new(client(transport), "p1");
    view.load().await;
    view.toggle_parameter("antecedent");

    assert!(!view.start_review().await);
    assert!(!view.is_started());
}

// ---------------------------------------------------------------------------
// Review results
// ---------------------------------------------------------------------------

#[tokio::test]
async fn results_report_category_shares() {
    let transport = ScriptedTransport::new()
        .json(Method::GET, "/api/projects/p1", project("p1"))
        .json(
            Method::GET,
            "/api/projects/p1/review/results",
            json!({
                "id": "r1",
                "projectId": "p1",
                "completedAt": "2024-03-02T08:00:00Z",
                "status": "completed",
                "updatedSpecification": {"url": "https://x/spec.docx", "name": "spec.docx"},
                "changeLog": {"url": "https://x/log.pdf", "name": "log.pdf"},
                "summary": {
                    "totalChanges": 4,
                    "categories": [
                        {"name": "Antecedent basis", "changes": 3},
                        {"name": "Typos", "changes": 1}
                    ]
                }
            }),
        );
    let mut view = ReviewResultsView::new(client(transport), "p1");
    assert!(view.category_shares().is_empty());

    view.load().await;
    assert_eq!(
        view.category_shares(),
        vec![("Antecedent basis", 75.0), ("Typos", 25.0)]
    );
}

#[tokio::test]
async fn results_not_ready_is_not_found() {
    let transport = ScriptedTransport::new().json(Method::GET, "/api/projects/p1", project("p1"));
    let mut view = ReviewResultsView::new(client(transport), "p1");
    view.load().await;

    assert_eq!(view.state(), &PageState::NotFound);
}
