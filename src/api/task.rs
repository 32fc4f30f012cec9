//! Task Endpoints
//!
//! CRUD over `/api/tasks` with server-side pagination and search.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::Value;

use crate::http::{ApiError, HttpClient, RequestOptions};
use crate::models::{Ack, TaskPage};

const SEGMENT_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// ========================
// Argument Structs
// ========================

/// Completion filter understood by the list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    Pending,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "completed",
            TaskStatus::Pending => "pending",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "completed" => Some(TaskStatus::Completed),
            "pending" => Some(TaskStatus::Pending),
            _ => None,
        }
    }
}

/// List parameters; `None` leaves the choice to the server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<TaskStatus>,
    pub search: Option<String>,
}

impl TaskQuery {
    fn to_options(&self) -> RequestOptions {
        let mut options = RequestOptions::default();
        if let Some(page) = self.page {
            options = options.query("page", page);
        }
        if let Some(limit) = self.limit {
            options = options.query("limit", limit);
        }
        if let Some(status) = self.status {
            options = options.query("status", status.as_str());
        }
        if let Some(search) = &self.search {
            options = options.query("search", search);
        }
        options
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub is_completed: bool,
}

/// Any subset of mutable task fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl TaskPatch {
    pub fn completed(done: bool) -> Self {
        Self {
            is_completed: Some(done),
            ..Default::default()
        }
    }

    pub fn title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }
}

fn task_path(id: &str) -> String {
    format!("/api/tasks/{}", utf8_percent_encode(id, SEGMENT_ENCODE))
}

// ========================
// Commands
// ========================

pub async fn get_tasks(client: &HttpClient, query: &TaskQuery) -> Result<TaskPage, ApiError> {
    client.get("/api/tasks", query.to_options()).await
}

pub async fn create_task(client: &HttpClient, task: &NewTask) -> Result<Ack, ApiError> {
    let body: Value = client.post("/api/tasks", task, RequestOptions::default()).await?;
    Ok(Ack::from_body(body))
}

pub async fn update_task(client: &HttpClient, id: &str, patch: &TaskPatch) -> Result<Ack, ApiError> {
    let body: Value = client.put(&task_path(id), patch, RequestOptions::default()).await?;
    Ok(Ack::from_body(body))
}

pub async fn delete_task(client: &HttpClient, id: &str) -> Result<Ack, ApiError> {
    let body: Value = client.delete(&task_path(id), RequestOptions::default()).await?;
    Ok(Ack::from_body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::http::mock::MockTransport;
    use crate::http::Method;
    use crate::session::{MemoryTokens, Session};
    use futures::executor::block_on;

    fn client(transport: &MockTransport) -> HttpClient {
        HttpClient::new(
            ApiConfig::default(),
            Session::new(MemoryTokens::with_token("tok")),
            transport.clone(),
        )
    }

    #[test]
    fn test_get_tasks_default_sends_no_params() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"success":true,"data":[],"pagination":{"total":0,"page":1,"limit":10,"totalPages":0}}"#);

        let page = block_on(get_tasks(&client(&transport), &TaskQuery::default())).unwrap();
        assert!(page.data.is_empty());

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url, "/api/tasks");
        assert_eq!(sent.header("Authorization"), Some("Bearer tok"));
    }

    #[test]
    fn test_get_tasks_with_params() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"success":true,"data":[{"id":"1","title":"report","isCompleted":true}],"pagination":{"total":1,"page":3,"limit":5,"totalPages":3}}"#);

        let query = TaskQuery {
            page: Some(3),
            limit: Some(5),
            status: Some(TaskStatus::Completed),
            search: Some("q1 report".to_string()),
        };
        let page = block_on(get_tasks(&client(&transport), &query)).unwrap();
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.data[0].title, "report");

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.url, "/api/tasks?page=3&limit=5&status=completed&search=q1%20report");
    }

    #[test]
    fn test_create_task_body() {
        let transport = MockTransport::new();
        transport.respond(201, r#"{"success":true,"data":{"id":"7","title":"new","isCompleted":false}}"#);

        let ack = block_on(create_task(
            &client(&transport),
            &NewTask { title: "new".into(), is_completed: false },
        ))
        .unwrap();
        assert_eq!(ack.task().map(|t| t.id), Some("7".into()));

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.json, Some(serde_json::json!({"title":"new","isCompleted":false})));
    }

    #[test]
    fn test_update_task_sends_only_given_fields() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"success":true}"#);

        block_on(update_task(&client(&transport), "abc", &TaskPatch::completed(true))).unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "/api/tasks/abc");
        assert_eq!(sent.json, Some(serde_json::json!({"isCompleted":true})));
    }

    #[test]
    fn test_delete_task_not_found() {
        let transport = MockTransport::new();
        transport.respond(404, "");

        let err = block_on(delete_task(&client(&transport), "gone")).unwrap_err();
        assert_eq!(err.to_string(), "requested resource not found");

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.url, "/api/tasks/gone");
    }

    #[test]
    fn test_delete_task_accepts_empty_reply() {
        let transport = MockTransport::new();
        transport.respond(204, "");

        let ack = block_on(delete_task(&client(&transport), "abc")).unwrap();
        assert_eq!(ack, Ack::default());
    }

    #[test]
    fn test_update_task_accepts_bare_string_reply() {
        let transport = MockTransport::new();
        transport.respond(200, r#""ok""#);
        transport.respond(200, "[1,2]");

        let ack = block_on(update_task(&client(&transport), "abc", &TaskPatch::title("x"))).unwrap();
        assert_eq!(ack.message.as_deref(), Some("ok"));

        let ack = block_on(update_task(&client(&transport), "abc", &TaskPatch::title("x"))).unwrap();
        assert_eq!(ack.data, Some(serde_json::json!([1, 2])));
        assert_eq!(ack.task(), None);
    }

    #[test]
    fn test_task_id_is_path_encoded() {
        assert_eq!(task_path("a/b c"), "/api/tasks/a%2Fb%20c");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(TaskStatus::parse("pending"), Some(TaskStatus::Pending));
        assert_eq!(TaskStatus::parse("all"), None);
    }
}
