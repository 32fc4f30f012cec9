//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Pagination descriptor returned by the list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u32,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            limit: crate::config::DEFAULT_PAGE_SIZE,
            total_pages: 0,
        }
    }
}

impl Pagination {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `GET /api/tasks` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Task>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Acknowledgement for mutating endpoints. The server decides the shape, so
/// anything it sends on success is accepted; see [`Ack::from_body`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl Ack {
    /// Interpret a success payload. Empty bodies (decoded as `null`) carry
    /// nothing, a bare string becomes the message, and any other shape that
    /// does not fit the usual envelope is kept whole in `data`.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Null => Ack::default(),
            Value::String(message) => Ack {
                message: Some(message),
                ..Ack::default()
            },
            Value::Object(_) => match serde_json::from_value(body.clone()) {
                Ok(ack) => ack,
                Err(_) => Ack {
                    data: Some(body),
                    ..Ack::default()
                },
            },
            other => Ack {
                data: Some(other),
                ..Ack::default()
            },
        }
    }

    /// Task echoed back by create/update, if the server included one
    pub fn task(&self) -> Option<Task> {
        self.data
            .clone()
            .and_then(|v| serde_json::from_value(v).ok())
    }
}

/// `POST /api/login` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// `POST /api/register` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_accepts_mongo_id() {
        let task: Task = serde_json::from_str(r#"{"_id":"a1","title":"Write docs","isCompleted":true}"#).unwrap();
        assert_eq!(task.id, "a1");
        assert!(task.is_completed);
        assert_eq!(task.created_at, None);
    }

    #[test]
    fn test_task_page_decodes() {
        let raw = r#"{
            "success": true,
            "data": [{"id":"1","title":"a","isCompleted":false}],
            "pagination": {"total": 11, "page": 2, "limit": 10, "totalPages": 2}
        }"#;
        let page: TaskPage = serde_json::from_str(raw).unwrap();
        assert!(page.success);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.pagination.total_pages, 2);
        assert!(page.pagination.has_prev());
        assert!(!page.pagination.has_next());
    }

    #[test]
    fn test_ack_task() {
        let ack: Ack = serde_json::from_str(r#"{"success":true,"data":{"id":"9","title":"t","isCompleted":false}}"#).unwrap();
        assert_eq!(ack.task().map(|t| t.id), Some("9".to_string()));

        let ack: Ack = serde_json::from_str(r#"{"message":"deleted"}"#).unwrap();
        assert_eq!(ack.task(), None);
        assert_eq!(ack.message.as_deref(), Some("deleted"));
    }

    #[test]
    fn test_ack_from_any_success_body() {
        assert_eq!(Ack::from_body(Value::Null), Ack::default());
        assert_eq!(Ack::from_body(serde_json::json!("ok")).message.as_deref(), Some("ok"));
        assert_eq!(Ack::from_body(serde_json::json!(true)).data, Some(serde_json::json!(true)));

        // Envelope fields with unexpected types are kept rather than rejected
        let odd = serde_json::json!({"success": "yes", "message": 3});
        assert_eq!(Ack::from_body(odd.clone()).data, Some(odd));

        let ack = Ack::from_body(serde_json::json!({"success": true, "message": "saved"}));
        assert_eq!(ack.success, Some(true));
        assert_eq!(ack.message.as_deref(), Some("saved"));
    }
}
