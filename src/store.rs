//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{TaskQuery, TaskStatus};
use crate::config::DEFAULT_PAGE_SIZE;
use crate::models::{Pagination, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Username returned by the last successful login
    pub username: Option<String>,
    /// Tasks on the current page
    pub tasks: Vec<Task>,
    /// Pagination descriptor from the last list call
    pub pagination: Pagination,
    /// Current page requested by the task center
    pub page: u32,
    /// Search box contents
    pub search: String,
    /// Completion filter (None = all)
    pub status: Option<TaskStatus>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }
}

/// List parameters from individual filter values; blank search is omitted
pub fn build_task_query(page: u32, search: &str, status: Option<TaskStatus>) -> TaskQuery {
    let search = search.trim();
    TaskQuery {
        page: Some(page.max(1)),
        limit: Some(DEFAULT_PAGE_SIZE),
        status,
        search: (!search.is_empty()).then(|| search.to_string()),
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Update a task in the store by ID
pub fn store_update_task(store: &AppStore, updated: Task) {
    if let Some(task) = store.tasks().write().iter_mut().find(|t| t.id == updated.id) {
        *task = updated;
    }
}

/// Flip the completion flag locally after a successful update
pub fn store_set_completed(store: &AppStore, task_id: &str, done: bool) {
    if let Some(task) = store.tasks().write().iter_mut().find(|t| t.id == task_id) {
        task.is_completed = done;
    }
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: &str) {
    store.tasks().write().retain(|t| t.id != task_id);
}

/// Forget everything tied to the signed-in user
pub fn store_reset(store: &AppStore) {
    *store.write() = AppState::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_query_from_fresh_state() {
        let state = AppState::new();
        assert_eq!(
            build_task_query(state.page, &state.search, state.status),
            TaskQuery { page: Some(1), limit: Some(10), status: None, search: None }
        );
    }

    #[test]
    fn test_task_query_with_filters() {
        let query = build_task_query(3, "  invoice ", Some(TaskStatus::Pending));
        assert_eq!(query.page, Some(3));
        assert_eq!(query.search.as_deref(), Some("invoice"));
        assert_eq!(query.status, Some(TaskStatus::Pending));

        assert_eq!(build_task_query(2, "   ", None).search, None);
    }

    #[test]
    fn test_page_zero_is_clamped() {
        let state = AppState::default();
        assert_eq!(build_task_query(state.page, &state.search, state.status).page, Some(1));
    }
}
