//! Application Context
//!
//! Shared services and signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::http::HttpClient;
use crate::session::Session;

/// HTTP client and session handed out to every view
#[derive(Clone)]
pub struct Services {
    pub client: HttpClient,
    pub session: Session,
}

pub fn use_services() -> Services {
    expect_context::<Services>()
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the task list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the task list - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of the task list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
