//! Browser History Glue
//!
//! Keeps the current `Navigation` in a signal and mirrors it into the
//! address bar and document title.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::{Navigation, Router, HOME_PATH};

const APP_TITLE: &str = "Task Center";

#[derive(Clone, Copy)]
pub struct Navigator {
    current: RwSignal<Option<Navigation>>,
    router: StoredValue<Router>,
}

impl Navigator {
    pub fn current_path(&self) -> Option<String> {
        self.current.with(|nav| nav.as_ref().map(|n| n.path().to_string()))
    }

    pub fn signal(&self) -> RwSignal<Option<Navigation>> {
        self.current
    }

    /// Navigate and push a history entry
    pub fn navigate(&self, to: &str) {
        self.go(to, HistoryMode::Push);
    }

    /// Navigate without adding a history entry
    pub fn replace(&self, to: &str) {
        self.go(to, HistoryMode::Replace);
    }

    fn go(&self, to: &str, mode: HistoryMode) {
        let outcome = self.router.with_value(|router| router.navigate(to));
        let nav = match outcome {
            Ok(nav) => nav,
            Err(e) => {
                log::error!("[Router] navigation to {} aborted: {}", to, e);
                return;
            }
        };
        if nav.was_redirected() {
            log::debug!("[Router] {} -> {} (via {:?})", to, nav.path(), nav.redirects);
        } else {
            log::debug!("[Router] {} ({})", nav.path(), nav.route.name().unwrap_or("unnamed"));
        }

        write_history(nav.path(), mode);
        set_document_title(nav.route.title());
        self.current.set(Some(nav));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
    /// Browser already moved (back/forward); only fix up redirects
    Pop,
}

fn write_history(path: &str, mode: HistoryMode) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let at_path = location_path().as_deref() == Some(path);
    let result = match mode {
        HistoryMode::Push if !at_path => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
        HistoryMode::Replace | HistoryMode::Pop if !at_path => {
            history.replace_state_with_url(&JsValue::NULL, "", Some(path))
        }
        _ => Ok(()),
    };
    if let Err(e) = result {
        log::warn!("[Router] history update failed: {:?}", e);
    }
}

fn location_path() -> Option<String> {
    let location = web_sys::window()?.location();
    let path = location.pathname().ok()?;
    let search = location.search().unwrap_or_default();
    Some(format!("{}{}", path, search))
}

fn set_document_title(title: Option<&str>) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        match title {
            Some(title) => document.set_title(&format!("{} - {}", title, APP_TITLE)),
            None => document.set_title(APP_TITLE),
        }
    }
}

/// Install the navigator at the app root and resolve the initial location
pub fn provide_navigator(router: Router) -> Navigator {
    let navigator = Navigator {
        current: RwSignal::new(None),
        router: StoredValue::new(router),
    };
    provide_context(navigator);

    let initial = location_path().unwrap_or_else(|| HOME_PATH.to_string());
    navigator.replace(&initial);

    let _ = window_event_listener(ev::popstate, move |_| {
        let path = location_path().unwrap_or_else(|| HOME_PATH.to_string());
        navigator.go(&path, HistoryMode::Pop);
    });

    navigator
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

/// Anchor that navigates through the router instead of reloading the page.
/// Gets an `active` class while its target is the current path.
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let navigator = use_navigator();
    let href = to.clone();
    let target = to.clone();
    let class_name = move || {
        if navigator.current_path().as_deref() == Some(target.as_str()) {
            format!("{} active", class).trim().to_string()
        } else {
            class.clone()
        }
    };
    view! {
        <a
            href=href
            class=class_name
            on:click=move |ev| {
                ev.prevent_default();
                navigator.navigate(&to);
            }
        >
            {children()}
        </a>
    }
}
