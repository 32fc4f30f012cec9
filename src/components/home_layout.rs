//! Home Layout Component
//!
//! Sidebar built from the route meta of `/home`'s children, a header with
//! logout, and the outlet for the active child view.

use leptos::prelude::*;

use crate::app::Outlet;
use crate::context::use_services;
use crate::router::{home_child_path, home_menu, use_navigator, Link, LOGIN_PATH};
use crate::store::{store_reset, use_app_store, AppStateStoreFields};

#[component]
pub fn HomeLayout() -> impl IntoView {
    let services = use_services();
    let navigator = use_navigator();
    let store = use_app_store();

    let logout = move |_| {
        services.session.sign_out();
        store_reset(&store);
        navigator.navigate(LOGIN_PATH);
    };

    let menu = home_menu()
        .iter()
        .filter_map(|record| {
            let title = record.meta.title?;
            let icon = record.meta.icon.unwrap_or_default();
            Some(view! {
                <li>
                    <Link to=home_child_path(record.path) class="menu-item">
                        <span class=format!("menu-icon icon-{}", icon)></span>
                        <span class="menu-title">{title}</span>
                    </Link>
                </li>
            })
        })
        .collect_view();

    view! {
        <div class="home-layout">
            <aside class="sidebar">
                <div class="brand">"Task Center"</div>
                <ul class="menu">{menu}</ul>
            </aside>
            <div class="home-main">
                <header class="home-header">
                    <span class="greeting">
                        {move || match store.username().get() {
                            Some(name) => format!("Hello, {}", name),
                            None => "Welcome back".to_string(),
                        }}
                    </span>
                    <button class="logout-btn" on:click=logout>"Log out"</button>
                </header>
                <main class="home-content">
                    <Outlet depth=1 />
                </main>
            </div>
        </div>
    }
}
