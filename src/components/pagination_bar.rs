//! Pagination Bar Component
//!
//! Prev/next controls driven by the server's pagination descriptor.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_app_store();
    let pagination = move || store.pagination().get();

    let go_to = move |page: u32| {
        *store.page().write() = page.max(1);
    };

    view! {
        <div class="pagination">
            <button
                disabled=move || !pagination().has_prev()
                on:click=move |_| go_to(pagination().page.saturating_sub(1))
            >
                "‹ Prev"
            </button>
            <span class="page-info">
                {move || {
                    let p = pagination();
                    format!("Page {} of {} · {} tasks", p.page, p.total_pages.max(1), p.total)
                }}
            </span>
            <button
                disabled=move || !pagination().has_next()
                on:click=move |_| go_to(pagination().page + 1)
            >
                "Next ›"
            </button>
        </div>
    }
}
