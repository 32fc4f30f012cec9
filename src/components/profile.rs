//! Profile Component

use leptos::prelude::*;

use crate::context::use_services;
use crate::router::{use_navigator, LOGIN_PATH};
use crate::store::{store_reset, use_app_store, AppStateStoreFields};

#[component]
pub fn Profile() -> impl IntoView {
    let services = use_services();
    let navigator = use_navigator();
    let store = use_app_store();
    let signed_in = services.session.is_authenticated();
    let session = services.session.clone();

    let logout = move |_| {
        session.sign_out();
        store_reset(&store);
        navigator.navigate(LOGIN_PATH);
    };

    view! {
        <section class="profile">
            <h2>"Profile"</h2>
            <dl>
                <dt>"Username"</dt>
                <dd>{move || store.username().get().unwrap_or_else(|| "(not loaded this session)".to_string())}</dd>
                <dt>"Session"</dt>
                <dd>{if signed_in { "Active" } else { "Signed out" }}</dd>
            </dl>
            <button class="logout-btn" on:click=logout>"Log out"</button>
        </section>
    }
}
