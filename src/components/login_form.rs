//! Login Form Component
//!
//! Stores the returned token in the session and opens the home section.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ErrorAlert;
use crate::context::use_services;
use crate::router::{use_navigator, Link, HOME_PATH};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LoginForm() -> impl IntoView {
    let services = use_services();
    let navigator = use_navigator();
    let store = use_app_store();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let services = services.clone();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        set_pending.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::login(&services.client, &user, &pass).await {
                Ok(resp) => {
                    log::info!("[Login] signed in as {}", resp.username);
                    services.session.sign_in(&resp.token);
                    *store.username().write() = Some(resp.username);
                    navigator.navigate(HOME_PATH);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=submit>
                <h1>"Sign in"</h1>
                <ErrorAlert message=error set_message=set_error />
                <label>
                    "Username"
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-switch">
                    "No account? " <Link to="/register">"Register"</Link>
                </p>
            </form>
        </div>
    }
}
