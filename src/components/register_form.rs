//! Register Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ErrorAlert;
use crate::context::use_services;
use crate::router::{Link, LOGIN_PATH};

#[component]
pub fn RegisterForm() -> impl IntoView {
    let services = use_services();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
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
        set_notice.set(None);

        spawn_local(async move {
            match api::register(&services.client, &user, &pass).await {
                Ok(resp) => {
                    let message = if resp.message.is_empty() {
                        "Registration successful".to_string()
                    } else {
                        resp.message
                    };
                    set_notice.set(Some(message));
                    set_password.set(String::new());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=submit>
                <h1>"Create account"</h1>
                <ErrorAlert message=error set_message=set_error />
                {move || notice.get().map(|msg| view! {
                    <div class="notice">
                        {msg} " " <Link to=LOGIN_PATH>"Sign in now"</Link>
                    </div>
                })}
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
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || pending.get()>"Register"</button>
                <p class="auth-switch">
                    "Already registered? " <Link to=LOGIN_PATH>"Sign in"</Link>
                </p>
            </form>
        </div>
    }
}
