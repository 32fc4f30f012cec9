//! Home Index Component
//!
//! Landing view with shortcuts and a server connectivity probe.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ErrorAlert;
use crate::config::webhook_secret;
use crate::context::use_services;
use crate::router::{home_child_path, Link};

#[component]
pub fn HomeIndex() -> impl IntoView {
    let services = use_services();
    let (probe, set_probe) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);

    let probe_services = services.clone();
    let run_probe = move |_| {
        let services = probe_services.clone();
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_text(&services.client).await {
                Ok(text) => set_probe.set(Some(text)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let deploy_services = services.clone();
    let trigger_deploy = move |secret: &'static str| {
        let services = deploy_services.clone();
        set_error.set(None);
        spawn_local(async move {
            match api::trigger_webhook_update(&services.client, secret).await {
                Ok(ack) => {
                    let msg = ack.message.unwrap_or_else(|| "Update triggered".to_string());
                    log::info!("[Deploy] {}", msg);
                    set_probe.set(Some(msg));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <section class="home-index">
            <h2>"Dashboard"</h2>
            <div class="shortcuts">
                <Link to=home_child_path("task-center") class="shortcut">"Open task center"</Link>
                <Link to=home_child_path("image-processing") class="shortcut">"Image tools"</Link>
                <Link to=home_child_path("profile") class="shortcut">"Your profile"</Link>
            </div>
            <div class="probe">
                <button on:click=run_probe>"Ping server"</button>
                {webhook_secret().map(|secret| view! {
                    <button class="deploy-btn" on:click=move |_| trigger_deploy(secret)>
                        "Trigger server update"
                    </button>
                })}
                <ErrorAlert message=error set_message=set_error />
                {move || probe.get().map(|text| view! { <pre class="probe-result">{text}</pre> })}
            </div>
        </section>
    }
}
