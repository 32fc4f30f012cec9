//! Upload Panel Component
//!
//! Sends the picked file to `/api/upload` as multipart form data.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ErrorAlert;
use crate::context::use_services;
use crate::http::MultipartForm;

#[component]
pub fn UploadPanel() -> impl IntoView {
    let services = use_services();
    let file_ref = NodeRef::<html::Input>::new();

    let (description, set_description) = signal(String::new());
    let (result, set_result) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (uploading, set_uploading) = signal(false);

    let upload = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(file) = file_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            set_error.set(Some("Choose a file first".to_string()));
            return;
        };

        let services = services.clone();
        let name = file.name();
        let note = description.get_untracked();
        set_uploading.set(true);
        set_error.set(None);
        set_result.set(None);

        spawn_local(async move {
            let mut form = MultipartForm::new().file("file", file);
            if !note.trim().is_empty() {
                form = form.text("description", note.trim());
            }
            match api::upload_file::<serde_json::Value>(&services.client, form).await {
                Ok(body) => {
                    log::info!("[Upload] {} uploaded", name);
                    let pretty = serde_json::to_string_pretty(&body).unwrap_or_default();
                    set_result.set(Some(pretty));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_uploading.set(false);
        });
    };

    view! {
        <form class="upload-panel" on:submit=upload>
            <h3>"Attach a file"</h3>
            <input type="file" node_ref=file_ref />
            <input
                type="text"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || uploading.get()>
                {move || if uploading.get() { "Uploading..." } else { "Upload" }}
            </button>
            <ErrorAlert message=error set_message=set_error />
            {move || result.get().map(|body| view! { <pre class="upload-result">{body}</pre> })}
        </form>
    }
}
