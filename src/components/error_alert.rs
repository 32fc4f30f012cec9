//! Error Alert Component
//!
//! Dismissable banner for API error messages.

use leptos::prelude::*;

/// Shows `message` while it is `Some`; the × button clears it
#[component]
pub fn ErrorAlert(
    message: ReadSignal<Option<String>>,
    set_message: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-alert" role="alert">
                <span>{move || message.get().unwrap_or_default()}</span>
                <button class="dismiss-btn" on:click=move |_| set_message.set(None)>"×"</button>
            </div>
        </Show>
    }
}
