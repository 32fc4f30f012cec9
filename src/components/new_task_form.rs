//! New Task Form Component
//!
//! Form for creating a task, optionally already completed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, NewTask};
use crate::context::{use_app_context, use_services};

#[component]
pub fn NewTaskForm(set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let services = use_services();

    let (title, set_title) = signal(String::new());
    let (completed, set_completed) = signal(false);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if text.trim().is_empty() {
            return;
        }
        let services = services.clone();
        let task = NewTask {
            title: text,
            is_completed: completed.get(),
        };

        spawn_local(async move {
            match api::create_task(&services.client, &task).await {
                Ok(_) => {
                    set_title.set(String::new());
                    set_completed.set(false);
                    ctx.reload();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add new task..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || completed.get()
                    on:change=move |ev| set_completed.set(event_target_checked(&ev))
                />
                "Done"
            </label>
            <button type="submit">"Add"</button>
        </form>
    }
}
