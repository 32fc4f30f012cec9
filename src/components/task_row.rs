//! Task Row Component
//!
//! One task with completion toggle, inline title editing and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, TaskPatch};
use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, use_services};
use crate::models::Task;
use crate::store::{store_remove_task, store_set_completed, store_update_task, use_app_store};

#[component]
pub fn TaskRow(task: Task, set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let services = use_services();
    let store = use_app_store();

    let id = StoredValue::new(task.id.clone());
    let done = task.is_completed;
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(task.title.clone());

    let toggle_services = services.clone();
    let toggle = move |_| {
        let services = toggle_services.clone();
        let task_id = id.get_value();
        spawn_local(async move {
            match api::update_task(&services.client, &task_id, &TaskPatch::completed(!done)).await {
                Ok(_) => store_set_completed(&store, &task_id, !done),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let rename_services = services.clone();
    let original = task.clone();
    let save_title = move || {
        set_editing.set(false);
        let new_title = draft.get_untracked();
        if new_title.trim().is_empty() || new_title == original.title {
            set_draft.set(original.title.clone());
            return;
        }
        let services = rename_services.clone();
        let mut updated = original.clone();
        spawn_local(async move {
            match api::update_task(&services.client, &updated.id, &TaskPatch::title(&new_title)).await {
                Ok(ack) => {
                    updated.title = new_title;
                    store_update_task(&store, ack.task().unwrap_or(updated));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let delete = Callback::new(move |_| {
        let services = services.clone();
        let task_id = id.get_value();
        spawn_local(async move {
            match api::delete_task(&services.client, &task_id).await {
                Ok(_) => {
                    store_remove_task(&store, &task_id);
                    ctx.reload();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    let title = task.title.clone();
    let row_class = if done { "task-row completed" } else { "task-row" };

    view! {
        <li class=row_class>
            <input type="checkbox" prop:checked=done on:change=toggle />
            <Show
                when=move || editing.get()
                fallback={
                    let title = title.clone();
                    move || {
                        let title = title.clone();
                        view! {
                            <span class="task-title" on:dblclick=move |_| set_editing.set(true)>
                                {title}
                            </span>
                        }
                    }
                }
            >
                {
                    let save_title = save_title.clone();
                    let save_on_key = save_title.clone();
                    view! {
                        <input
                            class="task-title-input"
                            type="text"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:blur=move |_| save_title()
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    save_on_key();
                                }
                            }
                        />
                    }
                }
            </Show>
            <DeleteConfirmButton subject=task.title.clone() on_confirm=delete />
        </li>
    }
}
