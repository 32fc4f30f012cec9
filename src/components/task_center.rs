//! Task Center Component
//!
//! Paginated, searchable task list with create, toggle, rename, delete and
//! file upload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, TaskStatus};
use crate::components::{ErrorAlert, NewTaskForm, PaginationBar, TaskRow, UploadPanel};
use crate::context::{use_app_context, use_services};
use crate::store::{build_task_query, use_app_store, AppStateStoreFields};

const STATUS_FILTERS: &[(&str, &str)] = &[("", "All"), ("completed", "Completed"), ("pending", "Pending")];

#[component]
pub fn TaskCenter() -> impl IntoView {
    let ctx = use_app_context();
    let services = use_services();
    let store = use_app_store();

    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let (search_input, set_search_input) = signal(store.search().get_untracked());

    // Reload when filters, page or trigger change
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let query = build_task_query(
            store.page().get(),
            &store.search().get(),
            store.status().get(),
        );
        log::debug!("[TaskCenter] loading {:?}, trigger={}", query, trigger);

        let services = services.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api::get_tasks(&services.client, &query).await {
                Ok(page) => {
                    log::debug!("[TaskCenter] loaded {} tasks", page.data.len());
                    *store.tasks().write() = page.data;
                    *store.pagination().write() = page.pagination;
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let apply_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        *store.search().write() = search_input.get_untracked();
        *store.page().write() = 1;
    };

    let set_status = move |value: String| {
        *store.status().write() = TaskStatus::parse(&value);
        *store.page().write() = 1;
    };

    view! {
        <section class="task-center">
            <h2>"Task Center"</h2>
            <ErrorAlert message=error set_message=set_error />

            <div class="task-toolbar">
                <form class="search-form" on:submit=apply_search>
                    <input
                        type="search"
                        placeholder="Search tasks..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| set_search_input.set(event_target_value(&ev))
                    />
                    <button type="submit">"Search"</button>
                </form>
                <select on:change=move |ev| set_status(event_target_value(&ev))>
                    {STATUS_FILTERS.iter().map(|(value, label)| {
                        let selected = move || {
                            store.status().get().map(|s| s.as_str()).unwrap_or("") == *value
                        };
                        view! { <option value=*value selected=selected>{*label}</option> }
                    }).collect_view()}
                </select>
            </div>

            <NewTaskForm set_error=set_error />

            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>

            <ul class="task-list">
                <For
                    each=move || store.tasks().get()
                    key=|task| (task.id.clone(), task.is_completed, task.title.clone())
                    let:task
                >
                    <TaskRow task=task set_error=set_error />
                </For>
            </ul>
            <Show when=move || !loading.get() && store.tasks().with(|t| t.is_empty())>
                <p class="empty">"No tasks found"</p>
            </Show>

            <PaginationBar />
            <UploadPanel />
        </section>
    }
}
