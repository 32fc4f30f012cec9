//! Delete Confirm Button Component
//!
//! Two-step delete: the first click arms it, the second confirms.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmState {
    Idle,
    Armed,
}

/// Inline delete control for a named record.
///
/// `subject` is shown in the tooltip and confirmation prompt; `on_confirm`
/// fires once per confirmed click.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] subject: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let state = RwSignal::new(ConfirmState::Idle);
    let prompt = format!("Delete \"{}\"?", subject);
    let tooltip = format!("Delete {}", subject);

    view! {
        <span class="delete-control" on:click=|ev| ev.stop_propagation()>
            <Show
                when=move || state.get() == ConfirmState::Armed
                fallback=move || {
                    let tooltip = tooltip.clone();
                    view! {
                        <button class="delete-btn" title=tooltip on:click=move |_| state.set(ConfirmState::Armed)>
                            "×"
                        </button>
                    }
                }
            >
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |_| {
                            state.set(ConfirmState::Idle);
                            on_confirm.run(());
                        }
                    >
                        "Yes"
                    </button>
                    <button class="cancel-btn" on:click=move |_| state.set(ConfirmState::Idle)>"No"</button>
                </span>
            </Show>
        </span>
    }
}
