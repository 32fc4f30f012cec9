//! Annotate View Component
//!
//! Click on an image to drop numbered markers with labels.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Url;

use crate::imaging::AnnotationSet;

#[component]
pub fn AnnotateView() -> impl IntoView {
    let stage_ref = NodeRef::<html::Div>::new();
    let image_url = RwSignal::new(None::<String>);
    let annotations = RwSignal::new(AnnotationSet::new());
    let (label, set_label) = signal(String::new());

    let revoke = move || {
        if let Some(url) = image_url.get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
    };
    on_cleanup(revoke);

    let pick = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            revoke();
            match Url::create_object_url_with_blob(&file) {
                Ok(url) => {
                    image_url.set(Some(url));
                    annotations.update(|a| a.clear());
                }
                Err(e) => log::error!("[Annotate] object URL failed: {:?}", e),
            }
        }
    };

    let place = move |ev: web_sys::MouseEvent| {
        let Some(stage) = stage_ref.get() else {
            return;
        };
        let rect = stage.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        let text = label.get_untracked();
        annotations.update(|a| {
            a.add(x, y, rect.width(), rect.height(), &text);
        });
        set_label.set(String::new());
    };

    view! {
        <div class="annotate-view">
            <div class="controls">
                <input type="file" accept="image/*" on:change=pick />
                <input
                    type="text"
                    placeholder="Label for next marker"
                    prop:value=move || label.get()
                    on:input=move |ev| set_label.set(event_target_value(&ev))
                />
                <button on:click=move |_| { annotations.update(|a| { a.undo(); }); }>"Undo"</button>
                <button on:click=move |_| annotations.update(|a| a.clear())>"Clear"</button>
            </div>

            <Show
                when=move || image_url.get().is_some()
                fallback=|| view! { <p class="hint">"Pick an image, then click on it to add markers."</p> }
            >
                <div class="annotate-stage" node_ref=stage_ref on:click=place>
                    <img src=move || image_url.get().unwrap_or_default() alt="Annotation target" />
                    {move || annotations.with(|set| set.items().iter().map(|a| {
                        let style = format!("left: {:.2}%; top: {:.2}%", a.x * 100.0, a.y * 100.0);
                        view! { <span class="marker" style=style title=a.label.clone()>{a.id}</span> }
                    }).collect_view())}
                </div>
            </Show>

            <h4 class="annotation-count">
                {move || match annotations.with(|a| a.len()) {
                    1 => "1 marker".to_string(),
                    n => format!("{} markers", n),
                }}
            </h4>
            <ol class="annotation-list">
                {move || annotations.with(|set| set.items().iter().map(|a| {
                    let id = a.id;
                    view! {
                        <li>
                            {format!("#{} {} ({:.0}%, {:.0}%)", a.id, a.label, a.x * 100.0, a.y * 100.0)}
                            <button class="delete-btn" on:click=move |_| { annotations.update(|s| { s.remove(id); }); }>"×"</button>
                        </li>
                    }
                }).collect_view())}
            </ol>
            <Show when=move || annotations.with(|a| !a.is_empty())>
                <pre class="annotation-export">{move || annotations.with(|a| a.to_json())}</pre>
            </Show>
        </div>
    }
}
