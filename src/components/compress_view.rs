//! Compress View Component
//!
//! Downscales a picked image on a canvas and re-encodes it as JPEG.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url};

use crate::components::ErrorAlert;
use crate::http::js_error_message;
use crate::imaging::{data_url_size, fit_within, format_bytes, savings_percent, CompressSettings};

#[derive(Debug, Clone, PartialEq)]
struct Compressed {
    data_url: String,
    size: usize,
    width: u32,
    height: u32,
}

fn compress_image(img: &HtmlImageElement, settings: CompressSettings) -> Result<Compressed, String> {
    let (width, height) = fit_within(img.natural_width(), img.natural_height(), settings.max_edge);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| js_error_message(&e))?
        .dyn_into()
        .map_err(|_| "not a canvas")?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| js_error_message(&e))?
        .ok_or("2d context unavailable")?
        .dyn_into()
        .map_err(|_| "not a 2d context")?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, width as f64, height as f64)
        .map_err(|e| js_error_message(&e))?;

    let data_url = canvas
        .to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(settings.quality))
        .map_err(|e| js_error_message(&e))?;

    Ok(Compressed {
        size: data_url_size(&data_url),
        data_url,
        width,
        height,
    })
}

#[component]
pub fn CompressView() -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();
    let source_url = RwSignal::new(None::<String>);
    let original_size = RwSignal::new(0usize);
    let settings = RwSignal::new(CompressSettings::default());
    let result = RwSignal::new(None::<Compressed>);
    let (error, set_error) = signal(None::<String>);

    let revoke = move || {
        if let Some(url) = source_url.get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
    };
    on_cleanup(revoke);

    let pick = move |ev: web_sys::Event| {
        let Some(file) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };
        revoke();
        match Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                original_size.set(file.size() as usize);
                source_url.set(Some(url));
                result.set(None);
            }
            Err(e) => set_error.set(Some(js_error_message(&e))),
        }
    };

    let compress = move |_| {
        let Some(img) = img_ref.get() else {
            return;
        };
        if !img.complete() || img.natural_width() == 0 {
            set_error.set(Some("Image is still loading".to_string()));
            return;
        }
        match compress_image(&img, settings.get_untracked()) {
            Ok(out) => {
                log::debug!("[Compress] {}x{} -> {} bytes", out.width, out.height, out.size);
                result.set(Some(out));
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <div class="compress-view">
            <ErrorAlert message=error set_message=set_error />
            <div class="controls">
                <input type="file" accept="image/*" on:change=pick />
                <label>
                    {move || format!("Quality {:.0}%", settings.get().quality * 100.0)}
                    <input
                        type="range" min="10" max="100" step="5"
                        prop:value=move || (settings.get().quality * 100.0).round().to_string()
                        on:input=move |ev| {
                            let pct = event_target_value(&ev).parse::<f64>().unwrap_or(70.0);
                            settings.update(|s| *s = s.with_quality(pct / 100.0));
                        }
                    />
                </label>
                <label>
                    "Max edge (px)"
                    <input
                        type="number" min="16"
                        prop:value=move || settings.get().max_edge.to_string()
                        on:change=move |ev| {
                            if let Ok(edge) = event_target_value(&ev).parse::<u32>() {
                                settings.update(|s| *s = s.with_max_edge(edge));
                            }
                        }
                    />
                </label>
                <button on:click=compress disabled=move || source_url.get().is_none()>"Compress"</button>
            </div>

            <div class="compare">
                {move || source_url.get().map(|url| view! {
                    <figure>
                        <img node_ref=img_ref src=url alt="Original" />
                        <figcaption>{format!("Original · {}", format_bytes(original_size.get()))}</figcaption>
                    </figure>
                })}
                {move || result.get().map(|out| {
                    let saved = savings_percent(original_size.get(), out.size);
                    view! {
                        <figure>
                            <img src=out.data_url.clone() alt="Compressed" />
                            <figcaption>
                                {format!("{}x{} · {} · {:.1}% smaller", out.width, out.height, format_bytes(out.size), saved)}
                            </figcaption>
                            <a href=out.data_url download="compressed.jpg">"Download"</a>
                        </figure>
                    }
                })}
            </div>
        </div>
    }
}
