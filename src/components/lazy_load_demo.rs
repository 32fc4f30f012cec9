//! Lazy Load Demo Component
//!
//! A long grid of images that only load as they approach the viewport.

use leptos::prelude::*;

use crate::lazy::LazyImage;

const DEMO_IMAGE_COUNT: u32 = 30;

fn demo_image_url(n: u32) -> String {
    format!("https://picsum.photos/seed/task-center-{}/400/300", n)
}

#[component]
pub fn LazyLoadDemo() -> impl IntoView {
    view! {
        <div class="lazy-demo">
            <p class="hint">"Scroll down: each image is fetched only when it is within 50px of the viewport."</p>
            <div class="image-grid">
                {(1..=DEMO_IMAGE_COUNT).map(|n| view! {
                    <figure>
                        <LazyImage src=demo_image_url(n) alt=format!("Sample {}", n) class="lazy-img" />
                        <figcaption>{format!("#{}", n)}</figcaption>
                    </figure>
                }).collect_view()}
            </div>
        </div>
    }
}
