//! Image Processing Layout
//!
//! Tab strip over the three image tools; the active tool renders below.

use leptos::prelude::*;

use crate::app::Outlet;
use crate::router::{home_child_path, home_menu, Link};

#[component]
pub fn ImageProcessing() -> impl IntoView {
    let tabs = home_menu()
        .iter()
        .find(|r| r.path == "image-processing")
        .map(|section| {
            section
                .children
                .iter()
                .filter_map(|child| {
                    let title = child.meta.title?;
                    let to = home_child_path(&format!("{}/{}", section.path, child.path));
                    Some(view! { <Link to=to class="tab">{title}</Link> })
                })
                .collect_view()
        });

    view! {
        <section class="image-processing">
            <h2>"Image Processing"</h2>
            <nav class="tabs">{tabs}</nav>
            <div class="tab-content">
                <Outlet depth=2 />
            </div>
        </section>
    }
}
