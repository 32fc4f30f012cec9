//! Browser Glue for Lazy Images
//!
//! `IntersectionObserver` bindings and the `LazyImage` component.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{try_apply, BindingId, ImageTarget, LazyLoader, ViewportObserver};
use crate::config::LAZY_ROOT_MARGIN;
use crate::http::js_error_message;

/// 1x1 transparent GIF shown until the real image loads
const PLACEHOLDER_SRC: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub type DomLazyLoader = LazyLoader<DomObserver, HtmlImageElement>;

/// Observer for a single element; owns the callback closure keeping it alive
pub struct DomObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl DomObserver {
    fn observe(
        img: &HtmlImageElement,
        loader: Weak<RefCell<DomLazyLoader>>,
        id: BindingId,
    ) -> Result<Self, JsValue> {
        let callback = ObserverCallback::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    deliver_report(loader.clone(), id, entry.is_intersecting());
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(LAZY_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(img);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

/// Feed one observer entry to the loader, retrying on a later tick while the
/// loader is borrowed elsewhere
fn deliver_report(loader: Weak<RefCell<DomLazyLoader>>, id: BindingId, is_intersecting: bool) {
    let Some(shared) = loader.upgrade() else {
        return;
    };
    let outcome = try_apply(&shared, |l: &mut DomLazyLoader| {
        l.on_intersection(id, is_intersecting);
    });
    if outcome.is_err() {
        log::debug!("[Lazy] loader busy, deferring report for {:?}", id);
        wasm_bindgen_futures::spawn_local(async move {
            deliver_report(loader, id, is_intersecting);
        });
    }
}

fn release_binding(shared: Rc<RefCell<DomLazyLoader>>, id: BindingId) {
    let outcome = try_apply(&shared, |l: &mut DomLazyLoader| {
        l.unmount(id);
    });
    if outcome.is_err() {
        log::debug!("[Lazy] loader busy, deferring unbind of {:?}", id);
        wasm_bindgen_futures::spawn_local(async move {
            release_binding(shared, id);
        });
    }
}

impl ViewportObserver for DomObserver {
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl ImageTarget for HtmlImageElement {
    fn load_source(&self, src: &str) {
        self.set_src(src);
    }
}

// ========================
// Context
// ========================

/// Registry shared by every `LazyImage` in the app
#[derive(Clone, Copy)]
pub struct LazyLoadContext {
    loader: StoredValue<Rc<RefCell<DomLazyLoader>>, LocalStorage>,
}

impl LazyLoadContext {
    pub fn bind(&self, img: HtmlImageElement, src: String) -> Result<BindingId, String> {
        let shared = self.loader.get_value();
        let weak = Rc::downgrade(&shared);
        let mut loader = shared.try_borrow_mut().map_err(|e| e.to_string())?;
        loader
            .mount(img.clone(), src, |id| DomObserver::observe(&img, weak, id))
            .map_err(|e| js_error_message(&e))
    }

    pub fn unbind(&self, id: BindingId) {
        release_binding(self.loader.get_value(), id);
    }
}

pub fn provide_lazy_loader() {
    let loader = Rc::new(RefCell::new(DomLazyLoader::new()));
    provide_context(LazyLoadContext {
        loader: StoredValue::new_local(loader),
    });
}

fn use_lazy_loader() -> LazyLoadContext {
    expect_context::<LazyLoadContext>()
}

// ========================
// Component
// ========================

/// Image whose real source is swapped in once it nears the viewport
#[component]
pub fn LazyImage(
    #[prop(into)] src: String,
    #[prop(into, optional)] alt: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let lazy = use_lazy_loader();
    let img_ref = NodeRef::<html::Img>::new();
    let binding = StoredValue::new(None::<BindingId>);

    Effect::new(move |_| {
        let Some(img) = img_ref.get() else {
            return;
        };
        if binding.get_value().is_some() {
            return;
        }
        match lazy.bind(img, src.clone()) {
            Ok(id) => binding.set_value(Some(id)),
            Err(e) => log::error!("[Lazy] could not observe image {}: {}", src, e),
        }
    });

    on_cleanup(move || {
        if let Some(id) = binding.get_value() {
            lazy.unbind(id);
        }
    });

    view! {
        <img node_ref=img_ref src=PLACEHOLDER_SRC alt=alt class=class />
    }
}
