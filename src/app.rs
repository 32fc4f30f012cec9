//! Task Center Frontend App
//!
//! Root component: wires services, store and router into context and
//! renders the matched route chain through nested outlets.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AnnotateView, CompressView, HomeIndex, HomeLayout, ImageProcessing, LazyLoadDemo, LoginForm,
    Profile, RegisterForm, TaskCenter,
};
use crate::config::ApiConfig;
use crate::context::{AppContext, Services};
use crate::http::HttpClient;
use crate::lazy::provide_lazy_loader;
use crate::router::{provide_navigator, use_navigator, NavigationGuard, Router, View, ROUTES};
use crate::session::Session;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::browser();
    let config = ApiConfig::from_env();
    log::info!("[App] API base URL: {}", config.base_url);
    let client = HttpClient::browser(config, session.clone());

    provide_context(Services {
        client,
        session: session.clone(),
    });
    provide_context(Store::new(AppState::new()));
    provide_context(AppContext::new(signal(0u32)));
    provide_lazy_loader();
    provide_navigator(Router::new(ROUTES, NavigationGuard::new(session)));

    view! {
        <div class="app-root">
            <Outlet depth=0 />
        </div>
    }
}

/// Construct the component for a route view
pub fn render_view(view: View) -> AnyView {
    match view {
        View::Login => view! { <LoginForm /> }.into_any(),
        View::Register => view! { <RegisterForm /> }.into_any(),
        View::Home => view! { <HomeLayout /> }.into_any(),
        View::HomeIndex => view! { <HomeIndex /> }.into_any(),
        View::TaskCenter => view! { <TaskCenter /> }.into_any(),
        View::Profile => view! { <Profile /> }.into_any(),
        View::ImageProcessing => view! { <ImageProcessing /> }.into_any(),
        View::LazyLoadDemo => view! { <LazyLoadDemo /> }.into_any(),
        View::Compress => view! { <CompressView /> }.into_any(),
        View::Annotate => view! { <AnnotateView /> }.into_any(),
    }
}

/// Renders the view at `depth` in the current route chain.
/// Only rebuilds when the view at this depth changes.
#[component]
pub fn Outlet(depth: usize) -> impl IntoView {
    let navigator = use_navigator();
    let current = Memo::new(move |_| {
        navigator
            .signal()
            .with(|nav| nav.as_ref().and_then(|n| n.route.view_at(depth)))
    });

    move || current.get().map(render_view)
}
