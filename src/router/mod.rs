//! Router
//!
//! Static route tree, matcher and authentication guard, plus the browser
//! history glue that drives them.

mod guard;
mod history;
mod matcher;
mod routes;

use thiserror::Error;

use guard::GuardDecision;
use matcher::{normalize, resolve, MatchedRoute, Resolution};

pub use guard::NavigationGuard;
pub use history::{provide_navigator, use_navigator, Link};
pub use routes::{home_child_path, home_menu, RouteRecord, View, HOME_PATH, LOGIN_PATH, ROUTES};

/// Upper bound on redirect hops for a single navigation
const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("redirect loop: {}", .0.join(" -> "))]
    RedirectLoop(Vec<String>),
}

/// Result of a completed navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub requested: String,
    pub route: MatchedRoute,
    /// Paths visited before landing, in order
    pub redirects: Vec<String>,
}

impl Navigation {
    pub fn path(&self) -> &str {
        &self.route.path
    }

    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct Router {
    routes: &'static [RouteRecord],
    guard: NavigationGuard,
}

impl Router {
    pub fn new(routes: &'static [RouteRecord], guard: NavigationGuard) -> Self {
        Self { routes, guard }
    }

    /// Resolve redirects and run the guard until a view is reached
    pub fn navigate(&self, to: &str) -> Result<Navigation, RouteError> {
        let requested = normalize(to);
        let mut path = requested.clone();
        let mut redirects = Vec::new();

        loop {
            let next = match resolve(self.routes, &path) {
                Resolution::Redirect(target) => target,
                Resolution::Matched(route) => match self.guard.check(&route) {
                    GuardDecision::Proceed => {
                        return Ok(Navigation {
                            requested,
                            route,
                            redirects,
                        })
                    }
                    GuardDecision::Redirect(target) => target.to_string(),
                },
            };
            redirects.push(path);
            if redirects.len() > MAX_REDIRECTS {
                return Err(RouteError::RedirectLoop(redirects));
            }
            path = next;
        }
    }
}
