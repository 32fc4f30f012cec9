//! Navigation Guard
//!
//! Runs before every navigation. Protected chains need a stored token.

use super::matcher::MatchedRoute;
use super::routes::LOGIN_PATH;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

#[derive(Clone, Debug)]
pub struct NavigationGuard {
    session: Session,
}

impl NavigationGuard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn check(&self, to: &MatchedRoute) -> GuardDecision {
        if to.requires_auth() && !self.session.is_authenticated() {
            log::debug!("[Router] {} requires login", to.path);
            GuardDecision::Redirect(LOGIN_PATH)
        } else {
            GuardDecision::Proceed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::matcher::{resolve, Resolution};
    use crate::router::routes::ROUTES;
    use crate::session::MemoryTokens;

    fn matched(path: &str) -> MatchedRoute {
        match resolve(ROUTES, path) {
            Resolution::Matched(m) => m,
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_blocks_protected_without_token() {
        let guard = NavigationGuard::new(Session::in_memory());
        assert_eq!(guard.check(&matched("/home/profile")), GuardDecision::Redirect("/login"));
    }

    #[test]
    fn test_allows_protected_with_token() {
        let guard = NavigationGuard::new(Session::new(MemoryTokens::with_token("t")));
        assert_eq!(guard.check(&matched("/home/profile")), GuardDecision::Proceed);
    }

    #[test]
    fn test_public_route_always_proceeds() {
        let guard = NavigationGuard::new(Session::in_memory());
        assert_eq!(guard.check(&matched("/register")), GuardDecision::Proceed);
    }
}
