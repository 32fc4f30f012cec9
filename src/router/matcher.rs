//! Route Matcher
//!
//! Resolves a path against the route tree into the chain of matched records
//! (ancestors first) or a redirect.

use super::routes::{RouteRecord, RouteTarget, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute {
    pub path: String,
    pub chain: Vec<&'static RouteRecord>,
}

impl MatchedRoute {
    /// Views to render, outermost layout first
    #[cfg(test)]
    pub fn views(&self) -> Vec<View> {
        self.chain.iter().filter_map(|r| r.view()).collect()
    }

    pub fn view_at(&self, depth: usize) -> Option<View> {
        self.chain.get(depth).and_then(|r| r.view())
    }

    /// True when the record or any ancestor is protected
    pub fn requires_auth(&self) -> bool {
        self.chain.iter().any(|r| r.meta.requires_auth)
    }

    /// Deepest title in the chain
    pub fn title(&self) -> Option<&'static str> {
        self.chain.iter().rev().find_map(|r| r.meta.title)
    }

    pub fn name(&self) -> Option<&'static str> {
        self.chain.last().and_then(|r| r.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(MatchedRoute),
    Redirect(String),
}

/// Drop query and fragment, collapse slashes, strip the trailing slash
pub fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

fn segments_of(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

pub fn resolve(routes: &'static [RouteRecord], path: &str) -> Resolution {
    let path = normalize(path);
    let segments = segments_of(&path);
    let mut chain = Vec::new();

    match match_level(routes, &segments, "", &mut chain) {
        Some(Step::Redirect(to)) => Resolution::Redirect(to),
        Some(Step::Matched) => match chain.last().map(|r| r.target) {
            Some(RouteTarget::Redirect(to)) => Resolution::Redirect(to.to_string()),
            Some(RouteTarget::View(_)) => Resolution::Matched(MatchedRoute { path, chain }),
            None => Resolution::Redirect(super::routes::HOME_PATH.to_string()),
        },
        None => Resolution::Redirect(super::routes::HOME_PATH.to_string()),
    }
}

enum Step {
    Matched,
    Redirect(String),
}

fn join(base: &str, segment: &str) -> String {
    if segment.starts_with('/') {
        return segment.to_string();
    }
    match (base.trim_end_matches('/'), segment) {
        (base, "") => if base.is_empty() { "/".to_string() } else { base.to_string() },
        (base, seg) => format!("{}/{}", base, seg),
    }
}

fn match_level(
    records: &'static [RouteRecord],
    segments: &[&str],
    base: &str,
    chain: &mut Vec<&'static RouteRecord>,
) -> Option<Step> {
    for record in records {
        if record.is_wildcard() {
            chain.push(record);
            return Some(Step::Matched);
        }

        let own = segments_of(record.path);
        if !segments.starts_with(&own) {
            continue;
        }
        let rest = &segments[own.len()..];
        let full = join(base, record.path);

        chain.push(record);
        if !record.children.is_empty() && matches!(record.target, RouteTarget::View(_)) {
            if let Some(step) = match_level(record.children, rest, &full, chain) {
                return Some(step);
            }
            // Landing on a layout without an index child opens its first child
            if rest.is_empty() {
                if let Some(first) = record.children.first() {
                    return Some(Step::Redirect(join(&full, first.path)));
                }
            }
        } else if rest.is_empty() {
            return Some(Step::Matched);
        }
        chain.pop();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::routes::ROUTES;

    fn matched(path: &str) -> MatchedRoute {
        match resolve(ROUTES, path) {
            Resolution::Matched(m) => m,
            other => panic!("{} did not match: {:?}", path, other),
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/home/profile/"), "/home/profile");
        assert_eq!(normalize("home//task-center?page=2#top"), "/home/task-center");
        assert_eq!(normalize(""), "/");
    }

    #[test]
    fn test_root_redirects_home() {
        assert_eq!(resolve(ROUTES, "/"), Resolution::Redirect("/home".into()));
    }

    #[test]
    fn test_home_index() {
        let m = matched("/home");
        assert_eq!(m.views(), vec![View::Home, View::HomeIndex]);
        assert!(m.requires_auth());
        assert_eq!(m.title(), Some("Home"));
        assert_eq!(m.name(), Some("HomeIndex"));
    }

    #[test]
    fn test_nested_leaf() {
        let m = matched("/home/image-processing/compress");
        assert_eq!(m.views(), vec![View::Home, View::ImageProcessing, View::Compress]);
        assert_eq!(m.view_at(2), Some(View::Compress));
        assert!(m.requires_auth());
        assert_eq!(m.title(), Some("Compress"));
    }

    #[test]
    fn test_layout_without_index_opens_first_child() {
        assert_eq!(
            resolve(ROUTES, "/home/image-processing"),
            Resolution::Redirect("/home/image-processing/lazy-load".into())
        );
    }

    #[test]
    fn test_public_routes() {
        let m = matched("/login");
        assert_eq!(m.views(), vec![View::Login]);
        assert!(!m.requires_auth());
        assert_eq!(matched("/register/").views(), vec![View::Register]);
    }

    #[test]
    fn test_unmatched_redirects_home() {
        for path in ["/nope", "/home/unknown", "/home/task-center/extra", "/login/x"] {
            assert_eq!(resolve(ROUTES, path), Resolution::Redirect("/home".into()), "{}", path);
        }
    }
}
