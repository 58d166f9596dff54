//! Page index trait and in-memory implementation.

use std::collections::BTreeSet;
use std::ops::Bound;

use crate::route::normalize_route;

/// Lookup of the pages a site build will produce.
///
/// Implementations receive raw links as written in configuration and are
/// expected to apply [`normalize_route`] before comparing.
pub trait PageIndex {
    /// Whether a page exists at `route`.
    fn contains(&self, route: &str) -> bool;

    /// Whether at least one page lives under `prefix` (inclusive).
    fn has_pages_under(&self, prefix: &str) -> bool;
}

/// Set of normalised page routes.
///
/// Routes are kept sorted so prefix queries are a single range lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageSet {
    routes: BTreeSet<String>,
}

impl PageSet {
    /// Create an empty page set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route. The route is normalised first.
    pub fn insert(&mut self, route: &str) -> bool {
        self.routes.insert(normalize_route(route))
    }

    /// Number of routes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate routes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }
}

impl PageIndex for PageSet {
    fn contains(&self, route: &str) -> bool {
        let route = normalize_route(route);
        if self.routes.contains(&route) {
            return true;
        }
        // `/guide` is served by `guide/index.md` when no `guide.md` exists
        !route.ends_with('/') && self.routes.contains(&format!("{route}/"))
    }

    fn has_pages_under(&self, prefix: &str) -> bool {
        let mut prefix = normalize_route(prefix);
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        self.routes
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .next()
            .is_some_and(|route| route.starts_with(&prefix))
    }
}

impl<S: AsRef<str>> FromIterator<S> for PageSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for route in iter {
            set.insert(route.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn guide_pages() -> PageSet {
        [
            "/guide/getting-started",
            "/guide/architecture",
            "/ops/deployment",
            "/ops/",
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_contains_exact_route() {
        let pages = guide_pages();
        assert!(pages.contains("/guide/getting-started"));
        assert!(!pages.contains("/guide/nonexistent"));
    }

    #[test]
    fn test_contains_normalizes_query() {
        let pages = guide_pages();
        assert!(pages.contains("/guide/getting-started.md"));
        assert!(pages.contains("/guide/getting-started.html#install"));
        assert!(pages.contains("guide/architecture"));
    }

    #[test]
    fn test_contains_falls_back_to_directory_index() {
        let pages = guide_pages();
        assert!(pages.contains("/ops"));
        assert!(pages.contains("/ops/index.md"));
        assert!(!pages.contains("/guide"));
    }

    #[test]
    fn test_has_pages_under_prefix() {
        let pages = guide_pages();
        assert!(pages.has_pages_under("/guide/"));
        assert!(pages.has_pages_under("/guide"));
        assert!(pages.has_pages_under("/"));
        assert!(!pages.has_pages_under("/api/"));
    }

    #[test]
    fn test_has_pages_under_does_not_match_sibling_names() {
        let pages: PageSet = ["/guidelines/style"].into_iter().collect();
        assert!(!pages.has_pages_under("/guide/"));
    }

    #[test]
    fn test_empty_set_has_nothing() {
        let pages = PageSet::new();
        assert!(pages.is_empty());
        assert!(!pages.contains("/"));
        assert!(!pages.has_pages_under("/"));
    }

    #[test]
    fn test_insert_deduplicates_normalized_routes() {
        let mut pages = PageSet::new();
        assert!(pages.insert("/guide/slack.md"));
        assert!(!pages.insert("/guide/slack"));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages.iter().collect::<Vec<_>>(), vec!["/guide/slack"]);
    }
}
