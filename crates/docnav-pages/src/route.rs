//! Route normalisation.

/// Normalise a link or page path to its clean-URL route.
///
/// Applied in order:
/// 1. Drop `#fragment` and `?query`
/// 2. Ensure a leading `/`
/// 3. Strip a `.md` or `.html` suffix
/// 4. Collapse a trailing `index` segment (`/guide/index` -> `/guide/`)
///
/// Examples:
/// - `""` -> `"/"`
/// - `"guide"` -> `"/guide"`
/// - `"/guide/getting-started.md"` -> `"/guide/getting-started"`
/// - `"/guide/index.html#intro"` -> `"/guide/"`
#[must_use]
pub fn normalize_route(raw: &str) -> String {
    let end = raw.find(['#', '?']).unwrap_or(raw.len());
    let path = raw[..end].trim();

    let mut route = if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    };

    for suffix in [".md", ".html"] {
        if let Some(stripped) = route.strip_suffix(suffix) {
            route.truncate(stripped.len());
            break;
        }
    }

    if route.ends_with("/index") {
        route.truncate(route.len() - "index".len());
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_route_empty_is_root() {
        assert_eq!(normalize_route(""), "/");
        assert_eq!(normalize_route("/"), "/");
    }

    #[test]
    fn test_normalize_route_adds_leading_slash() {
        assert_eq!(normalize_route("guide"), "/guide");
        assert_eq!(normalize_route("guide/setup"), "/guide/setup");
    }

    #[test]
    fn test_normalize_route_strips_extensions() {
        assert_eq!(
            normalize_route("/guide/getting-started.md"),
            "/guide/getting-started"
        );
        assert_eq!(normalize_route("/ops/cronjob.html"), "/ops/cronjob");
    }

    #[test]
    fn test_normalize_route_strips_fragment_and_query() {
        assert_eq!(normalize_route("/guide/slack#commands"), "/guide/slack");
        assert_eq!(normalize_route("/guide/slack?tab=2"), "/guide/slack");
        assert_eq!(normalize_route("/guide/slack.html#x"), "/guide/slack");
    }

    #[test]
    fn test_normalize_route_collapses_index() {
        assert_eq!(normalize_route("/guide/index"), "/guide/");
        assert_eq!(normalize_route("/guide/index.md"), "/guide/");
        assert_eq!(normalize_route("/index.html"), "/");
        assert_eq!(normalize_route("index"), "/");
    }

    #[test]
    fn test_normalize_route_keeps_trailing_slash() {
        assert_eq!(normalize_route("/guide/"), "/guide/");
    }

    #[test]
    fn test_normalize_route_does_not_touch_index_like_names() {
        assert_eq!(normalize_route("/guide/reindex"), "/guide/reindex");
    }
}
