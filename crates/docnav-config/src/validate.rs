//! Referential checks over a structurally valid draft.
//!
//! Every check runs to completion and records into the shared
//! [`Diagnostics`]; nothing short-circuits. Only dangling-link findings
//! depend on [`Strictness`](crate::Strictness).

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use docnav_pages::{PageIndex, normalize_route};

use crate::diagnostic::{DiagnosticKind, Diagnostics};
use crate::model::{NavTarget, SearchConfig, is_root_relative, normalize_prefix};
use crate::policy::ValidationPolicy;
use crate::read::{Draft, FieldPath, GroupDraft, NavDraft, SectionDraft};

pub(crate) fn validate(
    draft: &Draft,
    policy: &ValidationPolicy,
    pages: Option<&dyn PageIndex>,
    diag: &mut Diagnostics,
) {
    check_nav(&draft.nav, diag);
    check_sidebar(&draft.sidebar, policy, diag);

    if let Some(pages) = pages {
        let mut links = LinkCheck {
            pages,
            policy,
            diag,
        };
        links.check(draft);
    }
}

/// Labels must be unique; links must be internal or external URLs.
fn check_nav(nav: &[NavDraft], diag: &mut Diagnostics) {
    let mut seen: HashMap<&str, &FieldPath> = HashMap::new();

    for entry in nav {
        match seen.entry(entry.label.as_str()) {
            Entry::Occupied(first) => diag.error(
                DiagnosticKind::DuplicateNavLabel,
                &entry.path.key("text"),
                format!(
                    "duplicate nav label \"{}\" (first declared at {})",
                    entry.label,
                    first.get()
                ),
            ),
            Entry::Vacant(slot) => {
                slot.insert(&entry.path);
            }
        }

        if entry.target.is_none() {
            diag.error(
                DiagnosticKind::MalformedLink,
                &entry.path.key("link"),
                format!(
                    "nav link `{}` must be a root-relative path or an http(s)/mailto URL",
                    entry.link
                ),
            );
        }
    }
}

fn check_sidebar(sections: &[SectionDraft], policy: &ValidationPolicy, diag: &mut Diagnostics) {
    let mut prefixes: HashMap<String, &FieldPath> = HashMap::new();

    for section in sections {
        if !is_root_relative(&section.prefix) {
            diag.error(
                DiagnosticKind::MalformedLink,
                &section.path,
                format!("sidebar prefix `{}` must start with `/`", section.prefix),
            );
        }

        match prefixes.entry(normalize_prefix(&section.prefix)) {
            Entry::Occupied(first) => diag.error(
                DiagnosticKind::DuplicateSidebarPrefix,
                &section.path,
                format!(
                    "sidebar prefix `{}` is already registered at {}",
                    first.key(),
                    first.get()
                ),
            ),
            Entry::Vacant(slot) => {
                slot.insert(&section.path);
            }
        }

        for group in &section.groups {
            check_group(group, policy, diag);
        }
    }
}

fn check_group(group: &GroupDraft, policy: &ValidationPolicy, diag: &mut Diagnostics) {
    if group.items.is_empty() && !policy.allow_empty_groups {
        diag.error(
            DiagnosticKind::EmptySidebarGroup,
            &group.path.key("items"),
            format!("sidebar group \"{}\" has no items", group.text),
        );
    }

    let mut links: HashMap<String, &FieldPath> = HashMap::new();
    for item in &group.items {
        let link_path = item.path.key("link");
        if !is_root_relative(&item.link) {
            diag.error(
                DiagnosticKind::MalformedLink,
                &link_path,
                format!("sidebar link `{}` must be a root-relative path", item.link),
            );
        }

        match links.entry(normalize_route(&item.link)) {
            Entry::Occupied(first) => diag.error(
                DiagnosticKind::DuplicateLinkInGroup,
                &link_path,
                format!(
                    "link `{}` already appears in group \"{}\" at {}",
                    item.link,
                    group.text,
                    first.get()
                ),
            ),
            Entry::Vacant(slot) => {
                slot.insert(&item.path);
            }
        }
    }
}

/// Checks against the page set. Malformed links are skipped: they are
/// already reported and cannot be looked up.
struct LinkCheck<'a> {
    pages: &'a dyn PageIndex,
    policy: &'a ValidationPolicy,
    diag: &'a mut Diagnostics,
}

impl LinkCheck<'_> {
    fn check(&mut self, draft: &Draft) {
        for entry in &draft.nav {
            if let Some(path) = entry.target.as_ref().and_then(NavTarget::internal_path)
                && !self.pages.contains(path)
            {
                self.dangling(
                    &entry.path.key("link"),
                    format!("nav link `{path}` does not match any page"),
                );
            }
        }

        for section in &draft.sidebar {
            if is_root_relative(&section.prefix) && !self.pages.has_pages_under(&section.prefix) {
                self.dangling(
                    &section.path,
                    format!("no pages exist under sidebar prefix `{}`", section.prefix),
                );
            }
            for item in section.groups.iter().flat_map(|group| &group.items) {
                if is_root_relative(&item.link) && !self.pages.contains(&item.link) {
                    self.dangling(
                        &item.path.key("link"),
                        format!("sidebar link `{}` does not match any page", item.link),
                    );
                }
            }
        }

        if let SearchConfig::Local(options) = &draft.search
            && let Some(scope) = &options.scope
            && is_root_relative(scope)
            && !self.pages.has_pages_under(scope)
        {
            self.dangling(
                &FieldPath::root()
                    .key("themeConfig")
                    .key("search")
                    .key("options")
                    .key("scope"),
                format!("no pages exist under search scope `{scope}`"),
            );
        }
    }

    fn dangling(&mut self, path: &FieldPath, message: String) {
        if self.policy.is_strict() {
            self.diag.error(DiagnosticKind::DanglingLink, path, message);
        } else {
            self.diag.warn(DiagnosticKind::DanglingLink, path, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::ValidationError;
    use crate::policy::Strictness;
    use crate::read::read_document;
    use docnav_pages::PageSet;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn run(
        raw: &Value,
        policy: &ValidationPolicy,
        pages: Option<&dyn PageIndex>,
    ) -> Result<Vec<crate::Diagnostic>, ValidationError> {
        let mut diag = Diagnostics::new();
        let draft = read_document(raw, &mut diag).unwrap();
        assert!(!diag.has_errors(), "test input must be structurally valid");
        validate(&draft, policy, pages, &mut diag);
        diag.finish()
    }

    fn sidebar(sidebar: Value) -> Value {
        json!({ "title": "Docs", "themeConfig": { "sidebar": sidebar } })
    }

    #[test]
    fn test_duplicate_nav_label_reports_first_location() {
        let raw = json!({
            "title": "Docs",
            "themeConfig": {
                "nav": [
                    { "text": "Guide", "link": "/guide/" },
                    { "text": "Ops", "link": "/ops/" },
                    { "text": "Guide", "link": "/guide/intro" }
                ]
            }
        });

        let err = run(&raw, &ValidationPolicy::default(), None).unwrap_err();

        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].path, "themeConfig.nav[2].text");
        assert_eq!(
            err.errors()[0].message,
            "duplicate nav label \"Guide\" (first declared at themeConfig.nav[0])"
        );
    }

    #[test]
    fn test_nav_malformed_link() {
        let raw = json!({
            "title": "Docs",
            "themeConfig": { "nav": [{ "text": "CDN", "link": "//cdn.example.com" }] }
        });

        let err = run(&raw, &ValidationPolicy::default(), None).unwrap_err();

        assert_eq!(err.errors()[0].kind, DiagnosticKind::MalformedLink);
        assert_eq!(err.errors()[0].path, "themeConfig.nav[0].link");
    }

    #[test]
    fn test_duplicate_prefix_after_normalization() {
        let raw = sidebar(json!({
            "/guide": [{ "text": "A", "items": [{ "text": "x", "link": "/guide/x" }] }],
            "/guide/": [{ "text": "B", "items": [{ "text": "y", "link": "/guide/y" }] }]
        }));

        let err = run(&raw, &ValidationPolicy::default(), None).unwrap_err();

        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].kind, DiagnosticKind::DuplicateSidebarPrefix);
        assert_eq!(err.errors()[0].path, r#"themeConfig.sidebar["/guide/"]"#);
    }

    #[test]
    fn test_duplicate_prefix_array_form() {
        let group = json!([{ "text": "A", "items": [{ "text": "x", "link": "/guide/x" }] }]);
        let raw = sidebar(json!([
            { "prefix": "/guide/", "groups": group },
            { "prefix": "/guide/", "groups": group }
        ]));

        let err = run(&raw, &ValidationPolicy::default(), None).unwrap_err();

        assert!(err.has_kind(DiagnosticKind::DuplicateSidebarPrefix));
        assert_eq!(err.errors()[0].path, "themeConfig.sidebar[1].prefix");
    }

    #[test]
    fn test_prefix_must_be_root_relative() {
        let raw = sidebar(json!({
            "guide/": [{ "text": "A", "items": [{ "text": "x", "link": "/guide/x" }] }]
        }));

        let err = run(&raw, &ValidationPolicy::default(), None).unwrap_err();

        assert!(err.has_kind(DiagnosticKind::MalformedLink));
    }

    #[test]
    fn test_item_link_must_be_root_relative() {
        let raw = sidebar(json!({
            "/guide/": [{ "text": "A", "items": [{ "text": "x", "link": "https://example.com" }] }]
        }));

        let err = run(&raw, &ValidationPolicy::default(), None).unwrap_err();

        assert_eq!(err.errors()[0].kind, DiagnosticKind::MalformedLink);
        assert_eq!(
            err.errors()[0].path,
            r#"themeConfig.sidebar["/guide/"][0].items[0].link"#
        );
    }

    #[test]
    fn test_duplicate_link_detected_after_normalization() {
        let raw = sidebar(json!({
            "/guide/": [{
                "text": "Introduction",
                "items": [
                    { "text": "Start", "link": "/guide/getting-started" },
                    { "text": "Start (md)", "link": "/guide/getting-started.md" }
                ]
            }]
        }));

        let err = run(&raw, &ValidationPolicy::default(), None).unwrap_err();

        assert_eq!(err.errors()[0].kind, DiagnosticKind::DuplicateLinkInGroup);
    }

    #[test]
    fn test_same_link_in_different_sections_is_allowed() {
        let raw = sidebar(json!({
            "/guide/": [{ "text": "A", "items": [{ "text": "x", "link": "/shared" }] }],
            "/ops/": [{ "text": "B", "items": [{ "text": "x", "link": "/shared" }] }]
        }));

        assert!(run(&raw, &ValidationPolicy::default(), None).is_ok());
    }

    #[test]
    fn test_empty_group_follows_policy() {
        let raw = sidebar(json!({ "/guide/": [{ "text": "Soon", "items": [] }] }));

        let err = run(&raw, &ValidationPolicy::default(), None).unwrap_err();
        assert_eq!(err.errors()[0].kind, DiagnosticKind::EmptySidebarGroup);

        let policy = ValidationPolicy {
            allow_empty_groups: true,
            ..ValidationPolicy::default()
        };
        assert!(run(&raw, &policy, None).is_ok());
    }

    #[test]
    fn test_oracle_checks_nav_items_and_prefixes() {
        let raw = json!({
            "title": "Docs",
            "themeConfig": {
                "nav": [
                    { "text": "Guide", "link": "/guide/getting-started" },
                    { "text": "Blog", "link": "/blog/" },
                    { "text": "GitHub", "link": "https://github.com/example" }
                ],
                "sidebar": {
                    "/guide/": [{ "text": "A", "items": [{ "text": "x", "link": "/guide/getting-started.html" }] }],
                    "/api/": [{ "text": "B", "items": [{ "text": "y", "link": "/guide/getting-started" }] }]
                }
            }
        });
        let pages: PageSet = ["/guide/getting-started"].into_iter().collect();

        let err = run(&raw, &ValidationPolicy::default(), Some(&pages)).unwrap_err();

        let paths: Vec<_> = err
            .of_kind(DiagnosticKind::DanglingLink)
            .map(|d| d.path.as_str())
            .collect();
        assert_eq!(
            paths,
            vec!["themeConfig.nav[1].link", r#"themeConfig.sidebar["/api/"]"#]
        );
    }

    #[test]
    fn test_lenient_dangling_links_are_warnings() {
        let raw = sidebar(json!({
            "/guide/": [{ "text": "A", "items": [{ "text": "x", "link": "/guide/nonexistent" }] }]
        }));
        let pages: PageSet = ["/guide/getting-started"].into_iter().collect();
        let policy = ValidationPolicy {
            strictness: Strictness::Lenient,
            ..ValidationPolicy::default()
        };

        let warnings = run(&raw, &policy, Some(&pages)).unwrap();

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, DiagnosticKind::DanglingLink);
    }

    #[test]
    fn test_search_scope_checked_against_pages() {
        let raw = json!({
            "title": "Docs",
            "themeConfig": { "search": { "provider": "local", "options": { "scope": "/handbook/" } } }
        });
        let pages: PageSet = ["/guide/getting-started"].into_iter().collect();

        let err = run(&raw, &ValidationPolicy::default(), Some(&pages)).unwrap_err();

        assert_eq!(err.errors()[0].path, "themeConfig.search.options.scope");
    }
}
