//! Sidebar sections, groups and items.
//!
//! Two input forms are accepted:
//!
//! ```text
//! sidebar: { "/guide/": [group, ...] }
//! sidebar: [{ prefix: "/guide/", groups: [group, ...] }]
//! ```
//!
//! The array form keeps repeated prefixes so they can be reported.

use serde_json::Value;

use super::{FieldPath, Object, expect_object, type_name};
use crate::diagnostic::{DiagnosticKind, Diagnostics};

/// Sidebar link as read.
#[derive(Debug)]
pub(crate) struct ItemDraft {
    pub(crate) text: String,
    pub(crate) link: String,
    pub(crate) path: FieldPath,
}

/// Sidebar group as read.
#[derive(Debug)]
pub(crate) struct GroupDraft {
    pub(crate) text: String,
    pub(crate) collapsed: bool,
    pub(crate) items: Vec<ItemDraft>,
    pub(crate) path: FieldPath,
}

/// Prefix registration as read. `path` locates the prefix itself.
#[derive(Debug)]
pub(crate) struct SectionDraft {
    pub(crate) prefix: String,
    pub(crate) path: FieldPath,
    pub(crate) groups: Vec<GroupDraft>,
}

pub(super) fn read_sidebar(theme: Object<'_>, diag: &mut Diagnostics) -> Vec<SectionDraft> {
    let Some(value) = theme.get("sidebar") else {
        return Vec::new();
    };
    let sidebar_path = theme.field_path("sidebar");

    match value {
        Value::Object(map) => map
            .iter()
            .map(|(prefix, groups)| {
                let path = sidebar_path.key(prefix);
                SectionDraft {
                    prefix: prefix.clone(),
                    groups: read_groups(groups, &path, diag),
                    path,
                }
            })
            .collect(),
        Value::Array(entries) => entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                read_section_entry(entry, &sidebar_path.index(index), diag)
            })
            .collect(),
        other => {
            diag.error(
                DiagnosticKind::MalformedField,
                &sidebar_path,
                format!("expected an object or an array, found {}", type_name(other)),
            );
            Vec::new()
        }
    }
}

/// Array-form entry: `{ prefix, groups }`.
fn read_section_entry(
    value: &Value,
    path: &FieldPath,
    diag: &mut Diagnostics,
) -> Option<SectionDraft> {
    let entry = expect_object(value, path, diag)?;
    entry.report_unknown(&["prefix", "groups"]);

    let prefix = entry.required_str("prefix", diag);
    let groups_path = entry.field_path("groups");
    let groups = match entry.get("groups") {
        Some(groups) => read_groups(groups, &groups_path, diag),
        None => {
            diag.error(
                DiagnosticKind::MissingRequiredField,
                &groups_path,
                "missing required field `groups`",
            );
            Vec::new()
        }
    };

    Some(SectionDraft {
        prefix: prefix?.to_owned(),
        path: entry.field_path("prefix"),
        groups,
    })
}

fn read_groups(value: &Value, path: &FieldPath, diag: &mut Diagnostics) -> Vec<GroupDraft> {
    let Value::Array(groups) = value else {
        diag.error(
            DiagnosticKind::MalformedField,
            path,
            format!("expected an array of groups, found {}", type_name(value)),
        );
        return Vec::new();
    };

    groups
        .iter()
        .enumerate()
        .filter_map(|(index, group)| read_group(group, path.index(index), diag))
        .collect()
}

/// A group without `items` is read as empty; the policy decides if that is allowed.
fn read_group(value: &Value, path: FieldPath, diag: &mut Diagnostics) -> Option<GroupDraft> {
    let group = expect_object(value, &path, diag)?;
    group.report_unknown(&["text", "collapsed", "items"]);

    let text = group.required_str("text", diag);
    let collapsed = group.optional_bool("collapsed", diag).unwrap_or(false);

    let items_path = group.field_path("items");
    let items = group
        .optional_array("items", diag)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .filter_map(|(index, item)| read_item(item, items_path.index(index), diag))
        .collect();

    Some(GroupDraft {
        text: text?.to_owned(),
        collapsed,
        items,
        path,
    })
}

fn read_item(value: &Value, path: FieldPath, diag: &mut Diagnostics) -> Option<ItemDraft> {
    let item = expect_object(value, &path, diag)?;
    item.report_unknown(&["text", "link"]);

    let text = item.required_str("text", diag);
    let link = item.required_str("link", diag);

    Some(ItemDraft {
        text: text?.to_owned(),
        link: link?.to_owned(),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn read(raw: &Value) -> (Vec<SectionDraft>, Diagnostics) {
        let path = FieldPath::root().key("themeConfig");
        let mut diag = Diagnostics::new();
        let theme = expect_object(raw, &path, &mut diag).unwrap();
        let sidebar = read_sidebar(theme, &mut diag);
        (sidebar, diag)
    }

    #[test]
    fn test_map_form() {
        let raw = json!({
            "sidebar": {
                "/guide/": [{
                    "text": "Introduction",
                    "collapsed": true,
                    "items": [{ "text": "Getting Started", "link": "/guide/getting-started" }]
                }],
                "/ops/": [{ "text": "Operations", "items": [{ "text": "Runbooks", "link": "/ops/runbooks" }] }]
            }
        });

        let (sections, diag) = read(&raw);

        assert!(!diag.has_errors());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].prefix, "/guide/");
        assert_eq!(
            sections[0].path.as_str(),
            r#"themeConfig.sidebar["/guide/"]"#
        );
        assert!(sections[0].groups[0].collapsed);
        assert!(!sections[1].groups[0].collapsed);
        assert_eq!(
            sections[0].groups[0].items[0].path.as_str(),
            r#"themeConfig.sidebar["/guide/"][0].items[0]"#
        );
    }

    #[test]
    fn test_array_form_keeps_repeated_prefixes() {
        let raw = json!({
            "sidebar": [
                { "prefix": "/guide/", "groups": [{ "text": "A", "items": [] }] },
                { "prefix": "/guide/", "groups": [{ "text": "B", "items": [] }] }
            ]
        });

        let (sections, diag) = read(&raw);

        assert!(!diag.has_errors());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].path.as_str(), "themeConfig.sidebar[1].prefix");
        assert_eq!(sections[1].groups[0].text, "B");
    }

    #[test]
    fn test_array_form_requires_groups() {
        let (_, diag) = read(&json!({ "sidebar": [{ "prefix": "/guide/" }] }));

        let err = diag.finish().unwrap_err();
        assert_eq!(err.errors()[0].kind, DiagnosticKind::MissingRequiredField);
        assert_eq!(err.errors()[0].path, "themeConfig.sidebar[0].groups");
    }

    #[test]
    fn test_group_without_items_reads_as_empty() {
        let (sections, diag) = read(&json!({ "sidebar": { "/": [{ "text": "Empty" }] } }));

        assert!(!diag.has_errors());
        assert!(sections[0].groups[0].items.is_empty());
    }

    #[test]
    fn test_item_missing_link_is_structural() {
        let raw = json!({ "sidebar": { "/guide/": [{ "text": "Intro", "items": [{ "text": "Start" }] }] } });

        let (_, diag) = read(&raw);

        let err = diag.finish().unwrap_err();
        assert_eq!(err.errors()[0].kind, DiagnosticKind::MissingRequiredField);
        assert_eq!(
            err.errors()[0].path,
            r#"themeConfig.sidebar["/guide/"][0].items[0].link"#
        );
    }

    #[test]
    fn test_sidebar_wrong_type() {
        let (_, diag) = read(&json!({ "sidebar": "auto" }));

        let err = diag.finish().unwrap_err();
        assert_eq!(err.errors()[0].kind, DiagnosticKind::MalformedField);
        assert_eq!(err.errors()[0].path, "themeConfig.sidebar");
    }

    #[test]
    fn test_groups_must_be_array() {
        let (_, diag) = read(&json!({ "sidebar": { "/guide/": { "text": "Intro" } } }));

        let err = diag.finish().unwrap_err();
        assert_eq!(err.errors()[0].kind, DiagnosticKind::MalformedField);
    }
}
