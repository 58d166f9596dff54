//! Raw document reader.
//!
//! Walks the generic `serde_json::Value` tree and produces a [`Draft`]:
//! typed values that still carry their source location, so the validator
//! can point at `themeConfig.sidebar["/guide/"][0].items[1].link` rather
//! than at an index into the final model.
//!
//! Shape problems (missing required fields, wrong types) are recorded as
//! structural diagnostics. Reading always completes so that every shape
//! problem in the document is reported in one pass.

mod nav;
mod search;
mod sidebar;
mod site;

use std::fmt;

use serde_json::{Map, Value};

use crate::diagnostic::{DiagnosticKind, Diagnostics};
use crate::model::{NavTarget, SearchConfig, SiteMeta, ThemeConfig};

pub(crate) use sidebar::{GroupDraft, SectionDraft};

/// Top-level keys understood by the reader.
const ROOT_KEYS: [&str; 5] = ["title", "description", "lang", "lastUpdated", "themeConfig"];

/// Keys understood under `themeConfig`.
const THEME_KEYS: [&str; 5] = ["logo", "nav", "search", "sidebar", "footer"];

/// Location inside the raw document.
///
/// Rendered as a dotted path with bracketed indices and quoted non-identifier
/// keys: `themeConfig.sidebar["/guide/"][0].items[1]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldPath(String);

impl FieldPath {
    pub(crate) fn root() -> Self {
        Self::default()
    }

    pub(crate) fn key(&self, key: &str) -> Self {
        if !is_identifier(key) {
            return Self(format!("{}[{key:?}]", self.0));
        }
        if self.0.is_empty() {
            Self(key.to_owned())
        } else {
            Self(format!("{}.{key}", self.0))
        }
    }

    pub(crate) fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&FieldPath> for String {
    fn from(path: &FieldPath) -> Self {
        path.0.clone()
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// JSON type name for diagnostics.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Object node with its location.
///
/// Explicit `null` values are treated the same as absent keys.
#[derive(Clone, Copy)]
pub(crate) struct Object<'a> {
    map: &'a Map<String, Value>,
    path: &'a FieldPath,
}

impl<'a> Object<'a> {
    pub(crate) fn new(map: &'a Map<String, Value>, path: &'a FieldPath) -> Self {
        Self { map, path }
    }

    pub(crate) fn field_path(&self, key: &str) -> FieldPath {
        self.path.key(key)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub(crate) fn entries(self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.map.iter()
    }

    /// Read a required string. Missing or mistyped values are recorded.
    pub(crate) fn required_str(&self, key: &str, diag: &mut Diagnostics) -> Option<&'a str> {
        if self.get(key).is_none() {
            diag.error(
                DiagnosticKind::MissingRequiredField,
                &self.field_path(key),
                format!("missing required field `{key}`"),
            );
            return None;
        }
        self.optional_str(key, diag)
    }

    /// Read an optional string. Mistyped values are recorded.
    pub(crate) fn optional_str(&self, key: &str, diag: &mut Diagnostics) -> Option<&'a str> {
        match self.get(key)? {
            Value::String(s) => Some(s),
            other => {
                self.malformed(key, "a string", other, diag);
                None
            }
        }
    }

    /// Read an optional boolean. Mistyped values are recorded.
    pub(crate) fn optional_bool(&self, key: &str, diag: &mut Diagnostics) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            other => {
                self.malformed(key, "a boolean", other, diag);
                None
            }
        }
    }

    /// Read an optional nested object. Mistyped values are recorded.
    pub(crate) fn optional_map(
        &self,
        key: &str,
        diag: &mut Diagnostics,
    ) -> Option<&'a Map<String, Value>> {
        match self.get(key)? {
            Value::Object(map) => Some(map),
            other => {
                self.malformed(key, "an object", other, diag);
                None
            }
        }
    }

    /// Read an optional array. Mistyped values are recorded.
    pub(crate) fn optional_array(&self, key: &str, diag: &mut Diagnostics) -> Option<&'a [Value]> {
        match self.get(key)? {
            Value::Array(items) => Some(items),
            other => {
                self.malformed(key, "an array", other, diag);
                None
            }
        }
    }

    /// Log keys this reader does not understand.
    pub(crate) fn report_unknown(&self, known: &[&str]) {
        for key in self.map.keys() {
            if !known.contains(&key.as_str()) {
                tracing::debug!(path = %self.field_path(key), "Ignoring unknown configuration key");
            }
        }
    }

    fn malformed(&self, key: &str, expected: &str, found: &Value, diag: &mut Diagnostics) {
        diag.error(
            DiagnosticKind::MalformedField,
            &self.field_path(key),
            format!("expected {expected}, found {}", type_name(found)),
        );
    }
}

/// Interpret `value` as an object, recording a structural error otherwise.
pub(crate) fn expect_object<'a>(
    value: &'a Value,
    path: &'a FieldPath,
    diag: &mut Diagnostics,
) -> Option<Object<'a>> {
    if let Value::Object(map) = value {
        Some(Object::new(map, path))
    } else {
        diag.error(
            DiagnosticKind::MalformedField,
            path,
            format!("expected an object, found {}", type_name(value)),
        );
        None
    }
}

/// Top-level nav entry as read, with its location.
#[derive(Debug)]
pub(crate) struct NavDraft {
    pub(crate) label: String,
    pub(crate) link: String,
    /// `None` when `link` is neither root-relative nor an external URL.
    pub(crate) target: Option<NavTarget>,
    pub(crate) path: FieldPath,
}

/// Whole document as read, before referential validation.
#[derive(Debug)]
pub(crate) struct Draft {
    pub(crate) site: SiteMeta,
    pub(crate) theme: ThemeConfig,
    pub(crate) nav: Vec<NavDraft>,
    pub(crate) sidebar: Vec<SectionDraft>,
    pub(crate) search: SearchConfig,
}

/// Read the raw document into a [`Draft`].
///
/// Returns `None` only when the root is not an object; every other shape
/// problem is recorded in `diag` and reading continues with defaults.
pub(crate) fn read_document(raw: &Value, diag: &mut Diagnostics) -> Option<Draft> {
    let root_path = FieldPath::root();
    let Value::Object(map) = raw else {
        diag.error(
            DiagnosticKind::MalformedField,
            "<root>",
            format!("expected an object, found {}", type_name(raw)),
        );
        return None;
    };
    let root = Object::new(map, &root_path);
    root.report_unknown(&ROOT_KEYS);

    let site = site::read_site_meta(root, diag);

    let theme_path = root.field_path("themeConfig");
    let theme_obj = root
        .optional_map("themeConfig", diag)
        .map(|map| Object::new(map, &theme_path));
    if let Some(theme) = theme_obj {
        theme.report_unknown(&THEME_KEYS);
    }

    let theme = site::read_theme(theme_obj, diag);
    let nav = theme_obj.map(|t| nav::read_nav(t, diag)).unwrap_or_default();
    let sidebar = theme_obj
        .map(|t| sidebar::read_sidebar(t, diag))
        .unwrap_or_default();
    let search = theme_obj
        .map(|t| search::select_search(t, diag))
        .unwrap_or_default();

    Some(Draft {
        site,
        theme,
        nav,
        sidebar,
        search,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_field_path_rendering() {
        let path = FieldPath::root()
            .key("themeConfig")
            .key("sidebar")
            .key("/guide/")
            .index(0)
            .key("items")
            .index(1);

        assert_eq!(
            path.as_str(),
            r#"themeConfig.sidebar["/guide/"][0].items[1]"#
        );
    }

    #[test]
    fn test_field_path_root_key() {
        assert_eq!(FieldPath::root().key("title").as_str(), "title");
    }

    #[test]
    fn test_required_str_missing_records_error() {
        let value = json!({});
        let path = FieldPath::root();
        let mut diag = Diagnostics::new();
        let obj = expect_object(&value, &path, &mut diag).unwrap();

        assert_eq!(obj.required_str("title", &mut diag), None);

        let err = diag.finish().unwrap_err();
        assert_eq!(err.errors()[0].kind, DiagnosticKind::MissingRequiredField);
        assert_eq!(err.errors()[0].path, "title");
    }

    #[test]
    fn test_null_treated_as_missing() {
        let value = json!({ "title": null });
        let path = FieldPath::root();
        let mut diag = Diagnostics::new();
        let obj = expect_object(&value, &path, &mut diag).unwrap();

        assert!(!obj.contains("title"));
        assert_eq!(obj.optional_str("title", &mut diag), None);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_wrong_type_records_malformed() {
        let value = json!({ "lastUpdated": "yes" });
        let path = FieldPath::root();
        let mut diag = Diagnostics::new();
        let obj = expect_object(&value, &path, &mut diag).unwrap();

        assert_eq!(obj.optional_bool("lastUpdated", &mut diag), None);

        let err = diag.finish().unwrap_err();
        assert_eq!(err.errors()[0].kind, DiagnosticKind::MalformedField);
        assert_eq!(err.errors()[0].message, "expected a boolean, found string");
    }

    #[test]
    fn test_read_document_rejects_non_object_root() {
        let mut diag = Diagnostics::new();

        assert!(read_document(&json!(["title"]), &mut diag).is_none());
        assert!(diag.has_structural_errors());
    }

    #[test]
    fn test_read_document_without_theme_uses_defaults() {
        let mut diag = Diagnostics::new();

        let draft = read_document(&json!({ "title": "Docs" }), &mut diag).unwrap();

        assert!(!diag.has_errors());
        assert_eq!(draft.site.title, "Docs");
        assert!(draft.nav.is_empty());
        assert!(draft.sidebar.is_empty());
        assert_eq!(draft.search, SearchConfig::default());
    }
}
