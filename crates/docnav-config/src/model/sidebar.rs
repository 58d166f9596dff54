//! Sidebar tree and prefix resolution.
//!
//! A [`SidebarTree`] maps URL-path prefixes to ordered groups of links. The
//! sidebar shown for a page is the one registered under the longest prefix
//! that the page's route starts with.
//!
//! # Prefix Matching
//!
//! Prefixes are stored with a trailing `/`. A prefix `P` matches a route `R`
//! when `R` starts with `P`, or when `R + "/" == P` (so `/guide` is covered by
//! `/guide/`). Matching is segment-aware: `/guide/` never matches
//! `/guidelines`. The root prefix `/` matches every route.

use docnav_pages::normalize_route;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Single link in a sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    /// Display label.
    pub text: String,
    /// Root-relative link as written in configuration.
    pub link: String,
}

/// Named, collapsible cluster of sidebar links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,
    /// Initial disclosure state.
    pub collapsed: bool,
    /// Links in display order.
    pub items: Vec<SidebarItem>,
}

/// Groups registered under one prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarSection {
    prefix: String,
    groups: Vec<SidebarGroup>,
}

impl SidebarSection {
    /// Create a section. `prefix` is normalised to end with `/`.
    #[must_use]
    pub fn new(prefix: &str, groups: Vec<SidebarGroup>) -> Self {
        Self {
            prefix: normalize_prefix(prefix),
            groups,
        }
    }

    /// Normalised prefix (always ends with `/`).
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Groups in display order.
    #[must_use]
    pub fn groups(&self) -> &[SidebarGroup] {
        &self.groups
    }

    /// Whether this section's prefix covers `route` (already normalised).
    fn matches(&self, route: &str) -> bool {
        prefix_matches(&self.prefix, route)
    }
}

/// Mapping from path prefix to sidebar groups.
///
/// Sections keep registration order. In a validated model every prefix is
/// unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarTree {
    sections: Vec<SidebarSection>,
}

impl SidebarTree {
    pub(crate) fn from_sections(sections: Vec<SidebarSection>) -> Self {
        Self { sections }
    }

    /// Whether no prefix is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of registered prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Sections in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, SidebarSection> {
        self.sections.iter()
    }

    /// Groups registered under exactly `prefix` (after normalisation).
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        let prefix = normalize_prefix(prefix);
        self.sections
            .iter()
            .find(|s| s.prefix == prefix)
            .map(SidebarSection::groups)
    }

    /// Section whose prefix is the longest match for `path`.
    #[must_use]
    pub fn section_for(&self, path: &str) -> Option<&SidebarSection> {
        let route = normalize_route(path);
        self.sections
            .iter()
            .filter(|section| section.matches(&route))
            .max_by_key(|section| section.prefix.len())
    }

    /// Prefix selected for `path`, if any.
    #[must_use]
    pub fn prefix_for(&self, path: &str) -> Option<&str> {
        self.section_for(path).map(SidebarSection::prefix)
    }

    /// Sidebar groups for the page at `path`.
    ///
    /// Uses longest-prefix match; returns an empty slice when no prefix
    /// covers the path.
    #[must_use]
    pub fn resolve(&self, path: &str) -> &[SidebarGroup] {
        self.section_for(path)
            .map(SidebarSection::groups)
            .unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a SidebarTree {
    type Item = &'a SidebarSection;
    type IntoIter = std::slice::Iter<'a, SidebarSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for SidebarTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.prefix, &section.groups)?;
        }
        map.end()
    }
}

/// Normalise a sidebar prefix to end with `/`.
#[must_use]
pub fn normalize_prefix(raw: &str) -> String {
    if raw.ends_with('/') {
        raw.to_owned()
    } else {
        format!("{raw}/")
    }
}

/// Segment-aware prefix test. `prefix` must end with `/`.
fn prefix_matches(prefix: &str, route: &str) -> bool {
    route.starts_with(prefix) || (route.len() + 1 == prefix.len() && prefix.starts_with(route))
}
