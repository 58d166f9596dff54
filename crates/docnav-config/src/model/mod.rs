//! Validated configuration model.
//!
//! [`ConfigModel::build`] is the single entry point: it reads a raw
//! document, runs every check as one pass, and either returns an immutable
//! model or the complete list of problems. No partially-built model is ever
//! handed out.

mod nav;
mod search;
mod sidebar;
mod site;

use docnav_pages::PageIndex;
use serde::Serialize;
use serde_json::Value;

use crate::diagnostic::{Diagnostic, Diagnostics, ValidationError};
use crate::policy::ValidationPolicy;
use crate::read::{self, Draft, GroupDraft, SectionDraft};
use crate::validate;

pub(crate) use nav::is_root_relative;
pub use nav::{NavEntry, NavTarget};
pub use search::{ExternalSearchOptions, LocalSearchOptions, SearchConfig, SearchProvider};
pub use sidebar::{SidebarGroup, SidebarItem, SidebarSection, SidebarTree, normalize_prefix};
pub(crate) use site::is_language_tag;
pub use site::{Appearance, DEFAULT_LANG, Footer, Logo, SiteMeta, ThemeConfig};

/// Complete site navigation configuration.
///
/// Constructed only through [`ConfigModel::build`]; read-only afterwards.
/// The model is `Send + Sync` and can be shared between concurrent builds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfigModel {
    #[serde(flatten)]
    site: SiteMeta,
    #[serde(rename = "themeConfig")]
    theme: ThemeView,
}

/// Theme section as the renderer expects it: settings, nav, sidebar and
/// search side by side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
struct ThemeView {
    #[serde(flatten)]
    settings: ThemeConfig,
    nav: Vec<NavEntry>,
    sidebar: SidebarTree,
    search: SearchConfig,
}

/// Successfully built model plus non-blocking findings.
#[derive(Clone, Debug)]
pub struct Validated {
    model: ConfigModel,
    warnings: Vec<Diagnostic>,
}

impl Validated {
    /// The validated model.
    #[must_use]
    pub fn model(&self) -> &ConfigModel {
        &self.model
    }

    /// Warnings collected during validation (e.g., lenient dangling links).
    #[must_use]
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Split into model and warnings.
    #[must_use]
    pub fn into_parts(self) -> (ConfigModel, Vec<Diagnostic>) {
        (self.model, self.warnings)
    }
}

impl ConfigModel {
    /// Build and validate a model from a raw document.
    ///
    /// Structural problems (missing or mistyped fields) stop the pass before
    /// referential checks run. Referential problems are collected across the
    /// whole document. When `pages` is given, internal links and sidebar
    /// prefixes are checked against it; whether a dangling link blocks the
    /// build depends on `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] carrying every blocking diagnostic.
    pub fn build(
        raw: &Value,
        policy: &ValidationPolicy,
        pages: Option<&dyn PageIndex>,
    ) -> Result<Validated, ValidationError> {
        let mut diag = Diagnostics::new();

        let draft = read::read_document(raw, &mut diag);
        let Some(draft) = draft.filter(|_| !diag.has_structural_errors()) else {
            return Err(diag.into_error());
        };

        validate::validate(&draft, policy, pages, &mut diag);
        let warnings = diag.finish()?;

        let model = Self::from_draft(draft);
        tracing::debug!(
            nav = model.theme.nav.len(),
            sidebar_prefixes = model.theme.sidebar.len(),
            provider = model.theme.search.provider().as_str(),
            warnings = warnings.len(),
            "Built configuration model"
        );
        Ok(Validated { model, warnings })
    }

    /// Site metadata.
    #[must_use]
    pub fn site(&self) -> &SiteMeta {
        &self.site
    }

    /// Theme settings (logo, footer).
    #[must_use]
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme.settings
    }

    /// Top-bar entries in display order.
    #[must_use]
    pub fn nav(&self) -> &[NavEntry] {
        &self.theme.nav
    }

    /// Full sidebar tree.
    #[must_use]
    pub fn sidebar(&self) -> &SidebarTree {
        &self.theme.sidebar
    }

    /// Active search backend.
    #[must_use]
    pub fn search(&self) -> &SearchConfig {
        &self.theme.search
    }

    /// Sidebar groups for the page at `path` (longest-prefix match).
    ///
    /// Returns an empty slice when no registered prefix covers `path`.
    #[must_use]
    pub fn resolve_sidebar_for(&self, path: &str) -> &[SidebarGroup] {
        self.theme.sidebar.resolve(path)
    }

    /// Convert a draft that passed validation.
    fn from_draft(draft: Draft) -> Self {
        let Draft {
            site,
            theme,
            nav,
            sidebar,
            search,
        } = draft;

        let nav = nav
            .into_iter()
            .filter_map(|entry| {
                entry.target.map(|target| NavEntry {
                    label: entry.label,
                    target,
                })
            })
            .collect();

        let sections = sidebar.into_iter().map(section_from_draft).collect();

        Self {
            site,
            theme: ThemeView {
                settings: theme,
                nav,
                sidebar: SidebarTree::from_sections(sections),
                search,
            },
        }
    }
}

fn section_from_draft(section: SectionDraft) -> SidebarSection {
    let groups = section
        .groups
        .into_iter()
        .map(|group: GroupDraft| SidebarGroup {
            text: group.text,
            collapsed: group.collapsed,
            items: group
                .items
                .into_iter()
                .map(|item| SidebarItem {
                    text: item.text,
                    link: item.link,
                })
                .collect(),
        })
        .collect();
    SidebarSection::new(&section.prefix, groups)
}
