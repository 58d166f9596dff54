//! Search backend selection.

use serde::Serialize;

/// Option keys accepted by the `local` provider.
pub(crate) const LOCAL_OPTION_KEYS: [&str; 2] = ["detailedView", "scope"];

/// Option keys accepted by the `external` provider.
pub(crate) const EXTERNAL_OPTION_KEYS: [&str; 4] = ["endpoint", "apiKey", "appId", "indexName"];

/// Search backend identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// In-browser index built at site build time.
    Local,
    /// Hosted search service.
    External,
}

impl SearchProvider {
    /// Parse a provider name as written in configuration.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "local" => Some(Self::Local),
            "external" => Some(Self::External),
            _ => None,
        }
    }

    /// Config name of the provider.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::External => "external",
        }
    }

    /// Option keys this provider accepts.
    pub(crate) const fn option_keys(self) -> &'static [&'static str] {
        match self {
            Self::Local => &LOCAL_OPTION_KEYS,
            Self::External => &EXTERNAL_OPTION_KEYS,
        }
    }

    /// Provider that owns `key`, if any.
    pub(crate) fn owning(key: &str) -> Option<Self> {
        [Self::Local, Self::External]
            .into_iter()
            .find(|provider| provider.option_keys().contains(&key))
    }
}

/// Options for the `local` provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSearchOptions {
    /// Show result excerpts in the search dialog.
    pub detailed_view: bool,
    /// Restrict the index to pages under this root-relative prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Options for the `external` provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSearchOptions {
    /// Service endpoint (`http://` or `https://`).
    pub endpoint: String,
    /// Search-only API key.
    pub api_key: String,
    /// Application identifier, when the service requires one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Index to query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
}

/// Active search backend with its options. Exactly one provider is active.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "provider", content = "options", rename_all = "lowercase")]
pub enum SearchConfig {
    /// Local in-browser search.
    Local(LocalSearchOptions),
    /// Hosted search service.
    External(ExternalSearchOptions),
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::Local(LocalSearchOptions::default())
    }
}

impl SearchConfig {
    /// Selected provider.
    #[must_use]
    pub fn provider(&self) -> SearchProvider {
        match self {
            Self::Local(_) => SearchProvider::Local,
            Self::External(_) => SearchProvider::External,
        }
    }
}
