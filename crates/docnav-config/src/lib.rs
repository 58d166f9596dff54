//! Site navigation configuration for docnav.
//!
//! Turns a nested configuration document (site metadata, top nav, per-section
//! sidebar, search provider, footer) into a validated, immutable
//! [`ConfigModel`] for the renderer.
//!
//! # Loading
//!
//! [`SiteConfigFile::load`] finds `docnav.toml`, `docnav.json`, `docnav.yaml`
//! or `docnav.yml` in the current directory or its parents, parses it into a
//! generic document and applies [`CliSettings`]. [`SiteConfigFile::build`]
//! then runs validation, optionally against a page index.
//!
//! An optional `docnav` section controls validation and is removed before the
//! document is validated:
//!
//! ```toml
//! [docnav]
//! pagesDir = "docs"
//! strict = true
//! allowEmptyGroups = false
//! ```
//!
//! ## Environment Variable Expansion
//!
//! Search credentials support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `themeConfig.search.options.endpoint`
//! - `themeConfig.search.options.apiKey`
//! - `themeConfig.search.options.appId`
//!
//! # Validation
//!
//! [`ConfigModel::build`] works on an already-parsed [`serde_json::Value`]:
//!
//! ```
//! use docnav_config::{ConfigModel, ValidationPolicy};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "title": "A2W: Lucas",
//!     "themeConfig": {
//!         "nav": [{ "text": "Guide", "link": "/guide/getting-started" }],
//!         "sidebar": {
//!             "/guide/": [{
//!                 "text": "Introduction",
//!                 "items": [{ "text": "Getting Started", "link": "/guide/getting-started" }]
//!             }]
//!         }
//!     }
//! });
//!
//! let validated = ConfigModel::build(&raw, &ValidationPolicy::default(), None).unwrap();
//! let groups = validated.model().resolve_sidebar_for("/guide/getting-started");
//! assert_eq!(groups[0].text, "Introduction");
//! ```

mod diagnostic;
mod expand;
mod model;
mod policy;
mod read;
mod validate;

use std::path::{Path, PathBuf};

use docnav_pages::PageIndex;
use serde::Deserialize;
use serde_json::Value;

pub use diagnostic::{Diagnostic, DiagnosticKind, ValidationError};
pub use model::{
    Appearance, ConfigModel, DEFAULT_LANG, ExternalSearchOptions, Footer, LocalSearchOptions,
    Logo, NavEntry, NavTarget, SearchConfig, SearchProvider, SidebarGroup, SidebarItem,
    SidebarSection, SidebarTree, SiteMeta, ThemeConfig, Validated, normalize_prefix,
};
pub use policy::{Strictness, ValidationPolicy};

/// Configuration filenames searched for, in priority order.
const CONFIG_FILENAMES: [&str; 4] = ["docnav.toml", "docnav.json", "docnav.yaml", "docnav.yml"];

/// Key of the tool settings section inside the site document.
const SETTINGS_KEY: &str = "docnav";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override dangling-link strictness (`true` = strict).
    pub strict: Option<bool>,
    /// Override empty sidebar group acceptance.
    pub allow_empty_groups: Option<bool>,
    /// Override pages directory.
    pub pages_dir: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicit file not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// No configuration file in the directory or its parents.
    #[error("No docnav configuration file found in {} or its parents", .0.display())]
    NoConfigFile(PathBuf),
    /// I/O error.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing error.
    #[error("TOML parse error in {}: {source}", path.display())]
    Toml {
        /// File being parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },
    /// JSON parsing error.
    #[error("JSON parse error in {}: {source}", path.display())]
    Json {
        /// File being parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// YAML parsing error.
    #[error("YAML parse error in {}: {source}", path.display())]
    Yaml {
        /// File being parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_yaml::Error,
    },
    /// Extension is not `toml`, `json`, `yaml` or `yml`.
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Invalid `docnav` settings section.
    #[error("Invalid [docnav] section: {0}")]
    Settings(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`themeConfig.search.options.apiKey`").
        field: String,
        /// Error message (e.g., "${`SEARCH_API_KEY`} not set").
        message: String,
    },
}

/// Supported file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    fn parse(self, content: &str, path: &Path) -> Result<Value, ConfigError> {
        let path = path.to_path_buf();
        match self {
            Self::Toml => {
                toml::from_str(content).map_err(|source| ConfigError::Toml { path, source })
            }
            Self::Json => {
                serde_json::from_str(content).map_err(|source| ConfigError::Json { path, source })
            }
            Self::Yaml => {
                serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml { path, source })
            }
        }
    }
}

/// Raw `docnav` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct SettingsRaw {
    pages_dir: Option<PathBuf>,
    strict: Option<bool>,
    allow_empty_groups: Option<bool>,
}

/// Loaded configuration document, ready to validate.
#[derive(Debug)]
pub struct SiteConfigFile {
    /// Site document without the `docnav` section, credentials expanded.
    raw: Value,
    /// Validation policy from the file and CLI.
    policy: ValidationPolicy,
    /// Markdown source directory used as the page index.
    pages_dir: Option<PathBuf>,
    /// Path to the config file, if loaded from disk.
    config_path: Option<PathBuf>,
}

impl SiteConfigFile {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for a `docnav.*` file in the current directory and parents.
    ///
    /// CLI settings are applied after loading, taking precedence over the
    /// file's `docnav` section.
    ///
    /// # Errors
    ///
    /// Returns error if no file is found, or reading, parsing or expansion fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        } else {
            let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
                path: PathBuf::from("."),
                source,
            })?;
            discover_config(&cwd).ok_or(ConfigError::NoConfigFile(cwd))?
        };

        let mut config = Self::load_from_file(&path)?;
        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        Ok(config)
    }

    /// Wrap an already-parsed document.
    ///
    /// Relative `pagesDir` values resolve against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if the `docnav` section is invalid or expansion fails.
    pub fn from_value(mut raw: Value, base_dir: &Path) -> Result<Self, ConfigError> {
        let settings = take_settings(&mut raw)?;
        expand::expand_search_options(&mut raw)?;

        let policy = ValidationPolicy {
            strictness: strictness(settings.strict.unwrap_or(true)),
            allow_empty_groups: settings.allow_empty_groups.unwrap_or(false),
        };

        Ok(Self {
            raw,
            policy,
            pages_dir: settings.pages_dir.map(|dir| base_dir.join(dir)),
            config_path: None,
        })
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = Format::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw = format.parse(&content, path)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_value(raw, config_dir)?;
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), ?format, "Loaded configuration file");
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(strict) = settings.strict {
            self.policy.strictness = strictness(strict);
        }
        if let Some(allow_empty_groups) = settings.allow_empty_groups {
            self.policy.allow_empty_groups = allow_empty_groups;
        }
        if let Some(pages_dir) = &settings.pages_dir {
            self.pages_dir = Some(pages_dir.clone());
        }
    }

    /// Validate the document into a [`ConfigModel`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] with every blocking diagnostic.
    pub fn build(&self, pages: Option<&dyn PageIndex>) -> Result<Validated, ValidationError> {
        ConfigModel::build(&self.raw, &self.policy, pages)
    }

    /// Site document as it will be validated.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Effective validation policy.
    #[must_use]
    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Markdown source directory, if configured.
    #[must_use]
    pub fn pages_dir(&self) -> Option<&Path> {
        self.pages_dir.as_deref()
    }

    /// Path to the config file, if loaded from disk.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

fn strictness(strict: bool) -> Strictness {
    if strict {
        Strictness::Strict
    } else {
        Strictness::Lenient
    }
}

/// Remove and parse the `docnav` section.
fn take_settings(raw: &mut Value) -> Result<SettingsRaw, ConfigError> {
    let Some(section) = raw
        .as_object_mut()
        .and_then(|root| root.remove(SETTINGS_KEY))
    else {
        return Ok(SettingsRaw::default());
    };
    serde_json::from_value(section).map_err(|e| ConfigError::Settings(e.to_string()))
}

/// Search for a config file in `start` and its parents.
fn discover_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILENAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
