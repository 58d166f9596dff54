//! Top navigation bar entries.

use serde::{Serialize, Serializer};

/// URL schemes accepted for external nav targets.
const EXTERNAL_SCHEMES: [&str; 3] = ["https://", "http://", "mailto:"];

/// Destination of a nav entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Root-relative site path (e.g., `/guide/getting-started`).
    Internal(String),
    /// Absolute URL leaving the site.
    External(String),
}

impl NavTarget {
    /// Classify a link, returning `None` when it is neither root-relative nor
    /// an external URL.
    ///
    /// Protocol-relative links (`//host/path`) are rejected.
    #[must_use]
    pub fn parse(link: &str) -> Option<Self> {
        if is_root_relative(link) {
            Some(Self::Internal(link.to_owned()))
        } else if EXTERNAL_SCHEMES
            .iter()
            .any(|scheme| link.len() > scheme.len() && link.starts_with(scheme))
        {
            Some(Self::External(link.to_owned()))
        } else {
            None
        }
    }

    /// Link as written in configuration.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Internal(link) | Self::External(link) => link,
        }
    }

    /// Internal path, if this target stays on the site.
    #[must_use]
    pub fn internal_path(&self) -> Option<&str> {
        match self {
            Self::Internal(path) => Some(path),
            Self::External(_) => None,
        }
    }
}

impl Serialize for NavTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Single top-bar navigation item. Order in the model is display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Display label, unique among nav entries.
    #[serde(rename = "text")]
    pub label: String,
    /// Destination.
    #[serde(rename = "link")]
    pub target: NavTarget,
}

/// Whether `link` is a root-relative path (`/...` but not `//...`).
pub(crate) fn is_root_relative(link: &str) -> bool {
    link.starts_with('/') && !link.starts_with("//")
}
