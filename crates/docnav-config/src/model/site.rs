//! Site metadata and theme settings.

use serde::Serialize;

/// Language used when the document does not set `lang`.
pub const DEFAULT_LANG: &str = "en-US";

/// Site-wide metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMeta {
    /// Site title (never empty in a validated model).
    pub title: String,
    /// Site description for `<meta name="description">`.
    pub description: String,
    /// BCP-47 language tag.
    pub lang: String,
    /// Whether pages show a "last updated" timestamp.
    pub last_updated: bool,
}

/// Colour scheme a logo variant applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Light colour scheme.
    Light,
    /// Dark colour scheme.
    Dark,
}

impl Appearance {
    /// All appearance modes in display order.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Config key for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Logo asset per appearance mode.
///
/// Only declared modes are present; a declared mode always maps to a
/// non-empty asset path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Logo {
    #[serde(skip_serializing_if = "Option::is_none")]
    light: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dark: Option<String>,
}

impl Logo {
    pub(crate) fn set(&mut self, mode: Appearance, asset: String) {
        match mode {
            Appearance::Light => self.light = Some(asset),
            Appearance::Dark => self.dark = Some(asset),
        }
    }

    /// Asset path for `mode`, if declared.
    #[must_use]
    pub fn get(&self, mode: Appearance) -> Option<&str> {
        match mode {
            Appearance::Light => self.light.as_deref(),
            Appearance::Dark => self.dark.as_deref(),
        }
    }

    /// Declared modes and their asset paths.
    pub fn declared(&self) -> impl Iterator<Item = (Appearance, &str)> {
        Appearance::ALL
            .into_iter()
            .filter_map(|mode| self.get(mode).map(|asset| (mode, asset)))
    }
}

/// Footer text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    /// Message line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Copyright line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl Footer {
    /// Whether the footer has nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.copyright.is_none()
    }
}

/// Theme settings consumed by the renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Site logo, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    /// Footer, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

/// Check a BCP-47-like language tag: a 1-8 letter primary subtag followed by
/// `-`-separated 1-8 character alphanumeric subtags.
pub(crate) fn is_language_tag(tag: &str) -> bool {
    let valid_len = |s: &str| (1..=8).contains(&s.len());
    let mut subtags = tag.split('-');
    let primary_ok = subtags
        .next()
        .is_some_and(|s| valid_len(s) && s.chars().all(|c| c.is_ascii_alphabetic()));
    primary_ok && subtags.all(|s| valid_len(s) && s.chars().all(|c| c.is_ascii_alphanumeric()))
}
