//! Validation diagnostics.
//!
//! Every problem found while building a [`ConfigModel`](crate::ConfigModel)
//! becomes a [`Diagnostic`] carrying its kind and the location in the raw
//! document. Diagnostics are collected for the whole pass and returned
//! together, either as warnings on success or inside [`ValidationError`].

use std::fmt;

use serde::Serialize;

/// Category of a validation finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A required field is absent or empty.
    MissingRequiredField,
    /// A field has the wrong type or an unparseable value.
    MalformedField,
    /// Two top-level nav entries share a label.
    DuplicateNavLabel,
    /// The same sidebar prefix is registered twice.
    DuplicateSidebarPrefix,
    /// Two items in one sidebar group point at the same page.
    DuplicateLinkInGroup,
    /// A sidebar group has no items.
    EmptySidebarGroup,
    /// A link is not root-relative (or, for nav, not an external URL).
    MalformedLink,
    /// A link or prefix points at a page that does not exist.
    DanglingLink,
    /// A search option does not belong to the selected provider.
    InvalidSearchProviderOption,
}

impl DiagnosticKind {
    /// Whether this kind means the document shape itself is unusable.
    ///
    /// Structural findings stop the build before referential checks run.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(self, Self::MissingRequiredField | Self::MalformedField)
    }

    /// Stable kebab-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "missing-required-field",
            Self::MalformedField => "malformed-field",
            Self::DuplicateNavLabel => "duplicate-nav-label",
            Self::DuplicateSidebarPrefix => "duplicate-sidebar-prefix",
            Self::DuplicateLinkInGroup => "duplicate-link-in-group",
            Self::EmptySidebarGroup => "empty-sidebar-group",
            Self::MalformedLink => "malformed-link",
            Self::DanglingLink => "dangling-link",
            Self::InvalidSearchProviderOption => "invalid-search-provider-option",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Finding category.
    pub kind: DiagnosticKind,
    /// Location in the raw document (e.g., `themeConfig.nav[1].text`).
    pub path: String,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn new(
        kind: DiagnosticKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.path, self.message, self.kind)
    }
}

/// Accumulator for one validation pass.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a blocking finding.
    pub(crate) fn error(
        &mut self,
        kind: DiagnosticKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.errors.push(Diagnostic::new(kind, path, message));
    }

    /// Record a non-blocking finding.
    pub(crate) fn warn(
        &mut self,
        kind: DiagnosticKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) {
        let diagnostic = Diagnostic::new(kind, path, message);
        tracing::warn!(kind = %diagnostic.kind, path = %diagnostic.path, "{}", diagnostic.message);
        self.warnings.push(diagnostic);
    }

    pub(crate) fn has_structural_errors(&self) -> bool {
        self.errors.iter().any(|d| d.kind.is_structural())
    }

    pub(crate) fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Finish the pass: `Ok(warnings)` when nothing blocks, otherwise the full report.
    pub(crate) fn finish(self) -> Result<Vec<Diagnostic>, ValidationError> {
        if !self.has_errors() {
            Ok(self.warnings)
        } else {
            Err(self.into_error())
        }
    }

    /// Convert everything collected so far into an error report.
    pub(crate) fn into_error(self) -> ValidationError {
        ValidationError {
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

/// Configuration rejected by validation.
///
/// Carries every blocking diagnostic from the pass, plus any warnings
/// collected alongside them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl ValidationError {
    /// Blocking diagnostics, in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Non-blocking diagnostics collected in the same pass.
    #[must_use]
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Whether any blocking diagnostic has `kind`.
    #[must_use]
    pub fn has_kind(&self, kind: DiagnosticKind) -> bool {
        self.errors.iter().any(|d| d.kind == kind)
    }

    /// Blocking diagnostics of one kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().filter(move |d| d.kind == kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        write!(
            f,
            "configuration validation failed with {count} error{}",
            if count == 1 { "" } else { "s" }
        )?;
        for diagnostic in &self.errors {
            write!(f, "\n  {diagnostic}")?;
        }
        for diagnostic in &self.warnings {
            write!(f, "\n  warning: {diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_structural_kinds() {
        assert!(DiagnosticKind::MissingRequiredField.is_structural());
        assert!(DiagnosticKind::MalformedField.is_structural());
        assert!(!DiagnosticKind::DuplicateNavLabel.is_structural());
        assert!(!DiagnosticKind::DanglingLink.is_structural());
    }

    #[test]
    fn test_diagnostic_display_includes_path_and_kind() {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::DuplicateNavLabel,
            "themeConfig.nav[1].text",
            "duplicate nav label \"Guide\"",
        );

        assert_eq!(
            diagnostic.to_string(),
            "[themeConfig.nav[1].text] duplicate nav label \"Guide\" (duplicate-nav-label)"
        );
    }

    #[test]
    fn test_finish_without_errors_returns_warnings() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn(DiagnosticKind::DanglingLink, "a", "missing page");

        let warnings = diagnostics.finish().unwrap();

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, DiagnosticKind::DanglingLink);
    }

    #[test]
    fn test_finish_with_errors_keeps_everything() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.error(DiagnosticKind::MalformedLink, "a", "bad");
        diagnostics.error(DiagnosticKind::EmptySidebarGroup, "b", "empty");
        diagnostics.warn(DiagnosticKind::DanglingLink, "c", "missing");

        let err = diagnostics.finish().unwrap_err();

        assert_eq!(err.errors().len(), 2);
        assert_eq!(err.warnings().len(), 1);
        assert!(err.has_kind(DiagnosticKind::EmptySidebarGroup));
        assert!(!err.has_kind(DiagnosticKind::DanglingLink));
    }

    #[test]
    fn test_validation_error_display_lists_every_error() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.error(DiagnosticKind::MalformedLink, "x", "first");
        diagnostics.error(DiagnosticKind::MalformedLink, "y", "second");

        let msg = diagnostics.finish().unwrap_err().to_string();

        assert!(msg.starts_with("configuration validation failed with 2 errors"));
        assert!(msg.contains("[x] first"));
        assert!(msg.contains("[y] second"));
    }

    #[test]
    fn test_validation_error_display_lists_warnings() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.error(DiagnosticKind::EmptySidebarGroup, "sidebar", "empty group");
        diagnostics.warn(
            DiagnosticKind::DanglingLink,
            "nav[0].link",
            "no page at /guide/nonexistent",
        );

        let msg = diagnostics.finish().unwrap_err().to_string();

        assert!(msg.starts_with("configuration validation failed with 1 error\n"));
        assert!(msg.contains("[sidebar] empty group"));
        assert!(msg.contains(
            "warning: [nav[0].link] no page at /guide/nonexistent (dangling-link)"
        ));
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_value(DiagnosticKind::DuplicateLinkInGroup).unwrap();
        assert_eq!(json, "duplicate-link-in-group");
    }
}
