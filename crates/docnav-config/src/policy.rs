//! Validation policy.

/// How findings that depend on the page set are classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Dangling links block the build.
    #[default]
    Strict,
    /// Dangling links are reported as warnings.
    Lenient,
}

/// Knobs that decide which findings block a build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Dangling-link classification.
    pub strictness: Strictness,
    /// Accept sidebar groups with no items.
    pub allow_empty_groups: bool,
}

impl ValidationPolicy {
    /// Strict policy: dangling links and empty groups are errors.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Lenient policy: dangling links are warnings.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strictness: Strictness::Lenient,
            ..Self::default()
        }
    }

    /// Whether dangling links block the build.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let policy = ValidationPolicy::default();

        assert!(policy.is_strict());
        assert!(!policy.allow_empty_groups);
        assert_eq!(policy, ValidationPolicy::strict());
    }

    #[test]
    fn test_lenient() {
        assert!(!ValidationPolicy::lenient().is_strict());
    }
}
