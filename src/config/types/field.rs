//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path to a config key, used in diagnostics.
///
/// Generated by `#[derive(Config)]`:
///
/// ```ignore
/// diag.error(ImportCodeConfig::FIELDS.alias, "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Leak a runtime path (map keys, list indices) into a `FieldPath`.
    ///
    /// Only used while collecting diagnostics, which happens once per run.
    pub fn leak(path: String) -> Self {
        Self(Box::leak(path.into_boxed_str()))
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
