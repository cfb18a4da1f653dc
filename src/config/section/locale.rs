//! `[locales]` configuration.
//!
//! # Example
//!
//! ```toml
//! [locales."/"]
//! lang = "en-US"
//! title = "JackOS"
//! description = "Programming and OS Tutorials"
//!
//! [locales."/zh/"]
//! lang = "zh-CN"
//! title = "JackOS"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Locale map keyed by URL path prefix.
pub type Locales = BTreeMap<String, LocaleConfig>;

/// Language used for pages outside every configured locale.
pub const DEFAULT_LANG: &str = "en-US";

/// Site metadata for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "locales.\"/\"")]
pub struct LocaleConfig {
    /// Language tag (BCP 47).
    #[config(default = "en-US", inline_doc)]
    pub lang: String,

    /// Site title.
    #[config(inline_doc)]
    pub title: String,

    /// Site description.
    #[config(inline_doc)]
    pub description: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.into(),
            title: String::new(),
            description: String::new(),
        }
    }
}

/// Locale whose key is the longest prefix of `route`.
pub fn locale_for<'a>(locales: &'a Locales, route: &str) -> Option<(&'a str, &'a LocaleConfig)> {
    locales
        .iter()
        .filter(|(prefix, _)| route.starts_with(prefix.as_str()))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(prefix, locale)| (prefix.as_str(), locale))
}

/// Check that every key looks like `/` or `/xx/`.
///
/// `field` is the map being checked (`locales`, `theme.locales`).
pub fn validate_prefix_keys<'a>(
    keys: impl IntoIterator<Item = &'a String>,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    for key in keys {
        if !is_path_prefix(key) {
            diag.error_with_hint(
                FieldPath::leak(format!("{}.\"{}\"", field.as_str(), key)),
                format!("path prefix '{key}' must start and end with '/'"),
                format!("use \"/{}/\"", key.trim_matches('/')),
            );
        }
    }
}

#[inline]
pub fn is_path_prefix(key: &str) -> bool {
    key.starts_with('/') && key.ends_with('/')
}
