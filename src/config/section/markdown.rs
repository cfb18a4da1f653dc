//! `[markdown]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [markdown.code]
//! line_numbers = false
//!
//! [markdown.import_code]
//! alias = "@snippets"
//! dir = "../snippets"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;

/// Markdown processing options handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "markdown")]
pub struct MarkdownConfig {
    /// Code block rendering.
    #[config(sub)]
    pub code: CodeConfig,

    /// `@[code](...)` import resolution.
    #[config(sub)]
    pub import_code: ImportCodeConfig,
}

impl MarkdownConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.import_code.validate(diag);
    }
}

/// Code block settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "markdown.code")]
pub struct CodeConfig {
    /// Show line numbers in rendered code blocks.
    #[config(inline_doc)]
    pub line_numbers: bool,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self { line_numbers: true }
    }
}

/// Code import settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "markdown.import_code")]
pub struct ImportCodeConfig {
    /// Prefix in import paths that stands for the snippets directory.
    #[config(default = "@snippets", inline_doc)]
    pub alias: String,

    /// Snippets directory, relative to the config file.
    #[config(default = "snippets", inline_doc)]
    pub dir: PathBuf,
}

impl Default for ImportCodeConfig {
    fn default() -> Self {
        Self {
            alias: "@snippets".into(),
            dir: "snippets".into(),
        }
    }
}

impl ImportCodeConfig {
    /// The alias must not be able to match a resolved (absolute) path,
    /// otherwise rewriting would not be idempotent.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.alias.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.alias,
                "alias must not be empty",
                "use a marker such as \"@snippets\"",
            );
        } else if self.alias.starts_with(['/', '\\', '.']) {
            diag.error_with_hint(
                Self::FIELDS.alias,
                format!("alias '{}' looks like a path", self.alias),
                "start the alias with a marker character such as '@'",
            );
        }
    }
}
