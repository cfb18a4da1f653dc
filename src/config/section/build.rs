//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! source = "docs"
//! temp = ".quire/temp"
//!
//! [build.manifest]
//! enable = true
//! file = "pages.js"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::config::ConfigDiagnostics;

/// Source and temporary directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildConfig {
    /// Markdown source directory.
    #[config(default = "docs", inline_doc)]
    pub source: PathBuf,

    /// Directory for generated temporary modules.
    #[config(default = ".quire/temp", inline_doc)]
    pub temp: PathBuf,

    /// Pages manifest written after discovery.
    #[config(sub)]
    pub manifest: ManifestConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: "docs".into(),
            temp: ".quire/temp".into(),
            manifest: ManifestConfig::default(),
        }
    }
}

/// Pages manifest options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build.manifest")]
pub struct ManifestConfig {
    /// Write the manifest.
    #[config(inline_doc)]
    pub enable: bool,

    /// File name inside `build.temp`.
    #[config(default = "pages.js", inline_doc)]
    pub file: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            enable: true,
            file: "pages.js".into(),
        }
    }
}

impl BuildConfig {
    /// Absolute path of the manifest file. Call after path normalization.
    pub fn manifest_path(&self) -> PathBuf {
        self.temp.join(&self.manifest.file)
    }

    /// Must run before paths are made absolute.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let file = &self.manifest.file;
        let plain = matches!(
            file.components().collect::<Vec<_>>().as_slice(),
            [Component::Normal(_)]
        );
        if !plain {
            diag.error_with_hint(
                ManifestConfig::FIELDS.file,
                format!("'{}' must be a plain file name", file.display()),
                "the manifest is always written inside `build.temp`",
            );
        }
        if self.source.as_os_str().is_empty() {
            diag.error(Self::FIELDS.source, "source directory must not be empty");
        }
        if self.temp.as_os_str().is_empty() || self.temp == Path::new(".") {
            diag.error_with_hint(
                Self::FIELDS.temp,
                "temp directory must not be the project root",
                "use a dedicated directory such as \".quire/temp\"",
            );
        }
    }
}
