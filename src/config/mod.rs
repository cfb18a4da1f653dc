//! Site configuration management for `quire.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per top-level table
//! │   ├── build      # [build], [build.manifest]
//! │   ├── head       # head = [...]
//! │   ├── locale     # [locales."<prefix>"]
//! │   ├── markdown   # [markdown.code], [markdown.import_code]
//! │   ├── plugins    # [[plugins]]
//! │   └── theme/     # [theme], navbar and sidebar trees
//! ├── types/         # Errors, field paths, handle
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   ├── handle     # Read-only process-wide handle
//! │   └── status     # Deprecated/experimental field reporting
//! ├── profile.rs     # [profile.<name>] overlays
//! └── mod.rs         # SiteConfig
//! ```
//!
//! Loading order: read file, strip and apply the selected profile, deserialize
//! (collecting unknown keys), validate raw paths, make paths absolute, validate.

pub mod profile;
pub mod section;
pub mod types;
mod util;

use section::DEFAULT_LANG;
use util::find_config_file;

/// Locale key of the site root.
const ROOT_LOCALE: &str = "/";

pub use section::{
    BuildConfig, HeadEntry, ImportCodeConfig, Locales, MarkdownConfig, PluginConfig, ThemeConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, init_config};

use crate::{
    cli::{Cli, Commands},
    log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result, bail};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing quire.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct SiteConfig {
    /// Absolute path of the loaded file
    #[serde(skip)]
    #[config(skip)]
    pub config_path: PathBuf,

    /// Directory holding the config file
    #[serde(skip)]
    #[config(skip)]
    pub root: PathBuf,

    /// Profile applied on load (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub profile: Option<String>,

    /// Site metadata per locale
    #[config(status = hidden)]
    pub locales: Locales,

    /// Top-level site metadata, folded into `locales."/"` on load
    #[config(status = hidden)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[config(status = hidden)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[config(status = hidden)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Extra `<head>` tags
    #[config(status = hidden)]
    pub head: Vec<HeadEntry>,

    /// Markdown options
    #[config(sub)]
    pub markdown: MarkdownConfig,

    /// Theme options
    #[config(sub)]
    pub theme: ThemeConfig,

    /// Plugin invocations, in order
    #[config(status = hidden)]
    pub plugins: Vec<PluginConfig>,

    /// Build directories and pages manifest
    #[config(sub)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Assemble the configuration for `cli`.
    ///
    /// `init` gets defaults rooted at the target directory. Every other command
    /// looks for the config file in the cwd and its ancestors.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot read the current directory")?;

        if let Commands::Init { name, .. } = &cli.command {
            let root = name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name));
            let mut config = Self::default();
            config.config_path = root.join(&cli.config);
            config.finalize(&root);
            return Ok(config);
        }

        let Some(config_path) = find_config_file(&cli.config, &cwd) else {
            bail!(
                "config file '{}' not found. Run 'quire init' to create a new project.",
                cli.config.display()
            );
        };

        Self::from_path(&config_path, cli.profile.as_deref())
    }

    /// Load, finalize and validate the config at `path`.
    pub fn from_path(path: &Path, profile: Option<&str>) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content, profile)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        // Raw paths are only checkable before normalization
        config.validate_raw()?;

        config.config_path = path.to_path_buf();
        config.profile = profile.map(str::to_string);
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.finalize(&root);
        config.validate()?;

        Ok(config)
    }

    /// Apply `profile`, then deserialize, recording keys serde skipped.
    pub(crate) fn parse_with_ignored(
        content: &str,
        profile: Option<&str>,
    ) -> Result<(Self, Vec<String>)> {
        let mut table: toml::Table = content.parse().map_err(ConfigError::Toml)?;
        profile::apply_profile(&mut table, profile)?;

        let mut ignored = Vec::new();
        let mut config: Self = serde_ignored::deserialize(
            toml::Value::Table(table),
            |path: serde_ignored::Path| ignored.push(path.to_string()),
        )
        .map_err(ConfigError::Toml)?;
        config.fold_root_metadata();
        Ok((config, ignored))
    }

    /// Top-level `lang`, `title` and `description` describe the `"/"` locale.
    /// An explicit `[locales."/"]` table wins.
    fn fold_root_metadata(&mut self) {
        let lang = self.lang.take();
        let title = self.title.take();
        let description = self.description.take();
        if (lang.is_none() && title.is_none() && description.is_none())
            || self.locales.contains_key(ROOT_LOCALE)
        {
            return;
        }

        let locale = section::LocaleConfig {
            lang: lang.unwrap_or_else(|| DEFAULT_LANG.to_string()),
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
        };
        self.locales.insert(ROOT_LOCALE.to_string(), locale);
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// `path` relative to the root, or unchanged when outside it.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    fn finalize(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.config_path = normalize_path(&self.config_path);

        self.build.source = normalize_path(&root.join(&self.build.source));
        self.build.temp = normalize_path(&root.join(&self.build.temp));
        self.markdown.import_code.dir =
            normalize_path(&root.join(&self.markdown.import_code.dir));

        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Checks that need the paths as written in the file.
    fn validate_raw(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate(&mut diag);
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate the whole configuration.
    ///
    /// Errors from every section are reported together.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.collect_diagnostics(&mut diag);

        diag.print_hints_and_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    fn collect_diagnostics(&self, diag: &mut ConfigDiagnostics) {
        self.validate_field_status(diag);

        section::locale::validate_prefix_keys(self.locales.keys(), Self::FIELDS.locales, diag);
        self.markdown.validate(diag);
        self.theme.validate(diag);
        section::validate_plugins(&self.plugins, diag);
    }
}

// ============================================================================
// test helpers
// ============================================================================

/// Parse `extra` below a minimal `[locales."/"]` table. Unknown keys panic.
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[locales.\"/\"]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config, None).unwrap();
    assert!(
        ignored.is_empty(),
        "unknown keys in test config: {ignored:?}"
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
