//! Site initialization.
//!
//! Writes a commented `quire.toml`, the docs and snippets directories and
//! ignore patterns for the temp directory.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::section::{BuildConfig, LocaleConfig, MarkdownConfig, ThemeConfig};
use crate::config::SiteConfig;
use crate::log;

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Create a new site at the config's root.
///
/// If `dry_run` is true, only prints the config template to stdout.
pub fn new_site(config: &SiteConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    if config.config_path.exists() {
        bail!(
            "'{}' already exists, refusing to overwrite it",
            config.config_path.display()
        );
    }

    let root = config.get_root();
    for dir in [&config.build.source, &config.markdown.import_code.dir] {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    }

    fs::write(&config.config_path, generate_config_template()).with_context(|| {
        format!("Failed to write config file '{}'", config.config_path.display())
    })?;

    let readme = config.build.source.join("README.md");
    if !readme.exists() {
        fs::write(&readme, "# Hello\n")
            .with_context(|| format!("Failed to write '{}'", readme.display()))?;
    }

    write_ignore_files(root, &config.root_relative(&config.build.temp))?;

    log!("init"; "site initialized in {}", root.display());
    Ok(())
}

/// Generate quire.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Quire configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    // Top-level keys must precede every table
    out.push_str("# Extra tags for every page's <head>\n");
    out.push_str("# head = [\n#     [\"meta\", { name = \"theme-color\", content = \"#3264FF\" }],\n# ]\n\n");

    out.push_str(&LocaleConfig::template_with_header());
    out.push('\n');
    out.push_str(&MarkdownConfig::template_with_header());
    out.push('\n');
    out.push_str(&ThemeConfig::template_with_header());
    out.push('\n');
    out.push_str(&BuildConfig::template_with_header());
    out.push('\n');

    out.push_str("# [[plugins]]\n# name = \"sitemap\"\n# hostname = \"https://example.com/\"\n");
    out
}

/// Append ignore patterns, creating the file when missing.
fn write_ignore_files(root: &Path, temp_dir: &Path) -> Result<()> {
    let pattern = format!("/{}/", temp_dir.display());

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        let existing = fs::read_to_string(&path).unwrap_or_default();
        if existing.lines().any(|line| line.trim() == pattern) {
            continue;
        }

        let mut content = existing;
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&pattern);
        content.push('\n');
        fs::write(&path, content)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }

    Ok(())
}
