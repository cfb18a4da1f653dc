//! Pages manifest (`export default [...]`).

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{BuildConfig, SiteConfig};
use crate::log;
use crate::page::{PageData, discover_pages};

/// Pages found by discovery, before the manifest is written.
#[derive(Debug)]
pub struct Discovered {
    pages: Vec<PageData>,
}

/// Pages after the manifest hook ran.
#[derive(Debug)]
pub struct Prepared {
    pages: Vec<PageData>,
    manifest: Option<PathBuf>,
    written: bool,
}

impl Discovered {
    pub fn new(pages: Vec<PageData>) -> Self {
        Self { pages }
    }

    /// Discover every page under `build.source`.
    pub fn scan(config: &SiteConfig) -> Result<Self> {
        let pages = discover_pages(&config.build.source, &config.locales)?;
        Ok(Self::new(pages))
    }

    pub fn pages(&self) -> &[PageData] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<PageData> {
        self.pages
    }

    /// Run the manifest hook. Consumes the discovery stage.
    pub fn prepare(self, build: &BuildConfig) -> Result<Prepared> {
        if !build.manifest.enable {
            crate::debug!("prepare"; "manifest disabled");
            return Ok(Prepared {
                pages: self.pages,
                manifest: None,
                written: false,
            });
        }

        let path = build.manifest_path();
        let module = render_module(&self.pages)?;
        let written = write_if_changed(&path, &module)?;

        if written {
            log!("prepare"; "wrote {} pages to {}", self.pages.len(), path.display());
        }

        Ok(Prepared {
            pages: self.pages,
            manifest: Some(path),
            written,
        })
    }
}

impl Prepared {
    pub fn pages(&self) -> &[PageData] {
        &self.pages
    }

    /// Manifest path, `None` when the hook is disabled.
    pub fn manifest(&self) -> Option<&Path> {
        self.manifest.as_deref()
    }

    /// Whether the file content changed.
    pub const fn written(&self) -> bool {
        self.written
    }
}

/// `export default <JSON array of page data>`.
pub fn render_module(pages: &[PageData]) -> Result<String> {
    let json = serde_json::to_string(pages).context("failed to serialize page data")?;
    Ok(format!("export default {json}"))
}

/// Write `content` unless the file already holds exactly that. Returns whether it wrote.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}
