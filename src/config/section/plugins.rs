//! `[[plugins]]` list.
//!
//! Each entry names a plugin and carries its options. Order is preserved and
//! is the only ordering the generator applies.
//!
//! # Example
//!
//! ```toml
//! [[plugins]]
//! name = "sitemap"
//! hostname = "https://www.jackos.io/"
//!
//! [[plugins]]
//! name = "back-to-top"
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// One plugin invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum PluginConfig {
    Sitemap(SitemapOptions),
    GoogleAnalytics(AnalyticsOptions),
    Git(GitOptions),
    BackToTop,
    MediumZoom(MediumZoomOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapOptions {
    /// Absolute site URL prepended to every route.
    pub hostname: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsOptions {
    /// Measurement id, e.g. `G-XXXXXXX`.
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitOptions {
    pub created_time: bool,
    pub updated_time: bool,
    pub contributors: bool,
}

impl Default for GitOptions {
    fn default() -> Self {
        Self {
            created_time: true,
            updated_time: true,
            contributors: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediumZoomOptions {
    /// CSS selector of zoomable images.
    pub selector: String,
}

impl Default for MediumZoomOptions {
    fn default() -> Self {
        Self {
            selector: ":not(a) > img".into(),
        }
    }
}

impl PluginConfig {
    /// Name as written in the config.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Sitemap(_) => "sitemap",
            Self::GoogleAnalytics(_) => "google-analytics",
            Self::Git(_) => "git",
            Self::BackToTop => "back-to-top",
            Self::MediumZoom(_) => "medium-zoom",
        }
    }

    fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        match self {
            Self::Sitemap(options) => {
                if let Err(message) = check_hostname(&options.hostname) {
                    diag.error_with_hint(
                        field,
                        message,
                        "use an absolute URL such as \"https://example.com/\"",
                    );
                }
            }
            Self::GoogleAnalytics(options) if options.id.trim().is_empty() => {
                diag.error(field, "analytics id must not be empty");
            }
            _ => {}
        }
    }
}

fn check_hostname(hostname: &str) -> Result<(), String> {
    let url = url::Url::parse(hostname)
        .map_err(|err| format!("invalid sitemap hostname '{hostname}': {err}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!(
            "sitemap hostname '{hostname}' must use http or https"
        ));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(format!("sitemap hostname '{hostname}' has no host"));
    }
    Ok(())
}

/// Check options of every plugin. A plugin listed twice is only a hint.
pub fn validate_plugins(plugins: &[PluginConfig], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();
    for (i, plugin) in plugins.iter().enumerate() {
        let field = FieldPath::leak(format!("plugins[{i}]"));
        plugin.validate(field, diag);
        if !seen.insert(plugin.id()) {
            diag.hint(
                field,
                format!("plugin `{}` is listed more than once", plugin.id()),
            );
        }
    }
}
