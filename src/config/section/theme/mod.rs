//! `[theme]` section configuration.
//!
//! Options handed to the site theme. Per-locale options live under
//! `[theme.locales."<prefix>"]` and take precedence over the theme-level
//! `navbar` and `sidebar`.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! logo = "/images/logo_black.svg"
//! repo = "JackKuo-tw/JackOS"
//! docs_dir = "docs"
//!
//! [theme.locales."/"]
//! select_language_name = "English"
//! edit_link_text = "Edit this page on GitHub"
//! ```

mod nav;

pub use nav::{NavbarItem, SidebarConfig};

use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::locale::{is_path_prefix, validate_prefix_keys};
use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeConfig {
    /// Logo shown in the navbar.
    #[config(inline_doc)]
    pub logo: Option<String>,

    /// Logo for dark mode.
    #[config(inline_doc)]
    pub logo_dark: Option<String>,

    /// Repository, `owner/name` or a full URL.
    #[config(inline_doc)]
    pub repo: Option<String>,

    /// Label of the repository link.
    #[config(inline_doc)]
    pub repo_label: Option<String>,

    /// Show the "edit this page" link.
    #[config(inline_doc)]
    pub edit_link: bool,

    /// Old spelling of `edit_link`.
    #[config(status = deprecated)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_links: Option<bool>,

    /// Repository holding the docs, when it differs from `repo`.
    #[config(inline_doc)]
    pub docs_repo: Option<String>,

    /// Branch used by edit links.
    #[config(default = "main", inline_doc)]
    pub docs_branch: String,

    /// Docs directory inside the repository.
    #[config(inline_doc)]
    pub docs_dir: Option<String>,

    /// Show the last-updated timestamp.
    #[config(inline_doc)]
    pub last_updated: bool,

    #[config(status = hidden)]
    pub navbar: Vec<NavbarItem>,

    #[config(status = hidden)]
    pub sidebar: SidebarConfig,

    /// Per-locale theme options, keyed like `[locales]`.
    #[config(status = hidden)]
    pub locales: BTreeMap<String, ThemeLocaleConfig>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            logo: None,
            logo_dark: None,
            repo: None,
            repo_label: None,
            edit_link: true,
            edit_links: None,
            docs_repo: None,
            docs_branch: "main".into(),
            docs_dir: None,
            last_updated: true,
            navbar: Vec::new(),
            sidebar: SidebarConfig::default(),
            locales: BTreeMap::new(),
        }
    }
}

/// Theme options for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeLocaleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_language_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link_text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub navbar: Vec<NavbarItem>,
    #[serde(skip_serializing_if = "SidebarConfig::is_empty")]
    pub sidebar: SidebarConfig,
}

impl ThemeConfig {
    /// Whether edit links are shown. The deprecated spelling wins when set.
    pub fn edit_link_enabled(&self) -> bool {
        self.edit_links.unwrap_or(self.edit_link)
    }

    /// Navbar for the locale at `prefix`, falling back to the theme-level one.
    pub fn navbar_for(&self, prefix: &str) -> &[NavbarItem] {
        match self.locales.get(prefix) {
            Some(locale) if !locale.navbar.is_empty() => &locale.navbar,
            _ => &self.navbar,
        }
    }

    /// Sidebar for the locale at `prefix`, falling back to the theme-level one.
    pub fn sidebar_for(&self, prefix: &str) -> &SidebarConfig {
        match self.locales.get(prefix) {
            Some(locale) if !locale.sidebar.is_empty() => &locale.sidebar,
            _ => &self.sidebar,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_prefix_keys(self.locales.keys(), Self::FIELDS.locales, diag);
        self.sidebar.validate(Self::FIELDS.sidebar, diag);

        for (prefix, locale) in &self.locales {
            if !is_path_prefix(prefix) {
                continue;
            }
            let field = FieldPath::leak(format!("theme.locales.\"{prefix}\".sidebar"));
            locale.sidebar.validate(field, diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let theme = &config.theme;
        assert!(theme.logo.is_none());
        assert!(theme.edit_link_enabled());
        assert!(theme.last_updated);
        assert_eq!(theme.docs_branch, "main");
        assert!(theme.navbar.is_empty());
        assert!(theme.sidebar.is_empty());
    }

    #[test]
    fn test_locale_options() {
        let config = test_parse_config(
            r#"[theme]
logo = "/images/logo_black.svg"
logo_dark = "/images/logo_white.svg"
repo = "JackKuo-tw/JackOS"
docs_dir = "docs"

[theme.locales."/"]
select_text = "Languages"
select_language_name = "English"
navbar = [
    { text = "Tutorials", link = "/tutorials/" },
    { text = "Rust Kernel", link = "/rust-kernel/" },
]

[theme.locales."/".sidebar]
"/tutorials/" = ["/tutorials/README.md"]
"#,
        );
        let theme = &config.theme;
        assert_eq!(theme.logo_dark.as_deref(), Some("/images/logo_white.svg"));

        let root = &theme.locales["/"];
        assert_eq!(root.select_language_name.as_deref(), Some("English"));
        assert_eq!(theme.navbar_for("/").len(), 2);
        assert!(matches!(theme.sidebar_for("/"), SidebarConfig::ByPrefix(_)));
    }

    #[test]
    fn test_theme_level_fallback() {
        let config = test_parse_config(
            r#"[theme]
sidebar = ["/rust-kernel/rust-for-linux/"]
navbar = [{ text = "Home", link = "/" }]

[theme.locales."/zh/"]
select_text = "语言"
"#,
        );
        let theme = &config.theme;
        assert_eq!(theme.navbar_for("/zh/")[0].text, "Home");
        assert_eq!(theme.sidebar_for("/zh/").items().count(), 1);
        assert_eq!(theme.sidebar_for("/missing/").items().count(), 1);
    }

    #[test]
    fn test_deprecated_edit_links() {
        let config = test_parse_config("[theme]\nedit_links = false");
        assert!(!config.theme.edit_link_enabled());

        let mut diag = ConfigDiagnostics::new();
        config.theme.validate_field_status(&mut diag);
        assert!(!diag.has_errors());
        let warned: Vec<_> = diag.warnings().map(|f| f.as_str()).collect();
        assert_eq!(warned, vec!["theme.edit_links"]);
    }

    #[test]
    fn test_validate_locale_keys() {
        let config = test_parse_config(
            "[theme.locales.zh]\nselect_text = \"x\"\n[theme.locales.\"/en/\".sidebar]\nguide = []",
        );
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["theme.locales.\"zh\"", "theme.locales.\"/en/\".sidebar.\"guide\""]
        );
    }

    #[test]
    fn test_template_hides_trees() {
        let template = ThemeConfig::template_with_header();
        assert!(template.contains("[theme]"));
        assert!(template.contains("docs_branch = \"main\""));
        assert!(template.contains("# logo = \"\"  # Logo shown in the navbar.\n"));
        assert_eq!(template.matches("Logo shown in the navbar.").count(), 1);
        assert!(!template.contains("navbar ="));
        assert!(!template.contains("sidebar ="));
        assert!(!template.contains("locales"));
    }

    #[test]
    fn test_template_deprecated_bool_placeholder() {
        let template = ThemeConfig::template();
        assert!(template.contains("# edit_links = false\n"));
        assert!(template.contains("# (deprecated)"));

        // Uncommenting the placeholder still yields a valid config
        let uncommented = template.replace("# edit_links = false", "edit_links = false");
        let parsed: ThemeConfig = toml::from_str(&uncommented).unwrap();
        assert_eq!(parsed.edit_links, Some(false));
    }
}
