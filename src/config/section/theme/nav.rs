//! Navbar and sidebar trees.
//!
//! # Example
//!
//! ```toml
//! [theme.locales."/"]
//! navbar = [
//!     { text = "Tutorials", link = "/tutorials/" },
//!     { text = "Rust Reference", link = "/rust-reference/" },
//! ]
//!
//! [theme.locales."/".sidebar]
//! "/rust-reference/" = [
//!     { text = "Contents", link = "/rust-reference/README.md", collapsible = false },
//!     { text = "Error", link = "/rust-reference/error.md", children = [
//!         "/rust-reference/error-result.md",
//!     ] },
//! ]
//! ```
//!
//! Links are not checked here; the theme resolves them at render time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::super::locale::validate_prefix_keys;
use crate::config::{ConfigDiagnostics, FieldPath};

/// One navbar link. Order in the list is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarItem {
    pub text: String,
    pub link: String,
}

/// Sidebar: a single list, or lists keyed by path prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarConfig {
    Flat(Vec<SidebarItem>),
    ByPrefix(BTreeMap<String, Vec<SidebarItem>>),
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl SidebarConfig {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Flat(items) => items.is_empty(),
            Self::ByPrefix(map) => map.is_empty(),
        }
    }

    /// Every item, across all prefixes.
    pub fn items(&self) -> Box<dyn Iterator<Item = &SidebarItem> + '_> {
        match self {
            Self::Flat(items) => Box::new(items.iter()),
            Self::ByPrefix(map) => Box::new(map.values().flatten()),
        }
    }

    /// Prefix keys must look like `/guide/`.
    pub fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if let Self::ByPrefix(map) = self {
            validate_prefix_keys(map.keys(), field, diag);
        }
    }
}

/// A sidebar entry: a bare link, or a titled group with one level of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarItem {
    Link(String),
    Group(SidebarGroup),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroup {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// `collapsable` is accepted for older configs.
    #[serde(default, alias = "collapsable")]
    pub collapsible: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl SidebarItem {
    /// Link of the entry itself, if any.
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Link(link) => Some(link),
            Self::Group(group) => group.link.as_deref(),
        }
    }

    pub fn children(&self) -> &[String] {
        match self {
            Self::Link(_) => &[],
            Self::Group(group) => &group.children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_sidebar() {
        let sidebar: SidebarConfig =
            serde_json::from_str(r#"["/rust-kernel/rust-for-linux/"]"#).unwrap();
        assert_eq!(
            sidebar,
            SidebarConfig::Flat(vec![SidebarItem::Link(
                "/rust-kernel/rust-for-linux/".into()
            )])
        );
    }

    #[test]
    fn test_prefixed_sidebar_with_groups() {
        let sidebar: SidebarConfig = serde_json::from_str(
            r#"{
                "/rust-reference/": [
                    {"text": "Contents", "link": "/rust-reference/README.md", "collapsable": false},
                    {"text": "Error", "link": "/rust-reference/error.md",
                     "children": ["/rust-reference/error-result.md"]}
                ],
                "/tutorials/": ["/tutorials/README.md"]
            }"#,
        )
        .unwrap();

        let SidebarConfig::ByPrefix(map) = &sidebar else {
            panic!("expected prefixed sidebar");
        };
        assert_eq!(map.len(), 2);

        let reference = &map["/rust-reference/"];
        assert_eq!(reference[0].link(), Some("/rust-reference/README.md"));
        assert!(reference[0].children().is_empty());
        assert_eq!(reference[1].children(), ["/rust-reference/error-result.md"]);
        assert_eq!(sidebar.items().count(), 3);
    }

    #[test]
    fn test_group_without_link() {
        let item: SidebarItem =
            serde_json::from_str(r#"{"text": "Misc", "collapsible": true}"#).unwrap();
        let SidebarItem::Group(group) = &item else {
            panic!("expected group");
        };
        assert!(group.collapsible);
        assert_eq!(item.link(), None);
    }

    #[test]
    fn test_group_rejects_unknown_keys() {
        let typo = serde_json::from_str::<SidebarItem>(
            r#"{"text": "Kernel", "childern": ["/kernel/a.md"]}"#,
        );
        assert!(typo.is_err());

        let legacy: SidebarItem =
            serde_json::from_str(r#"{"text": "Old", "collapsable": true}"#).unwrap();
        let SidebarItem::Group(group) = legacy else {
            panic!("expected group");
        };
        assert!(group.collapsible);

        let source = r#"sidebar = { "/k/" = [{ text = "K", childern = ["/k/a.md"] }] }"#;
        assert!(toml::from_str::<toml::Table>(source).unwrap()["sidebar"]
            .clone()
            .try_into::<SidebarConfig>()
            .is_err());
    }

    #[test]
    fn test_validate_prefix_keys() {
        let sidebar: SidebarConfig =
            serde_json::from_str(r#"{"guide": ["/guide/a.md"], "/ok/": []}"#).unwrap();
        let mut diag = ConfigDiagnostics::new();
        sidebar.validate(FieldPath::new("theme.sidebar"), &mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.sidebar.\"guide\"");
    }

    #[test]
    fn test_navbar_item() {
        let nav: Vec<NavbarItem> = serde_json::from_str(
            r#"[{"text": "Tutorials", "link": "/tutorials/"}, {"text": "Rust Reference", "link": "/rust-reference/"}]"#,
        )
        .unwrap();
        assert_eq!(nav[1].text, "Rust Reference");
    }
}
