//! `check` and `show`: report on the loaded configuration.

use anyhow::Result;

use super::to_json;
use crate::config::SiteConfig;
use crate::{debug, log};

/// Print a one-line summary. Validation already ran while loading.
pub fn check_config(config: &SiteConfig) -> Result<()> {
    log!("check"; "{}", summary(config));

    for entry in &config.head {
        debug!("head"; "{}", entry.to_html());
    }
    for line in navigation(config) {
        debug!("nav"; "{}", line);
    }
    Ok(())
}

/// Print the assembled configuration as JSON.
pub fn show_config(config: &SiteConfig, pretty: bool) -> Result<()> {
    println!("{}", to_json(config, pretty)?);
    Ok(())
}

fn summary(config: &SiteConfig) -> String {
    let plugins: Vec<_> = config.plugins.iter().map(|p| p.id()).collect();
    let profile = config
        .profile
        .as_deref()
        .map(|name| format!(" (profile `{name}`)"))
        .unwrap_or_default();

    let edit_links = if config.theme.edit_link_enabled() {
        "on"
    } else {
        "off"
    };

    format!(
        "{}{}: {} locale(s), {} head tag(s), edit links {}, plugins [{}]",
        config.config_path.display(),
        profile,
        config.locales.len(),
        config.head.len(),
        edit_links,
        plugins.join(", ")
    )
}

/// One line per locale: navbar links, then sidebar pages.
fn navigation(config: &SiteConfig) -> Vec<String> {
    let theme = &config.theme;
    config
        .locales
        .keys()
        .map(|prefix| {
            let navbar: Vec<_> = theme
                .navbar_for(prefix)
                .iter()
                .map(|item| item.link.as_str())
                .collect();
            let sidebar: Vec<_> = theme
                .sidebar_for(prefix)
                .items()
                .flat_map(|item| {
                    let children = item.children().iter().map(String::as_str);
                    item.link().into_iter().chain(children)
                })
                .collect();
            format!(
                "{prefix}: navbar [{}], sidebar [{}]",
                navbar.join(", "),
                sidebar.join(", ")
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_summary() {
        let mut config = test_parse_config(
            "[[plugins]]\nname = \"sitemap\"\nhostname = \"https://www.jackos.io/\"\n[[plugins]]\nname = \"back-to-top\"",
        );
        config.profile = Some("legacy".into());
        let text = summary(&config);
        assert!(text.contains("(profile `legacy`)"));
        assert!(text.contains("1 locale(s)"));
        assert!(text.contains("edit links on"));
        assert!(text.contains("plugins [sitemap, back-to-top]"));
    }

    #[test]
    fn test_show_json_has_sections() {
        let config = test_parse_config("[[head]]\ntag = \"meta\"\nattrs = { charset = \"utf-8\" }");
        let value: serde_json::Value =
            serde_json::from_str(&to_json(&config, false).unwrap()).unwrap();

        assert_eq!(value["locales"]["/"]["title"], "Test");
        assert_eq!(value["head"][0]["tag"], "meta");
        assert_eq!(value["markdown"]["import_code"]["alias"], "@snippets");
        assert!(value.get("root").is_none());
    }

    #[test]
    fn test_navigation_lines() {
        let config = test_parse_config(
            r#"[theme]
navbar = [{ text = "Guide", link = "/guide/" }]
sidebar = [
    "/guide/",
    { text = "Kernel", children = ["/kernel/a.md", "/kernel/b.md"] },
]
"#,
        );
        assert_eq!(
            navigation(&config),
            ["/: navbar [/guide/], sidebar [/guide/, /kernel/a.md, /kernel/b.md]"]
        );
    }
}
