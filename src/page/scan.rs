//! Markdown page discovery.

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use super::data::PageData;
use super::meta::extract_frontmatter;
use super::route::{route_for, to_slash};
use crate::config::section::{DEFAULT_LANG, Locales, locale_for};

/// Collect every `.md` file under `source` (hidden entries skipped), sorted.
pub fn collect_markdown_files(source: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(source)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    files.sort();
    files
}

/// Read and parse every page under `source`, in path order.
pub fn discover_pages(source: &Path, locales: &Locales) -> Result<Vec<PageData>> {
    if !source.is_dir() {
        bail!("source directory '{}' does not exist", source.display());
    }

    collect_markdown_files(source)
        .par_iter()
        .map(|path| load_page(source, path, locales))
        .collect()
}

fn load_page(source: &Path, path: &Path, locales: &Locales) -> Result<PageData> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let relative = path.strip_prefix(source).unwrap_or(path);
    page_from_markdown(relative, &content, locales)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Build page data from markdown `content` at `relative` (relative to the source dir).
pub fn page_from_markdown(relative: &Path, content: &str, locales: &Locales) -> Result<PageData> {
    let (meta, body) = extract_frontmatter(content)?;
    let route = route_for(relative);

    let title = meta
        .title()
        .map(str::to_string)
        .or_else(|| first_heading(body))
        .unwrap_or_default();

    let lang = meta
        .fields
        .get("lang")
        .and_then(serde_json::Value::as_str)
        .or_else(|| locale_for(locales, &route).map(|(_, locale)| locale.lang.as_str()))
        .unwrap_or(DEFAULT_LANG)
        .to_string();

    crate::debug!("page"; "{} -> {}", relative.display(), route);

    Ok(PageData::new(route, title, lang)
        .with_frontmatter(meta.fields)
        .with_file(to_slash(relative)))
}

/// Plain text of the first level-1 heading.
fn first_heading(markdown: &str) -> Option<String> {
    let mut text: Option<String> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => text = Some(String::new()),
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                return text.map(|t| t.trim().to_string());
            }
            Event::Text(s) | Event::Code(s) => {
                if let Some(text) = text.as_mut() {
                    text.push_str(&s);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::LocaleConfig;
    use tempfile::TempDir;

    fn locales() -> Locales {
        let mut locales = Locales::new();
        locales.insert("/".into(), LocaleConfig::default());
        locales.insert(
            "/zh/".into(),
            LocaleConfig {
                lang: "zh-CN".into(),
                ..Default::default()
            },
        );
        locales
    }

    #[test]
    fn test_first_heading() {
        assert_eq!(
            first_heading("intro\n\n## Sub\n\n# Hello `world`\n\n# Second"),
            Some("Hello world".to_string())
        );
        assert_eq!(first_heading("Title\n=====\n"), Some("Title".to_string()));
        assert_eq!(first_heading("## Only sub"), None);
    }

    #[test]
    fn test_title_prefers_frontmatter() {
        let page = page_from_markdown(
            Path::new("guide/intro.md"),
            "---\ntitle: From Meta\n---\n# From Heading",
            &locales(),
        )
        .unwrap();
        assert_eq!(page.title, "From Meta");
        assert_eq!(page.path, "/guide/intro.html");
        assert_eq!(page.file_path_relative.as_deref(), Some("guide/intro.md"));
        assert_eq!(page.frontmatter["title"], "From Meta");
    }

    #[test]
    fn test_title_falls_back() {
        let locales = locales();
        let page = page_from_markdown(Path::new("README.md"), "# JackOS\n\nHi", &locales).unwrap();
        assert_eq!(page.title, "JackOS");
        assert_eq!(page.path, "/");

        let page = page_from_markdown(Path::new("empty.md"), "no heading", &locales).unwrap();
        assert_eq!(page.title, "");
    }

    #[test]
    fn test_lang_from_locale() {
        let locales = locales();
        let zh = page_from_markdown(Path::new("zh/README.md"), "", &locales).unwrap();
        assert_eq!(zh.lang, "zh-CN");

        let en = page_from_markdown(Path::new("guide.md"), "", &locales).unwrap();
        assert_eq!(en.lang, "en-US");

        let own = page_from_markdown(Path::new("a.md"), "---\nlang: fr-FR\n---\n", &locales)
            .unwrap();
        assert_eq!(own.lang, "fr-FR");

        let none = page_from_markdown(Path::new("a.md"), "", &Locales::new()).unwrap();
        assert_eq!(none.lang, DEFAULT_LANG);
    }

    #[test]
    fn test_discover_pages() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir_all(docs.join("tutorials")).unwrap();
        fs::create_dir_all(docs.join(".vuepress")).unwrap();
        fs::write(docs.join("README.md"), "# Home").unwrap();
        fs::write(docs.join("tutorials/README.md"), "# Tutorials").unwrap();
        fs::write(docs.join("tutorials/intro.md"), "# Intro").unwrap();
        fs::write(docs.join("tutorials/notes.txt"), "ignored").unwrap();
        fs::write(docs.join(".vuepress/hidden.md"), "# Hidden").unwrap();

        let pages = discover_pages(&docs, &locales()).unwrap();
        let routes: Vec<_> = pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(routes, ["/", "/tutorials/", "/tutorials/intro.html"]);
        let titles: Vec<_> = pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Home", "Tutorials", "Intro"]);
    }

    #[test]
    fn test_discover_missing_source() {
        let dir = TempDir::new().unwrap();
        assert!(discover_pages(&dir.path().join("docs"), &locales()).is_err());
    }

    #[test]
    fn test_discover_reports_bad_frontmatter() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("bad.md"), "+++\ntitle = \n+++\n").unwrap();
        let err = discover_pages(&docs, &locales()).unwrap_err();
        assert!(format!("{err:#}").contains("bad.md"));
    }
}
