//! Page-data records handed to client-side code.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::JsonMap;
use super::route::page_key;
use crate::utils::date::compare_dates;

/// Data of one page, serialized in camelCase:
///
/// ```json
/// {
///   "key": "v-8daa1a0e",
///   "path": "/tutorials/",
///   "title": "Tutorials",
///   "lang": "en-US",
///   "frontmatter": {},
///   "filePathRelative": "tutorials/README.md"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub key: String,
    pub path: String,
    pub title: String,
    pub lang: String,
    pub frontmatter: JsonMap,
    pub file_path_relative: Option<String>,
}

impl PageData {
    /// Page at `path`; the key is derived from the route.
    pub fn new(path: impl Into<String>, title: impl Into<String>, lang: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            key: page_key(&path),
            path,
            title: title.into(),
            lang: lang.into(),
            frontmatter: JsonMap::new(),
            file_path_relative: None,
        }
    }

    pub fn with_frontmatter(mut self, frontmatter: JsonMap) -> Self {
        self.frontmatter = frontmatter;
        self
    }

    pub fn with_file(mut self, relative: impl Into<String>) -> Self {
        self.file_path_relative = Some(relative.into());
        self
    }

    /// Frontmatter `date`, if it is a string.
    pub fn date(&self) -> Option<&str> {
        self.frontmatter.get("date").and_then(serde_json::Value::as_str)
    }
}

/// Newest first. Pages without a usable date keep their relative order at the end.
pub fn sort_by_date(pages: &mut [PageData]) {
    pages.sort_by(compare_pages);
}

fn compare_pages(a: &PageData, b: &PageData) -> Ordering {
    compare_dates(a.date(), b.date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dated(path: &str, date: Option<&str>) -> PageData {
        let mut frontmatter = JsonMap::new();
        if let Some(date) = date {
            frontmatter.insert("date".into(), json!(date));
        }
        PageData::new(path, "", "en-US").with_frontmatter(frontmatter)
    }

    #[test]
    fn test_serialize_camel_case() {
        let page = PageData::new("/tutorials/", "Tutorials", "en-US").with_file("tutorials/README.md");
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(value["path"], "/tutorials/");
        assert_eq!(value["filePathRelative"], "tutorials/README.md");
        assert_eq!(value["frontmatter"], json!({}));
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            ["key", "path", "title", "lang", "frontmatter", "filePathRelative"]
        );
    }

    #[test]
    fn test_sort_by_date_newest_first_and_stable() {
        let mut pages = vec![
            dated("/a.html", None),
            dated("/b.html", Some("2023-01-01")),
            dated("/c.html", Some("garbage")),
            dated("/d.html", Some("2024-01-01")),
            dated("/e.html", None),
        ];
        sort_by_date(&mut pages);

        let paths: Vec<_> = pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, ["/d.html", "/b.html", "/a.html", "/c.html", "/e.html"]);
    }

    #[test]
    fn test_sort_by_date_with_offsets() {
        let mut pages = vec![
            dated("/undated.html", None),
            dated("/utc.html", Some("2024-01-01T03:00:00Z")),
            dated("/shanghai.html", Some("2024-01-01T10:00:00.000+08:00")),
            dated("/older.html", Some("2023-12-31")),
        ];
        sort_by_date(&mut pages);

        let paths: Vec<_> = pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, ["/utc.html", "/shanghai.html", "/older.html", "/undated.html"]);
    }

    #[test]
    fn test_non_string_date_is_missing() {
        let mut frontmatter = JsonMap::new();
        frontmatter.insert("date".into(), json!(20240101));
        let page = PageData::new("/", "", "en-US").with_frontmatter(frontmatter);
        assert_eq!(page.date(), None);
    }
}
