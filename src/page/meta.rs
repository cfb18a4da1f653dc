//! Frontmatter extraction.
//!
//! Two fence styles are recognized at the top of a markdown file:
//!
//! ```text
//! ---                  +++
//! title: Hello         title = "Hello"
//! date: 2024-01-01     date = 2024-01-01
//! ---                  +++
//! ```
//!
//! The YAML-like form is line based (`key: value`), not full YAML.

use anyhow::{Context, Result};
use serde_json::Value;

use super::JsonMap;

/// Frontmatter fields as a JSON object, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub fields: JsonMap,
}

impl PageMeta {
    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Split `content` into frontmatter and body.
///
/// Content without a fence yields empty metadata and the whole input as body.
pub fn extract_frontmatter(content: &str) -> Result<(PageMeta, &str)> {
    match detect_frontmatter(content) {
        Some((fm, body, true)) => Ok((parse_toml(fm)?, body)),
        Some((fm, body, false)) => Ok((parse_yaml_like(fm), body)),
        None => Ok((PageMeta::default(), content)),
    }
}

/// Returns `(frontmatter, body, is_toml)` if a fence is found.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if let Some(rest) = trimmed.strip_prefix(fence)
            && rest.starts_with(['\n', '\r'])
            && let Some((end, body_start)) = find_closing_fence(rest, fence)
        {
            let fm = rest[..end].trim();
            let body = rest[body_start..].trim_start_matches(['\r', '\n']);
            return Some((fm, body, is_toml));
        }
    }

    None
}

/// Byte range of the first line holding only `fence` (trailing blanks allowed).
/// Returns where that line starts and where the text after it begins.
fn find_closing_fence(rest: &str, fence: &str) -> Option<(usize, usize)> {
    let mut start = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == fence {
            return Some((start, start + line.len()));
        }
        start += line.len();
    }
    None
}

/// Parse `key: value` lines. Comments and lines without a colon are skipped.
fn parse_yaml_like(content: &str) -> PageMeta {
    let mut fields = JsonMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            fields.insert(key.to_string(), parse_yaml_value(value.trim()));
        }
    }

    PageMeta { fields }
}

fn parse_toml(content: &str) -> Result<PageMeta> {
    let table: toml::Table = content.parse().context("Invalid TOML frontmatter")?;
    let fields = table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect();
    Ok(PageMeta { fields })
}

/// Datetimes become their string form; everything else maps one to one.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(n) => Value::Number(n.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

/// Parse a YAML-like value string to JSON value
///
/// Supports:
/// - Quoted strings: `"a, b"`, `'x'`
/// - Booleans: `true`, `false`
/// - Null: `null`, `~`, empty
/// - Numbers: `123`, `3.14`
/// - Flow lists: `[a, b]`
/// - Strings: everything else
fn parse_yaml_value(s: &str) -> Value {
    if s.len() >= 2
        && let Some(inner) = s
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .or_else(|| s.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
    {
        return Value::String(inner.to_string());
    }

    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if s.is_empty() || s.eq_ignore_ascii_case("null") || s == "~" {
        return Value::Null;
    }

    if let Ok(n) = s.parse::<i64>() {
        return Value::Number(n.into());
    }
    // Dates such as 2024-01-01 fall through to strings
    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return Value::Number(num);
    }

    if let Some(inner) = s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return Value::Array(
            inner
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(parse_yaml_value)
                .collect(),
        );
    }

    Value::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_frontmatter() {
        let content = "---\ntitle: Hello\ndate: 2024-01-01\ntags: [a, b]\n---\n\n# Body";
        let (meta, body) = extract_frontmatter(content).unwrap();

        assert_eq!(meta.title(), Some("Hello"));
        assert_eq!(meta.fields["date"], "2024-01-01");
        assert_eq!(meta.fields["tags"], json!(["a", "b"]));
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_toml_frontmatter() {
        let content = "+++\ntitle = \"Hello\"\ndate = 2024-01-01\ntags = [\"a\", \"b\"]\n+++\n\n# Body";
        let (meta, body) = extract_frontmatter(content).unwrap();

        assert_eq!(meta.title(), Some("Hello"));
        assert_eq!(meta.fields["date"], "2024-01-01");
        assert_eq!(meta.fields["tags"], json!(["a", "b"]));
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_invalid_toml_frontmatter() {
        let content = "+++\ntitle = \n+++\n";
        assert!(extract_frontmatter(content).is_err());
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just content\n---\nnot: frontmatter";
        let (meta, body) = extract_frontmatter(content).unwrap();
        assert!(meta.fields.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_fence_is_body() {
        let content = "---\ntitle: Hello\n# Body";
        let (meta, body) = extract_frontmatter(content).unwrap();
        assert!(meta.fields.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_yaml_values() {
        let content = "---\ntitle: \"Rust: the book\"\ncount: 42\nratio: 0.5\nflag: true\nsidebar: false\nempty:\nnote: a, b\n# comment\n---\n";
        let (meta, _) = extract_frontmatter(content).unwrap();

        assert_eq!(meta.title(), Some("Rust: the book"));
        assert_eq!(meta.fields["count"], json!(42));
        assert_eq!(meta.fields["ratio"], json!(0.5));
        assert_eq!(meta.fields["flag"], json!(true));
        assert_eq!(meta.fields["sidebar"], json!(false));
        assert_eq!(meta.fields["empty"], Value::Null);
        assert_eq!(meta.fields["note"], json!("a, b"));

        let keys: Vec<_> = meta.fields.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["title", "count", "ratio", "flag", "sidebar", "empty", "note"]
        );
    }

    #[test]
    fn test_crlf_frontmatter() {
        let content = "---\r\ntitle: Hello\r\n---\r\nBody";
        let (meta, body) = extract_frontmatter(content).unwrap();
        assert_eq!(meta.title(), Some("Hello"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_closing_fence_must_be_alone() {
        let content = "---\ntitle: Hello\n----\n---foo\nmore: yes\n---  \nBody";
        let (meta, body) = extract_frontmatter(content).unwrap();
        assert_eq!(meta.title(), Some("Hello"));
        assert_eq!(meta.fields["more"], json!(true));
        assert_eq!(body, "Body");

        let (meta, body) = extract_frontmatter("+++\ntitle = \"Hi\"\n+++").unwrap();
        assert_eq!(meta.title(), Some("Hi"));
        assert_eq!(body, "");

        let content = "---\ntitle: Hello\n---- \n# Body";
        let (meta, body) = extract_frontmatter(content).unwrap();
        assert!(meta.fields.is_empty());
        assert_eq!(body, content);
    }
}
