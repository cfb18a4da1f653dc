//! `head` entries: extra tags emitted into every page's `<head>`.
//!
//! Entries are passed through as written. Tag names and attributes are not
//! checked; a malformed entry surfaces when the page builder renders it.
//!
//! # Example
//!
//! ```toml
//! head = [
//!     ["meta", { name = "theme-color", content = "#3264FF" }],
//!     ["link", { rel = "icon", href = "/images/logo_black.svg" }],
//!     ["script", {}, "console.log('hi')"],
//! ]
//!
//! # or as an array of tables
//! [[head]]
//! tag = "meta"
//! attrs = { name = "apple-mobile-web-app-capable", content = "yes" }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Write;

use crate::page::JsonMap;

/// One `<head>` tag descriptor. Attributes keep the order they were written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawHeadEntry")]
pub struct HeadEntry {
    pub tag: String,
    #[serde(skip_serializing_if = "JsonMap::is_empty")]
    pub attrs: JsonMap,
    /// Inner text for non-void tags (`<script>`, `<style>`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Accepted input shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawHeadEntry {
    WithContent(String, JsonMap, String),
    Tuple(String, JsonMap),
    Bare((String,)),
    Table {
        tag: String,
        #[serde(default)]
        attrs: JsonMap,
        #[serde(default)]
        content: Option<String>,
    },
}

impl From<RawHeadEntry> for HeadEntry {
    fn from(raw: RawHeadEntry) -> Self {
        let (tag, attrs, content) = match raw {
            RawHeadEntry::WithContent(tag, attrs, content) => (tag, attrs, Some(content)),
            RawHeadEntry::Tuple(tag, attrs) => (tag, attrs, None),
            RawHeadEntry::Bare((tag,)) => (tag, JsonMap::new(), None),
            RawHeadEntry::Table {
                tag,
                attrs,
                content,
            } => (tag, attrs, content),
        };
        Self {
            tag,
            attrs,
            content,
        }
    }
}

/// Tags rendered without a closing tag.
const VOID_TAGS: &[&str] = &["base", "link", "meta"];

impl HeadEntry {
    /// Render as an HTML fragment. Attribute values are escaped, content is not.
    ///
    /// `true` renders a bare attribute name and `false` drops the attribute.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(32 + self.attrs.len() * 24);
        html.push('<');
        html.push_str(&self.tag);
        for (key, value) in &self.attrs {
            match value {
                Value::Bool(true) => {
                    let _ = write!(html, " {key}");
                }
                Value::Bool(false) | Value::Null => {}
                Value::String(s) => {
                    let _ = write!(html, " {key}=\"{}\"", escape_attr(s));
                }
                other => {
                    let _ = write!(html, " {key}=\"{}\"", escape_attr(&other.to_string()));
                }
            }
        }
        html.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) && self.content.is_none() {
            return html;
        }

        if let Some(content) = &self.content {
            html.push_str(content);
        }
        let _ = write!(html, "</{}>", self.tag);
        html
    }
}

fn escape_attr(value: &str) -> std::borrow::Cow<'_, str> {
    if !value.contains(['&', '"', '<', '>']) {
        return value.into();
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out.into()
}
