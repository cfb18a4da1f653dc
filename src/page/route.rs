//! Source file to URL route mapping.
//!
//! ```text
//! docs/README.md                  -> /
//! docs/tutorials/README.md        -> /tutorials/
//! docs/tutorials/index.md         -> /tutorials/
//! docs/rust-reference/error.md    -> /rust-reference/error.html
//! ```

use rustc_hash::FxBuildHasher;
use std::hash::BuildHasher;
use std::path::{Component, Path};

/// File names that stand for their directory.
const INDEX_FILES: &[&str] = &["README.md", "index.md"];

/// Route of a markdown file, given its path relative to the source dir.
pub fn route_for(relative: &Path) -> String {
    let segments: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect();

    let Some((file, dirs)) = segments.split_last() else {
        return "/".to_string();
    };
    let file: &str = file;

    let mut route = String::with_capacity(relative.as_os_str().len() + 2);
    route.push('/');
    for dir in dirs {
        route.push_str(dir);
        route.push('/');
    }

    let is_index = INDEX_FILES
        .iter()
        .any(|name| file.eq_ignore_ascii_case(name));
    if !is_index {
        let stem = file.strip_suffix(".md").unwrap_or(file);
        route.push_str(stem);
        route.push_str(".html");
    }
    route
}

/// Stable page key: `v-` and 8 hex digits of the route hash.
pub fn page_key(route: &str) -> String {
    let hash = FxBuildHasher.hash_one(route);
    format!("v-{:08x}", hash as u32)
}

/// Relative path with `/` separators, for output.
pub fn to_slash(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
