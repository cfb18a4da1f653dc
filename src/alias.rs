//! Code import alias rewriting.
//!
//! `@[code](@snippets/kernel/main.rs)` in markdown names a file relative to
//! the snippets directory. [`ImportAlias::resolve`] turns the import path into
//! an absolute one before the markdown renderer reads the file.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::config::ImportCodeConfig;
use crate::utils::path::normalize_path;

/// Prefix and the absolute directory it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAlias {
    prefix: String,
    target: String,
}

impl ImportAlias {
    pub fn new(prefix: impl Into<String>, target: &Path) -> Self {
        Self {
            prefix: prefix.into(),
            target: target.to_string_lossy().into_owned(),
        }
    }

    /// Build from `[markdown.import_code]`. A relative `dir` is taken from `root`.
    pub fn from_config(config: &ImportCodeConfig, root: &Path) -> Self {
        let target: PathBuf = normalize_path(&root.join(&config.dir));
        Self::new(config.alias.as_str(), &target)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Replace a leading alias with the target directory.
    ///
    /// Plain string prefix replacement: `@snippetsfoo` becomes `<target>foo`.
    /// Anything not starting with the alias is returned as is.
    pub fn resolve<'a>(&self, path: &'a str) -> Cow<'a, str> {
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) if !self.prefix.is_empty() => {
                let mut out = String::with_capacity(self.target.len() + rest.len());
                out.push_str(&self.target);
                out.push_str(rest);
                Cow::Owned(out)
            }
            _ => Cow::Borrowed(path),
        }
    }
}
