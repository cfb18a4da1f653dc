//! `resolve`: apply the code import alias to paths.

use anyhow::Result;

use crate::alias::ImportAlias;
use crate::config::SiteConfig;

pub fn resolve_paths(config: &SiteConfig, paths: &[String]) -> Result<()> {
    let alias = ImportAlias::from_config(&config.markdown.import_code, config.get_root());
    crate::debug!("resolve"; "{} -> {}", alias.prefix(), alias.target());

    for path in paths {
        println!("{}", alias.resolve(path));
    }
    Ok(())
}
