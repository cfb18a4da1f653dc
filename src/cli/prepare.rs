//! `prepare`: discover pages and run the manifest hook.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::hooks::Discovered;
use crate::log;

pub fn prepare_site(config: &SiteConfig) -> Result<()> {
    let discovered = Discovered::scan(config)?;
    log!(
        "prepare";
        "found {} pages in {}",
        discovered.pages().len(),
        config.root_relative(&config.build.source).display()
    );

    let prepared = discovered.prepare(&config.build)?;
    match prepared.manifest() {
        Some(path) if !prepared.written() => log!(
            "prepare";
            "{} unchanged ({} pages)",
            config.root_relative(path).display(),
            prepared.pages().len()
        ),
        Some(_) => {}
        None => log!("prepare"; "pages manifest disabled"),
    }
    Ok(())
}
