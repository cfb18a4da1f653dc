//! `query`: print page data as JSON.

use anyhow::Result;

use super::{QueryArgs, to_json};
use crate::config::SiteConfig;
use crate::hooks::Discovered;
use crate::page::sort_by_date;

pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let mut pages = Discovered::scan(config)?.into_pages();
    if args.sort_date {
        sort_by_date(&mut pages);
    }
    println!("{}", to_json(&pages, args.pretty)?);
    Ok(())
}
