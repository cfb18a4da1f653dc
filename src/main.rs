//! Quire - configuration assembler for static documentation sites.

mod alias;
mod cli;
mod config;
mod hooks;
mod logger;
mod page;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    if let Commands::Check { verbose } | Commands::Prepare { verbose } = cli.command {
        logger::set_verbose(verbose);
    }

    let config = init_config(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Init { dry, .. } => cli::init::new_site(&config, *dry),
        Commands::Check { .. } => cli::check::check_config(&config),
        Commands::Show { pretty } => cli::check::show_config(&config, *pretty),
        Commands::Resolve { paths } => cli::resolve::resolve_paths(&config, paths),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Prepare { .. } => cli::prepare::prepare_site(&config),
    }
}
