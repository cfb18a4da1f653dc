//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Quire documentation site configuration tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: quire.toml)
    #[arg(short = 'C', long, global = true, default_value = "quire.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Apply the `[profile.<NAME>]` overlay from the config file
    #[arg(short, long, global = true, value_name = "NAME")]
    pub profile: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented config template
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the config
    #[command(visible_alias = "c")]
    Check {
        /// List head tags and per-locale navigation
        #[arg(short = 'V', long)]
        verbose: bool,
    },

    /// Print the assembled configuration as JSON
    Show {
        /// Pretty-print JSON output
        #[arg(short = 'P', long)]
        pretty: bool,
    },

    /// Rewrite code import paths using the configured alias
    #[command(visible_alias = "r")]
    Resolve {
        /// Import paths, e.g. `@snippets/foo/bar.rs`
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print page data of every markdown page
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Discover pages and write the pages manifest
    #[command(visible_alias = "p")]
    Prepare {
        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Sort by frontmatter `date`, newest first
    #[arg(short = 's', long)]
    pub sort_date: bool,

    /// Pretty-print JSON output
    #[arg(short = 'P', long)]
    pub pretty: bool,
}
