//! Proc macros for quire.
//!
//! # Config derive macro
//!
//! Generates typed field paths, a commented TOML template and a
//! status check for every config section struct.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "markdown.import_code")]
//! /// Code import settings.
//! pub struct ImportCodeConfig {
//!     /// Alias prefix replaced by the snippets directory.
//!     #[config(default = "@snippets")]
//!     pub alias: String,
//!
//!     /// Old spelling, still honoured.
//!     #[config(status = deprecated)]
//!     pub root: Option<PathBuf>,
//! }
//!
//! // Generates:
//! // - ImportCodeConfig::FIELDS.alias -> FieldPath("markdown.import_code.alias")
//! // - ImportCodeConfig::template() / template_with_header()
//! // - ImportCodeConfig::validate_field_status(&mut diag)
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (inferred from the
//!   struct name when omitted: `ThemeConfig` → `theme`)
//!
//! Field-level:
//! - `#[config(skip)]` - not part of the TOML surface
//! - `#[config(sub)]` - nested section, rendered with its own header
//! - `#[config(name = "x")]` - custom TOML key
//! - `#[config(default = "x")]` - literal default shown in the template
//! - `#[config(inline_doc = "x")]` - trailing comment in the template
//! - `#[config(status = experimental | deprecated | not_implemented | hidden)]`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS, template() and validate_field_status().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
