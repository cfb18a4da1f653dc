//! Post-discovery hooks.
//!
//! The only hook writes the pages manifest: a module exporting the data of
//! every discovered page for client-side code. The stages are types, so the
//! manifest is written at most once per discovery:
//!
//! ```text
//! Discovered::scan(&config)? ──prepare(&config.build)?──▶ Prepared
//! ```

mod manifest;

pub use manifest::Discovered;
