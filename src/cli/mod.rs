//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod prepare;
pub mod query;
pub mod resolve;

pub use args::{Cli, Commands, QueryArgs};

use anyhow::Result;
use serde::Serialize;

/// Serialize `value` as compact or pretty JSON.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
