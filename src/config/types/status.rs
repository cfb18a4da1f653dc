//! Field status reporting.
//!
//! The `Config` derive calls into this module for fields marked experimental,
//! deprecated or not implemented, when the user set them.

use super::FieldPath;
use crate::config::ConfigDiagnostics;

/// Field status for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)] // variants are built by `#[derive(Config)]`
pub enum FieldStatus {
    Experimental,
    NotImplemented,
    Deprecated,
}

impl FieldStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Experimental => "experimental",
            Self::NotImplemented => "not implemented",
            Self::Deprecated => "deprecated",
        }
    }
}

/// Report a field whose value differs from its default.
pub fn check_field_status(field_path: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    let path = FieldPath::leak(field_path.to_string());
    match status {
        FieldStatus::NotImplemented => diag.error_with_hint(
            path,
            format!("this field is {}", status.label()),
            "remove this field or wait for a future release",
        ),
        FieldStatus::Deprecated => diag.warn(
            path,
            format!("this field is {} and will be removed", status.label()),
        ),
        FieldStatus::Experimental => diag.experimental_hint(path),
    }
}
