//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Typed config field paths                     |
//! | `handle` | Global read-only configuration handle        |
//! | `status` | Field status validation                      |

mod error;
mod field;
mod handle;
mod status;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::init_config;
pub use status::{FieldStatus, check_field_status};
