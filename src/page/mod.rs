//! Page discovery: frontmatter, routing and page-data records.
//!
//! | Module  | Purpose                                        |
//! |---------|------------------------------------------------|
//! | `data`  | `PageData` record and date ordering            |
//! | `meta`  | `---` / `+++` frontmatter extraction           |
//! | `route` | Source path to route, page keys                |
//! | `scan`  | Parallel walk of the source directory          |

mod data;
mod meta;
mod route;
mod scan;

pub use data::{PageData, sort_by_date};
pub use scan::discover_pages;

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
