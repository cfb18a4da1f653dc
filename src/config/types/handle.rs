//! Process-wide configuration handle.
//!
//! The configuration is assembled once at start-up and only read afterwards.

use crate::config::SiteConfig;
use std::sync::{Arc, OnceLock};

static CONFIG: OnceLock<Arc<SiteConfig>> = OnceLock::new();

/// Store the assembled configuration. Later calls keep the first value.
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    Arc::clone(CONFIG.get_or_init(|| Arc::new(config)))
}
