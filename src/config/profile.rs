//! `[profile.<name>]` overlays.
//!
//! A profile is a partial config merged over the base before deserialization:
//!
//! ```toml
//! [locales."/"]
//! title = "JackOS"
//!
//! [profile.legacy.theme]
//! edit_links = false
//! ```
//!
//! Tables merge key by key, recursively. Arrays and scalars replace.

use toml::Table;

use super::ConfigError;

/// Key holding the overlay tables.
pub const PROFILE_KEY: &str = "profile";

/// Remove the `profile` table from `root` and merge the named overlay over it.
///
/// Without a name the overlays are only removed.
pub fn apply_profile(root: &mut Table, name: Option<&str>) -> Result<(), ConfigError> {
    let profiles = match root.remove(PROFILE_KEY) {
        Some(toml::Value::Table(profiles)) => profiles,
        Some(_) => {
            return Err(ConfigError::Validation(
                "`profile` must be a table of overlays".into(),
            ));
        }
        None => Table::new(),
    };

    let Some(name) = name else {
        return Ok(());
    };

    match profiles.get(name) {
        Some(toml::Value::Table(overlay)) => {
            merge(root, overlay);
            Ok(())
        }
        Some(_) => Err(ConfigError::Validation(format!(
            "`profile.{name}` must be a table"
        ))),
        None => {
            let available = if profiles.is_empty() {
                "none".to_string()
            } else {
                let mut names: Vec<_> = profiles.keys().map(String::as_str).collect();
                names.sort_unstable();
                names.join(", ")
            };
            Err(ConfigError::UnknownProfile(name.to_string(), available))
        }
    }
}

/// Deep-merge `overlay` into `base`.
pub fn merge(base: &mut Table, overlay: &Table) {
    for (key, value) in overlay {
        match (base.get_mut(key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                merge(base_table, overlay_table);
            }
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}
