//! Configuration section definitions.
//!
//! Each module corresponds to a section in `quire.toml`:
//!
//! | Module     | TOML Section   | Purpose                               |
//! |------------|----------------|---------------------------------------|
//! | `build`    | `[build]`      | Source/temp dirs, pages manifest      |
//! | `head`     | `head`         | Extra `<head>` tags                   |
//! | `locale`   | `[locales]`    | Per-locale site metadata              |
//! | `markdown` | `[markdown]`   | Code blocks, code import alias        |
//! | `plugins`  | `[[plugins]]`  | Plugin invocations                    |
//! | `theme`    | `[theme]`      | Theme options, navbar, sidebar        |

pub mod build;
pub mod head;
pub mod locale;
pub mod markdown;
pub mod plugins;
pub mod theme;

pub use build::BuildConfig;
pub use head::HeadEntry;
pub use locale::{DEFAULT_LANG, LocaleConfig, Locales, locale_for};
pub use markdown::{ImportCodeConfig, MarkdownConfig};
pub use plugins::{PluginConfig, validate_plugins};
pub use theme::ThemeConfig;
