//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading `quire.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML in config file")]
    Toml(#[from] toml::de::Error),

    #[error("profile `{0}` is not defined, available: {1}")]
    UnknownProfile(String, String),

    #[error("invalid config: {0}")]
    Validation(String),

    // No #[from]: source() would print the diagnostics twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// A field-scoped validation error.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {} {}", self.field.as_str().cyan().bold(), self.message)?;
        match &self.hint {
            Some(hint) => write!(f, "\n    {} {hint}", "help:".yellow()),
            None => Ok(()),
        }
    }
}

/// Non-fatal findings, printed before errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoteKind {
    Deprecated,
    Experimental,
    Hint,
}

#[derive(Debug, Clone)]
struct Note {
    kind: NoteKind,
    field: FieldPath,
    message: String,
}

/// Everything validation found, errors and notes alike.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    notes: Vec<Note>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_error(&mut self, field: FieldPath, message: String, hint: Option<String>) {
        self.errors.push(ConfigDiagnostic {
            field,
            message,
            hint,
        });
    }

    fn push_note(&mut self, kind: NoteKind, field: FieldPath, message: String) {
        self.notes.push(Note {
            kind,
            field,
            message,
        });
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push_error(field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push_error(field, message.into(), Some(hint.into()));
    }

    /// A deprecated field was set.
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push_note(NoteKind::Deprecated, field, message.into());
    }

    /// An experimental field was set.
    pub fn experimental_hint(&mut self, field: FieldPath) {
        self.push_note(NoteKind::Experimental, field, String::new());
    }

    pub fn hint(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push_note(NoteKind::Hint, field, message.into());
    }

    fn notes_of(&self, kind: NoteKind) -> impl Iterator<Item = &Note> + '_ {
        self.notes.iter().filter(move |note| note.kind == kind)
    }

    /// Print deprecations, then experimental fields, then hints.
    pub fn print_hints_and_warnings(&self) {
        if self.notes_of(NoteKind::Deprecated).next().is_some() {
            crate::log!("warning"; "deprecated fields in use:");
            for note in self.notes_of(NoteKind::Deprecated) {
                eprintln!("- {}: {}", note.field.as_str(), note.message);
            }
        }
        if self.notes_of(NoteKind::Experimental).next().is_some() {
            crate::log!("hint"; "experimental fields in use:");
            for note in self.notes_of(NoteKind::Experimental) {
                eprintln!("- {}", note.field.as_str());
            }
        }
        for note in self.notes_of(NoteKind::Hint) {
            crate::log!("hint"; "{}: {}", note.field.as_str(), note.message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Deprecated fields that were set.
    #[cfg(test)]
    pub fn warnings(&self) -> impl Iterator<Item = FieldPath> + '_ {
        self.notes_of(NoteKind::Deprecated).map(|note| note.field)
    }

    #[cfg(test)]
    pub fn hints(&self) -> impl Iterator<Item = (FieldPath, &str)> + '_ {
        self.notes_of(NoteKind::Hint)
            .map(|note| (note.field, note.message.as_str()))
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        let noun = if count == 1 { "error" } else { "errors" };
        write!(f, "{} ({count} {noun})", "invalid configuration".red().bold())?;
        for err in &self.errors {
            write!(f, "\n{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("quire.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("failed to read"));
        assert!(display.contains("quire.toml"));

        let profile_err = ConfigError::UnknownProfile("blog".into(), "legacy".into());
        let display = format!("{profile_err}");
        assert!(display.contains("`blog`"));
        assert!(display.contains("legacy"));
    }

    #[test]
    fn test_diagnostics_into_result() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("theme.edit_links"), "use edit_link");
        diag.hint(FieldPath::new("plugins"), "listed twice");
        assert!(!diag.has_errors());
        assert!(diag.into_result().is_ok());

        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(FieldPath::new("locales"), "bad key", "use `/`");
        let err = diag.into_result().unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].hint.as_deref(), Some("use `/`"));
    }

    #[test]
    fn test_diagnostics_display_counts_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("a"), "first");
        diag.error(FieldPath::new("b"), "second");
        let text = diag.to_string();
        assert!(text.contains("first"));
        assert!(text.contains("second"));
        assert!(text.contains("2 errors"));
        assert!(text.find("first") < text.find("second"));
    }
}
