//! Logging utilities with colored output.
//!
//! Everything goes to stderr so stdout carries only command output (JSON,
//! resolved paths).
//!
//! # Example
//!
//! ```ignore
//! log!("prepare"; "wrote {} pages", count);
//! debug!("page"; "{} -> {}", path, route);
//! ```

use crossterm::{
    queue,
    terminal::{Clear, ClearType},
};
use owo_colors::{AnsiColors, OwoColorize};
use std::{
    io::{self, IsTerminal, Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// `log!("module"; "fmt", args..)` prints `[module] message`.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {
        $crate::logger::log($module, &format!($($arg)*))
    };
}

/// Like `log!`, but only with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::log!($module; $($arg)*);
        }
    };
}

pub fn log(module: &str, message: &str) {
    let err = stderr();
    let clear = err.is_terminal();
    let _ = write_line(&mut err.lock(), clear, module, message);
}

/// The line clear is only sent to a terminal.
fn write_line(out: &mut impl Write, clear: bool, module: &str, message: &str) -> io::Result<()> {
    if clear {
        queue!(out, Clear(ClearType::UntilNewLine))?;
    }
    writeln!(out, "{} {message}", colorize_prefix(module))?;
    out.flush()
}

fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    let color = match module.to_ascii_lowercase().as_str() {
        "prepare" | "init" => AnsiColors::BrightGreen,
        "check" | "page" | "nav" | "head" => AnsiColors::BrightBlue,
        "error" => AnsiColors::BrightRed,
        _ => AnsiColors::BrightYellow,
    };
    prefix.color(color).bold().to_string()
}
