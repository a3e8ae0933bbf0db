//! Output formatting for CLI commands.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

pub mod diagnostic;
pub mod table;

pub use diagnostic::RuleDiagnostic;

/// Print an `error:` line to stderr.
pub fn print_error(message: impl Display) {
    eprintln!(
        "{} {}",
        "error:".if_supports_color(Stream::Stderr, |t| t.red()),
        message
    );
}
