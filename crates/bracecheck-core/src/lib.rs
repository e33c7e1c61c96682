//! Bracket matching checker.
//!
//! This library validates that the `()`, `[]` and `{}` delimiters in a text
//! buffer are properly nested and matched, reporting the first error it finds.
//! It performs no I/O: loading files and choosing exit codes is left to the
//! caller.

mod bracket;
mod checker;
mod config;
mod error;
mod stack;

pub use bracket::{Bracket, Delim, classify, closer_for};
pub use checker::{BraceChecker, Scan, ScanStats};
pub use config::{Config, ConfigError, MAX_CAPACITY, StackMode};
pub use error::{BraceError, CheckResult, SourceLocation, render_report};
pub use stack::{BoundedStack, DEFAULT_CAPACITY, StackError};
