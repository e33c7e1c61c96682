//! Check results and their rendering.

use std::fmt;

use thiserror::Error;

/// A source location (line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// 1-indexed line number.
    pub line: usize,
    /// 1-indexed column number, counted in characters.
    pub column: usize,
}

impl SourceLocation {
    /// Compute line and column from a character offset in `source`.
    ///
    /// Offsets past the end of `source` resolve to the position just after
    /// the last character.
    #[must_use]
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;

        for c in source.chars().take(offset) {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The first bracket error found in a buffer.
///
/// Every variant carries the zero-based character `position` of the
/// offending bracket and the bracket itself as `found`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BraceError {
    /// A closer appeared with no opener pending.
    #[error("Unmatched brace at character {position}: No opening brace for {found}.")]
    UnmatchedCloser { position: usize, found: char },

    /// A closer did not match the innermost pending opener.
    #[error("Unmatched brace at character {position}: Found {found} expecting {expected}.")]
    MismatchedPair {
        position: usize,
        found: char,
        /// The closer that would have matched the innermost opener.
        expected: char,
    },

    /// The buffer ended with openers still pending; `found` is the innermost
    /// one, reported at its own position.
    #[error(
        "Unmatched brace at character {position}: No closing brace for {found}, expecting {expected}."
    )]
    UnclosedOpener {
        position: usize,
        found: char,
        expected: char,
    },

    /// Nesting depth exceeded the bounded stack's capacity.
    #[error(
        "Nesting too deep at character {position}: {found} exceeds the stack capacity of {capacity}."
    )]
    StackOverflow {
        position: usize,
        found: char,
        capacity: usize,
    },
}

impl BraceError {
    /// Zero-based character offset of the offending bracket.
    #[must_use]
    pub const fn position(&self) -> usize {
        match *self {
            Self::UnmatchedCloser { position, .. }
            | Self::MismatchedPair { position, .. }
            | Self::UnclosedOpener { position, .. }
            | Self::StackOverflow { position, .. } => position,
        }
    }

    /// The offending bracket character.
    #[must_use]
    pub const fn found(&self) -> char {
        match *self {
            Self::UnmatchedCloser { found, .. }
            | Self::MismatchedPair { found, .. }
            | Self::UnclosedOpener { found, .. }
            | Self::StackOverflow { found, .. } => found,
        }
    }

    /// The closer that was expected, if there is one.
    #[must_use]
    pub const fn expected(&self) -> Option<char> {
        match *self {
            Self::MismatchedPair { expected, .. } | Self::UnclosedOpener { expected, .. } => {
                Some(expected)
            }
            Self::UnmatchedCloser { .. } | Self::StackOverflow { .. } => None,
        }
    }
}

/// Outcome of checking one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    /// Every bracket is matched and properly nested.
    Valid,
    /// The first error found during the scan.
    Invalid(BraceError),
}

impl CheckResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The error, if the buffer was invalid.
    #[must_use]
    pub const fn error(&self) -> Option<&BraceError> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }
}

impl From<BraceError> for CheckResult {
    fn from(error: BraceError) -> Self {
        Self::Invalid(error)
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "Valid: All the braces match."),
            Self::Invalid(error) => write!(f, "Invalid: {error}"),
        }
    }
}

/// Render a result with the offending source line and a caret under the
/// bracket.
///
/// Tabs before the bracket are repeated in the caret padding so the caret
/// lines up however wide the terminal renders them. `source` must be the
/// buffer the result was produced from.
#[must_use]
pub fn render_report(result: &CheckResult, source: &str) -> String {
    use std::fmt::Write;

    let Some(error) = result.error() else {
        return result.to_string();
    };

    let location = SourceLocation::from_offset(source, error.position());
    let source_line = source.lines().nth(location.line - 1).unwrap_or("");

    let mut output = String::new();
    let _ = writeln!(output, "{location}: {result}");
    let _ = writeln!(output, "  |");
    let _ = writeln!(output, "{:>3} | {source_line}", location.line);
    let padding: String = source_line
        .chars()
        .take(location.column - 1)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let _ = write!(output, "  | {padding}^");

    output
}
