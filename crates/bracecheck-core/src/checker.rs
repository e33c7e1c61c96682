//! Single-pass bracket matching.

use tracing::{debug, trace, warn};

use crate::bracket::{Bracket, Delim, classify};
use crate::config::{Config, ConfigError, StackMode};
use crate::error::{BraceError, CheckResult};
use crate::stack::{BoundedStack, StackError};

/// Counters collected while scanning one buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Openers pushed onto the stack.
    pub pushes: usize,
    /// Openers popped by a matching closer.
    pub pops: usize,
    /// Deepest nesting reached.
    pub max_depth: usize,
    /// Characters consumed before the scan finished or stopped.
    pub scanned: usize,
}

/// A result together with the counters of the scan that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    /// The first error found, or `Valid`.
    pub result: CheckResult,
    /// Counters for the scan.
    pub stats: ScanStats,
}

/// An opener waiting for its closer.
#[derive(Debug, Clone, Copy)]
struct Pending {
    bracket: Bracket,
    position: usize,
}

/// Checks that the brackets in a buffer are matched and properly nested.
///
/// The checker holds only its configuration. Every scan uses a fresh stack,
/// so one checker can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct BraceChecker {
    config: Config,
}

impl BraceChecker {
    /// Create a checker with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`Config::validate`].
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Check `text`, stopping at the first error.
    #[must_use]
    pub fn check(&self, text: &str) -> CheckResult {
        self.scan(text).result
    }

    /// Check `text` and report scan counters alongside the result.
    #[must_use]
    pub fn scan(&self, text: &str) -> Scan {
        let mut stack = match self.config.stack {
            StackMode::Bounded => {
                BoundedStack::new(self.config.capacity).unwrap_or_else(|error| {
                    warn!(%error, "scanning with on-demand stack storage");
                    BoundedStack::growable(self.config.capacity)
                })
            }
            StackMode::Unbounded => BoundedStack::unbounded(),
        };
        let mut stats = ScanStats::default();

        let result = scan_with(&mut stack, text, &mut stats);

        debug!(
            valid = result.is_valid(),
            pushes = stats.pushes,
            pops = stats.pops,
            max_depth = stats.max_depth,
            scanned = stats.scanned,
            "scan finished"
        );

        Scan { result, stats }
    }
}

fn scan_with(stack: &mut BoundedStack<Pending>, text: &str, stats: &mut ScanStats) -> CheckResult {
    for (position, c) in text.chars().enumerate() {
        stats.scanned = position + 1;

        match classify(c) {
            Some(Delim::Open(bracket)) => {
                if let Err(StackError::Overflow { capacity }) =
                    stack.push(Pending { bracket, position })
                {
                    return BraceError::StackOverflow {
                        position,
                        found: c,
                        capacity,
                    }
                    .into();
                }
                stats.pushes += 1;
                stats.max_depth = stats.max_depth.max(stack.len());
                trace!(position, opener = %c, depth = stack.len(), "push");
            }
            Some(Delim::Close(bracket)) => {
                let Some(top) = stack.peek() else {
                    return BraceError::UnmatchedCloser { position, found: c }.into();
                };
                if top.bracket != bracket {
                    return BraceError::MismatchedPair {
                        position,
                        found: c,
                        expected: top.bracket.close(),
                    }
                    .into();
                }
                stack.pop();
                stats.pops += 1;
                trace!(position, closer = %c, depth = stack.len(), "pop");
            }
            None => {}
        }
    }

    stack.peek().map_or(CheckResult::Valid, |top| {
        BraceError::UnclosedOpener {
            position: top.position,
            found: top.bracket.open(),
            expected: top.bracket.close(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_CAPACITY;

    fn check(text: &str) -> CheckResult {
        BraceChecker::default().check(text)
    }

    fn bounded(capacity: usize) -> BraceChecker {
        BraceChecker::new(Config {
            capacity,
            stack: StackMode::Bounded,
        })
        .unwrap()
    }

    #[test]
    fn test_empty_is_valid() {
        assert_eq!(check(""), CheckResult::Valid);
    }

    #[test]
    fn test_no_brackets_is_valid() {
        assert_eq!(check("hello, world <> \"quoted\" 42\n"), CheckResult::Valid);
    }

    #[test]
    fn test_nested_is_valid() {
        assert_eq!(check("([{}])"), CheckResult::Valid);
        assert_eq!(check("()[]{}"), CheckResult::Valid);
        assert_eq!(check("{[()()]([])}"), CheckResult::Valid);
    }

    #[test]
    fn test_non_brackets_are_skipped() {
        assert_eq!(check("(a[b]c)"), CheckResult::Valid);
    }

    #[test]
    fn test_mismatched_pair_expects_closer_of_top() {
        assert_eq!(
            check("(]"),
            CheckResult::Invalid(BraceError::MismatchedPair {
                position: 1,
                found: ']',
                expected: ')',
            })
        );
    }

    #[test]
    fn test_interleaved_pairs_mismatch() {
        assert_eq!(
            check("([)]"),
            CheckResult::Invalid(BraceError::MismatchedPair {
                position: 2,
                found: ')',
                expected: ']',
            })
        );
    }

    #[test]
    fn test_lone_closer_is_unmatched() {
        assert_eq!(
            check(")"),
            CheckResult::Invalid(BraceError::UnmatchedCloser {
                position: 0,
                found: ')',
            })
        );
    }

    #[test]
    fn test_closer_after_balanced_prefix_is_unmatched() {
        assert_eq!(
            check("{x} y]"),
            CheckResult::Invalid(BraceError::UnmatchedCloser {
                position: 5,
                found: ']',
            })
        );
    }

    #[test]
    fn test_lone_opener_reported_at_its_position() {
        assert_eq!(
            check("("),
            CheckResult::Invalid(BraceError::UnclosedOpener {
                position: 0,
                found: '(',
                expected: ')',
            })
        );
    }

    #[test]
    fn test_unclosed_reports_innermost_opener() {
        assert_eq!(
            check("{ (a) [b"),
            CheckResult::Invalid(BraceError::UnclosedOpener {
                position: 6,
                found: '[',
                expected: ']',
            })
        );
    }

    #[test]
    fn test_first_error_wins() {
        // The stray `)` stops the scan before the unclosed `{`.
        let scan = BraceChecker::default().scan("a)b{");
        assert_eq!(
            scan.result,
            CheckResult::Invalid(BraceError::UnmatchedCloser {
                position: 1,
                found: ')',
            })
        );
        assert_eq!(scan.stats.scanned, 2);
        assert_eq!(scan.stats.pushes, 0);
    }

    #[test]
    fn test_positions_count_characters() {
        assert_eq!(
            check("héllo ]"),
            CheckResult::Invalid(BraceError::UnmatchedCloser {
                position: 6,
                found: ']',
            })
        );
    }

    #[test]
    fn test_check_is_idempotent() {
        let checker = BraceChecker::default();
        let text = "fn f() { let v = [1, 2; }";
        assert_eq!(checker.check(text), checker.check(text));
        assert!(!checker.check(text).is_valid());
    }

    #[test]
    fn test_valid_scan_balances_pushes_and_pops() {
        let scan = BraceChecker::default().scan("{[()()]}");
        assert!(scan.result.is_valid());
        assert_eq!(scan.stats.pushes, 4);
        assert_eq!(scan.stats.pops, 4);
        assert_eq!(scan.stats.max_depth, 3);
        assert_eq!(scan.stats.scanned, 8);
    }

    #[test]
    fn test_unclosed_scan_counts_remaining_openers() {
        let scan = BraceChecker::default().scan("(([]");
        assert!(matches!(
            scan.result,
            CheckResult::Invalid(BraceError::UnclosedOpener { position: 1, .. })
        ));
        assert_eq!(scan.stats.pushes - scan.stats.pops, 2);
    }

    #[test]
    fn test_nesting_past_capacity_overflows() {
        assert_eq!(
            bounded(2).check("((("),
            CheckResult::Invalid(BraceError::StackOverflow {
                position: 2,
                found: '(',
                capacity: 2,
            })
        );
    }

    #[test]
    fn test_nesting_at_capacity_is_valid() {
        assert_eq!(bounded(2).check("(())"), CheckResult::Valid);
        assert_eq!(bounded(1).check("()()[]{}"), CheckResult::Valid);
    }

    #[test]
    fn test_default_capacity_overflow() {
        let text = "[".repeat(1001);
        assert!(matches!(
            check(&text),
            CheckResult::Invalid(BraceError::StackOverflow {
                position: 1000,
                capacity: 1000,
                ..
            })
        ));
    }

    #[test]
    fn test_unbounded_handles_deep_nesting() {
        let checker = BraceChecker::new(Config {
            stack: StackMode::Unbounded,
            ..Config::default()
        })
        .unwrap();
        let text = format!("{}{}", "{".repeat(5000), "}".repeat(5000));
        let scan = checker.scan(&text);
        assert_eq!(scan.result, CheckResult::Valid);
        assert_eq!(scan.stats.max_depth, 5000);
    }

    #[test]
    fn test_new_rejects_out_of_range_capacity() {
        for capacity in [0, MAX_CAPACITY + 1, usize::MAX] {
            let config = Config {
                capacity,
                stack: StackMode::Bounded,
            };
            assert!(BraceChecker::new(config).is_err(), "capacity {capacity}");
        }
    }

    #[test]
    fn test_largest_capacity_checks_without_panicking() {
        let checker = bounded(MAX_CAPACITY);
        assert_eq!(checker.check("()"), CheckResult::Valid);
        assert!(matches!(
            checker.check("(]"),
            CheckResult::Invalid(BraceError::MismatchedPair { position: 1, .. })
        ));
    }
}
