//! Cheap, syntax-unaware prettify decision.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default length threshold, matching the layout engine's width budget.
pub const DEFAULT_THRESHOLD: usize = 80;

/// Substrings that mark a chained command.
const OPERATORS: &[&str] = &["&&", "||", ";", "|"];

static LONG_OPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--\w+").expect("long option pattern is valid"));

/// Decide whether a command is worth reformatting.
///
/// True when the command is longer than `threshold`, contains a control
/// operator substring, or has more than three `--option`-like matches.
/// This does not tokenize: operators and options inside quoted strings
/// count too, so the answer can disagree with the layout engine's own
/// judgment.
pub fn should_prettify(command: &str, threshold: usize) -> bool {
    if command.len() > threshold {
        return true;
    }
    if OPERATORS.iter().any(|op| command.contains(op)) {
        return true;
    }
    LONG_OPTION_RE.find_iter(command).count() > 3
}
