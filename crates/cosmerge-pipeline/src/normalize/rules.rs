//! Shared patterns and the step type used by the label cleaners.
//!
//! Every pattern compiles from a literal, so construction cannot fail at
//! runtime once the unit tests pass.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// One named string transformation in a cleaning pipeline.
pub(crate) struct Step {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

/// Runs `steps` in order, logging each step that changed the value.
pub(crate) fn run_steps(steps: &[Step], input: String) -> String {
    steps.iter().fold(input, |value, step| {
        let next = (step.apply)(&value);
        if next != value {
            tracing::trace!(step = step.name, before = %value, after = %next, "label rewritten");
        }
        next
    })
}

/// Unit suffixes that mark a quantity token. Longer alternatives come
/// first so `개입` wins over `개` and `colors` over `color`.
const UNITS: &str = "개입|colors|color|컬러|칼라|회분|ml|oz|종|개|입|g";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid normalization regex")
}

/// `5g`, `10 ml`, `4Colors`, `3종`, `2개입`, bounded on both sides.
pub(crate) static QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"(?i)\b\d+(?:\.\d+)?\s*(?:{UNITS})\b")));

/// A label consisting of nothing but one quantity token.
pub(crate) static QUANTITY_ONLY: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"(?i)^\d+(?:\.\d+)?\s*(?:{UNITS})$")));

pub(crate) static BRACKETED: LazyLock<Regex> = LazyLock::new(|| compile(r"\[[^\]]*\]"));

pub(crate) static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| compile(r"\([^)]*\)"));

/// `1+1`, `2 + 1`.
pub(crate) static COMBO: LazyLock<Regex> = LazyLock::new(|| compile(r"\b\d+\s*\+\s*\d+\b"));

pub(crate) static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

/// Replaces every match of `re` with a single space.
pub(crate) fn blank_out<'a>(re: &Regex, input: &'a str) -> Cow<'a, str> {
    re.replace_all(input, " ")
}

/// Collapses whitespace runs to one space and trims both ends.
pub(crate) fn squash(input: &str) -> String {
    WHITESPACE.replace_all(input, " ").trim().to_owned()
}
