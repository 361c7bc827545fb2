//! Cleaning steps for option (variant) labels.
//!
//! A raw label goes through three phases:
//!
//! 1. [`PREPARE`]: whitespace cleanup, first line only, NFKC.
//! 2. The [`SINGLE_ITEM`] short-circuit, then either unwrapping a label that
//!    is entirely one `[...]`/`(...)` span or removing every `[...]` span.
//! 3. [`FINISH`]: marker, quantity and bundle-word removal, with a second
//!    quantity pass for tokens exposed by suffix removal.

use std::sync::LazyLock;

use cosmerge_core::SINGLE_ITEM;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::rules::{
    blank_out, run_steps, squash, Step, BRACKETED, COMBO, PARENTHESIZED, QUANTITY,
    QUANTITY_ONLY,
};

static NEW_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bnew\b").expect("valid new-marker regex"));

static PACK_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\s*\d+\s*개입").expect("valid pack-count regex"));

static BUNDLE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s_+/]+)(?:듀오팩|세트|기획)+\b").expect("valid bundle-word regex")
});

static SINGLE_ITEM_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?:^|[\s_+/]+){SINGLE_ITEM}\b")).expect("valid single-item regex")
});

pub(crate) const PREPARE: &[Step] = &[
    Step {
        name: "normalize_spaces",
        apply: normalize_spaces,
    },
    Step {
        name: "first_line",
        apply: first_line,
    },
    Step {
        name: "nfkc",
        apply: nfkc,
    },
];

pub(crate) const FINISH: &[Step] = &[
    Step {
        name: "strip_parens",
        apply: strip_parens,
    },
    Step {
        name: "strip_combo",
        apply: strip_combo,
    },
    Step {
        name: "strip_new_marker",
        apply: strip_new_marker,
    },
    Step {
        name: "strip_pack_count",
        apply: strip_pack_count,
    },
    Step {
        name: "squash",
        apply: squash,
    },
    Step {
        name: "strip_quantity",
        apply: strip_quantity,
    },
    Step {
        name: "strip_bundle_word",
        apply: strip_bundle_word,
    },
    Step {
        name: "strip_single_item",
        apply: strip_single_item,
    },
    Step {
        name: "squash",
        apply: squash,
    },
    // `\b` does not fire between `10개` and `_세트`; the quantity only
    // becomes a token once the suffix is gone.
    Step {
        name: "strip_quantity",
        apply: strip_quantity,
    },
    Step {
        name: "squash",
        apply: squash,
    },
];

/// Cleans an option label. See the module docs for the phases.
pub(crate) fn clean(raw: &str) -> String {
    let label = run_steps(PREPARE, raw.to_owned());
    if label == SINGLE_ITEM {
        return label;
    }
    let label = match unwrap_enclosed(&label) {
        Some(inner) => inner.to_owned(),
        None => blank_out(&BRACKETED, &label).into_owned(),
    };
    run_steps(FINISH, label)
}

/// `"01 핑크\u{3000}"` → `"01 핑크"`; zero-width characters are dropped and
/// line separators become `\n`.
pub(crate) fn normalize_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\u{3000}' | '\u{00A0}' | '\u{202F}' => out.push(' '),
            '\u{200B}' | '\u{FEFF}' => {}
            '\u{2028}' | '\u{2029}' => out.push('\n'),
            '\r' => {
                if chars.peek() != Some(&'\n') {
                    out.push('\n');
                }
            }
            other => out.push(other),
        }
    }
    out.trim().to_owned()
}

/// `"란제리\n36,000원"` → `"란제리"`
pub(crate) fn first_line(s: &str) -> String {
    s.split('\n').next().unwrap_or_default().trim().to_owned()
}

/// `"０１ 핑크"` → `"01 핑크"`
fn nfkc(s: &str) -> String {
    s.nfkc().collect::<String>().trim().to_owned()
}

/// Returns the interior of a label wrapped by exactly one `[...]` or
/// `(...)` pair with no other brackets inside.
///
/// `"[01 핑크]"` → `Some("01 핑크")`; `"[01] 핑크"` → `None`
fn unwrap_enclosed(s: &str) -> Option<&str> {
    let inner = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .or_else(|| s.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')))?;
    if inner.contains(['[', ']', '(', ')']) {
        return None;
    }
    Some(inner.trim())
}

/// `"01 핑크(품절)"` → `"01 핑크 "`
fn strip_parens(s: &str) -> String {
    let s = s.replace("(품절)", " ");
    blank_out(&PARENTHESIZED, &s).into_owned()
}

/// `"01 핑크 1+1"` → `"01 핑크  "`
fn strip_combo(s: &str) -> String {
    blank_out(&COMBO, s).into_owned()
}

/// `"NEW 01 핑크"` → `"  01 핑크"`
fn strip_new_marker(s: &str) -> String {
    blank_out(&NEW_MARKER, s).into_owned()
}

/// `"시트 마스크*2개입"` → `"시트 마스크 "`
fn strip_pack_count(s: &str) -> String {
    blank_out(&PACK_COUNT, s).into_owned()
}

/// `"01 핑크 3.5g"` → `"01 핑크  "`; a label that is only `"10개"` stays.
fn strip_quantity(s: &str) -> String {
    if QUANTITY_ONLY.is_match(s) {
        return s.to_owned();
    }
    blank_out(&QUANTITY, s).into_owned()
}

/// `"02 코랄 기획세트"` → `"02 코랄 "`
fn strip_bundle_word(s: &str) -> String {
    blank_out(&BUNDLE_WORD, s).into_owned()
}

/// `"01 핑크_단품"` → `"01 핑크 "`; a bare `"단품"` stays.
fn strip_single_item(s: &str) -> String {
    if s == SINGLE_ITEM {
        return s.to_owned();
    }
    blank_out(&SINGLE_ITEM_SUFFIX, s).into_owned()
}
