//! Cleaning steps for product display names.
//!
//! Steps run in the order of [`STEPS`]; later steps assume bracketed and
//! parenthesized spans are already gone.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{
    blank_out, squash, Step, BRACKETED, COMBO, PARENTHESIZED, QUANTITY,
};

static COMBO_WITH_PROMO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}(?:\s*(?:기획|증정|한정))?", COMBO.as_str()))
        .expect("valid combo regex")
});

static PROMO_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:한정\s*기획|더블기획|듀오기획|더블세트|기획세트|듀오세트|듀오팩|기프트세트|대용량팩|모음전|단품|기획)\b",
    )
    .expect("valid promo regex")
});

static REFILL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b리필\b").expect("valid refill regex"));

static CHOOSE_N: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:중\s*)?택\s*\d+\b").expect("valid choose-n regex"));

static MULTIPLIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[×*](?:\s*\d+\b)?").expect("valid multiplier regex"));

static SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*/\s*").expect("valid slash regex"));

pub(crate) const STEPS: &[Step] = &[
    Step {
        name: "strip_brackets",
        apply: strip_brackets,
    },
    Step {
        name: "strip_parens",
        apply: strip_parens,
    },
    Step {
        name: "strip_combo",
        apply: strip_combo,
    },
    Step {
        name: "strip_quantity",
        apply: strip_quantity,
    },
    Step {
        name: "strip_promo_phrase",
        apply: strip_promo_phrase,
    },
    Step {
        name: "strip_refill",
        apply: strip_refill,
    },
    Step {
        name: "strip_choose_n",
        apply: strip_choose_n,
    },
    Step {
        name: "strip_multiplier",
        apply: strip_multiplier,
    },
    Step {
        name: "slash_to_space",
        apply: slash_to_space,
    },
    Step {
        name: "squash",
        apply: squash,
    },
];

/// `"[9월 올영픽] 헤라 글로스"` → `"  헤라 글로스"`
fn strip_brackets(s: &str) -> String {
    blank_out(&BRACKETED, s).into_owned()
}

/// `"글로스 (본품+리필)"` → `"글로스  "`
fn strip_parens(s: &str) -> String {
    blank_out(&PARENTHESIZED, s).into_owned()
}

/// `"틴트 1+1 기획"` → `"틴트  "`
fn strip_combo(s: &str) -> String {
    blank_out(&COMBO_WITH_PROMO, s).into_owned()
}

/// `"글로스 5g"` → `"글로스  "`; `"3gloss"` is left alone.
fn strip_quantity(s: &str) -> String {
    blank_out(&QUANTITY, s).into_owned()
}

/// `"쿠션 기획세트"` → `"쿠션  "`
fn strip_promo_phrase(s: &str) -> String {
    blank_out(&PROMO_PHRASE, s).into_owned()
}

/// `"쿠션 리필"` → `"쿠션  "`; `"리필러"` is left alone.
fn strip_refill(s: &str) -> String {
    blank_out(&REFILL, s).into_owned()
}

/// `"틴트 중 택1"` → `"틴트  "`
fn strip_choose_n(s: &str) -> String {
    blank_out(&CHOOSE_N, s).into_owned()
}

/// `"마스크 ×3"` → `"마스크 "`
fn strip_multiplier(s: &str) -> String {
    blank_out(&MULTIPLIER, s).into_owned()
}

/// `"립/치크 밤"` → `"립 치크 밤"`
fn slash_to_space(s: &str) -> String {
    blank_out(&SLASH, s).into_owned()
}
