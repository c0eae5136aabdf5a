//! Locale-aware ordering of entry names.
//!
//! Names compare in four passes, each only consulted on a tie:
//! 1. primary: accent- and case-insensitive; punctuation and symbols come
//!    before digits, digits before letters, and punctuation and symbols keep
//!    the Unicode root collation order among themselves;
//! 2. accents: decomposed, case-folded text;
//! 3. case: lowercase sorts before uppercase;
//! 4. raw code points, which makes the order total.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two entry names for display.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

/// ASCII punctuation and symbols in Unicode root collation order.
const SYMBOL_ORDER: &str = "\t\n\u{b}\u{c}\r _-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary weight of one case-folded, accent-stripped character.
///
/// Symbols missing from [`SYMBOL_ORDER`] sort after every listed one, by
/// code point.
fn primary_weight(c: char) -> (u8, u32, char) {
    if c.is_alphabetic() {
        (2, 0, c)
    } else if c.is_numeric() {
        (1, 0, c)
    } else {
        let rank = SYMBOL_ORDER
            .chars()
            .position(|s| s == c)
            .unwrap_or(SYMBOL_ORDER.len());
        (0, rank as u32, c)
    }
}

fn primary_key(name: &str) -> Vec<(u8, u32, char)> {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(primary_weight)
        .collect()
}

fn accent_key(name: &str) -> Vec<char> {
    name.nfd().flat_map(char::to_lowercase).collect()
}

fn case_key(name: &str) -> Vec<bool> {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}
