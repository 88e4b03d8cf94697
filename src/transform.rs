//! Stateless text transforms commonly run before or after word filtering.
//!
//! These are independent single-pass rewrites with no interaction with a [`WordFilter`]. They are
//! typically chained in a pipeline, for example collapsing whitespace and symbol runs before
//! censoring:
//!
//! ```
//! use fuzzy_word_filter::{transform, WordFilterBuilder};
//!
//! let filter = WordFilterBuilder::new().word("foo").build();
//!
//! let text = transform::filter_repeated_symbols("f!!!!oo   bar");
//! let text = transform::filter_repeated_whitespace(&text);
//!
//! assert_eq!(filter.censor(&text), "*** bar");
//! ```
//!
//! Requires the `transforms` feature.
//!
//! [`WordFilter`]: crate::WordFilter

use crate::utils::lowercase;
use alloc::{string::String, vec::Vec};
use regex::Regex;
use std::sync::LazyLock;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://(www\.)?[-a-zA-Zа-яА-ЯёЁ0-9@:%._+~#=]{1,256}\.[a-zA-Zа-яА-ЯёЁ0-9()]{1,6}([-a-zA-Zа-яА-ЯёЁ0-9()@:%_+.~#?&/=]*)").expect("valid regex"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:[a-zA-Z0-9!#$%&'*+/=?^_{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?\.)+[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-zA-Z0-9-]*[a-zA-Z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])"#).expect("valid regex"));
static REPEATED_SYMBOLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^a-zA-Z0-9а-яА-ЯёЁ\s]{3,})+").expect("valid regex"));
static REPEATED_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\n(.{0,10})\n)+").expect("valid regex"));
static REPEATED_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));
static SYMBOLS_AND_NUMBERS_CHAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"((?:([^a-zA-Z0-9а-яА-ЯёЁ\s]*[0-9]*)*[0-9]{2,}([^a-zA-Z0-9а-яА-ЯёЁ\s]*[0-9]*)*[^a-zA-Z0-9а-яА-ЯёЁ\s]{2,}([^a-zA-Z0-9а-яА-ЯёЁ\s]*[0-9]*)*)|(?:([^a-zA-Z0-9а-яА-ЯёЁ\s]*[0-9]*)*[^a-zA-Z0-9а-яА-ЯёЁ\s]{2,}([^a-zA-Z0-9а-яА-ЯёЁ\s]*[0-9]*)*[0-9]{2,}([^a-zA-Z0-9а-яА-ЯёЁ\s]*[0-9]*)*))+").expect("valid regex"));

/// Replaces every http(s) link with `replacement`.
pub fn filter_links(text: &str, replacement: &str) -> String {
    LINK.replace_all(text, replacement).into_owned()
}

/// Replaces every email address with `replacement`.
pub fn filter_emails(text: &str, replacement: &str) -> String {
    EMAIL.replace_all(text, replacement).into_owned()
}

/// Removes runs of three or more characters that are neither alphanumeric nor whitespace.
pub fn filter_repeated_symbols(text: &str) -> String {
    REPEATED_SYMBOLS.replace_all(text, "").into_owned()
}

/// Removes chains mixing at least two digits with at least two symbols, such as `"12!!"` or
/// `"#$5-67"`.
pub fn filter_symbols_and_numbers_chain(text: &str) -> String {
    SYMBOLS_AND_NUMBERS_CHAIN.replace_all(text, "").into_owned()
}

/// Collapses runs of two or more whitespace characters into a single space.
pub fn filter_repeated_whitespace(text: &str) -> String {
    REPEATED_WHITESPACE.replace_all(text, " ").into_owned()
}

/// Replaces a newline-enclosed short line (up to ten characters) with a space followed by its
/// content. Consecutive enclosed lines collapse together, keeping the last one's content.
///
/// This rejoins words split one letter per line.
pub fn filter_repeated_newlines(text: &str) -> String {
    REPEATED_NEWLINES.replace_all(text, " ${1}").into_owned()
}

/// Collapses runs of the same character (compared case-insensitively) that are longer than
/// `max_run` down to their first character.
///
/// Runs of at most `max_run` characters are kept as they are.
///
/// # Example
/// ```
/// use fuzzy_word_filter::transform::filter_repeated_chars;
///
/// assert_eq!(filter_repeated_chars("foo", 2), "foo");
/// assert_eq!(filter_repeated_chars("fooo", 2), "fo");
/// ```
pub fn filter_repeated_chars(text: &str, max_run: usize) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    let mut last = match chars.next() {
        Some(c) => {
            result.push(c);
            lowercase(c)
        }
        None => return result,
    };

    // Repeats of `last` that are kept if the run stays within `max_run`.
    let mut repeats = Vec::new();
    let mut count = 0;
    for c in chars {
        if lowercase(c) == last {
            count += 1;
            if count < max_run {
                repeats.push(c);
            }
        } else {
            if count < max_run {
                result.extend(repeats.iter());
            }
            repeats.clear();
            result.push(c);
            last = lowercase(c);
            count = 0;
        }
    }
    if count < max_run {
        result.extend(repeats.iter());
    }

    result
}
