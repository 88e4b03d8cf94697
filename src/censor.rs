//! Macros for creating censors to be used with a [`WordFilter`].
//!
//! These macros are provided for conveniently creating common replacement callbacks. The
//! resulting closures take a [`Detection`] and return the text to put in place of the detection's
//! full span (its beginning, matched word, and ending). They can be passed to
//! [`WordFilterBuilder::censor()`], [`WordFilter::censor_with()`], or [`WordFilter::filter()`].
//!
//! # Examples
//! Creating a `WordFilter` with a custom censor is done as follows:
//!
//! ```
//! use fuzzy_word_filter::{censor, WordFilterBuilder};
//!
//! let filter = WordFilterBuilder::new().censor(censor::replace_chars_with!("#")).build();
//! ```
//!
//! If the options here do not suit your use case, a closure can be provided instead. The
//! following code block has the same effect as the one above:
//!
//! ```
//! use fuzzy_word_filter::WordFilterBuilder;
//!
//! let filter = WordFilterBuilder::new()
//!     .censor(|detection| {
//!         let mut censored = String::from(detection.beginning);
//!         censored.extend(detection.word.chars().map(|_| '#'));
//!         censored.push_str(detection.ending);
//!         censored
//!     })
//!     .build();
//! ```
//!
//! [`Detection`]: crate::Detection
//! [`WordFilter`]: crate::WordFilter
//! [`WordFilter::censor_with()`]: crate::WordFilter::censor_with()
//! [`WordFilter::filter()`]: crate::WordFilter::filter()
//! [`WordFilterBuilder::censor()`]: crate::WordFilterBuilder::censor()

#[doc(hidden)]
pub use alloc::{borrow::ToOwned, string::String};
#[cfg(feature = "unicode-segmentation")]
#[doc(hidden)]
pub use unicode_segmentation::UnicodeSegmentation;

/// Creates a censor replacing every character of the matched word with the given string.
///
/// The detection's beginning and ending are kept as they are.
///
/// # Example
/// ```
/// use fuzzy_word_filter::{censor, WordFilterBuilder};
///
/// let filter = WordFilterBuilder::new()
///     .word("foo")
///     .censor(censor::replace_chars_with!("#"))
///     .build();
///
/// assert_eq!(filter.censor("xfooy z"), "x###y z");
/// ```
#[macro_export]
macro_rules! _replace_chars_with {
    ($s:literal) => {
        |detection| {
            let mut censored = $crate::censor::String::with_capacity(detection.span().len());
            censored.push_str(detection.beginning);
            for _ in detection.word.chars() {
                censored.push_str($s);
            }
            censored.push_str(detection.ending);
            censored
        }
    };
}

#[doc(inline)]
pub use _replace_chars_with as replace_chars_with;

/// Creates a censor replacing every grapheme of the matched word with the given string.
///
/// The detection's beginning and ending are kept as they are.
///
/// # Example
/// ```
/// use fuzzy_word_filter::{censor, WordFilterBuilder};
///
/// let filter = WordFilterBuilder::new()
///     .word("bãr")
///     .censor(censor::replace_graphemes_with!("#"))
///     .build();
///
/// assert_eq!(filter.censor("bãr"), "###");
/// ```
#[cfg(feature = "unicode-segmentation")]
#[macro_export]
macro_rules! _replace_graphemes_with {
    ($s:literal) => {
        |detection| {
            use $crate::censor::UnicodeSegmentation;
            let mut censored = $crate::censor::String::with_capacity(detection.span().len());
            censored.push_str(detection.beginning);
            for _ in detection.word.graphemes(true) {
                censored.push_str($s);
            }
            censored.push_str(detection.ending);
            censored
        }
    };
}

#[cfg(feature = "unicode-segmentation")]
#[doc(inline)]
pub use _replace_graphemes_with as replace_graphemes_with;

/// Creates a censor replacing the whole detected word, including its beginning and ending, with
/// the given string.
///
/// # Example
/// ```
/// use fuzzy_word_filter::{censor, WordFilterBuilder};
///
/// let filter = WordFilterBuilder::new()
///     .word("foo")
///     .censor(censor::replace_words_with!("<censored>"))
///     .build();
///
/// assert_eq!(filter.censor("Should censor xfooy."), "Should censor <censored>.");
/// ```
#[macro_export]
macro_rules! _replace_words_with {
    ($s:literal) => {
        |_| {
            use $crate::censor::ToOwned;
            $s.to_owned()
        }
    };
}

#[doc(inline)]
pub use _replace_words_with as replace_words_with;

#[cfg(test)]
mod tests {
    #[cfg(feature = "unicode-segmentation")]
    use crate::censor::replace_graphemes_with;
    use crate::{
        censor::{replace_chars_with, replace_words_with},
        Detection,
    };
    use alloc::string::String;

    fn detection<'a>(beginning: &'a str, word: &'a str, ending: &'a str, span: &'a str) -> Detection<'a> {
        Detection {
            original_word: "foo",
            beginning,
            word,
            ending,
            span,
        }
    }

    #[test]
    fn replace_chars() {
        let censor: fn(&Detection<'_>) -> String = replace_chars_with!("#");

        assert_eq!(censor(&detection("", "foo", "", "foo")), "###");
        assert_eq!(censor(&detection("x", "f0o", "y", "xf0oy")), "x###y");
        assert_eq!(censor(&detection("", "a\u{303}", "", "a\u{303}")), "##");
    }

    #[cfg(feature = "unicode-segmentation")]
    #[test]
    fn replace_graphemes() {
        let censor: fn(&Detection<'_>) -> String = replace_graphemes_with!("#");

        assert_eq!(censor(&detection("", "foo", "", "foo")), "###");
        assert_eq!(censor(&detection("x", "a\u{303}", "", "xa\u{303}")), "x#");
    }

    #[test]
    fn replace_words() {
        let censor: fn(&Detection<'_>) -> String = replace_words_with!("bar");

        assert_eq!(censor(&detection("x", "foo", "y", "xfooy")), "bar");
    }
}
