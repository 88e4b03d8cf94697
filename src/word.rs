//! Words to be detected by a [`WordFilter`].
//!
//! [`WordFilter`]: crate::WordFilter

use crate::utils::lowercase;
use alloc::{string::String, vec::Vec};

/// A configured word to detect, along with its exclusion rules.
///
/// The word is stored as a sequence of lowercase canonical letters. Excluded preceding contexts
/// guard against false positives: when the text immediately before a match ends with one of
/// them, the match is not reported. This is useful where the word is part of an approved longer
/// word, such as excluding `"sc"` before `"rap"` so that `"scrap"` is left alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetWord {
    word: String,
    letters: Vec<char>,
    /// Sorted longest first.
    excluded_preceding: Vec<Vec<char>>,
}

impl TargetWord {
    /// Creates a target word without any exclusions.
    ///
    /// Returns `None` if `word` is empty.
    #[inline]
    pub fn new(word: &str) -> Option<Self> {
        Self::with_excluded_preceding(word, core::iter::empty::<&str>())
    }

    /// Creates a target word that is not reported when preceded by any of `excluded`.
    ///
    /// Returns `None` if `word` is empty. Empty exclusions are ignored.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::TargetWord;
    ///
    /// let word = TargetWord::with_excluded_preceding("rap", ["sc"]).unwrap();
    ///
    /// assert_eq!(word.as_str(), "rap");
    /// ```
    pub fn with_excluded_preceding<I, S>(word: &str, excluded: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if word.is_empty() {
            tracing::debug!("skipping empty target word");
            return None;
        }

        let mut excluded_preceding = excluded
            .into_iter()
            .map(|context| context.as_ref().chars().map(lowercase).collect::<Vec<_>>())
            .filter(|context| !context.is_empty())
            .collect::<Vec<_>>();
        excluded_preceding.sort_by(|a, b| b.len().cmp(&a.len()));

        Some(Self {
            word: String::from(word),
            letters: word.chars().map(lowercase).collect(),
            excluded_preceding,
        })
    }

    /// Returns the word as it was configured.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.word
    }

    /// Returns the canonical letters of the word, lowercased.
    #[inline]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns whether `preceding` ends with one of the excluded contexts.
    ///
    /// Comparison is case-insensitive.
    pub fn matches_excluded_context(&self, preceding: &[char]) -> bool {
        self.excluded_preceding.iter().any(|context| {
            context.len() <= preceding.len()
                && context
                    .iter()
                    .rev()
                    .zip(preceding.iter().rev())
                    .all(|(excluded, c)| *excluded == lowercase(*c))
        })
    }
}
