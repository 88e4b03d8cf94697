//! Configuration and construction of a [`WordFilter`].
//!
//! [`WordFilter`]: crate::WordFilter

use crate::{censor, Detection, EquivalenceTable, TargetWord, WordFilter};
use alloc::{string::String, vec::Vec};

/// Tolerances applied while matching, fixed for the lifetime of a [`WordFilter`].
///
/// [`WordFilter`]: crate::WordFilter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// How many letters may be inserted between two key letters of a word, as in `"bxar"`.
    pub letters_between_key_letters: usize,
    /// How many non-letters may be inserted between two key letters of a word, as in
    /// `"b.a.r"`.
    pub symbols_between_key_letters: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            letters_between_key_letters: 1,
            symbols_between_key_letters: 3,
        }
    }
}

/// A builder for a [`WordFilter`].
///
/// # Example
/// ```
/// use fuzzy_word_filter::{EquivalenceTable, WordFilterBuilder};
///
/// let filter = WordFilterBuilder::new()
///     .word("foo")
///     .equivalences(EquivalenceTable::from_entries([("o", ["o", "0"])]))
///     .symbols_between_key_letters(1)
///     .build();
///
/// assert_eq!(filter.censor("f.0o!"), "****!");
/// ```
///
/// [`WordFilter`]: crate::WordFilter
#[derive(Clone)]
pub struct WordFilterBuilder {
    words: Vec<TargetWord>,
    equivalences: EquivalenceTable,
    options: Options,
    censor: fn(&Detection<'_>) -> String,
}

impl WordFilterBuilder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            equivalences: EquivalenceTable::new(),
            options: Options::default(),
            censor: censor::replace_chars_with!("*"),
        }
    }

    /// Adds a word to be detected. Empty words are ignored.
    #[inline]
    pub fn word(mut self, word: &str) -> Self {
        self.words.extend(TargetWord::new(word));
        self
    }

    /// Adds a word that is not reported when directly preceded by any of `excluded`.
    #[inline]
    pub fn word_excluding<I, S>(mut self, word: &str, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(TargetWord::with_excluded_preceding(word, excluded));
        self
    }

    /// Adds multiple words to be detected.
    #[inline]
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .filter_map(|word| TargetWord::new(word.as_ref())),
        );
        self
    }

    #[inline]
    pub fn target_word(mut self, word: TargetWord) -> Self {
        self.words.push(word);
        self
    }

    #[inline]
    pub fn target_words<I>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = TargetWord>,
    {
        self.words.extend(words);
        self
    }

    /// Sets the equivalence table, replacing any previously set.
    #[inline]
    pub fn equivalences(mut self, equivalences: EquivalenceTable) -> Self {
        self.equivalences = equivalences;
        self
    }

    #[inline]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn letters_between_key_letters(mut self, letters: usize) -> Self {
        self.options.letters_between_key_letters = letters;
        self
    }

    #[inline]
    pub fn symbols_between_key_letters(mut self, symbols: usize) -> Self {
        self.options.symbols_between_key_letters = symbols;
        self
    }

    /// Sets the censor used by [`WordFilter::censor()`].
    ///
    /// See the [`censor`] module for common censors.
    ///
    /// [`WordFilter::censor()`]: crate::WordFilter::censor()
    #[inline]
    pub fn censor(mut self, censor: fn(&Detection<'_>) -> String) -> Self {
        self.censor = censor;
        self
    }

    #[must_use]
    pub fn build(self) -> WordFilter {
        let mut filter = WordFilter::new(self.equivalences, self.options);
        filter.censor = self.censor;
        filter.add_words(self.words);
        filter
    }
}

impl Default for WordFilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
