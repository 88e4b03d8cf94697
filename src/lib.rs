//! A Word Filter for detecting obfuscated words within text.
//!
//! A [`WordFilter`] looks for configured [`TargetWord`]s even when they have been deliberately
//! disguised:
//!
//! - letters replaced by look-alikes, digits, or multi-character digraphs (configured through an
//!   [`EquivalenceTable`]),
//! - letters repeated, as in `"fooooo"`,
//! - stray symbols or letters inserted between the word's letters, as in `"f.o.o"` (bounded by
//!   the [`Options`] tolerances).
//!
//! Each detection is handed to a caller-supplied callback as a [`Detection`], and the string the
//! callback returns is spliced into the output in its place.
//!
//! # Example
//! ```
//! use fuzzy_word_filter::{EquivalenceTable, WordFilterBuilder};
//!
//! let filter = WordFilterBuilder::new()
//!     .word("хуй")
//!     .equivalences(EquivalenceTable::cyrillic_homoglyphs())
//!     .build();
//!
//! assert_eq!(filter.censor("ну }{уй"), "ну ****");
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod builder;
mod candidate;
pub mod censor;
mod equivalence;
#[cfg(feature = "transforms")]
pub mod transform;
mod utils;
mod word;

pub use builder::{Options, WordFilterBuilder};
pub use equivalence::EquivalenceTable;
pub use word::TargetWord;

use alloc::{string::String, vec::Vec};
use candidate::{Candidate, Status};
use core::{fmt, ops::Range};
use hashbrown::HashSet;
use utils::{is_letter, lowercase};

/// A word detected within the input of a [`WordFilter`].
///
/// The detection covers a full run of text: the `beginning` leading up to the match from the
/// last delimiter, the matched `word`, and the `ending` following it until the next delimiter.
/// The string returned for a detection replaces that whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Detection<'a> {
    /// The configured word that was detected.
    pub original_word: &'a str,
    /// Text preceding the match since the last delimiter.
    pub beginning: &'a str,
    /// The matched text, exactly as it appears in the input.
    pub word: &'a str,
    /// Text following the match until the next delimiter.
    pub ending: &'a str,
    pub(crate) span: &'a str,
}

impl<'a> Detection<'a> {
    /// Returns the entire detected run: beginning, word, and ending together.
    #[inline]
    pub fn span(&self) -> &'a str {
        self.span
    }
}

/// A detection whose ending is still being collected.
struct OpenDetection<'a> {
    word: &'a TargetWord,
    /// Start of the beginning.
    begin: usize,
    /// Start of the matched word.
    start: usize,
    /// End of the matched word.
    end: usize,
}

impl<'a> OpenDetection<'a> {
    /// Finishes the detection with its ending extending up to `ending_end`.
    fn close(self, text: &'a str, offsets: &[usize], ending_end: usize) -> Detection<'a> {
        let detection = Detection {
            original_word: self.word.as_str(),
            beginning: slice(text, offsets, self.begin..self.start),
            word: slice(text, offsets, self.start..self.end),
            ending: slice(text, offsets, self.end..ending_end),
            span: slice(text, offsets, self.begin..ending_end),
        };
        tracing::trace!(
            word = detection.original_word,
            span = detection.span,
            "detected word"
        );
        detection
    }
}

/// Slices `text` by a range of character indices, given the byte offset of each character.
fn slice<'a>(text: &'a str, offsets: &[usize], range: Range<usize>) -> &'a str {
    let boundary = |index: usize| offsets.get(index).copied().unwrap_or(text.len());
    &text[boundary(range.start)..boundary(range.end)]
}

/// A filter for detecting and replacing obfuscated words.
///
/// Tolerances are fixed at construction, while the equivalence table and words may still be
/// changed afterwards. Scanning only needs a shared reference, so a single `WordFilter` can be
/// used from many threads at once.
///
/// Constructed with a [`WordFilterBuilder`].
pub struct WordFilter {
    words: Vec<TargetWord>,
    equivalences: EquivalenceTable,
    /// Every character that could begin one of the words. Characters that are neither letters
    /// nor in this set are delimiters.
    first_chars: HashSet<char>,
    options: Options,
    pub(crate) censor: fn(&Detection<'_>) -> String,
}

impl fmt::Debug for WordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordFilter")
            .field("words", &self.words)
            .field("equivalences", &self.equivalences)
            .field("first_chars", &self.first_chars)
            .field("options", &self.options)
            .field("censor", &(self.censor as usize as *const ()))
            .finish()
    }
}

impl WordFilter {
    /// Creates a filter with no words.
    ///
    /// Until words are added, every input is returned unchanged.
    #[must_use]
    pub fn new(equivalences: EquivalenceTable, options: Options) -> Self {
        Self {
            words: Vec::new(),
            equivalences,
            first_chars: HashSet::new(),
            options,
            censor: censor::replace_chars_with!("*"),
        }
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    pub fn words(&self) -> &[TargetWord] {
        &self.words
    }

    #[inline]
    pub fn equivalences(&self) -> &EquivalenceTable {
        &self.equivalences
    }

    /// Replaces the equivalence table.
    pub fn set_equivalences(&mut self, equivalences: EquivalenceTable) {
        self.equivalences = equivalences;
        self.rebuild_first_chars();
    }

    /// Merges entries into the equivalence table, overwriting existing entries for the same
    /// letters.
    pub fn add_equivalences<I, K, V, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.equivalences.merge(entries);
        self.rebuild_first_chars();
    }

    pub fn add_words<I>(&mut self, words: I)
    where
        I: IntoIterator<Item = TargetWord>,
    {
        for word in words {
            if let Some(&first) = word.letters().first() {
                self.first_chars
                    .extend(self.equivalences.possible_first_chars(first));
            }
            self.words.push(word);
        }
    }

    /// Adds a single word, not reported when directly preceded by any of `excluded`.
    ///
    /// Empty words are ignored.
    pub fn add_word<I, S>(&mut self, word: &str, excluded: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_words(TargetWord::with_excluded_preceding(word, excluded));
    }

    /// Removes every word.
    pub fn reset_words(&mut self) {
        self.words.clear();
        self.first_chars.clear();
    }

    fn rebuild_first_chars(&mut self) {
        self.first_chars.clear();
        for word in &self.words {
            if let Some(&first) = word.letters().first() {
                self.first_chars
                    .extend(self.equivalences.possible_first_chars(first));
            }
        }
    }

    /// Scans `input` once, passing each detection to `on_detected` in text order.
    ///
    /// Every candidate steps through each character in turn. A success resets every candidate,
    /// so matching restarts fresh after it and overlapping words are not reported twice.
    fn scan<'a, F>(&'a self, text: &'a str, mut on_detected: F) -> String
    where
        F: FnMut(&Detection<'a>) -> String,
    {
        if self.words.is_empty() {
            return String::from(text);
        }

        let (offsets, chars): (Vec<usize>, Vec<char>) = text.char_indices().unzip();
        let mut candidates = self.words.iter().map(Candidate::new).collect::<Vec<_>>();

        let mut output = String::with_capacity(text.len());
        // Start of the text not yet written to `output`.
        let mut pending_start = 0;
        // Position just after the last delimiter.
        let mut word_start = 0;
        let mut open: Option<OpenDetection<'a>> = None;

        let mut index = 0;
        while index < chars.len() {
            let delimiter = !is_letter(chars[index])
                && !self.first_chars.contains(&lowercase(chars[index]));
            if delimiter {
                word_start = index + 1;
                if let Some(detection) = open.take() {
                    output.push_str(&on_detected(&detection.close(text, &offsets, index)));
                    pending_start = index;
                }
            }
            if open.is_some() {
                // Part of the ending.
                index += 1;
                continue;
            }

            let mut idle = true;
            let mut success = None;
            for candidate in &mut candidates {
                match candidate.step(
                    &chars,
                    index,
                    word_start,
                    &self.equivalences,
                    &self.options,
                ) {
                    Status::Success => {
                        success = Some((
                            candidate.word,
                            candidate.word_start(),
                            candidate.start(),
                            candidate.pending_lookahead(),
                        ));
                        break;
                    }
                    Status::InProgress => idle = false,
                    Status::Failed => {}
                }
            }

            if let Some((word, begin, start, lookahead)) = success {
                candidates.iter_mut().for_each(Candidate::reset);
                idle = true;

                if word.matches_excluded_context(&chars[pending_start..start]) {
                    tracing::trace!(
                        word = word.as_str(),
                        offset = offsets[start],
                        "detection suppressed by excluded context"
                    );
                } else {
                    let begin = begin.max(pending_start).min(start);
                    output.push_str(slice(text, &offsets, pending_start..begin));
                    // Characters taken by lookahead belong to the matched word.
                    let end = index + 1 + lookahead;
                    open = Some(OpenDetection {
                        word,
                        begin,
                        start,
                        end,
                    });
                    index = end;
                    continue;
                }
            }

            if idle && delimiter {
                output.push_str(slice(text, &offsets, pending_start..index + 1));
                pending_start = index + 1;
            }
            index += 1;
        }

        match open {
            Some(detection) => {
                output.push_str(&on_detected(&detection.close(text, &offsets, chars.len())))
            }
            None => output.push_str(slice(text, &offsets, pending_start..chars.len())),
        }

        output
    }

    /// Replaces every detected word within `input` with the string returned by `on_detected`.
    ///
    /// `on_detected` is called once per detection, in text order. Its return value replaces the
    /// detection's entire [`span()`](Detection::span()). To leave a detection unchanged, return
    /// its span.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::WordFilterBuilder;
    ///
    /// let filter = WordFilterBuilder::new().word("abc").build();
    ///
    /// assert_eq!(
    ///     filter.filter("xx abc yy", |detection| detection.word.to_uppercase()),
    ///     "xx ABC yy"
    /// );
    /// ```
    #[inline]
    pub fn filter<F>(&self, input: &str, on_detected: F) -> String
    where
        F: FnMut(&Detection<'_>) -> String,
    {
        self.scan(input, on_detected)
    }

    /// Find all detections within `input`.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::WordFilterBuilder;
    ///
    /// let filter = WordFilterBuilder::new().word("foo").build();
    ///
    /// let detections = filter.find("f.o.o and fooo");
    /// assert_eq!(detections.len(), 2);
    /// assert_eq!(detections[0].word, "f.o.o");
    /// ```
    pub fn find<'a>(&'a self, input: &'a str) -> Vec<Detection<'a>> {
        let mut found = Vec::new();
        self.scan(input, |detection| {
            found.push(*detection);
            String::new()
        });
        found
    }

    /// Check whether `input` contains any detected words.
    ///
    /// Returns `true` if matches are found, and `false` otherwise.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::WordFilterBuilder;
    ///
    /// let filter = WordFilterBuilder::new().word("foo").build();
    ///
    /// assert!(filter.check("this string contains f.o.o"));
    /// assert!(!filter.check("this one does not"));
    /// ```
    #[inline]
    pub fn check(&self, input: &str) -> bool {
        !self.find(input).is_empty()
    }

    /// Censor all detected words within `input` using the censor configured on the builder.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::WordFilterBuilder;
    ///
    /// // Note that the default censor is censor::replace_chars_with!("*").
    /// let filter = WordFilterBuilder::new().word("foo").build();
    ///
    /// assert_eq!(filter.censor("this string contains foo"), "this string contains ***");
    /// ```
    #[inline]
    pub fn censor(&self, input: &str) -> String {
        self.scan(input, self.censor)
    }

    /// Censor all detected words within `input` using the given `censor`.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::{censor, WordFilterBuilder};
    ///
    /// let filter = WordFilterBuilder::new().word("foo").build();
    ///
    /// assert_eq!(
    ///     filter.censor_with("this string contains foo", censor::replace_words_with!("<censored>")),
    ///     "this string contains <censored>"
    /// );
    /// ```
    #[inline]
    pub fn censor_with(&self, input: &str, censor: fn(&Detection<'_>) -> String) -> String {
        self.scan(input, censor)
    }
}
