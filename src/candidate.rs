//! Per-word matching automaton used during a [`WordFilter`] scan.
//!
//! Every configured [`TargetWord`] gets its own [`Candidate`] for the duration of a scan. The
//! candidates are stepped through the input one character at a time, each tracking its own
//! partial match independently of the others.
//!
//! [`WordFilter`]: crate::WordFilter

use crate::{builder::Options, equivalence::EquivalenceTable, utils::is_letter, TargetWord};

/// Outcome of stepping a [`Candidate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    /// The current attempt is still alive.
    InProgress,
    /// The current attempt was abandoned. The candidate has already been reset.
    Failed,
    /// Every letter of the word has been matched.
    Success,
}

/// Mutable progress of one matching attempt.
///
/// The default value is the initial state of a fresh attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Progress {
    /// Number of letters of the word matched so far.
    matched: usize,
    /// Characters already consumed by lookahead, which must not be judged again.
    skip: usize,
    /// Characters stepped through since the attempt began, including skipped ones.
    consumed: usize,
    /// Inserted letters tolerated since the last matched letter.
    inserted_letters: usize,
    /// Inserted non-letters tolerated since the last matched letter.
    inserted_symbols: usize,
    /// Input index at which the attempt began.
    start: usize,
    /// Input index of the start of the word (the position after the last delimiter) when the
    /// attempt began.
    word_start: usize,
}

/// A single target word's matching automaton.
#[derive(Debug)]
pub(crate) struct Candidate<'a> {
    pub(crate) word: &'a TargetWord,
    progress: Progress,
    status: Status,
}

impl<'a> Candidate<'a> {
    pub(crate) fn new(word: &'a TargetWord) -> Self {
        Self {
            word,
            progress: Progress::default(),
            status: Status::InProgress,
        }
    }

    /// Returns to the initial state. Calling this repeatedly has no further effect.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.progress = Progress::default();
        self.status = Status::InProgress;
    }

    /// Input index at which the current attempt began.
    #[inline]
    pub(crate) fn start(&self) -> usize {
        self.progress.start
    }

    /// Start of the word containing the current attempt.
    #[inline]
    pub(crate) fn word_start(&self) -> usize {
        self.progress.word_start
    }

    /// Characters following the current one that were read ahead and not yet stepped through.
    #[inline]
    pub(crate) fn pending_lookahead(&self) -> usize {
        self.progress.skip
    }

    /// Step along the character at `input[index]`.
    ///
    /// `word_start` is the index just after the last delimiter seen by the caller. It is
    /// recorded only on the first step of an attempt.
    pub(crate) fn step(
        &mut self,
        input: &[char],
        index: usize,
        word_start: usize,
        equivalences: &EquivalenceTable,
        options: &Options,
    ) -> Status {
        let c = input[index];
        let rest = &input[index + 1..];
        let letters = self.word.letters();

        self.progress.consumed += 1;
        if self.progress.consumed == 1 {
            self.progress.start = index;
            self.progress.word_start = word_start;
        }

        if self.progress.skip > 0 {
            self.progress.skip -= 1;
            return self.status;
        }

        // Characters read ahead are skipped whether or not the comparison matched.
        let (matched, read) = equivalences.compare(letters[self.progress.matched], c, rest);
        self.progress.skip += read;
        if matched {
            self.progress.inserted_letters = 0;
            self.progress.inserted_symbols = 0;
            self.progress.matched += 1;
            self.status = if self.progress.matched == letters.len() {
                Status::Success
            } else {
                Status::InProgress
            };
            return self.status;
        }

        // No tolerance applies to the first letter of an attempt.
        if self.progress.consumed > 1 {
            // Repeated letter.
            if self.progress.matched > 0 {
                let (matched, read) =
                    equivalences.compare(letters[self.progress.matched - 1], c, rest);
                self.progress.skip += read;
                if matched {
                    self.status = Status::InProgress;
                    return self.status;
                }
            }

            if !is_letter(c)
                && self.progress.inserted_symbols < options.symbols_between_key_letters
                && self.progress.inserted_letters == 0
            {
                self.progress.inserted_symbols += 1;
                self.status = Status::InProgress;
                return self.status;
            }

            if self.progress.inserted_letters < options.letters_between_key_letters
                && self.progress.inserted_symbols == 0
            {
                self.progress.inserted_letters += 1;
                self.status = Status::InProgress;
                return self.status;
            }
        }

        self.reset();
        self.status = Status::Failed;
        self.status
    }
}
