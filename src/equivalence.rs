//! Character equivalences used when comparing input against target words.
//!
//! An [`EquivalenceTable`] maps each canonical letter to the character sequences ("variants")
//! that may stand in for it: homoglyphs from other scripts, digits, and multi-character digraphs
//! such as `}{` for `х`. Everything is compared in lowercase.
//!
//! Only the first character of a key is used to identify its canonical letter. A key such as
//! `"ab"` therefore configures the letter `a`.

use crate::utils::lowercase;
use alloc::{vec, vec::Vec};
use hashbrown::HashMap;

/// A mapping from canonical letters to ordered lists of accepted variants.
///
/// Each letter's variants are kept sorted ascending by length, so that short variants are
/// tried (and rejected) before longer variants require lookahead into the input.
///
/// A letter with no entry only ever matches itself. A letter *with* an entry matches only its
/// listed variants, so an entry should normally list the letter itself as well.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EquivalenceTable {
    variants: HashMap<char, Vec<Vec<char>>>,
}

impl EquivalenceTable {
    /// Creates an empty table.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from `(letter, variants)` entries.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::EquivalenceTable;
    ///
    /// let table = EquivalenceTable::from_entries([("o", ["o", "0", "()"])]);
    ///
    /// assert_eq!(table.matches('o', '(', &[')']), Some(1));
    /// ```
    #[must_use]
    pub fn from_entries<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        table.merge(entries);
        table
    }

    /// Adds the given entries, overwriting any existing entry for the same letter.
    pub fn merge<I, K, V, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (key, variants) in entries {
            let letter = match key.as_ref().chars().next() {
                Some(c) => lowercase(c),
                None => {
                    tracing::debug!("skipping equivalence entry with an empty key");
                    continue;
                }
            };

            let mut converted = variants
                .into_iter()
                .filter_map(|variant| {
                    let chars = variant
                        .as_ref()
                        .chars()
                        .map(lowercase)
                        .collect::<Vec<_>>();
                    if chars.is_empty() {
                        tracing::debug!(%letter, "skipping empty equivalence variant");
                        None
                    } else {
                        Some(chars)
                    }
                })
                .collect::<Vec<_>>();
            // Stable, so variants of equal length keep their configured order.
            converted.sort_by_key(Vec::len);

            self.variants.insert(letter, converted);
        }
    }

    /// Discards every existing entry and replaces them with the given entries.
    pub fn replace<I, K, V, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.variants.clear();
        self.merge(entries);
    }

    /// Returns the variants configured for `letter`, shortest first.
    #[inline]
    pub fn lookup(&self, letter: char) -> Option<&[Vec<char>]> {
        self.variants.get(&lowercase(letter)).map(Vec::as_slice)
    }

    /// Returns the number of letters with an entry.
    #[inline]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns whether the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Decides whether `observed` stands in for the canonical `letter`.
    ///
    /// `rest` is the input following `observed`. Multi-character variants read ahead into it,
    /// but never past its end: a variant longer than the remaining input simply does not match.
    ///
    /// On a match, returns the number of characters taken from `rest` in addition to
    /// `observed`. Those characters are part of the match and should not be judged again.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::EquivalenceTable;
    ///
    /// let table = EquivalenceTable::cyrillic_homoglyphs();
    ///
    /// assert_eq!(table.matches('х', 'X', &[]), Some(0));
    /// assert_eq!(table.matches('х', '}', &['{']), Some(1));
    /// assert_eq!(table.matches('х', '}', &[]), None);
    /// ```
    #[inline]
    pub fn matches(&self, letter: char, observed: char, rest: &[char]) -> Option<usize> {
        match self.compare(letter, observed, rest) {
            (true, read) => Some(read),
            (false, _) => None,
        }
    }

    /// Compares `observed` against `letter`, returning whether it matched and how many
    /// characters of `rest` were read while trying.
    ///
    /// Characters are read whether or not the variant requiring them turns out to match, so a
    /// failed comparison may still report a nonzero count. The count never exceeds the length of
    /// the longest variant tried, nor the length of `rest`.
    ///
    /// # Example
    /// ```
    /// use fuzzy_word_filter::EquivalenceTable;
    ///
    /// let table = EquivalenceTable::cyrillic_homoglyphs();
    ///
    /// assert_eq!(table.compare('х', '}', &['{']), (true, 1));
    /// assert_eq!(table.compare('х', '}', &['a']), (false, 1));
    /// assert_eq!(table.compare('у', '}', &['a']), (false, 0));
    /// ```
    pub fn compare(&self, letter: char, observed: char, rest: &[char]) -> (bool, usize) {
        let letter = lowercase(letter);
        let observed = lowercase(observed);

        let variants = match self.variants.get(&letter) {
            Some(variants) => variants,
            None => return (letter == observed, 0),
        };

        let mut read = 0;
        for variant in variants {
            if variant[0] != observed {
                continue;
            }
            let extra = variant.len() - 1;
            read = read.max(extra.min(rest.len()));
            if extra > rest.len() {
                // Variants are sorted by length, so no later variant fits either.
                break;
            }
            if variant[1..]
                .iter()
                .zip(rest)
                .all(|(expected, c)| *expected == lowercase(*c))
            {
                return (true, extra);
            }
        }

        (false, read)
    }

    /// Returns every character that could begin a match of `letter`.
    ///
    /// This is the letter itself along with the first character of each of its variants.
    pub(crate) fn possible_first_chars(&self, letter: char) -> impl Iterator<Item = char> + '_ {
        let letter = lowercase(letter);
        core::iter::once(letter).chain(
            self.variants
                .get(&letter)
                .into_iter()
                .flatten()
                .map(|variant| variant[0]),
        )
    }

    /// A preset table of common homoglyphs, digit look-alikes and digraphs for the Russian
    /// alphabet.
    ///
    /// Every letter lists itself as a variant.
    #[must_use]
    pub fn cyrillic_homoglyphs() -> Self {
        Self::from_entries(vec![
            ("а", vec!["а", "a", "@", "4"]),
            ("б", vec!["б", "6", "b"]),
            ("в", vec!["в", "b", "v", "8"]),
            ("г", vec!["г", "r", "g"]),
            ("д", vec!["д", "d", "g"]),
            ("е", vec!["е", "e", "ё", "3"]),
            ("ё", vec!["ё", "е", "e"]),
            ("ж", vec!["ж", "*", ">|<", "}|{"]),
            ("з", vec!["з", "3", "z"]),
            ("и", vec!["и", "u", "i", "й"]),
            ("й", vec!["й", "u", "i", "y", "и"]),
            ("к", vec!["к", "k", "|<"]),
            ("л", vec!["л", "l", "ji"]),
            ("м", vec!["м", "m"]),
            ("н", vec!["н", "h", "n"]),
            ("о", vec!["о", "o", "0", "()"]),
            ("п", vec!["п", "n", "p"]),
            ("р", vec!["р", "p", "r"]),
            ("с", vec!["с", "c", "s"]),
            ("т", vec!["т", "t", "m"]),
            ("у", vec!["у", "y", "u"]),
            ("ф", vec!["ф", "f"]),
            ("х", vec!["х", "x", "h", "}{", ")("]),
            ("ц", vec!["ц", "c", "u,"]),
            ("ч", vec!["ч", "4", "ch"]),
            ("ш", vec!["ш", "w", "sh"]),
            ("щ", vec!["щ", "w", "sch"]),
            ("ъ", vec!["ъ", "b"]),
            ("ы", vec!["ы", "b|", "bi"]),
            ("ь", vec!["ь", "b"]),
            ("э", vec!["э", "e"]),
            ("ю", vec!["ю", "io", "yu"]),
            ("я", vec!["я", "9", "ya"]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use crate::EquivalenceTable;
    use alloc::{vec, vec::Vec};

    fn matches(table: &EquivalenceTable, letter: &str, observed: &str) -> Option<usize> {
        let chars = observed.chars().collect::<Vec<_>>();
        table.matches(letter.chars().next().unwrap(), chars[0], &chars[1..])
    }

    #[test]
    fn compare_chars() {
        let table = EquivalenceTable::cyrillic_homoglyphs();

        assert_eq!(matches(&table, "х", "}{"), Some(1));
        assert_eq!(matches(&table, "д", "d"), Some(0));
        assert_eq!(matches(&table, "д", "д"), Some(0));
        assert_eq!(matches(&table, "д", "Д"), Some(0));
        assert_eq!(matches(&table, "d", "d"), Some(0));
        assert_eq!(matches(&table, "l", "d"), None);
        assert_eq!(matches(&table, "д", "b"), None);
        assert_eq!(matches(&table, "ы", "b|"), Some(1));
    }

    #[test]
    fn letter_without_entry_is_case_insensitive_equality() {
        let table = EquivalenceTable::new();

        assert_eq!(table.matches('q', 'Q', &[]), Some(0));
        assert_eq!(table.matches('Q', 'q', &['x']), Some(0));
        assert_eq!(table.matches('q', 'g', &[]), None);
    }

    #[test]
    fn entry_excludes_letter_not_listed() {
        let table = EquivalenceTable::from_entries(vec![("a", vec!["4"])]);

        assert_eq!(table.matches('a', '4', &[]), Some(0));
        assert_eq!(table.matches('a', 'a', &[]), None);
    }

    #[test]
    fn shorter_variant_wins_without_lookahead() {
        let table = EquivalenceTable::from_entries(vec![("x", vec!["}{", "}"])]);

        assert_eq!(table.matches('x', '}', &['{']), Some(0));
    }

    #[test]
    fn lookahead_is_bounded_by_remaining_input() {
        let table = EquivalenceTable::from_entries(vec![("ж", vec![">|<"])]);

        assert_eq!(table.matches('ж', '>', &['|']), None);
        assert_eq!(table.matches('ж', '>', &[]), None);
        assert_eq!(table.matches('ж', '>', &['|', '<', 'a']), Some(2));
    }

    #[test]
    fn failed_comparison_reports_lookahead() {
        let table = EquivalenceTable::from_entries(vec![("ж", vec!["ж", ">|<", ">-<"])]);

        assert_eq!(table.compare('ж', '>', &['|', 'x', 'y']), (false, 2));
        assert_eq!(table.compare('ж', '>', &['|']), (false, 1));
        assert_eq!(table.compare('ж', 'q', &['|', '<']), (false, 0));
        assert_eq!(table.compare('ж', '>', &['-', '<']), (true, 2));
        assert_eq!(table.compare('q', 'q', &['x']), (true, 0));
    }

    #[test]
    fn lookahead_compares_case_insensitively() {
        let table = EquivalenceTable::from_entries(vec![("ч", vec!["CH"])]);

        assert_eq!(table.matches('Ч', 'c', &['H']), Some(1));
    }

    #[test]
    fn variants_sorted_by_length() {
        let table = EquivalenceTable::from_entries(vec![("a", vec!["aaa", "a", "aa"])]);

        assert_eq!(
            table.lookup('a').unwrap(),
            &[vec!['a'], vec!['a', 'a'], vec!['a', 'a', 'a']]
        );
    }

    #[test]
    fn only_first_key_char_is_used() {
        let table = EquivalenceTable::from_entries(vec![("Ab", vec!["4"])]);

        assert!(table.lookup('a').is_some());
        assert!(table.lookup('b').is_none());
    }

    #[test]
    fn empty_entries_are_skipped() {
        let table = EquivalenceTable::from_entries(vec![("", vec!["x"]), ("a", vec!["", "4"])]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup('a').unwrap(), &[vec!['4']]);
    }

    #[test]
    fn merge_overwrites_letter() {
        let mut table = EquivalenceTable::from_entries(vec![("a", vec!["4"]), ("b", vec!["8"])]);
        table.merge(vec![("a", vec!["@"])]);

        assert_eq!(table.lookup('a').unwrap(), &[vec!['@']]);
        assert_eq!(table.lookup('b').unwrap(), &[vec!['8']]);
    }

    #[test]
    fn replace_discards_existing() {
        let mut table = EquivalenceTable::from_entries(vec![("a", vec!["4"]), ("b", vec!["8"])]);
        table.replace(vec![("c", vec!["("])]);

        assert_eq!(table.len(), 1);
        assert!(table.lookup('a').is_none());
    }

    #[test]
    fn possible_first_chars() {
        let table = EquivalenceTable::cyrillic_homoglyphs();

        let chars = table.possible_first_chars('Х').collect::<Vec<_>>();

        assert_eq!(chars[0], 'х');
        assert!(chars.contains(&'}'));
        assert!(chars.contains(&')'));
        assert!(chars.contains(&'x'));
    }
}
