use unicode_general_category::{get_general_category, GeneralCategory};

/// Lowercase a single character.
///
/// Characters whose lowercase form spans more than one `char` (such as `'İ'`) are returned
/// unchanged, so that every comparison stays one-to-one.
#[inline]
pub(crate) fn lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Whether `c` is in one of the Unicode letter categories (`Lu`, `Ll`, `Lt`, `Lm` or `Lo`).
///
/// Unlike [`char::is_alphabetic()`], combining marks such as `'\u{345}'` are not letters.
#[inline]
pub(crate) fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

#[cfg(test)]
mod tests {
    use crate::utils::{is_letter, lowercase};

    #[test]
    fn ascii() {
        assert_eq!(lowercase('A'), 'a');
        assert_eq!(lowercase('a'), 'a');
        assert_eq!(lowercase('}'), '}');
    }

    #[test]
    fn cyrillic() {
        assert_eq!(lowercase('Х'), 'х');
        assert_eq!(lowercase('Ё'), 'ё');
    }

    #[test]
    fn multi_char_lowercase_is_unchanged() {
        assert_eq!(lowercase('İ'), 'İ');
    }

    #[test]
    fn letters() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(is_letter('ж'));
        assert!(is_letter('ʰ'));
        assert!(is_letter('中'));
    }

    #[test]
    fn non_letters() {
        assert!(!is_letter('.'));
        assert!(!is_letter('4'));
        assert!(!is_letter(' '));
        assert!(!is_letter('\u{303}'));
        assert!(!is_letter('\u{345}'));
        assert!(!is_letter('Ⅻ'));
    }
}
