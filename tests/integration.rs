use fuzzy_word_filter::{censor, EquivalenceTable, TargetWord, WordFilter, WordFilterBuilder};
use std::{sync::Arc, thread};

fn cyrillic() -> WordFilter {
    WordFilterBuilder::new()
        .word("хуй")
        .word_excluding("бля", ["употре", "оскор"])
        .equivalences(EquivalenceTable::cyrillic_homoglyphs())
        .build()
}

#[test]
fn find() {
    let filter = WordFilterBuilder::new().word("foo").build();

    assert_eq!(
        filter
            .find("foo")
            .iter()
            .map(|detection| detection.original_word)
            .collect::<Vec<_>>(),
        vec!["foo"]
    );
}

#[test]
fn check() {
    let filter = WordFilterBuilder::new().word("foo").build();

    assert!(filter.check("foo"));
    assert!(!filter.check("bar"));
}

#[test]
fn censor() {
    let filter = WordFilterBuilder::new().word("foo").build();

    assert_eq!(filter.censor("foo"), "***");
}

#[test]
fn censor_with() {
    let filter = WordFilterBuilder::new().word("foo").build();

    assert_eq!(
        filter.censor_with("foo", censor::replace_words_with!("<censored>")),
        "<censored>"
    );
}

#[test]
fn filter_callback_order() {
    let filter = WordFilterBuilder::new().words(["foo", "bar"]).build();
    let mut seen = Vec::new();

    let output = filter.filter("bar, foo and b.a.r", |detection| {
        seen.push(detection.word.to_owned());
        detection.original_word.to_uppercase()
    });

    assert_eq!(output, "BAR, FOO and BAR");
    assert_eq!(seen, ["bar", "foo", "b.a.r"]);
}

#[test]
fn filter_returning_span_is_identity() {
    let filter = cyrillic();
    let text = "ну }{уй с ним, х.у.й";

    assert_eq!(
        filter.filter(text, |detection| detection.span().to_owned()),
        text
    );
    assert_eq!(filter.find(text).len(), 2);
}

#[test]
fn homoglyphs() {
    let filter = cyrillic();

    assert_eq!(filter.censor("xуй"), "***");
    assert_eq!(filter.censor("ХУЙ"), "***");
    assert_eq!(filter.censor(")(yй"), "****");
    assert_eq!(filter.censor("6ля"), "***");
}

#[test]
fn insertions() {
    let filter = cyrillic();

    assert_eq!(filter.censor("х-у-й"), "*****");
    assert_eq!(filter.censor("х...у...й"), "*********");
    assert_eq!(filter.censor("х....уй"), "х....уй");
    assert_eq!(filter.censor("хпуй"), "****");
}

#[test]
fn beginning_and_ending_are_kept() {
    let filter = cyrillic();

    assert_eq!(filter.censor("нахуйя!"), "на***я!");
    assert_eq!(
        filter.censor_with("нахуйя!", censor::replace_words_with!("[...]")),
        "[...]!"
    );
}

#[test]
fn excluded_preceding_context() {
    let filter = cyrillic();

    assert_eq!(filter.censor("употреблять"), "употреблять");
    assert_eq!(filter.censor("оскорблять"), "оскорблять");
    assert_eq!(filter.censor("ну бля"), "ну ***");
}

#[test]
fn excluded_context_from_target_word() {
    let filter = WordFilterBuilder::new()
        .target_word(TargetWord::with_excluded_preceding("rap", ["sc", "t"]).unwrap())
        .build();

    assert_eq!(filter.censor("scrap trap rap"), "scrap trap ***");
}

#[test]
fn lookahead_read_by_failed_digraph_is_skipped() {
    let filter = WordFilterBuilder::new()
        .word("ху")
        .equivalences(EquivalenceTable::cyrillic_homoglyphs())
        .build();

    assert_eq!(filter.censor("ну х}ау"), "ну ****");
}

#[test]
fn repeated_letters() {
    let filter = cyrillic();

    assert_eq!(filter.censor("хххуууй"), "*******");
}

#[test]
fn unchanged_without_words() {
    let filter = WordFilterBuilder::new()
        .equivalences(EquivalenceTable::cyrillic_homoglyphs())
        .build();

    assert_eq!(filter.censor("хуй"), "хуй");
}

#[test]
fn shared_between_threads() {
    let filter = Arc::new(cyrillic());

    let handles = (0..4)
        .map(|_| {
            let filter = Arc::clone(&filter);
            thread::spawn(move || filter.censor("ну }{уй"))
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "ну ****");
    }
}

#[cfg(feature = "unicode-segmentation")]
#[test]
fn censor_graphemes() {
    let filter = WordFilterBuilder::new()
        .word("ba\u{303}r")
        .censor(censor::replace_graphemes_with!("#"))
        .build();

    assert_eq!(filter.censor("ba\u{303}r"), "###");
}

#[cfg(feature = "transforms")]
#[test]
fn transform_pipeline() {
    use fuzzy_word_filter::transform;

    let filter = cyrillic();

    let text = transform::filter_links("смотри https://example.com х!!!!уй", "");
    let text = transform::filter_repeated_symbols(&text);
    let text = transform::filter_repeated_whitespace(&text);

    assert_eq!(filter.censor(&text), "смотри ***");
}
