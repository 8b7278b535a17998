use super::*;

const RELEASE: &str = "\u{E000}";
const SHIFT: &str = "\u{E008}";

fn chars(s: &str) -> Vec<LogicalKey> {
    s.chars().map(LogicalKey::Char).collect()
}

#[test]
fn test_empty_input_yields_one_empty_batch() {
    let empty: [&str; 0] = [];
    for persist in [false, true] {
        let batches = KeySequenceTranslator::translate(&empty, persist).unwrap();
        assert_eq!(batches, vec![KeyBatch::new(persist)]);
    }
}

#[test]
fn test_empty_strings_yield_one_empty_batch() {
    let batches = KeySequenceTranslator::translate(&["", ""], false).unwrap();
    assert_eq!(batches, vec![KeyBatch::new(false)]);
}

#[test]
fn test_plain_text_is_one_batch() {
    let batches = KeySequenceTranslator::translate(&["hello"], false).unwrap();
    assert_eq!(batches, vec![KeyBatch::with_keys(false, chars("hello"))]);
}

#[test]
fn test_sequences_are_concatenated() {
    let batches = KeySequenceTranslator::translate(&["ab", "c"], true).unwrap();
    assert_eq!(batches, vec![KeyBatch::with_keys(true, chars("abc"))]);
}

#[test]
fn test_release_without_persistence() {
    let input = format!("a{RELEASE}");
    let batches = KeySequenceTranslator::translate(&[input], false).unwrap();
    assert_eq!(
        batches,
        vec![KeyBatch::with_keys(false, chars("a")), KeyBatch::new(false)]
    );
}

#[test]
fn test_release_with_persistence_expands_to_three_batches() {
    let batches = KeySequenceTranslator::translate(&[RELEASE], true).unwrap();
    assert_eq!(
        batches,
        vec![KeyBatch::new(true), KeyBatch::new(false), KeyBatch::new(true)]
    );
}

#[test]
fn test_persisted_modifier_then_release() {
    let input = format!("{SHIFT}ab{RELEASE}c");
    let batches = KeySequenceTranslator::translate(&[input], true).unwrap();
    let mut first = vec![LogicalKey::Named(NamedKey::Shift)];
    first.extend(chars("ab"));
    assert_eq!(
        batches,
        vec![
            KeyBatch::with_keys(true, first),
            KeyBatch::new(false),
            KeyBatch::with_keys(true, chars("c")),
        ]
    );
}

#[test]
fn test_repeated_release_is_not_deduplicated() {
    let input = format!("{RELEASE}{RELEASE}");
    let batches = KeySequenceTranslator::translate(&[input.as_str()], true).unwrap();
    assert_eq!(
        batches,
        vec![
            KeyBatch::new(true),
            KeyBatch::new(false),
            KeyBatch::new(true),
            KeyBatch::new(false),
            KeyBatch::new(true),
        ]
    );

    let batches = KeySequenceTranslator::translate(&[input.as_str()], false).unwrap();
    assert_eq!(batches.len(), 3);
    assert!(batches.iter().all(|b| b.is_empty() && !b.persist));
}

#[test]
fn test_control_aliases() {
    let cases = [
        ("\n", NamedKey::Enter),
        ("\t", NamedKey::Tab),
        ("\u{8}", NamedKey::Backspace),
    ];
    for (input, expected) in cases {
        let batches = KeySequenceTranslator::translate(&[input], false).unwrap();
        assert_eq!(batches[0].keys, vec![LogicalKey::Named(expected)]);
    }
}

#[test]
fn test_mapped_codes_become_named_keys() {
    let batches = KeySequenceTranslator::translate(&["\u{E007}\u{E012}\u{E03C}"], false).unwrap();
    assert_eq!(
        batches[0].keys,
        vec![
            LogicalKey::Named(NamedKey::Enter),
            LogicalKey::Named(NamedKey::Left),
            LogicalKey::Named(NamedKey::F12),
        ]
    );
}

#[test]
fn test_unsupported_code_fails() {
    let err = KeySequenceTranslator::translate(&["ab\u{E001}cd"], false).unwrap_err();
    assert!(matches!(err, KeyError::UnsupportedKey { code: 0xE001 }));
    assert_eq!(err.to_string(), "Unsupported WebDriver key: \\ue001");
}

#[test]
fn test_characters_outside_range_are_literal() {
    let batches = KeySequenceTranslator::translate(&["\u{E03E}é"], false).unwrap();
    assert_eq!(batches[0].keys, chars("\u{E03E}é"));
}

#[test]
fn test_input_is_not_mutated() {
    let input = vec![String::from("x"), format!("{RELEASE}y")];
    let before = input.clone();
    KeySequenceTranslator::translate(&input, true).unwrap();
    assert_eq!(input, before);
}
