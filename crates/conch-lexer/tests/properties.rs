//! Property tests for the tokenizer.

use conch_lexer::tokenize;
use proptest::prelude::*;

/// A word: no whitespace, no quote characters.
fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.:/=+-]{1,12}".prop_map(|s| s)
}

proptest! {
    #[test]
    fn bare_words_round_trip(words in prop::collection::vec(word(), 0..8)) {
        let line = words.join(" ");
        let tokens: Vec<_> = tokenize(&line).collect();
        prop_assert_eq!(tokens, words);
    }

    #[test]
    fn quoted_spans_keep_interior_whitespace(
        words in prop::collection::vec(word(), 1..4),
        interior in "[a-zA-Z0-9_ ]{0,20}",
    ) {
        let line = format!("{} \"{}\"", words.join(" "), interior);
        let tokens: Vec<_> = tokenize(&line).collect();
        prop_assert_eq!(tokens.len(), words.len() + 1);
        prop_assert_eq!(tokens.last().copied(), Some(interior.as_str()));
    }

    #[test]
    fn tokenizing_never_panics(line in ".{0,200}") {
        let _ = tokenize(&line).count();
    }

    #[test]
    fn quote_free_input_yields_whitespace_free_tokens(line in "[^\"']{0,120}") {
        for token in tokenize(&line) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }
}
