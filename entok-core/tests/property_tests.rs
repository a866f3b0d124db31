//! Property tests: offsets always point back at the tokens they describe

use entok_core::{offsets, EnglishTokenizer, SpaceTokenizer, Tokenizer};
use proptest::prelude::*;
use std::sync::OnceLock;

fn tokenizer() -> &'static EnglishTokenizer {
    static TOKENIZER: OnceLock<EnglishTokenizer> = OnceLock::new();
    TOKENIZER.get_or_init(|| EnglishTokenizer::new().expect("embedded resources load"))
}

/// Characters that exercise every rule family
const ALPHABET: &[char] = &[
    'a', 'b', 'e', 'n', 'o', 't', 's', 'A', 'T', 'U', 'S', '0', '1', '5', ' ', ' ', '\t', '\n',
    '.', ',', ';', ':', '!', '?', '\'', '"', '-', '&', '/', '|', '@', '#', '$', '(', ')', '[',
    ']', '<', '>', '=', '*', '^', '\u{2019}', '\u{201C}', '\u{2014}', '\u{20AC}', '\u{00E9}',
    '\u{00A0}', '\u{4E2D}',
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..48)
        .prop_map(|chars| chars.into_iter().collect())
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "don't", "U.S.", "Dr.", "e-mail", "10kg", "cannot", "AT&T", ":-)", "(1a)", "$1,000.50",
        "jinho@elit.cloud", "https://elit.cloud", "hello.World", "no.", "5", "'cause", "&amp;",
        "555-1234", "Wait...", "p-u-s-h",
    ])
    .prop_map(str::to_string)
}

fn sentence_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..12).prop_map(|words| words.join(" "))
}

fn check_coverage(text: &str) -> Result<(), TestCaseError> {
    let chars: Vec<char> = text.chars().collect();
    let seq = tokenizer().tokenize(text).unwrap();

    let mut covered = vec![false; chars.len()];
    let mut prev_end = 0;
    for token in seq.iter() {
        prop_assert!(token.begin < token.end, "empty token {}", token);
        prop_assert!(token.begin >= prev_end, "overlapping token {}", token);
        prop_assert!(token.end <= chars.len());

        let slice: String = chars[token.begin..token.end].iter().collect();
        prop_assert_eq!(&slice, &token.text);

        for flag in &mut covered[token.begin..token.end] {
            *flag = true;
        }
        prev_end = token.end;
    }

    for (i, c) in chars.iter().enumerate() {
        prop_assert_eq!(
            covered[i],
            !c.is_whitespace(),
            "character {} ({:?}) in {:?}",
            i,
            c,
            text
        );
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_tokens_partition_non_whitespace(text in text_strategy()) {
        check_coverage(&text)?;
    }

    #[test]
    fn prop_tokens_partition_sentences(text in sentence_strategy()) {
        check_coverage(&text)?;
    }

    #[test]
    fn prop_arbitrary_unicode_never_panics(text in any::<String>()) {
        check_coverage(&text)?;
    }

    #[test]
    fn prop_offsets_reconstruct(text in text_strategy()) {
        let seq = tokenizer().tokenize(&text).unwrap();
        let rebuilt = offsets(&text, &seq.tokens()).unwrap();
        prop_assert_eq!(rebuilt, seq.offsets());
    }

    #[test]
    fn prop_space_tokenizer_round_trip(text in sentence_strategy()) {
        let tokens = tokenizer().tokenize(&text).unwrap().into_parts().0;
        let joined = tokens.join(" ");
        let again = SpaceTokenizer::new().tokenize(&joined).unwrap().into_parts().0;
        prop_assert_eq!(again, tokens);
    }
}
