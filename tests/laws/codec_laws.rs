//! Key codec laws

use proptest::prelude::*;

use crate::common::*;
use tokenkv::{decode, encode};

// ============================================================================
// Fixed Examples
// ============================================================================

#[test]
fn test_escaping_examples() {
    let cases: Vec<(Vec<&str>, &str)> = vec![
        (vec!["database", "password"], "database/password"),
        (vec!["i/o"], r"i\/o"),
        (vec!["🙂", "slightly smiling face"], r"🙂/slightly\ smiling\ face"),
        (vec!["a b"], r"a\ b"),
        (vec![r"C:\"], r"C:\\"),
        (vec!["{x}"], r"\{x}"),
        (vec!["", ""], "/"),
        (vec!["line\nbreak"], "line\\\nbreak"),
    ];

    for (tokens, expected) in cases {
        let encoded = encode(&tokens);
        assert_eq!(encoded, expected, "tokens: {:?}", tokens);
        assert_eq!(decode(&encoded).unwrap(), strings(&tokens));
    }
}

#[test]
fn test_tolerant_decoding() {
    assert_eq!(decode(r"\a\b").unwrap(), strings(&["ab"]));
    assert_eq!(decode(r"abc\").unwrap(), strings(&["abc"]));
    assert_eq!(decode("a//b").unwrap(), strings(&["a", "", "b"]));
}

#[test]
fn test_invalid_utf8_reports_offset() {
    let err = decode(&b"ok\xFFno"[..]).unwrap_err();
    match err {
        tokenkv::Error::Decode { offset, .. } => assert_eq!(offset, 2),
        other => panic!("Wrong error variant: {:?}", other),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn decode_inverts_encode(tokens in token_list_strategy()) {
        prop_assert_eq!(decode(encode(&tokens)).unwrap(), tokens);
    }

    #[test]
    fn encoding_is_injective(a in token_list_strategy(), b in token_list_strategy()) {
        prop_assume!(a != b);
        prop_assert_ne!(encode(&a), encode(&b));
    }

    #[test]
    fn delimiter_count_matches_token_count(tokens in prop::collection::vec(token_strategy(), 1..6)) {
        let encoded = encode(&tokens);
        // Count unescaped delimiters
        let mut delimiters = 0;
        let mut escaped = false;
        for c in encoded.chars() {
            match (escaped, c) {
                (true, _) => escaped = false,
                (false, '\\') => escaped = true,
                (false, '/') => delimiters += 1,
                _ => {}
            }
        }
        prop_assert_eq!(delimiters, tokens.len() - 1);
    }
}
