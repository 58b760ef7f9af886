//! Key laws

use proptest::prelude::*;

use crate::common::*;
use tokenkv::{ScanSource, TryText};

#[test]
fn test_single_empty_token_is_not_no_key() {
    let empty = Key::some_key([""]);
    assert!(!empty.is_no_key());
    assert_eq!(empty.canonical_form(), "");
    assert_eq!(Key::parse(""), Key::no_key());
}

#[test]
fn test_key_display() {
    assert_eq!(Key::no_key().to_string(), "«no-key»");
    assert_eq!(Key::some_key(["a b", "c"]).to_string(), r#""a\\ b/c""#);
}

#[test]
fn test_scan_sources() {
    assert_eq!(Key::scan("a/b").unwrap(), Key::some_key(["a", "b"]));
    assert_eq!(Key::scan(b"x".to_vec()).unwrap(), Key::shallow("x"));
    assert_eq!(Key::scan(Option::<Vec<u8>>::None).unwrap(), Key::no_key());
    assert_eq!(Key::scan(ScanSource::display(42)).unwrap(), Key::shallow("42"));
    assert!(Key::scan(ScanSource::other(&1.5f64)).unwrap_err().is_unsupported_source());
}

#[test]
fn test_scan_try_text_source() {
    struct Version(u32, u32);

    impl TryText for Version {
        fn try_text(&self) -> Result<String, tokenkv::TextError> {
            Ok(format!("v{}/{}", self.0, self.1))
        }
    }

    let key = Key::scan(ScanSource::try_text(Version(1, 2))).unwrap();
    assert_eq!(key, Key::some_key(["v1", "2"]));
}

#[test]
fn test_no_key_sorts_first() {
    let mut keys = vec![Key::some_key(["b"]), Key::no_key(), Key::some_key(["a"])];
    keys.sort();
    assert_eq!(keys, vec![Key::no_key(), Key::some_key(["a"]), Key::some_key(["b"])]);
}

proptest! {
    #[test]
    fn equal_tokens_equal_keys(tokens in token_list_strategy()) {
        prop_assert_eq!(Key::some_key(&tokens), Key::some_key(&tokens));
    }

    #[test]
    fn key_round_trips_through_text(tokens in token_list_strategy()) {
        let key = Key::some_key(&tokens);
        prop_assert_eq!(Key::parse(key.canonical_form()), key.clone());
        prop_assert_eq!(key.tokens(), tokens);
    }

    #[test]
    fn key_round_trips_through_serde(tokens in prop::collection::vec(token_strategy(), 0..6)) {
        let key = Key::some_key(&tokens);
        let json = serde_json::to_string(&key).unwrap();
        let back: Key = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, key);
    }

    #[test]
    fn map_identity_on_keys(tokens in token_list_strategy()) {
        let key = Key::some_key(&tokens);
        prop_assert_eq!(key.clone().map(|ts| ts), key);
    }

    #[test]
    fn or_tokens_prefers_some_key(tokens in prop::collection::vec(token_strategy(), 1..4)) {
        let key = Key::some_key(&tokens);
        prop_assert_eq!(key.clone().or_tokens(["fallback"]), key);
        prop_assert_eq!(Key::no_key().or_tokens(&tokens), Key::some_key(&tokens));
    }
}
