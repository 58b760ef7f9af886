//! Optional laws

use proptest::prelude::*;

use crate::common::*;
use tokenkv::{AsText, Error};

#[test]
fn test_absent_and_empty_are_distinct() {
    assert_ne!(Optional::<String>::Absent, present(""));
    assert!(present("").is_present());
    assert_eq!(present("").as_text().unwrap(), "");
    assert!(matches!(
        Optional::<String>::Absent.as_text(),
        Err(Error::NotLoaded)
    ));
}

#[test]
fn test_display_forms() {
    assert_eq!(Optional::<String>::Absent.to_string(), "«no-string»");
    assert_eq!(present("hi").to_string(), "\"hi\"");
}

#[test]
fn test_serde_as_option() {
    let json = serde_json::to_string(&present("x")).unwrap();
    assert_eq!(json, "\"x\"");
    assert_eq!(serde_json::to_string(&Optional::<String>::Absent).unwrap(), "null");
    let back: Optional<String> = serde_json::from_str("null").unwrap();
    assert!(back.is_absent());
}

fn optional_strategy() -> impl Strategy<Value = Optional<String>> {
    prop::option::of(".{0,8}").prop_map(Optional::from)
}

proptest! {
    #[test]
    fn or_present_keeps_present(s in ".{0,8}", d in ".{0,8}") {
        prop_assert_eq!(present(&s).or_present(d), present(&s));
    }

    #[test]
    fn or_present_fills_absent(d in ".{0,8}") {
        prop_assert_eq!(Optional::<String>::Absent.or_present(d.clone()), Optional::present(d));
    }

    #[test]
    fn map_identity(o in optional_strategy()) {
        prop_assert_eq!(o.clone().map(|s| s), o);
    }

    #[test]
    fn map_composes(o in optional_strategy()) {
        let f = |s: String| format!("{}!", s);
        let g = |s: String| s.len().to_string();
        prop_assert_eq!(o.clone().map(f).map(g), o.map(|s| g(f(s))));
    }

    #[test]
    fn and_then_left_identity(s in ".{0,8}") {
        let f = |s: String| if s.is_empty() { Optional::Absent } else { Optional::present(s.to_uppercase()) };
        prop_assert_eq!(present(&s).and_then(f), f(s));
    }

    #[test]
    fn and_then_right_identity(o in optional_strategy()) {
        prop_assert_eq!(o.clone().and_then(Optional::present), o);
    }

    #[test]
    fn into_parts_matches_presence(o in optional_strategy()) {
        let present = o.is_present();
        let expected = o.clone().unwrap_or(String::new());
        prop_assert_eq!(o.into_parts(), (expected, present));
    }
}
