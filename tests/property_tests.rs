//! Property-based tests for the quoting rules and layout guarantees.

use proptest::prelude::*;
use serde_pbxproj::{CommentedString, PlistMap, PlistValue};

/// Reverses the escape table, stripping surrounding quotes first.
fn unescape(text: &str) -> String {
    let inner = if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    };

    let mut output = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            output.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => output.push('\\'),
            Some('"') => output.push('"'),
            Some('a') => output.push('\u{7}'),
            Some('b') => output.push('\u{8}'),
            Some('v') => output.push('\u{b}'),
            Some('f') => output.push('\u{c}'),
            Some('t') => output.push('\t'),
            Some('n') => output.push('\n'),
            Some('U') => {
                let hex: String = chars.by_ref().take(4).collect();
                let code = u32::from_str_radix(&hex, 16).unwrap();
                output.push(char::from_u32(code).unwrap());
            }
            other => panic!("unexpected escape {:?} in {:?}", other, text),
        }
    }
    output
}

/// Checks that every `"` and `\` inside the quotes is part of an escape.
fn has_no_bare_quote_or_backslash(text: &str) -> bool {
    let inner = &text[1..text.len() - 1];
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return false;
                }
            }
            '"' => return false,
            _ => {}
        }
    }
    true
}

// U+0001 is left out: `$(inherited)` cannot be told apart from the same text typed literally.
fn escapable_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::char::range('\u{2}', '\u{7f}'),
            1 => Just('\u{0}'),
            1 => prop_oneof![Just('"'), Just('\\'), Just('\t'), Just('\n')],
            1 => any::<char>().prop_filter("no inherited marker", |c| *c != '\u{1}'),
        ],
        0..32,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn is_special_case(s: &str) -> bool {
    matches!(s, "" | "true" | "false")
}

proptest! {
    #[test]
    fn prop_identifiers_are_bare(s in "[a-zA-Z0-9._/$]{1,24}") {
        prop_assume!(!is_special_case(&s));
        prop_assert_eq!(CommentedString::new(s.clone()).valid_string().into_owned(), s);
    }

    #[test]
    fn prop_escaping_round_trips(s in escapable_string(), special_flag in any::<bool>()) {
        prop_assume!(!is_special_case(&s));
        let value = CommentedString::new(s.clone()).with_special_flag(special_flag);
        prop_assert_eq!(unescape(&value.valid_string()), s);
    }

    #[test]
    fn prop_quotes_and_backslashes_are_escaped(
        prefix in escapable_string(),
        special in prop_oneof![Just('"'), Just('\\')],
        suffix in escapable_string(),
    ) {
        let s = format!("{}{}{}", prefix, special, suffix);
        let text = CommentedString::new(s).valid_string().into_owned();
        prop_assert!(text.starts_with('"') && text.ends_with('"'));
        prop_assert!(has_no_bare_quote_or_backslash(&text), "bare character in {:?}", text);
    }

    #[test]
    fn prop_special_flag_leaves_no_raw_whitespace(s in escapable_string()) {
        prop_assume!(!is_special_case(&s));
        let text = CommentedString::new(s).with_special_flag(true).valid_string().into_owned();
        prop_assert!(!text.contains('\t'));
        prop_assert!(!text.contains('\n'));
    }

    #[test]
    fn prop_dictionary_order_is_insertion_order(
        keys in prop::collection::hash_set("[a-zA-Z_]{1,12}", 1..12)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    ) {
        let map: PlistMap = keys
            .iter()
            .map(|k| (CommentedString::new(k.as_str()), PlistValue::from("v")))
            .collect();
        let text = PlistValue::Dictionary(map).to_string();

        let written: Vec<_> = text
            .lines()
            .filter_map(|line| line.trim_start().strip_suffix(" = v;"))
            .collect();
        let expected: Vec<_> = keys
            .iter()
            .map(|k| match k.as_str() {
                "true" => "YES",
                "false" => "NO",
                other => other,
            })
            .collect();
        prop_assert_eq!(written, expected);
    }

    #[test]
    fn prop_encoding_is_deterministic(values in prop::collection::vec(escapable_string(), 0..8)) {
        let value = PlistValue::Array(values.into_iter().map(PlistValue::from).collect());
        prop_assert_eq!(value.to_string(), value.clone().to_string());
    }
}
