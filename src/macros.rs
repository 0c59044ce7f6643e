/// Builds a [`PlistValue`](crate::PlistValue) from a JSON-like literal.
///
/// Dictionary keys must be string literals and keep their written order. Any
/// other expression goes through `PlistValue::from`, so strings, booleans,
/// numbers, [`CommentedString`](crate::CommentedString)s and existing values
/// can be spliced in. Expressions longer than a single token tree need
/// parentheses.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::{plist, CommentedString};
///
/// let file = CommentedString::new("F1").with_comment("main.swift");
/// let phase = plist!({
///     "isa": "PBXSourcesBuildPhase",
///     "buildActionMask": 2147483647,
///     "files": [file],
///     "runOnlyForDeploymentPostprocessing": 0
/// });
/// assert_eq!(phase.get("buildActionMask").and_then(|v| v.as_str()), Some("2147483647"));
/// ```
#[macro_export]
macro_rules! plist {
    // Handle empty array
    ([]) => {
        $crate::PlistValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::PlistValue::Array(vec![$($crate::plist!($elem)),*])
    };

    // Handle empty dictionary
    ({}) => {
        $crate::PlistValue::Dictionary($crate::PlistMap::new())
    };

    // Handle non-empty dictionary
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut dictionary = $crate::PlistMap::new();
        $(
            dictionary.insert($crate::CommentedString::from($key), $crate::plist!($value));
        )*
        $crate::PlistValue::Dictionary(dictionary)
    }};

    // Anything else converts through `From`
    ($s:expr) => {
        $crate::PlistValue::from($s)
    };
}

#[cfg(test)]
mod tests {
    use crate::{CommentedString, PlistMap, PlistValue};

    #[test]
    fn test_plist_macro_scalars() {
        assert_eq!(plist!(true), PlistValue::from("true"));
        assert_eq!(plist!(42), PlistValue::from("42"));
        assert_eq!(plist!("hello"), PlistValue::from("hello"));
    }

    #[test]
    fn test_plist_macro_arrays() {
        assert_eq!(plist!([]), PlistValue::Array(vec![]));
        assert_eq!(
            plist!(["a", ["b"]]),
            PlistValue::Array(vec![
                PlistValue::from("a"),
                PlistValue::Array(vec![PlistValue::from("b")]),
            ])
        );
    }

    #[test]
    fn test_plist_macro_dictionaries() {
        assert_eq!(plist!({}), PlistValue::Dictionary(PlistMap::new()));

        let value = plist!({ "z": "1", "a": { "g": "h" } });
        let keys: Vec<_> = value
            .as_dictionary()
            .unwrap()
            .keys()
            .map(CommentedString::string)
            .collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert_eq!(
            value.get("a").and_then(|v| v.get("g")).and_then(PlistValue::as_str),
            Some("h")
        );
    }
}
