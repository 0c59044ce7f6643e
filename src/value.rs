//! Dynamic value representation for plist data.
//!
//! [`PlistValue`] is the intermediate form every domain object is turned into
//! before encoding. The format only knows strings, arrays and dictionaries, so
//! numbers and booleans are strings here too.
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_pbxproj::{plist, CommentedString, PlistValue};
//!
//! let name = PlistValue::from("Sources");
//! let reference = PlistValue::from(CommentedString::new("A1").with_comment("main.swift"));
//! let flag = PlistValue::from(true);
//! assert_eq!(flag.as_str(), Some("true"));
//!
//! let group = plist!({
//!     "isa": "PBXGroup",
//!     "children": [reference],
//!     "name": name
//! });
//! assert!(group.is_dictionary());
//! ```
//!
//! ## Converting from Rust Types
//!
//! ```rust
//! use serde_pbxproj::{to_value, PlistValue};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct BuildFile { isa: &'static str, #[serde(rename = "fileRef")] file_ref: String }
//!
//! let value = to_value(&BuildFile { isa: "PBXBuildFile", file_ref: "B1".into() }).unwrap();
//! assert_eq!(value.get("fileRef").and_then(PlistValue::as_str), Some("B1"));
//! ```

use crate::{CommentedString, PlistMap};
use serde::{Serialize, Serializer};
use std::fmt;

/// A plist value: a commented string, an array, or an ordered dictionary.
///
/// Trees are built bottom-up and therefore acyclic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlistValue {
    String(CommentedString),
    Array(Vec<PlistValue>),
    Dictionary(PlistMap),
}

impl PlistValue {
    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, PlistValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, PlistValue::Array(_))
    }

    /// Returns `true` if the value is a dictionary.
    #[inline]
    #[must_use]
    pub const fn is_dictionary(&self) -> bool {
        matches!(self, PlistValue::Dictionary(_))
    }

    /// If the value is a string, returns the commented string. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_commented(&self) -> Option<&CommentedString> {
        match self {
            PlistValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a string, returns its raw text. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pbxproj::PlistValue;
    ///
    /// assert_eq!(PlistValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(PlistValue::Array(vec![]).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_commented().map(CommentedString::string)
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<PlistValue>> {
        match self {
            PlistValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is a dictionary, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_dictionary(&self) -> Option<&PlistMap> {
        match self {
            PlistValue::Dictionary(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` in a dictionary value, ignoring key comments.
    ///
    /// Returns `None` for strings and arrays.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PlistValue> {
        self.as_dictionary()
            .and_then(|map| map.find(key))
            .map(|(_, value)| value)
    }
}

impl fmt::Display for PlistValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut encoder = crate::Encoder::new(crate::PlistOptions::default());
        encoder.write_value(self);
        f.write_str(&encoder.into_inner())
    }
}

impl Serialize for PlistValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PlistValue::String(s) => s.serialize(serializer),
            PlistValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            PlistValue::Dictionary(map) => {
                use serde::ser::SerializeMap;
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    state.serialize_entry(k, v)?;
                }
                state.end()
            }
        }
    }
}

impl From<CommentedString> for PlistValue {
    fn from(value: CommentedString) -> Self {
        PlistValue::String(value)
    }
}

impl From<&str> for PlistValue {
    fn from(value: &str) -> Self {
        PlistValue::String(CommentedString::new(value))
    }
}

impl From<String> for PlistValue {
    fn from(value: String) -> Self {
        PlistValue::String(CommentedString::new(value))
    }
}

// `true`/`false` stay as text; the encoder writes them as YES/NO.
impl From<bool> for PlistValue {
    fn from(value: bool) -> Self {
        PlistValue::from(value.to_string())
    }
}

impl From<i32> for PlistValue {
    fn from(value: i32) -> Self {
        PlistValue::from(value.to_string())
    }
}

impl From<i64> for PlistValue {
    fn from(value: i64) -> Self {
        PlistValue::from(value.to_string())
    }
}

impl From<u32> for PlistValue {
    fn from(value: u32) -> Self {
        PlistValue::from(value.to_string())
    }
}

impl From<u64> for PlistValue {
    fn from(value: u64) -> Self {
        PlistValue::from(value.to_string())
    }
}

impl From<usize> for PlistValue {
    fn from(value: usize) -> Self {
        PlistValue::from(value.to_string())
    }
}

impl From<f64> for PlistValue {
    fn from(value: f64) -> Self {
        PlistValue::from(value.to_string())
    }
}

impl From<Vec<PlistValue>> for PlistValue {
    fn from(value: Vec<PlistValue>) -> Self {
        PlistValue::Array(value)
    }
}

impl From<PlistMap> for PlistValue {
    fn from(value: PlistMap) -> Self {
        PlistValue::Dictionary(value)
    }
}
