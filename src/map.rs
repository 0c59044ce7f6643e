//! Ordered dictionary type for plist values.
//!
//! [`PlistMap`] wraps an [`IndexMap`] keyed by [`CommentedString`]. Insertion
//! order is the output order: project files are diffed and committed, so the
//! same tree must always produce the same text.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pbxproj::{CommentedString, PlistMap, PlistValue};
//!
//! let mut map = PlistMap::new();
//! map.insert(CommentedString::new("isa"), PlistValue::from("PBXGroup"));
//! map.insert(CommentedString::new("sourceTree"), PlistValue::from("<group>"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.find("isa").and_then(|(_, v)| v.as_str()), Some("PBXGroup"));
//! ```

use crate::{CommentedString, PlistValue};
use indexmap::IndexMap;

/// An insertion-ordered map of commented-string keys to plist values.
///
/// Keys compare by string and comment, so `"A1"` and `"A1" /* note */` are
/// distinct entries. Use [`PlistMap::find`] to look a key up by its string alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlistMap(IndexMap<CommentedString, PlistValue>);

impl PlistMap {
    /// Creates an empty `PlistMap`.
    #[must_use]
    pub fn new() -> Self {
        PlistMap(IndexMap::new())
    }

    /// Creates an empty `PlistMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PlistMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place
    /// (the entry keeps its original position) and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pbxproj::{CommentedString, PlistMap, PlistValue};
    ///
    /// let mut map = PlistMap::new();
    /// map.insert("first".into(), PlistValue::from("1"));
    /// map.insert("second".into(), PlistValue::from("2"));
    /// assert!(map.insert("first".into(), PlistValue::from("3")).is_some());
    ///
    /// let keys: Vec<_> = map.keys().map(CommentedString::string).collect();
    /// assert_eq!(keys, vec!["first", "second"]);
    /// ```
    pub fn insert(&mut self, key: CommentedString, value: PlistValue) -> Option<PlistValue> {
        self.0.insert(key, value)
    }

    /// Returns the value stored under exactly this key (string and comment).
    #[must_use]
    pub fn get(&self, key: &CommentedString) -> Option<&PlistValue> {
        self.0.get(key)
    }

    /// Returns the first entry whose key string is `key`, ignoring comments.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<(&CommentedString, &PlistValue)> {
        self.0.iter().find(|(k, _)| k.string() == key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, CommentedString, PlistValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, CommentedString, PlistValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, CommentedString, PlistValue> {
        self.0.iter()
    }
}

impl Default for PlistMap {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for PlistMap {
    type Item = (CommentedString, PlistValue);
    type IntoIter = indexmap::map::IntoIter<CommentedString, PlistValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlistMap {
    type Item = (&'a CommentedString, &'a PlistValue);
    type IntoIter = indexmap::map::Iter<'a, CommentedString, PlistValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(CommentedString, PlistValue)> for PlistMap {
    fn from_iter<T: IntoIterator<Item = (CommentedString, PlistValue)>>(iter: T) -> Self {
        PlistMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_distinguishes_keys() {
        let mut map = PlistMap::new();
        map.insert(CommentedString::new("A1"), PlistValue::from("plain"));
        map.insert(
            CommentedString::new("A1").with_comment("note"),
            PlistValue::from("noted"),
        );

        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get(&CommentedString::new("A1")).and_then(PlistValue::as_str),
            Some("plain")
        );
        assert_eq!(
            map.get(&CommentedString::new("A1").with_comment("note"))
                .and_then(PlistValue::as_str),
            Some("noted")
        );
        assert_eq!(map.find("A1").and_then(|(_, v)| v.as_str()), Some("plain"));
        assert!(map.find("B2").is_none());
    }

    #[test]
    fn test_from_iter_keeps_order() {
        let map: PlistMap = ["z", "a", "m"]
            .into_iter()
            .map(|k| (CommentedString::new(k), PlistValue::from(k)))
            .collect();

        let keys: Vec<_> = map.keys().map(CommentedString::string).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
