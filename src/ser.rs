//! Plist conversion and encoding.
//!
//! Encoding runs in two steps:
//!
//! 1. [`PlistValueSerializer`] turns any `T: Serialize` into a [`PlistValue`]
//!    tree. Values with no plist form are rejected here, before any output
//!    exists.
//! 2. [`Encoder`] walks the finished tree and writes text into an owned buffer.
//!    This step cannot fail.
//!
//! ## Conversion rules
//!
//! - Strings, chars and numbers become string leaves (`46`, `2.5`)
//! - Booleans become the strings `true`/`false`, written as `YES`/`NO`
//! - Sequences and tuples become arrays; maps and structs become dictionaries
//!   in field or insertion order
//! - Unit enum variants become their name
//! - [`CommentedString`] fields keep their comment and special flag
//! - `None`, `()`, byte arrays and data-carrying enum variants are errors
//!
//! ## Direct Encoder Usage
//!
//! ```rust
//! use serde_pbxproj::{plist, Encoder, PlistOptions};
//!
//! let value = plist!({ "ALWAYS_SEARCH_USER_PATHS": false, "SDKROOT": "iphoneos" });
//!
//! let mut encoder = Encoder::new(PlistOptions::default());
//! encoder.write_value(&value);
//! assert_eq!(
//!     encoder.into_inner(),
//!     "{\n\tALWAYS_SEARCH_USER_PATHS = NO;\n\tSDKROOT = iphoneos;\n}"
//! );
//! ```

use crate::commented::COMMENTED_STRING_TOKEN;
use crate::format::{COMMENT_END, COMMENT_START, ISA};
use crate::{CommentedString, Error, PlistMap, PlistOptions, PlistValue, Result};
use serde::ser::Impossible;
use serde::{ser, Serialize};
use tracing::debug;

/// Writes [`PlistValue`] trees as pbxproj text.
///
/// Dictionaries and arrays are written one entry per line. Dictionary entries
/// whose value is an object of a class listed in
/// [`PlistOptions::inline_isas`] are written on a single line.
pub struct Encoder {
    output: String,
    options: PlistOptions,
    indent_unit: String,
    indent_level: usize,
}

impl Encoder {
    pub fn new(options: PlistOptions) -> Self {
        let indent_unit = options.indent.as_str().into_owned();
        Encoder {
            output: String::with_capacity(256),
            options,
            indent_unit,
            indent_level: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    pub fn options(&self) -> &PlistOptions {
        &self.options
    }

    /// Writes `value` at the current nesting level.
    ///
    /// The opening bracket is written at the cursor and the closing bracket on
    /// its own line, indented to the current level.
    pub fn write_value(&mut self, value: &PlistValue) {
        match value {
            PlistValue::String(s) => self.write_string(s),
            PlistValue::Array(items) => {
                self.output.push_str("(\n");
                self.indent();
                for item in items {
                    self.write_indent();
                    self.write_value(item);
                    self.output.push_str(",\n");
                }
                self.dedent();
                self.write_indent();
                self.output.push(')');
            }
            PlistValue::Dictionary(map) => {
                self.output.push_str("{\n");
                self.indent();
                for (key, value) in map {
                    self.write_entry(key, value);
                }
                self.dedent();
                self.write_indent();
                self.output.push('}');
            }
        }
    }

    /// Writes `value` without line breaks: `{key = value; }` and `(value, )`.
    pub fn write_inline_value(&mut self, value: &PlistValue) {
        match value {
            PlistValue::String(s) => self.write_string(s),
            PlistValue::Array(items) => {
                self.output.push('(');
                for item in items {
                    self.write_inline_value(item);
                    self.output.push_str(", ");
                }
                self.output.push(')');
            }
            PlistValue::Dictionary(map) => {
                self.output.push('{');
                for (key, value) in map {
                    self.write_string(key);
                    self.output.push_str(" = ");
                    self.write_inline_value(value);
                    self.output.push_str("; ");
                }
                self.output.push('}');
            }
        }
    }

    /// Writes one indented `key = value;` line.
    pub(crate) fn write_entry(&mut self, key: &CommentedString, value: &PlistValue) {
        self.write_indent();
        self.write_string(key);
        self.output.push_str(" = ");
        if self.is_inline_object(value) {
            self.write_inline_value(value);
        } else {
            self.write_value(value);
        }
        self.output.push_str(";\n");
    }

    pub(crate) fn write_string(&mut self, s: &CommentedString) {
        self.output.push_str(&s.valid_string());
        if let Some(comment) = s.comment() {
            self.output.push(' ');
            self.output.push_str(COMMENT_START);
            self.output.push(' ');
            self.output.push_str(comment);
            self.output.push(' ');
            self.output.push_str(COMMENT_END);
        }
    }

    pub(crate) fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.indent_unit);
        }
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        self.output.push_str(s);
    }

    pub(crate) fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub(crate) fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn is_inline_object(&self, value: &PlistValue) -> bool {
        value
            .get(ISA)
            .and_then(PlistValue::as_str)
            .map_or(false, |isa| self.options.is_inline_isa(isa))
    }
}

/// Converts `T: Serialize` into a [`PlistValue`].
///
/// Use through [`to_value`](crate::to_value).
pub struct PlistValueSerializer;

pub struct SerializeVec {
    vec: Vec<PlistValue>,
}

pub struct SerializeMap {
    map: PlistMap,
    current_key: Option<CommentedString>,
}

/// Struct serializer: either an ordinary dictionary or a [`CommentedString`]
/// being rebuilt from its fields.
pub enum SerializeStruct {
    Map(SerializeMap),
    Commented(SerializeCommented),
}

#[derive(Default)]
pub struct SerializeCommented {
    string: Option<String>,
    comment: Option<String>,
    special_flag: bool,
}

fn unsupported(kind: &str) -> Error {
    debug!(kind, "rejecting value with no plist representation");
    Error::unsupported_type(kind)
}

impl ser::Serializer for PlistValueSerializer {
    type Ok = PlistValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = Impossible<PlistValue, Error>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeStruct;
    type SerializeStructVariant = Impossible<PlistValue, Error>;

    fn serialize_bool(self, v: bool) -> Result<PlistValue> {
        Ok(PlistValue::from(v))
    }

    fn serialize_i8(self, v: i8) -> Result<PlistValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<PlistValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<PlistValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<PlistValue> {
        Ok(PlistValue::from(v.to_string()))
    }

    fn serialize_i128(self, v: i128) -> Result<PlistValue> {
        Ok(PlistValue::from(v.to_string()))
    }

    fn serialize_u8(self, v: u8) -> Result<PlistValue> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<PlistValue> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<PlistValue> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<PlistValue> {
        Ok(PlistValue::from(v.to_string()))
    }

    fn serialize_u128(self, v: u128) -> Result<PlistValue> {
        Ok(PlistValue::from(v.to_string()))
    }

    fn serialize_f32(self, v: f32) -> Result<PlistValue> {
        Ok(PlistValue::from(v.to_string()))
    }

    fn serialize_f64(self, v: f64) -> Result<PlistValue> {
        Ok(PlistValue::from(v.to_string()))
    }

    fn serialize_char(self, v: char) -> Result<PlistValue> {
        Ok(PlistValue::from(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<PlistValue> {
        Ok(PlistValue::from(v))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<PlistValue> {
        Err(unsupported("byte arrays"))
    }

    fn serialize_none(self) -> Result<PlistValue> {
        Err(unsupported("null values"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<PlistValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<PlistValue> {
        Err(unsupported("unit values"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<PlistValue> {
        Err(unsupported(&format!("unit struct {}", name)))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<PlistValue> {
        Ok(PlistValue::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<PlistValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<PlistValue>
    where
        T: ?Sized + Serialize,
    {
        Err(unsupported("newtype variants"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(unsupported("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<SerializeStruct> {
        if name == COMMENTED_STRING_TOKEN {
            Ok(SerializeStruct::Commented(SerializeCommented::default()))
        } else {
            Ok(SerializeStruct::Map(SerializeMap::new()))
        }
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(unsupported("struct variants"))
    }
}

impl SerializeVec {
    fn with_capacity(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: PlistMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = PlistValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_plist_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<PlistValue> {
        Ok(PlistValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = PlistValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<PlistValue> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = PlistValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<PlistValue> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = PlistValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_plist_value(key)? {
            PlistValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            PlistValue::Array(_) => Err(Error::invalid_key("expected a string, found an array")),
            PlistValue::Dictionary(_) => {
                Err(Error::invalid_key("expected a string, found a dictionary"))
            }
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_plist_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<PlistValue> {
        Ok(PlistValue::Dictionary(self.map))
    }
}

impl ser::SerializeStruct for SerializeStruct {
    type Ok = PlistValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match self {
            SerializeStruct::Map(state) => {
                state
                    .map
                    .insert(CommentedString::new(key), to_plist_value(value)?);
                Ok(())
            }
            SerializeStruct::Commented(state) => state.serialize_field(key, value),
        }
    }

    fn end(self) -> Result<PlistValue> {
        match self {
            SerializeStruct::Map(state) => Ok(PlistValue::Dictionary(state.map)),
            SerializeStruct::Commented(state) => state.end(),
        }
    }
}

impl SerializeCommented {
    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let text = match to_plist_value(value)? {
            PlistValue::String(s) => s.string().to_owned(),
            _ => return Err(Error::custom(format!("commented string field `{}` is not text", key))),
        };
        match key {
            "string" => self.string = Some(text),
            "comment" => self.comment = Some(text),
            "special_flag" => self.special_flag = text == "true",
            _ => return Err(Error::custom(format!("unknown commented string field `{}`", key))),
        }
        Ok(())
    }

    fn end(self) -> Result<PlistValue> {
        let string = self
            .string
            .ok_or_else(|| Error::custom("commented string without a `string` field"))?;
        let mut value = CommentedString::new(string).with_special_flag(self.special_flag);
        if let Some(comment) = self.comment {
            value = value.with_comment(comment);
        }
        Ok(PlistValue::String(value))
    }
}

fn to_plist_value<T: Serialize + ?Sized>(value: &T) -> Result<PlistValue> {
    value.serialize(PlistValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{plist, Indent};
    use std::collections::{BTreeMap, HashMap};

    fn encode(value: &PlistValue, options: PlistOptions) -> String {
        let mut encoder = Encoder::new(options);
        encoder.write_value(value);
        encoder.into_inner()
    }

    #[test]
    fn test_scalars_stringify() {
        assert_eq!(to_plist_value(&42u8).unwrap(), PlistValue::from("42"));
        assert_eq!(to_plist_value(&-7i32).unwrap(), PlistValue::from("-7"));
        assert_eq!(to_plist_value(&1.5f32).unwrap(), PlistValue::from("1.5"));
        assert_eq!(to_plist_value(&'x').unwrap(), PlistValue::from("x"));
        assert_eq!(to_plist_value(&true).unwrap(), PlistValue::from("true"));
        assert_eq!(to_plist_value(&Some("a")).unwrap(), PlistValue::from("a"));
    }

    #[test]
    fn test_unsupported_values_fail() {
        assert!(matches!(
            to_plist_value(&Option::<u8>::None),
            Err(Error::UnsupportedType(_))
        ));
        assert!(matches!(to_plist_value(&()), Err(Error::UnsupportedType(_))));

        #[derive(Serialize)]
        enum Phase {
            Script { body: String },
        }
        assert!(matches!(
            to_plist_value(&Phase::Script { body: "make".into() }),
            Err(Error::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_non_string_keys_fail() {
        let mut map = BTreeMap::new();
        map.insert(vec!["a"], "b");
        assert!(matches!(to_plist_value(&map), Err(Error::InvalidKey(_))));
    }

    #[test]
    fn test_commented_string_round_trips() {
        let original = CommentedString::new("\tmake\n")
            .with_comment("ShellScript")
            .with_special_flag(true);
        let value = to_plist_value(&original).unwrap();

        let rebuilt = value.as_commented().unwrap();
        assert_eq!(rebuilt, &original);
        assert!(rebuilt.special_flag());
    }

    #[test]
    fn test_commented_key_keeps_comment() {
        let mut objects = HashMap::new();
        objects.insert(CommentedString::new("A1").with_comment("main.swift"), "x");
        let value = to_plist_value(&objects).unwrap();

        let key = value.as_dictionary().unwrap().keys().next().unwrap();
        assert_eq!(key.comment(), Some("main.swift"));
    }

    #[test]
    fn test_encode_nested_multiline() {
        let value = plist!({
            "children": ["A1", "B2"],
            "settings": { "ATTRIBUTES": ["Weak"] },
            "empty": []
        });

        let expected = "{\n\
                        \tchildren = (\n\
                        \t\tA1,\n\
                        \t\tB2,\n\
                        \t);\n\
                        \tsettings = {\n\
                        \t\tATTRIBUTES = (\n\
                        \t\t\tWeak,\n\
                        \t\t);\n\
                        \t};\n\
                        \tempty = (\n\
                        \t);\n\
                        }";
        assert_eq!(encode(&value, PlistOptions::default()), expected);
    }

    #[test]
    fn test_encode_inline_object() {
        let value = plist!({
            "A1": {
                "isa": "PBXBuildFile",
                "fileRef": "B2",
                "settings": { "ATTRIBUTES": ["Weak", "Public"] }
            }
        });

        assert_eq!(
            encode(&value, PlistOptions::default()),
            "{\n\tA1 = {isa = PBXBuildFile; fileRef = B2; settings = {ATTRIBUTES = (Weak, Public, ); }; };\n}"
        );
        assert_eq!(
            encode(&value, PlistOptions::flat().with_indent(Indent::Spaces(2))),
            "{\n  A1 = {\n    isa = PBXBuildFile;\n    fileRef = B2;\n    settings = {\n      ATTRIBUTES = (\n        Weak,\n        Public,\n      );\n    };\n  };\n}"
        );
    }

    #[test]
    fn test_encode_comments() {
        let mut map = PlistMap::new();
        map.insert(
            CommentedString::new("mainGroup").with_comment("ignored by Xcode"),
            PlistValue::from(CommentedString::new("G1").with_comment("Main Group")),
        );
        assert_eq!(
            encode(&PlistValue::Dictionary(map), PlistOptions::default()),
            "{\n\tmainGroup /* ignored by Xcode */ = G1 /* Main Group */;\n}"
        );
    }
}
