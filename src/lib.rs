//! # serde_pbxproj
//!
//! A Serde-compatible encoder for the textual property-list dialect used by Xcode
//! project files (`project.pbxproj`).
//!
//! ## What is handled here?
//!
//! Project files are old-style NeXTSTEP property lists: strings, `( arrays )`
//! and `{ dictionaries; }`, with `/* comments */` after keys and values. Xcode
//! quotes and escapes strings with a fixed set of rules, and any difference in
//! those rules shows up as noise in version control. This crate reproduces them
//! exactly:
//!
//! - **Minimal quoting**: strings made of `[A-Za-z0-9./_$]` are written bare
//! - **Fixed escapes**: quotes, backslashes and control characters use the
//!   legacy escape table, including `$(inherited)` for U+0001
//! - **Booleans**: the strings `true` and `false` become `YES` and `NO`
//! - **Script text**: strings flagged as scripts get `\t` and `\n` escapes
//! - **Stable layout**: key order is insertion order and output is byte-for-byte
//!   repeatable
//!
//! Parsing is not provided.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_pbxproj::to_string;
//!
//! #[derive(Serialize)]
//! struct BuildSettings {
//!     #[serde(rename = "PRODUCT_NAME")]
//!     product_name: String,
//!     #[serde(rename = "SWIFT_VERSION")]
//!     swift_version: String,
//!     #[serde(rename = "ENABLE_BITCODE")]
//!     enable_bitcode: bool,
//! }
//!
//! let settings = BuildSettings {
//!     product_name: "My App".to_string(),
//!     swift_version: "5.0".to_string(),
//!     enable_bitcode: false,
//! };
//!
//! let text = to_string(&settings).unwrap();
//! assert_eq!(
//!     text,
//!     "{\n\tPRODUCT_NAME = \"My App\";\n\tSWIFT_VERSION = 5.0;\n\tENABLE_BITCODE = NO;\n}"
//! );
//! ```
//!
//! ### Comments and Script Text
//!
//! ```rust
//! use serde_pbxproj::{plist, CommentedString};
//!
//! let phase = plist!({
//!     "isa": "PBXShellScriptBuildPhase",
//!     "files": [(CommentedString::new("B1").with_comment("main.swift in Sources"))],
//!     "shellScript": (CommentedString::new("cd ..\necho done").with_special_flag(true))
//! });
//!
//! let text = phase.to_string();
//! assert!(text.contains("B1 /* main.swift in Sources */,"));
//! assert!(text.contains("shellScript = \"cd ..\\necho done\";"));
//! ```
//!
//! ### Whole Project Files
//!
//! See [`Document`] for the file header, `objects` sections and `rootObject`.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Conversion finishes before any text is written, so a rejected value never
//!   leaves partial output behind
//! - Encoding a [`PlistValue`] tree cannot fail

pub mod commented;
pub mod document;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use commented::CommentedString;
pub use document::Document;
pub use error::{Error, Result};
pub use map::PlistMap;
pub use options::{Indent, PlistOptions};
pub use ser::{Encoder, PlistValueSerializer};
pub use value::PlistValue;

use serde::Serialize;
use std::io;
use tracing::debug;

/// Serialize any `T: Serialize` to plist text with Xcode's default layout.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::to_string;
///
/// let files = vec!["main.swift", "App Delegate.swift"];
/// assert_eq!(
///     to_string(&files).unwrap(),
///     "(\n\tmain.swift,\n\t\"App Delegate.swift\",\n)"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the value has no plist representation (e.g. `None`).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, PlistOptions::default())
}

/// Serialize any `T: Serialize` to plist text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::{to_string_with_options, Indent, PlistOptions};
///
/// let options = PlistOptions::new().with_indent(Indent::Spaces(2));
/// assert_eq!(to_string_with_options(&["a"], options).unwrap(), "(\n  a,\n)");
/// ```
///
/// # Errors
///
/// Returns an error if the value has no plist representation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: PlistOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    let mut encoder = Encoder::new(options);
    encoder.write_value(&value);
    let text = encoder.into_inner();
    debug!(bytes = text.len(), "encoded plist value");
    Ok(text)
}

/// Convert any `T: Serialize` to a `PlistValue`.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::{to_value, PlistValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Group { name: String, children: Vec<String> }
///
/// let group = Group { name: "Sources".into(), children: vec!["F1".into()] };
/// let value: PlistValue = to_value(&group).unwrap();
/// assert_eq!(value.get("name").and_then(PlistValue::as_str), Some("Sources"));
/// ```
///
/// # Errors
///
/// Returns an error if the value, or anything nested in it, has no plist
/// representation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<PlistValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(PlistValueSerializer)
}

/// Serialize any `T: Serialize` to a writer as plist text.
///
/// The whole text is built first and handed to the writer in one `write_all`.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &["a", "b c"]).unwrap();
/// assert_eq!(buffer, b"(\n\ta,\n\t\"b c\",\n)");
/// ```
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, PlistOptions::default())
}

/// Serialize any `T: Serialize` to a writer as plist text with custom options.
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: PlistOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plist;

    #[derive(Serialize)]
    struct Target {
        isa: &'static str,
        name: String,
        #[serde(rename = "buildPhases")]
        build_phases: Vec<CommentedString>,
        #[serde(rename = "productName", skip_serializing_if = "Option::is_none")]
        product_name: Option<String>,
    }

    fn target() -> Target {
        Target {
            isa: "PBXNativeTarget",
            name: "My App".to_string(),
            build_phases: vec![CommentedString::new("S1").with_comment("Sources")],
            product_name: None,
        }
    }

    #[test]
    fn test_struct_to_string() {
        let text = to_string(&target()).unwrap();
        assert_eq!(
            text,
            "{\n\tisa = PBXNativeTarget;\n\tname = \"My App\";\n\tbuildPhases = (\n\t\tS1 /* Sources */,\n\t);\n}"
        );
    }

    #[test]
    fn test_to_value_preserves_field_order() {
        let value = to_value(&target()).unwrap();
        let keys: Vec<_> = value
            .as_dictionary()
            .unwrap()
            .keys()
            .map(CommentedString::string)
            .collect();
        assert_eq!(keys, vec!["isa", "name", "buildPhases"]);
    }

    #[test]
    fn test_failed_conversion_writes_nothing() {
        let mut buffer = Vec::new();
        let values = vec![Some("a"), None];
        assert!(to_writer(&mut buffer, &values).is_err());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_plist_value_round_trips_through_to_value() {
        let value = plist!({
            "a": (CommentedString::new("b").with_comment("note")),
            "c": ["d", "e"]
        });
        assert_eq!(to_value(&value).unwrap(), value);
    }

    #[test]
    fn test_writer_error_is_io() {
        struct Broken;

        impl io::Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        assert!(matches!(to_writer(Broken, &["a"]), Err(Error::Io(_))));
    }
}
