//! The pbxproj text dialect
//!
//! This module documents the property-list dialect written by this library and
//! holds the fixed tokens the encoder reproduces.
//!
//! # Overview
//!
//! Xcode stores a project in a single `project.pbxproj` file using the old
//! NeXTSTEP property-list syntax. Only three value kinds appear:
//!
//! | Kind | Syntax | Example |
//! |------|--------|---------|
//! | String | bare or `"quoted"` | `name = Sources;` |
//! | Array | `( value, ... )` | `files = ( A, B, );` |
//! | Dictionary | `{ key = value; ... }` | `settings = {ATTRIBUTES = (Weak, ); };` |
//!
//! Numbers and booleans are strings: `YES`, `NO` and `46` are all bare strings
//! to the parser. Any value or key may carry a trailing `/* comment */` that
//! Xcode ignores on load and regenerates on save.
//!
//! # Strings
//!
//! A string is written bare when every character is an ASCII letter, an ASCII
//! digit, or one of `.` `/` `_` `$`. Anything else forces double quotes:
//!
//! ```text
//! path = main.swift;            # bare
//! path = "My File.swift";       # quoted (space)
//! path = "马旭.swift";           # quoted (non-ASCII)
//! name = "";                    # the empty string is always quoted
//! ```
//!
//! The literal strings `true` and `false` are written as `YES` and `NO`.
//!
//! ## Escapes
//!
//! Before the quoting decision, characters are substituted:
//!
//! | Character | Written as |
//! |-----------|------------|
//! | `"` | `\"` |
//! | `\` | `\\` |
//! | U+0007 | `\a` |
//! | U+0008 | `\b` |
//! | U+000B | `\v` |
//! | U+000C | `\f` |
//! | U+0001 | `$(inherited)` |
//! | U+0000, U+0002..U+0006, U+000E..U+001F | `\U00xx` (lowercase hex) |
//! | tab, newline | raw, or `\t` / `\n` for strings flagged as script text |
//!
//! Carriage return is not substituted; it stays raw and the string is quoted.
//!
//! # Document layout
//!
//! ```text
//! // !$*UTF8*$!
//! {
//!     archiveVersion = 1;
//!     classes = {
//!     };
//!     objectVersion = 46;
//!     objects = {
//!
//! /* Begin PBXBuildFile section */
//!         A1 /* main.swift in Sources */ = {isa = PBXBuildFile; fileRef = B1 /* main.swift */; };
//! /* End PBXBuildFile section */
//!     };
//!     rootObject = C1 /* Project object */;
//! }
//! ```
//!
//! Indentation is one tab per level in the files Xcode writes. Objects are
//! grouped by their `isa` value into sections; `PBXBuildFile` and
//! `PBXFileReference` objects are written on a single line.

/// First line of every project file.
pub const HEADER: &str = "// !$*UTF8*$!";

/// Bare token written for the string `true`.
pub const YES: &str = "YES";

/// Bare token written for the string `false`.
pub const NO: &str = "NO";

/// Token substituted for U+0001; tells Xcode to merge with the inherited value.
pub const INHERITED: &str = "$(inherited)";

/// The quoted empty string.
pub const EMPTY_STRING: &str = "\"\"";

pub const QUOTE: char = '"';

pub const COMMENT_START: &str = "/*";

pub const COMMENT_END: &str = "*/";

/// Key naming an object's class inside the `objects` dictionary.
pub const ISA: &str = "isa";

/// Archive version written by every Xcode release to date.
pub const DEFAULT_ARCHIVE_VERSION: u32 = 1;

/// Object version of the Xcode 3.2-compatible project format.
pub const DEFAULT_OBJECT_VERSION: u32 = 46;

/// Returns `true` if `c` may appear in a string written without quotes.
#[inline]
pub const fn is_unquoted_char(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '.'..='9' | '_' | '$')
}
