//! Strings with an optional inline comment, and the quoting rules for them.
//!
//! [`CommentedString`] is the leaf of every plist tree: keys, scalar values and
//! object references are all commented strings. Its [`valid_string`] method
//! produces the exact text Xcode expects, quoting only when the string could
//! not be read back bare.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pbxproj::CommentedString;
//!
//! assert_eq!(CommentedString::new("main.swift").valid_string(), "main.swift");
//! assert_eq!(CommentedString::new("My File.swift").valid_string(), "\"My File.swift\"");
//! assert_eq!(CommentedString::new("true").valid_string(), "YES");
//!
//! let reference = CommentedString::new("A1B2C3").with_comment("main.swift");
//! assert_eq!(reference.to_string(), "A1B2C3 /* main.swift */");
//! ```
//!
//! [`valid_string`]: CommentedString::valid_string

use crate::format::{is_unquoted_char, EMPTY_STRING, INHERITED, NO, QUOTE, YES};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Struct name that marks a serialized `CommentedString` for the value converter.
pub(crate) const COMMENTED_STRING_TOKEN: &str = "$serde_pbxproj::private::CommentedString";

/// A string value paired with an optional comment.
///
/// Two commented strings are equal when both the string and the comment match.
/// The hash covers the string alone, so `"A"` and `"A" /* note */` land in the
/// same bucket while comparing unequal. The special flag is formatting only and
/// takes part in neither.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::CommentedString;
///
/// let plain = CommentedString::new("A1");
/// let noted = CommentedString::new("A1").with_comment("Project object");
///
/// assert_ne!(plain, noted);
/// assert_eq!(noted.comment(), Some("Project object"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CommentedString {
    string: String,
    comment: Option<String>,
    special_flag: bool,
}

impl CommentedString {
    /// Creates a commented string with no comment.
    #[must_use]
    pub fn new(string: impl Into<String>) -> Self {
        CommentedString {
            string: string.into(),
            comment: None,
            special_flag: false,
        }
    }

    /// Attaches a comment, written as `/* comment */` after the value.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Marks the string as script text: tabs and newlines are written as
    /// `\t` and `\n` instead of raw characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pbxproj::CommentedString;
    ///
    /// let script = CommentedString::new("cd ..\nmake").with_special_flag(true);
    /// assert_eq!(script.valid_string(), "\"cd ..\\nmake\"");
    /// ```
    #[must_use]
    pub fn with_special_flag(mut self, special_flag: bool) -> Self {
        self.special_flag = special_flag;
        self
    }

    /// Returns the raw, unescaped string.
    #[inline]
    #[must_use]
    pub fn string(&self) -> &str {
        &self.string
    }

    /// Returns the comment, if any.
    #[inline]
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns `true` if tabs and newlines are escaped.
    #[inline]
    #[must_use]
    pub const fn special_flag(&self) -> bool {
        self.special_flag
    }

    /// Returns the text that represents this string in a project file.
    ///
    /// Rules, applied in order:
    ///
    /// 1. `""` becomes `""` (quoted), `"true"` becomes `YES`, `"false"` becomes `NO`.
    /// 2. Quotes, backslashes and control characters are substituted with their
    ///    escape sequences (see [`format`](crate::format)).
    /// 3. The result is wrapped in double quotes if it contains any character
    ///    outside `[A-Za-z0-9./_$]`.
    ///
    /// Borrows the raw string when nothing needs to change.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pbxproj::CommentedString;
    ///
    /// assert_eq!(CommentedString::new("").valid_string(), "\"\"");
    /// assert_eq!(CommentedString::new("a\"q\"a").valid_string(), "\"a\\\"q\\\"a\"");
    /// assert_eq!(CommentedString::new("$").valid_string(), "$");
    /// ```
    #[must_use]
    pub fn valid_string(&self) -> Cow<'_, str> {
        match self.string.as_str() {
            "" => return Cow::Borrowed(EMPTY_STRING),
            "false" => return Cow::Borrowed(NO),
            "true" => return Cow::Borrowed(YES),
            _ => {}
        }

        let escaped = escape(&self.string, self.special_flag);
        if !is_quoted(&escaped) && !escaped.chars().all(is_unquoted_char) {
            Cow::Owned(quote(&escaped))
        } else {
            escaped
        }
    }
}

/// Escape sequence for `c`, or `None` if it is written as is.
///
/// Tab and newline only have an escape when the special flag is set.
fn substitution(c: char, special_flag: bool) -> Option<&'static str> {
    let replacement = match c {
        '\u{0}' => "\\U0000",
        '\u{1}' => INHERITED,
        '\u{2}' => "\\U0002",
        '\u{3}' => "\\U0003",
        '\u{4}' => "\\U0004",
        '\u{5}' => "\\U0005",
        '\u{6}' => "\\U0006",
        '\u{7}' => "\\a",
        '\u{8}' => "\\b",
        '\t' if special_flag => "\\t",
        '\n' if special_flag => "\\n",
        '\u{b}' => "\\v",
        '\u{c}' => "\\f",
        '\u{e}' => "\\U000e",
        '\u{f}' => "\\U000f",
        '\u{10}' => "\\U0010",
        '\u{11}' => "\\U0011",
        '\u{12}' => "\\U0012",
        '\u{13}' => "\\U0013",
        '\u{14}' => "\\U0014",
        '\u{15}' => "\\U0015",
        '\u{16}' => "\\U0016",
        '\u{17}' => "\\U0017",
        '\u{18}' => "\\U0018",
        '\u{19}' => "\\U0019",
        '\u{1a}' => "\\U001a",
        '\u{1b}' => "\\U001b",
        '\u{1c}' => "\\U001c",
        '\u{1d}' => "\\U001d",
        '\u{1e}' => "\\U001e",
        '\u{1f}' => "\\U001f",
        '"' => "\\\"",
        '\\' => "\\\\",
        _ => return None,
    };
    Some(replacement)
}

// Single pass: replacement text is never rescanned, so an inserted backslash
// cannot be escaped a second time.
fn escape(s: &str, special_flag: bool) -> Cow<'_, str> {
    let Some(first) = s
        .char_indices()
        .find(|&(_, c)| substitution(c, special_flag).is_some())
        .map(|(i, _)| i)
    else {
        return Cow::Borrowed(s);
    };

    let mut output = String::with_capacity(s.len() + 8);
    output.push_str(&s[..first]);
    for ch in s[first..].chars() {
        match substitution(ch, special_flag) {
            Some(replacement) => output.push_str(replacement),
            None => output.push(ch),
        }
    }
    Cow::Owned(output)
}

#[inline]
fn is_quoted(s: &str) -> bool {
    s.starts_with(QUOTE) && s.ends_with(QUOTE)
}

fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push(QUOTE);
    quoted.push_str(s);
    quoted.push(QUOTE);
    quoted
}

impl PartialEq for CommentedString {
    fn eq(&self, other: &Self) -> bool {
        self.string == other.string && self.comment == other.comment
    }
}

impl Eq for CommentedString {}

impl Hash for CommentedString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.string.hash(state);
    }
}

impl fmt::Display for CommentedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.valid_string())?;
        if let Some(comment) = &self.comment {
            write!(f, " /* {} */", comment)?;
        }
        Ok(())
    }
}

impl From<&str> for CommentedString {
    fn from(value: &str) -> Self {
        CommentedString::new(value)
    }
}

impl From<String> for CommentedString {
    fn from(value: String) -> Self {
        CommentedString::new(value)
    }
}

impl From<&String> for CommentedString {
    fn from(value: &String) -> Self {
        CommentedString::new(value.as_str())
    }
}

// Other serde formats see a plain struct; the plist converter recognizes the
// token and rebuilds the value with its comment and flag intact.
impl Serialize for CommentedString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct(COMMENTED_STRING_TOKEN, 3)?;
        state.serialize_field("string", &self.string)?;
        match &self.comment {
            Some(comment) => state.serialize_field("comment", comment)?,
            None => state.skip_field("comment")?,
        }
        state.serialize_field("special_flag", &self.special_flag)?;
        state.end()
    }
}
