//! Configuration options for plist encoding.
//!
//! The defaults reproduce the layout Xcode writes: tab indentation, objects
//! grouped into `/* Begin ... section */` blocks, and build files and file
//! references kept on one line each.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pbxproj::{Indent, PlistOptions};
//!
//! // Four-space indentation, every object written across multiple lines
//! let options = PlistOptions::new()
//!     .with_indent(Indent::Spaces(4))
//!     .without_inline_isas();
//! assert!(options.inline_isas.is_empty());
//! ```

use std::borrow::Cow;

/// Indentation written once per nesting level.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::Indent;
///
/// assert_eq!(Indent::Tab.as_str(), "\t");
/// assert_eq!(Indent::Spaces(2).as_str(), "  ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    /// Returns the text of a single indentation level.
    #[must_use]
    pub fn as_str(&self) -> Cow<'static, str> {
        match self {
            Indent::Tab => Cow::Borrowed("\t"),
            Indent::Spaces(n) => Cow::Owned(" ".repeat(*n)),
        }
    }
}

/// Configuration options for plist encoding.
#[derive(Clone, Debug)]
pub struct PlistOptions {
    pub indent: Indent,
    /// Group document objects into one section per `isa`.
    pub sections: bool,
    /// Object classes written on a single line.
    pub inline_isas: Vec<String>,
}

impl Default for PlistOptions {
    fn default() -> Self {
        PlistOptions {
            indent: Indent::default(),
            sections: true,
            inline_isas: vec!["PBXBuildFile".to_string(), "PBXFileReference".to_string()],
        }
    }
}

impl PlistOptions {
    /// Creates default options (tab indent, sections, Xcode's single-line classes).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pbxproj::{Indent, PlistOptions};
    ///
    /// let options = PlistOptions::new();
    /// assert_eq!(options.indent, Indent::Tab);
    /// assert!(options.sections);
    /// assert!(options.is_inline_isa("PBXBuildFile"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with no sections and no single-line objects.
    ///
    /// The `objects` dictionary of a document is then written like any other
    /// dictionary.
    #[must_use]
    pub fn flat() -> Self {
        PlistOptions {
            sections: false,
            inline_isas: Vec::new(),
            ..Default::default()
        }
    }

    /// Sets the indentation written per nesting level.
    #[must_use]
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables `/* Begin ... section */` grouping.
    #[must_use]
    pub fn with_sections(mut self, sections: bool) -> Self {
        self.sections = sections;
        self
    }

    /// Adds an object class to write on a single line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pbxproj::PlistOptions;
    ///
    /// let options = PlistOptions::new().with_inline_isa("PBXContainerItemProxy");
    /// assert!(options.is_inline_isa("PBXContainerItemProxy"));
    /// ```
    #[must_use]
    pub fn with_inline_isa(mut self, isa: impl Into<String>) -> Self {
        let isa = isa.into();
        if !self.is_inline_isa(&isa) {
            self.inline_isas.push(isa);
        }
        self
    }

    /// Writes every object across multiple lines.
    #[must_use]
    pub fn without_inline_isas(mut self) -> Self {
        self.inline_isas.clear();
        self
    }

    /// Returns `true` if objects of class `isa` are written on a single line.
    #[must_use]
    pub fn is_inline_isa(&self, isa: &str) -> bool {
        self.inline_isas.iter().any(|i| i == isa)
    }
}
