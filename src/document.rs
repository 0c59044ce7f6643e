//! Whole project documents.
//!
//! A [`Document`] is the root of a `project.pbxproj` file: format versions, the
//! (always empty in practice) `classes` dictionary, the `objects` dictionary
//! keyed by object identifier, and the identifier of the root project object.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pbxproj::{plist, CommentedString, Document, PlistMap};
//!
//! let mut objects = PlistMap::new();
//! objects.insert(
//!     CommentedString::new("P1").with_comment("Project object"),
//!     plist!({ "isa": "PBXProject", "mainGroup": "G1" }),
//! );
//!
//! let document = Document::new(
//!     objects,
//!     CommentedString::new("P1").with_comment("Project object"),
//! );
//! let text = document.encode();
//!
//! assert!(text.starts_with("// !$*UTF8*$!\n{\n\tarchiveVersion = 1;\n"));
//! assert!(text.contains("/* Begin PBXProject section */"));
//! assert!(text.ends_with("\trootObject = P1 /* Project object */;\n}\n"));
//! ```

use crate::format::{DEFAULT_ARCHIVE_VERSION, DEFAULT_OBJECT_VERSION, HEADER, ISA};
use crate::{CommentedString, Encoder, Error, PlistMap, PlistOptions, PlistValue, Result};
use std::collections::BTreeMap;
use std::io;
use tracing::debug;

/// The root record of a project file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub archive_version: u32,
    pub object_version: u32,
    pub classes: PlistMap,
    /// Objects keyed by identifier; each value is normally a dictionary with an `isa` entry.
    pub objects: PlistMap,
    pub root_object: CommentedString,
}

impl Document {
    /// Creates a document with the default archive and object versions.
    #[must_use]
    pub fn new(objects: PlistMap, root_object: impl Into<CommentedString>) -> Self {
        Document {
            archive_version: DEFAULT_ARCHIVE_VERSION,
            object_version: DEFAULT_OBJECT_VERSION,
            classes: PlistMap::new(),
            objects,
            root_object: root_object.into(),
        }
    }

    #[must_use]
    pub fn with_archive_version(mut self, archive_version: u32) -> Self {
        self.archive_version = archive_version;
        self
    }

    #[must_use]
    pub fn with_object_version(mut self, object_version: u32) -> Self {
        self.object_version = object_version;
        self
    }

    #[must_use]
    pub fn with_classes(mut self, classes: PlistMap) -> Self {
        self.classes = classes;
        self
    }

    /// Encodes the document with Xcode's default layout.
    #[must_use]
    pub fn encode(&self) -> String {
        self.encode_with_options(PlistOptions::default())
    }

    /// Encodes the document with custom options.
    ///
    /// Equal documents always encode to identical text.
    #[must_use]
    pub fn encode_with_options(&self, options: PlistOptions) -> String {
        let mut encoder = Encoder::new(options);
        encoder.write_document(self);
        encoder.into_inner()
    }

    /// Encodes the document and writes it to `writer` in a single call.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the writer fails.
    pub fn write_to<W>(&self, mut writer: W, options: PlistOptions) -> Result<()>
    where
        W: io::Write,
    {
        let text = self.encode_with_options(options);
        writer
            .write_all(text.as_bytes())
            .map_err(|e| Error::io(&e.to_string()))
    }
}

/// Objects of one class, in insertion order.
type Section<'a> = Vec<(&'a CommentedString, &'a PlistValue)>;

impl Encoder {
    /// Writes a complete project file, including the header line and the
    /// trailing newline.
    pub fn write_document(&mut self, document: &Document) {
        self.push_str(HEADER);
        self.push_str("\n{\n");
        self.indent();

        self.write_indent();
        self.push_str(&format!("archiveVersion = {};\n", document.archive_version));
        self.write_entry(
            &CommentedString::new("classes"),
            &PlistValue::Dictionary(document.classes.clone()),
        );
        self.write_indent();
        self.push_str(&format!("objectVersion = {};\n", document.object_version));

        if self.options().sections && !document.objects.is_empty() {
            self.write_sectioned_objects(&document.objects);
        } else {
            self.write_entry(
                &CommentedString::new("objects"),
                &PlistValue::Dictionary(document.objects.clone()),
            );
        }

        self.write_entry(
            &CommentedString::new("rootObject"),
            &PlistValue::String(document.root_object.clone()),
        );

        self.dedent();
        self.push_str("}\n");
    }

    fn write_sectioned_objects(&mut self, objects: &PlistMap) {
        let (unsectioned, sections) = group_by_isa(objects);
        debug!(
            objects = objects.len(),
            sections = sections.len(),
            "writing sectioned objects"
        );

        self.write_indent();
        self.push_str("objects = {\n");
        self.indent();

        for (key, value) in unsectioned {
            self.write_entry(key, value);
        }
        for (isa, entries) in sections {
            self.push_str(&format!("\n/* Begin {} section */\n", isa));
            for (key, value) in entries {
                self.write_entry(key, value);
            }
            self.push_str(&format!("/* End {} section */\n", isa));
        }

        self.dedent();
        self.write_indent();
        self.push_str("};\n");
    }
}

/// Splits objects into those without a string `isa` and per-class sections
/// sorted by class name.
fn group_by_isa(objects: &PlistMap) -> (Section<'_>, BTreeMap<&str, Section<'_>>) {
    let mut unsectioned = Vec::new();
    let mut sections: BTreeMap<&str, Section<'_>> = BTreeMap::new();

    for (key, value) in objects {
        match value.get(ISA).and_then(PlistValue::as_str) {
            Some(isa) => sections.entry(isa).or_default().push((key, value)),
            None => unsectioned.push((key, value)),
        }
    }

    (unsectioned, sections)
}
