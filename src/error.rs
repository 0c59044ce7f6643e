//! Error types for plist conversion and encoding.
//!
//! Encoding a well-formed [`PlistValue`](crate::PlistValue) tree cannot fail.
//! Every error in this module comes from one of two places:
//!
//! - **Conversion**: a Rust value handed to [`to_value`](crate::to_value) has
//!   no plist representation (`None`, unit, raw bytes, data-carrying enum
//!   variants, non-string map keys). These are contract violations by the
//!   caller and are reported before any text is produced.
//! - **I/O**: the writer passed to [`to_writer`](crate::to_writer) or
//!   [`Document::write_to`](crate::Document::write_to) failed.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pbxproj::{to_string, Error};
//!
//! let result = to_string(&Option::<String>::None);
//! assert!(matches!(result, Err(Error::UnsupportedType(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while producing plist text.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// A value with no plist representation was passed to the converter
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// A map key did not convert to a string
    #[error("Invalid dictionary key: {0}")]
    InvalidKey(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for values that cannot be represented in a plist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pbxproj::Error;
    ///
    /// let err = Error::unsupported_type("byte arrays");
    /// assert!(err.to_string().contains("byte arrays"));
    /// ```
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates an invalid key error for map keys that are not strings.
    pub fn invalid_key(msg: &str) -> Self {
        Error::InvalidKey(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pbxproj::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::unsupported_type("null values").to_string(),
            "Unsupported type: null values"
        );
        assert_eq!(
            Error::invalid_key("expected a string, found an array").to_string(),
            "Invalid dictionary key: expected a string, found an array"
        );
        assert_eq!(Error::io("broken pipe").to_string(), "IO error: broken pipe");
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::ser::Error>::custom("field failed");
        assert!(matches!(err, Error::Custom(ref m) if m == "field failed"));
    }
}
