//! # Style Error Types
//!
//! Error types for loading style sheets and parsing attribute values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading styles or parsing attribute values.
#[derive(Error, Debug)]
pub enum StyleError {
    /// Style sheet file was not found.
    #[error("Style file not found: {path:?}")]
    StyleFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a style sheet.
    #[error("Failed to parse style sheet {source_name}: {details}")]
    StyleParseError {
        /// The file path or a description of the source that failed to parse.
        source_name: String,
        /// Details about the parse error.
        details: String,
    },

    /// A color value could not be parsed.
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The raw value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A dimension value could not be parsed.
    #[error("Invalid dimension '{value}'")]
    InvalidDimension {
        /// The raw value.
        value: String,
    },

    /// The attribute value has a type that cannot be stored in a style.
    #[error("Unsupported value for attribute '{attribute}': {kind}")]
    UnsupportedValue {
        /// Name of the attribute.
        attribute: String,
        /// The TOML type that was found.
        kind: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for style operations.
pub type StyleResult<T> = Result<T, StyleError>;

impl StyleError {
    /// Create a style file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::StyleFileNotFound { path: path.into() }
    }

    /// Create a style parse error.
    pub fn parse_error(source_name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::StyleParseError {
            source_name: source_name.into(),
            details: details.into(),
        }
    }

    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid dimension error.
    pub fn invalid_dimension(value: impl Into<String>) -> Self {
        Self::InvalidDimension {
            value: value.into(),
        }
    }

    /// Create an unsupported value error.
    pub fn unsupported_value(attribute: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            attribute: attribute.into(),
            kind: kind.into(),
        }
    }
}
