//! Custom error types for the bmfont-reader crate.

use std::num::ParseIntError;
use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant except [`BmFontError::Io`] carries the 1-based number and the
/// text of the offending line so the caller can point at the bad input.
#[derive(Debug, Error)]
pub enum BmFontError {
    /// The underlying source failed to produce the next line.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A non-blank line has a header tag but no fields section.
    #[error("Malformed line {line_number}: expected '<tag> key=value ...', got {line:?}")]
    MalformedLine { line_number: usize, line: String },

    /// A recognized record lacks a field required to build it.
    #[error("Missing field '{field}' in '{header}' record at line {line_number}: {line:?}")]
    MissingField {
        header: &'static str,
        field: &'static str,
        line_number: usize,
        line: String,
    },

    /// A field holds text that cannot be converted to the expected type.
    #[error("Invalid value {value:?} for field '{field}' in '{header}' record at line {line_number}: {source}")]
    TypeConversion {
        header: &'static str,
        field: &'static str,
        value: String,
        line_number: usize,
        line: String,
        #[source]
        source: ValueError,
    },
}

impl BmFontError {
    /// Returns the 1-based line number the error refers to, if any.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            BmFontError::Io(_) => None,
            BmFontError::MalformedLine { line_number, .. }
            | BmFontError::MissingField { line_number, .. }
            | BmFontError::TypeConversion { line_number, .. } => Some(*line_number),
        }
    }

    /// Returns the name of the field the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            BmFontError::MissingField { field, .. } | BmFontError::TypeConversion { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }
}

/// Failure to view a raw field value as a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The text (or one array element) is not a decimal integer in range.
    #[error("'{text}' is not a valid integer: {source}")]
    InvalidInteger {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// An integer array has the wrong number of elements.
    #[error("expected {expected} values separated by '{separator}', found {found}")]
    ElementCount {
        expected: usize,
        found: usize,
        separator: char,
    },
}

/// Failure to split a line into its header tag and fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line consists of a single token with nothing after it.
    #[error("line has header '{header}' but no fields")]
    MissingFields { header: String },
}

/// A convenience `Result` type alias using the crate's `BmFontError` type.
pub type Result<T> = std::result::Result<T, BmFontError>;
