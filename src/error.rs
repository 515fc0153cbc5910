//! Error types for loading and querying orders.

use thiserror::Error;

/// Coarse classification of a [`LedgerError`].
///
/// Callers that only need to decide how to report a failure can branch on the
/// kind instead of matching every payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field could not be coerced to the type the record needs.
    Value,
    /// The input source does not exist.
    NotFound,
    /// The input source is not a JSON array of objects.
    Decode,
    /// A date string does not match `MM/DD/YYYY`.
    DateFormat,
    /// Any other I/O failure while reading the source.
    Io,
}

/// Errors that can occur while building, loading or querying orders.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A field value could not be coerced (e.g. a non-numeric tax value).
    #[error("Invalid value for '{field}': {value}")]
    InvalidValue { field: &'static str, value: String },

    /// The input file was not found.
    #[error("No file found with the name {path}")]
    NotFound { path: String },

    /// The input could not be decoded as a list of order objects.
    #[error("Error decoding JSON: {0}")]
    Decode(String),

    /// A date did not parse as `MM/DD/YYYY`.
    #[error("Date '{value}' does not match MM/DD/YYYY")]
    DateFormat { value: String },

    /// An I/O error other than a missing file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::InvalidValue { .. } => ErrorKind::Value,
            LedgerError::NotFound { .. } => ErrorKind::NotFound,
            LedgerError::Decode(_) => ErrorKind::Decode,
            LedgerError::DateFormat { .. } => ErrorKind::DateFormat,
            LedgerError::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(e: serde_json::Error) -> Self {
        LedgerError::Decode(e.to_string())
    }
}
