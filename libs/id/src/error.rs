//! Error types for resident ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating a resident ID number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID number cannot be empty")]
    Empty,

    /// The ID string is not exactly 18 characters.
    #[error("ID number must be 18 characters, got {actual}")]
    InvalidLength { actual: usize },

    /// The ID string does not match 17 digits followed by a digit or 'X'.
    #[error("ID number must be 17 digits followed by a digit or 'X'")]
    InvalidFormat,

    /// The check character does not match the mod-11 weighted checksum.
    #[error("checksum mismatch: expected '{expected}', got '{actual}'")]
    ChecksumMismatch { expected: char, actual: char },

    /// The embedded birth date digits do not form a real calendar date.
    #[error("invalid embedded birth date: {digits}")]
    InvalidBirthDate { digits: String },
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error indicates a structural or checksum failure,
    /// as opposed to an embedded birth-date failure.
    pub fn is_identifier_error(&self) -> bool {
        !matches!(self, IdError::InvalidBirthDate { .. })
    }
}
