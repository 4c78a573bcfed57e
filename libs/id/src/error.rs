//! Error types for base62 decoding and identifier validation.

use thiserror::Error;

/// Errors raised by the base62 codec when decoding a numeral.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The numeral has no digits.
    #[error("base62 value cannot be empty")]
    Empty,

    /// A character outside the base62 alphabet was found.
    #[error("invalid base62 character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// The numeral does not fit in 128 bits.
    #[error("base62 value exceeds 128 bits")]
    Overflow,
}

/// Errors that can occur when building or validating identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The value handed to the encoder is not a UUID.
    #[error("Base62 encoding requires a UUID value")]
    InvalidUuidInput,

    /// The base62 body could not be decoded.
    #[error("Value contains invalid characters")]
    InvalidCharacters,

    /// The prefix bound to the field differs from the prefix on the value.
    #[error("Field's expected '{expected}' prefix does not match given prefix '{actual}'")]
    PrefixMismatch { expected: String, actual: String },

    /// A prefix-bound constructor was requested with an unusable prefix.
    #[error("a non-empty prefix matching [a-zA-Z0-9_]+ is required, got '{prefix}'")]
    MissingPrefix { prefix: String },

    /// The model does not declare an identifier field with this name.
    #[error("unknown identifier field '{field}'")]
    UnknownField { field: String },
}

impl IdError {
    /// Returns true if this error indicates a prefix mismatch.
    pub fn is_prefix_error(&self) -> bool {
        matches!(self, IdError::PrefixMismatch { .. })
    }

    /// Returns true if the base62 body of the input was rejected.
    pub fn is_invalid_characters(&self) -> bool {
        matches!(self, IdError::InvalidCharacters)
    }
}

impl From<DecodeError> for IdError {
    fn from(_: DecodeError) -> Self {
        IdError::InvalidCharacters
    }
}
