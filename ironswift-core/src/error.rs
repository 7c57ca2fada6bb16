/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the IronSwift SWIFT MT parser.
//!
//! This module provides a unified error hierarchy using `thiserror`. Only
//! [`DecodeError`] aborts a parse; [`FieldError`] and [`BicError`] are local
//! to a single tag or BIC and degrade to raw passthrough or omitted keys.

use thiserror::Error;

/// Result type alias using [`SwiftError`] as the error type.
pub type Result<T> = std::result::Result<T, SwiftError>;

/// Top-level error type for all IronSwift operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SwiftError {
    /// Structural failure while splitting the message into blocks.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A single field value did not match its grammar.
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// A BIC could not be decomposed.
    #[error("bic error: {0}")]
    Bic(#[from] BicError),
}

/// Structural errors that make a whole message unparseable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input contains no block at all.
    #[error("empty message, no blocks found")]
    Empty,

    /// Message exceeds maximum allowed size.
    #[error("message too large: {size} bytes exceeds maximum {max_size}")]
    MessageTooLarge {
        /// Actual message size in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        max_size: usize,
    },

    /// A block opened at `offset` is never closed.
    #[error("unbalanced braces: block opened at offset {offset} is not closed")]
    UnbalancedBraces {
        /// Byte offset of the opening brace.
        offset: usize,
    },

    /// Text outside of any block.
    #[error("unexpected content at offset {offset}")]
    UnexpectedContent {
        /// Byte offset of the first unexpected character.
        offset: usize,
    },

    /// Block identifier is not a number between 1 and 5.
    #[error("invalid block id: {0:?}")]
    InvalidBlockId(String),

    /// The same block appears twice.
    #[error("duplicate block {0}")]
    DuplicateBlock(u8),

    /// Block 1 violates its fixed-width layout.
    #[error("invalid basic header (block 1): {reason}")]
    InvalidBasicHeader {
        /// Description of the violation.
        reason: String,
    },

    /// Block 2 matches neither the input nor the output layout.
    #[error("invalid application header (block 2): {reason}")]
    InvalidApplicationHeader {
        /// Description of the violation.
        reason: String,
    },
}

/// Errors decoding a single tag value against its grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The value does not match the tag's format notation.
    #[error("value of tag {tag} does not match format {format}")]
    FormatMismatch {
        /// The tag name.
        tag: String,
        /// The format notation the value was checked against.
        format: String,
    },

    /// The format notation itself could not be compiled.
    #[error("invalid format notation for tag {tag}: {reason}")]
    InvalidNotation {
        /// The tag name.
        tag: String,
        /// Description of the notation problem.
        reason: String,
    },

    /// A date component is not a calendar date.
    #[error("invalid date in tag {tag}: {value:?}")]
    InvalidDate {
        /// The tag name.
        tag: String,
        /// The offending component.
        value: String,
    },

    /// A time component is not a valid time of day.
    #[error("invalid time in tag {tag}: {value:?}")]
    InvalidTime {
        /// The tag name.
        tag: String,
        /// The offending component.
        value: String,
    },

    /// An amount component is not a decimal-comma number.
    #[error("invalid amount in tag {tag}: {value:?}")]
    InvalidAmount {
        /// The tag name.
        tag: String,
        /// The offending component.
        value: String,
    },
}

/// Errors decomposing a Bank Identifier Code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BicError {
    /// Fewer than 8 characters.
    #[error("bic too short: {len} characters, need at least 8")]
    TooShort {
        /// Actual length.
        len: usize,
    },

    /// Neither 8 nor 11 characters (nor a 12-character logical terminal).
    #[error("invalid bic length: {len}")]
    InvalidLength {
        /// Actual length.
        len: usize,
    },

    /// Non-alphanumeric character.
    #[error("invalid character {ch:?} in bic")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::MessageTooLarge {
            size: 2048,
            max_size: 1024,
        };
        assert_eq!(
            err.to_string(),
            "message too large: 2048 bytes exceeds maximum 1024"
        );
    }

    #[test]
    fn test_swift_error_from_decode() {
        let swift_err: SwiftError = DecodeError::Empty.into();
        assert!(matches!(swift_err, SwiftError::Decode(DecodeError::Empty)));
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::FormatMismatch {
            tag: "32A".to_string(),
            format: "6!n3!a15d".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "value of tag 32A does not match format 6!n3!a15d"
        );
    }

    #[test]
    fn test_bic_error_display() {
        let err = BicError::TooShort { len: 5 };
        assert_eq!(err.to_string(), "bic too short: 5 characters, need at least 8");
    }
}
