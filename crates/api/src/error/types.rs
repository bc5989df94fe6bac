//! Error type definitions for field arithmetic

use thiserror::Error;

/// Primary error type for field arithmetic operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bitstring contained a character other than '0' or '1' at the given byte offset
    #[error("{context}: invalid encoding, found {found:?} at position {position}")]
    InvalidEncoding {
        context: &'static str,
        position: usize,
        found: char,
    },

    /// A coefficient sequence or parameter set does not match the field degree
    #[error("{context}: dimension mismatch (expected {expected}, got {actual})")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Inversion of the additive identity was requested
    #[error("{context}: zero has no multiplicative inverse")]
    UndefinedInverse {
        context: &'static str,
    },

    /// Field parameters were rejected
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for field arithmetic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidEncoding { position, found, .. } => Self::InvalidEncoding {
                context,
                position,
                found,
            },
            Self::DimensionMismatch { expected, actual, .. } => Self::DimensionMismatch {
                context,
                expected,
                actual,
            },
            Self::UndefinedInverse { .. } => Self::UndefinedInverse { context },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidEncoding { context, .. }
            | Self::DimensionMismatch { context, .. }
            | Self::UndefinedInverse { context }
            | Self::InvalidParameter { context, .. } => context,
        }
    }
}
