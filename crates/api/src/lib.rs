//! Public API types for the onb233 library
//!
//! This crate provides the error taxonomy shared by every onb233 crate:
//! malformed bitstrings, dimension mismatches at component boundaries,
//! inversion of zero and rejected field parameters.

#![forbid(unsafe_code)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
