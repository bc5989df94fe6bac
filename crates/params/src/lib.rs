//! Constant values for the onb233 library
//!
//! Parameters are grouped by field. Only the Type II optimal normal basis of
//! GF(2^233) is provided.

#![no_std]
#![forbid(unsafe_code)]

pub mod field;

pub use field::onb233::*;
