//! Binary field arithmetic primitives
//!
//! This crate implements GF(2^233) in a Type II optimal normal basis:
//! addition, squaring, trace, multiplication, inversion and exponentiation
//! over 233-coefficient field elements.
//!
//! # Example
//!
//! ```
//! use onb233_algorithms::FieldElement;
//!
//! let a: FieldElement = "1011".parse().unwrap();
//! let inv = a.invert().unwrap();
//! assert!((a * inv).is_one());
//! assert_eq!(a.square().sqrt(), a);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Optimal normal basis arithmetic
pub mod onb;
pub use onb::{
    compute_matrix_element, pow2mod, ExponentCache, FieldElement, FieldParams, Inverter,
    MultiplicationMatrix, Multiplier,
};
