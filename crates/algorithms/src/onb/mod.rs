//! GF(2^233) Arithmetic in a Type II Optimal Normal Basis
//!
//! This module implements the binary field underlying the NIST B-233 class
//! of curves, with elements expressed in the Type II optimal normal basis
//! attached to the auxiliary prime p = 2m + 1 = 467.
//! - Squaring is a cyclic rotation of the coefficients.
//! - Multiplication is a 233-round shift-and-accumulate protocol driven by a
//!   sparse multiplication matrix of 2m - 1 = 465 terms.
//! - Inversion follows the Itoh-Tsujii addition chain for m - 1 = 232.
//!
//! The matrix and its exponent cache live in a [`FieldParams`] context that
//! is built once and shared by reference.
//!
//! Operations are not constant-time.

mod exponent;
mod field;
mod inverse;
mod matrix;
mod multiplier;
mod params;

pub use exponent::{pow2mod, ExponentCache};
pub use field::FieldElement;
pub use inverse::Inverter;
pub use matrix::{compute_matrix_element, MultiplicationMatrix};
pub use multiplier::Multiplier;
pub use params::FieldParams;

pub use onb233_params::{ONB233_AUX_PRIME, ONB233_BIT_STRING_LEN, ONB233_DEGREE};
