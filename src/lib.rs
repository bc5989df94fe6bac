//! # onb233
//!
//! Arithmetic in GF(2^233) represented in a Type II optimal normal basis.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! onb233 = "0.3"
//! ```
//!
//! ```
//! use onb233::prelude::*;
//!
//! let a: FieldElement = "110101".parse()?;
//! let b = FieldElement::one();
//! assert_eq!(a * b, a);
//! assert!((a * a.invert()?).is_one());
//! # Ok::<(), onb233::prelude::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`onb233-api`]: Error types shared by every crate
//! - [`onb233-params`]: Field constants for the 233-degree basis
//! - [`onb233-algorithms`]: Field elements, the multiplier and the inverter

#![forbid(unsafe_code)]

pub use onb233_algorithms as algorithms;
pub use onb233_api as api;
pub use onb233_params as params;

pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for onb233 users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Field arithmetic
    pub use crate::algorithms::{FieldElement, FieldParams, Inverter, Multiplier};
}
