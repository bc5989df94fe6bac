//! Error handling for field arithmetic primitives

pub use onb233_api::error::{Error, Result, ResultExt};

// Include the validation submodule
pub mod validate;
