//! Constants for binary extension fields

pub mod onb233;
