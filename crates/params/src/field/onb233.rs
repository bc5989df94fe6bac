//! Constants for GF(2^233) in a Type II optimal normal basis

/// Extension degree m of the field
pub const ONB233_DEGREE: usize = 233;

/// Auxiliary prime p = 2m + 1 defining the Type II normal basis
pub const ONB233_AUX_PRIME: u32 = 2 * ONB233_DEGREE as u32 + 1;

/// Number of 64-bit limbs holding the m coefficients
pub const ONB233_LIMBS: usize = (ONB233_DEGREE + 63) / 64;

/// Mask of the coefficient bits held by the most significant limb
pub const ONB233_TOP_LIMB_MASK: u64 = (1u64 << (ONB233_DEGREE % 64)) - 1;

/// Binary expansion of m - 1 = 232, most significant bit first.
///
/// Drives the Itoh-Tsujii inversion chain.
pub const ONB233_INVERSION_CHAIN: &str = "11101000";

/// Length of the textual encoding of a field element
pub const ONB233_BIT_STRING_LEN: usize = ONB233_DEGREE;

/// Upper bound on the nonzero terms of one multiplication matrix row
pub const ONB_MAX_TERMS_PER_ROW: usize = 2;
