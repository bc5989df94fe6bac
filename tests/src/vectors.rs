//! Known-answer vectors for GF(2^233) in the Type II normal basis
//!
//! Operands and exponent are 233-character bitstrings, most significant
//! coefficient first.

/// First operand
pub const A: &str = "10111100000011111110110111100101101100100111011101101000001011110001001110001110110001011101100110100001001110101101011011100100000110011010111110010000001010100101111101010100000010011001001001110100110011101111100101011110010111010";

/// Second operand
pub const B: &str = "10010100100111000111100100011001111101000111000010110011001110000101100000111110101110000100000001101110110001110001100101000111011010110111001101110111001000000101100101110011000001011010010101110111100111001010001000001111010001010";

/// Exponent for `A^N`
pub const N: &str = "00101001011111011010001010001101011000100101011011001110100011100111010111101101011000010111000100110011110011100100001001011101101110110101111111001010010001101011010100010010110001011001101100111111111011111100010010100011101000111";

/// `A + B`
pub const A_PLUS_B: &str = "00101000100100111001010011111100010001100000011111011011000101110100101110110000011111011001100111001111111111011100111110100011011100101101110011100111000010100000011000100111000011000011011100000011010100100101101101010001000110000";

/// `A^2`
pub const A_SQUARED: &str = "01011110000001111111011011110010110110010011101110110100000101111000100111000111011000101110110011010000100111010110101101110010000011001101011111001000000101010010111110101010000001001100100100111010011001110111110010101111001011101";

/// `Tr(A)`
pub const A_TRACE: bool = true;

/// `Tr(B)`
pub const B_TRACE: bool = true;

/// `A * B`
pub const A_TIMES_B: &str = "11000111000101011110010010000101110000011001100111111101101010001101111100100101111101110001011101011101110000101110011000000101110011110100010000001111101111010001101011000100011000010001010010101110001001111101100100001100100000011";

/// `A^-1`
pub const A_INVERSE: &str = "01111000010001011111101101110110111011011111010001011011011010001010010011111000101011000010001100101110011001000111110000110010001011010010100111111100000000011001111010101011111101111001110001000001110101100001010111110011010100111";

/// `A^N`
pub const A_POW_N: &str = "01001100110010100111011011110110011010111011110001110100110111000010101010000010000001111010100101110010000111000001111011001001010001001001100001101101000010100011101111010011100110000010000110110111001000100010100111010100100001110";
