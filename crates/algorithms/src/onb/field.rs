//! GF(2^233) field element in a Type II optimal normal basis

use super::matrix::MultiplicationMatrix;
use crate::error::{validate, Error, Result};
use core::fmt;
use core::ops::{Add, AddAssign};
use core::str::FromStr;
use onb233_params::{ONB233_DEGREE, ONB233_LIMBS, ONB233_TOP_LIMB_MASK};
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use tracing::trace;
use zeroize::Zeroize;

const M: usize = ONB233_DEGREE;
const LIMBS: usize = ONB233_LIMBS;
/// Unused high bits of the limb array
const PADDING: u32 = (LIMBS * 64 - M) as u32;

/// An element of GF(2^233) as 233 normal basis coefficients.
///
/// Coefficient `i` lives in bit `i % 64` of limb `i / 64`; bits above
/// index 232 are always zero. Index 0 is the least significant coefficient
/// and is printed last.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Zeroize)]
pub struct FieldElement(pub(crate) [u64; LIMBS]);

impl FieldElement {
    /// The additive identity
    pub const fn zero() -> Self {
        FieldElement([0; LIMBS])
    }

    /// The multiplicative identity: every normal basis coefficient set
    pub const fn one() -> Self {
        let mut limbs = [u64::MAX; LIMBS];
        limbs[LIMBS - 1] = ONB233_TOP_LIMB_MASK;
        FieldElement(limbs)
    }

    /// Check if this element is zero
    pub fn is_zero(&self) -> bool {
        self.ct_eq(&Self::zero()).into()
    }

    /// Check if this element is the multiplicative identity
    pub fn is_one(&self) -> bool {
        self.ct_eq(&Self::one()).into()
    }

    /// Parse a string of '0'/'1' characters, most significant coefficient first.
    ///
    /// The character at offset `k` becomes coefficient `len - 1 - k`. Shorter
    /// input is zero-padded at the high end; characters that would land at an
    /// index of 233 or above are dropped.
    pub fn from_bit_string(s: &str) -> Result<Self> {
        let mut element = Self::zero();
        let len = s.len();
        for (position, ch) in s.char_indices() {
            let bit = bit_value("FieldElement::from_bit_string", position, ch)?;
            let index = len - 1 - position;
            if bit && index < M {
                element.set_coefficient(index);
            }
        }
        Ok(element)
    }

    /// Build an element from coefficients, index 0 first.
    ///
    /// Fewer than 233 coefficients are zero-padded; more are rejected.
    pub fn from_coefficients(coefficients: &[bool]) -> Result<Self> {
        validate::max_dimension("FieldElement::from_coefficients", coefficients.len(), M)?;
        let mut element = Self::zero();
        for (index, &bit) in coefficients.iter().enumerate() {
            if bit {
                element.set_coefficient(index);
            }
        }
        Ok(element)
    }

    /// Draw a uniformly random element
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut limbs = [0u64; LIMBS];
        for limb in limbs.iter_mut() {
            *limb = rng.next_u64();
        }
        limbs[LIMBS - 1] &= ONB233_TOP_LIMB_MASK;
        FieldElement(limbs)
    }

    /// Coefficient at `index`; indices past the degree read as zero
    pub fn coefficient(&self, index: usize) -> bool {
        index < M && (self.0[index / 64] >> (index % 64)) & 1 == 1
    }

    /// All coefficients, index 0 first
    pub fn coefficients(&self) -> impl Iterator<Item = bool> + '_ {
        (0..M).map(move |index| self.coefficient(index))
    }

    /// Render as 233 '0'/'1' characters, most significant coefficient first
    pub fn to_bit_string(&self) -> String {
        (0..M)
            .rev()
            .map(|index| if self.coefficient(index) { '1' } else { '0' })
            .collect()
    }

    /// Add two field elements (coefficient-wise XOR)
    pub fn add(&self, other: &Self) -> Self {
        let mut limbs = [0u64; LIMBS];
        for (out, (a, b)) in limbs.iter_mut().zip(self.0.iter().zip(other.0.iter())) {
            *out = a ^ b;
        }
        FieldElement(limbs)
    }

    /// Square this element.
    ///
    /// In a normal basis this is a cyclic right rotation: coefficient 0
    /// moves to index 232 and every other coefficient `i` to `i - 1`.
    pub fn square(&self) -> Self {
        let wraps = self.coefficient(0);
        let mut rotated = FieldElement(shr_limbs(&self.0, 1));
        if wraps {
            rotated.set_coefficient(M - 1);
        }
        rotated
    }

    /// Square `k` times, computing `self^(2^k)`
    pub fn square_n(&self, k: usize) -> Self {
        (0..k % M).fold(*self, |acc, _| acc.square())
    }

    /// Square root: the inverse rotation of [`square`](Self::square)
    pub fn sqrt(&self) -> Self {
        self.rotate_left()
    }

    /// Trace map to GF(2): the XOR of all coefficients
    pub fn trace(&self) -> bool {
        self.0.iter().map(|limb| limb.count_ones()).sum::<u32>() & 1 == 1
    }

    /// Cyclic left shift by one position: coefficient `i` moves to `i + 1`,
    /// coefficient 232 wraps to index 0
    pub fn rotate_left(&self) -> Self {
        let wraps = self.coefficient(M - 1);
        let mut limbs = [0u64; LIMBS];
        for k in 0..LIMBS {
            limbs[k] = self.0[k] << 1;
            if k > 0 {
                limbs[k] |= self.0[k - 1] >> 63;
            }
        }
        limbs[LIMBS - 1] &= ONB233_TOP_LIMB_MASK;
        limbs[0] |= u64::from(wraps);
        FieldElement(limbs)
    }

    /// Coefficients read back-to-front: index `k` takes coefficient `232 - k`
    pub fn reversed(&self) -> Self {
        // Reversing the whole limb array maps bit i to bit 255 - i; shifting
        // out the padding lands it on 232 - i.
        let mut wide = [0u64; LIMBS];
        for k in 0..LIMBS {
            wide[k] = self.0[LIMBS - 1 - k].reverse_bits();
        }
        FieldElement(shr_limbs(&wide, PADDING))
    }

    /// Apply the multiplication matrix to a reversed read of this element.
    ///
    /// For every pair `(i, j)` of the matrix, coefficient `i` of the result
    /// is toggled by coefficient `232 - j` of `self`.
    pub fn fold(&self, matrix: &MultiplicationMatrix) -> Result<Self> {
        validate::dimension("FieldElement::fold", matrix.degree(), M)?;
        Ok(self.fold_terms(matrix.entries()))
    }

    pub(crate) fn fold_terms(&self, terms: &[(usize, usize)]) -> Self {
        let mut folded = Self::zero();
        for &(i, j) in terms {
            if self.coefficient(M - 1 - j) {
                folded.toggle_coefficient(i);
            }
        }
        folded
    }

    /// Inner product over GF(2): parity of the position-wise AND
    pub fn dot(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a & b).count_ones())
            .sum::<u32>()
            & 1
            == 1
    }

    pub(crate) fn set_coefficient(&mut self, index: usize) {
        self.0[index / 64] |= 1 << (index % 64);
    }

    fn toggle_coefficient(&mut self, index: usize) {
        self.0[index / 64] ^= 1 << (index % 64);
    }
}

/// Decode one character of a bitstring
pub(crate) fn bit_value(context: &'static str, position: usize, ch: char) -> Result<bool> {
    match ch {
        '0' => Ok(false),
        '1' => Ok(true),
        found => {
            trace!(context, position, ?found, "rejected bitstring character");
            Err(Error::InvalidEncoding {
                context,
                position,
                found,
            })
        }
    }
}

/// Shift the limb array right by `n` bits, `0 < n < 64`
fn shr_limbs(limbs: &[u64; LIMBS], n: u32) -> [u64; LIMBS] {
    let mut out = [0u64; LIMBS];
    for k in 0..LIMBS {
        out[k] = limbs[k] >> n;
        if k + 1 < LIMBS {
            out[k] |= limbs[k + 1] << (64 - n);
        }
    }
    out
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::zero()
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: FieldElement) -> FieldElement {
        FieldElement::add(&self, &rhs)
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        FieldElement::add(&self, rhs)
    }
}

impl AddAssign for FieldElement {
    fn add_assign(&mut self, rhs: FieldElement) {
        *self = FieldElement::add(self, &rhs);
    }
}

impl FromStr for FieldElement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bit_string(s)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({})", self.to_bit_string())
    }
}
