//! Field parameter context shared by the multiplier and the inverter

use super::exponent::ExponentCache;
use super::matrix::MultiplicationMatrix;
use crate::error::{validate, Error, Result};
use core::num::NonZeroU32;
use once_cell::sync::Lazy;
use onb233_params::{ONB233_AUX_PRIME, ONB233_DEGREE};
use tracing::debug;

static ONB233: Lazy<FieldParams> = Lazy::new(|| {
    FieldParams::new(ONB233_DEGREE, ONB233_AUX_PRIME)
        .expect("GF(2^233) must admit a Type II optimal normal basis")
});

/// Immutable parameters of a field `GF(2^m)` in a Type II optimal normal basis.
///
/// Owns the exponent cache, the multiplication matrix and the inversion
/// addition chain. Built once and shared by reference; every accessor is
/// read-only, so a `&FieldParams` may be used from any number of threads.
#[derive(Debug)]
pub struct FieldParams {
    degree: usize,
    modulus: u32,
    exponents: ExponentCache,
    matrix: MultiplicationMatrix,
    inversion_chain: Vec<bool>,
}

impl FieldParams {
    /// Validate `(m, p)` and build the derived tables.
    ///
    /// Requires `m >= 2`, `p = 2m + 1` prime, and every nonzero residue mod
    /// `p` to be `±2^i` for some `i < m`.
    pub fn new(degree: usize, modulus: u32) -> Result<Self> {
        const CONTEXT: &str = "FieldParams";

        validate::parameter(degree >= 2, CONTEXT, "degree must be at least 2")?;
        let expected = u64::try_from(degree)
            .ok()
            .and_then(|m| m.checked_mul(2))
            .and_then(|m| m.checked_add(1));
        validate::parameter(
            expected == Some(u64::from(modulus)),
            CONTEXT,
            "modulus must equal 2m + 1",
        )?;
        validate::parameter(is_prime(modulus), CONTEXT, "modulus must be prime")?;

        let nonzero_modulus = NonZeroU32::new(modulus)
            .ok_or_else(|| Error::param(CONTEXT, "modulus must be nonzero"))?;
        let exponents = ExponentCache::new(nonzero_modulus, degree);
        validate::parameter(
            spans_type_ii(&exponents, degree),
            CONTEXT,
            "field has no Type II optimal normal basis",
        )?;

        let matrix = MultiplicationMatrix::build(&exponents, degree);
        let inversion_chain = binary_expansion(degree - 1);

        debug!(
            degree,
            modulus,
            matrix_entries = matrix.len(),
            cached_exponents = exponents.populated(),
            "built optimal normal basis parameters"
        );

        Ok(Self {
            degree,
            modulus,
            exponents,
            matrix,
            inversion_chain,
        })
    }

    /// Process-wide parameters of GF(2^233), built on first use
    pub fn onb233() -> &'static FieldParams {
        &ONB233
    }

    /// Extension degree m
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Auxiliary prime p = 2m + 1
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Memoised powers of two modulo p
    pub fn exponents(&self) -> &ExponentCache {
        &self.exponents
    }

    /// Multiplication matrix of the basis
    pub fn matrix(&self) -> &MultiplicationMatrix {
        &self.matrix
    }

    /// Binary expansion of m - 1, most significant bit first
    pub fn inversion_chain(&self) -> &[bool] {
        &self.inversion_chain
    }
}

fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let n = u64::from(n);
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

// Type II: {±2^i : 0 <= i < m} covers every nonzero residue mod p = 2m + 1.
fn spans_type_ii(exponents: &ExponentCache, degree: usize) -> bool {
    let p = exponents.modulus() as usize;
    let mut seen = vec![false; p];
    for i in 0..degree {
        let power = exponents.get(i) as usize;
        seen[power] = true;
        seen[p - power] = true;
    }
    seen.iter().skip(1).all(|&hit| hit)
}

fn binary_expansion(n: usize) -> Vec<bool> {
    let bits = usize::BITS - n.leading_zeros();
    (0..bits).rev().map(|b| (n >> b) & 1 == 1).collect()
}
