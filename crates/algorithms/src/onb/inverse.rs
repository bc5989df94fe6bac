//! Itoh-Tsujii inversion and square-and-multiply exponentiation

use super::field::{bit_value, FieldElement};
use super::multiplier::Multiplier;
use super::params::FieldParams;
use crate::error::{validate, Result};
use tracing::debug;

/// Inversion and exponentiation on top of a [`Multiplier`]
#[derive(Debug, Clone, Copy)]
pub struct Inverter<'a> {
    multiplier: Multiplier<'a>,
}

impl<'a> Inverter<'a> {
    /// Bind an inverter to field parameters of degree 233
    pub fn new(params: &'a FieldParams) -> Result<Self> {
        Ok(Self {
            multiplier: Multiplier::new(params)?,
        })
    }

    /// The multiplier used for every product
    pub fn multiplier(&self) -> &Multiplier<'a> {
        &self.multiplier
    }

    /// Compute `a^(2^m - 2)`, the multiplicative inverse of `a`.
    ///
    /// Walks the binary expansion of m - 1 after its leading one. `beta`
    /// holds `a^(2^k - 1)`: each step doubles `k` with `k` squarings and one
    /// product, and a set bit extends it by one more squaring and a product
    /// with `a`. A final squaring turns `a^(2^(m-1) - 1)` into the inverse.
    pub fn invert(&self, a: &FieldElement) -> Result<FieldElement> {
        if let Err(err) = validate::nonzero(a.is_zero(), "Inverter::invert") {
            debug!("rejected inversion of zero");
            return Err(err);
        }

        let mut beta = *a;
        let mut k = 1usize;
        for &bit in self.multiplier.params().inversion_chain().iter().skip(1) {
            let run = beta;
            beta = self.multiplier.mul(&beta.square_n(k), &run);
            k *= 2;

            if bit {
                beta = self.multiplier.mul(&beta.square(), a);
                k += 1;
            }
        }
        Ok(beta.square())
    }

    /// Raise `a` to an exponent given as '0'/'1' characters, most significant
    /// bit first. The empty exponent yields the identity.
    pub fn power(&self, a: &FieldElement, exponent: &str) -> Result<FieldElement> {
        let bits = exponent
            .char_indices()
            .map(|(position, ch)| bit_value("Inverter::power", position, ch))
            .collect::<Result<Vec<bool>>>()?;
        Ok(self.power_bits(a, bits))
    }

    /// Square-and-multiply over exponent bits, most significant first
    pub fn power_bits<I>(&self, a: &FieldElement, bits: I) -> FieldElement
    where
        I: IntoIterator<Item = bool>,
    {
        let mut result = FieldElement::one();
        for (position, bit) in bits.into_iter().enumerate() {
            if position > 0 {
                result = result.square();
            }
            if bit {
                result = self.multiplier.mul(&result, a);
            }
        }
        result
    }
}

impl Inverter<'static> {
    /// Inverter over the process-wide GF(2^233) parameters
    pub fn onb233() -> Self {
        Self {
            multiplier: Multiplier::onb233(),
        }
    }
}

impl FieldElement {
    /// Multiplicative inverse; fails with `UndefinedInverse` for zero
    pub fn invert(&self) -> Result<Self> {
        Inverter::onb233().invert(self)
    }

    /// Raise to an exponent given as a most-significant-first bitstring
    pub fn pow(&self, exponent: &str) -> Result<Self> {
        Inverter::onb233().power(self, exponent)
    }
}
