//! Bit-serial normal basis multiplication

use super::field::FieldElement;
use super::params::FieldParams;
use crate::error::{validate, Result};
use core::ops::{Mul, MulAssign};
use onb233_params::ONB233_DEGREE;

const M: usize = ONB233_DEGREE;

/// Multiplies GF(2^233) elements with the matrix of a [`FieldParams`].
///
/// Each of the 233 rounds folds the first operand through the matrix, takes
/// the inner product with the reversed second operand, then rotates both
/// operands left by one. Round `s` yields coefficient `232 - s` of the product.
#[derive(Debug, Clone, Copy)]
pub struct Multiplier<'a> {
    params: &'a FieldParams,
}

impl<'a> Multiplier<'a> {
    /// Bind a multiplier to field parameters of degree 233
    pub fn new(params: &'a FieldParams) -> Result<Self> {
        validate::dimension("Multiplier", params.degree(), M)?;
        Ok(Self { params })
    }

    /// The parameters this multiplier reads its matrix from
    pub fn params(&self) -> &'a FieldParams {
        self.params
    }

    /// Raw protocol output: one bit per round, in round order
    pub fn product_bits(&self, a: &FieldElement, b: &FieldElement) -> Vec<bool> {
        let mut rounds = Vec::with_capacity(M);
        self.run(a, b, |_, bit| rounds.push(bit));
        rounds
    }

    /// Multiply two field elements
    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let mut product = FieldElement::zero();
        self.run(a, b, |round, bit| {
            if bit {
                product.set_coefficient(M - 1 - round);
            }
        });
        product
    }

    fn run<F>(&self, a: &FieldElement, b: &FieldElement, mut emit: F)
    where
        F: FnMut(usize, bool),
    {
        let terms = self.params.matrix().entries();
        let mut a = *a;
        let mut b = *b;
        for round in 0..M {
            let folded = a.fold_terms(terms);
            let transposed = b.reversed();
            emit(round, folded.dot(&transposed));

            a = a.rotate_left();
            b = b.rotate_left();
        }
    }
}

impl Multiplier<'static> {
    /// Multiplier over the process-wide GF(2^233) parameters
    pub fn onb233() -> Self {
        Self {
            params: FieldParams::onb233(),
        }
    }
}

impl FieldElement {
    /// Multiply two field elements using the shared GF(2^233) parameters
    pub fn mul(&self, other: &Self) -> Self {
        Multiplier::onb233().mul(self, other)
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: FieldElement) -> FieldElement {
        FieldElement::mul(&self, &rhs)
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        FieldElement::mul(&self, rhs)
    }
}

impl MulAssign for FieldElement {
    fn mul_assign(&mut self, rhs: FieldElement) {
        *self = FieldElement::mul(self, &rhs);
    }
}
