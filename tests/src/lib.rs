//! Testing utilities for the onb233 library
//!
//! Provides known-answer vectors and an independent reference multiplier.

pub mod vectors;

use onb233_algorithms::FieldElement;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for reproducible operands
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Draw a random nonzero element
pub fn random_nonzero(rng: &mut ChaCha20Rng) -> FieldElement {
    loop {
        let element = FieldElement::random(rng);
        if !element.is_zero() {
            return element;
        }
    }
}

/// A single set coefficient at `index`
pub fn basis_element(index: usize) -> FieldElement {
    let mut coefficients = vec![false; index + 1];
    coefficients[index] = true;
    FieldElement::from_coefficients(&coefficients).expect("index below the field degree")
}

/// Binary expansion of `k`, most significant bit first
pub fn binary(k: u64) -> String {
    format!("{:b}", k)
}
