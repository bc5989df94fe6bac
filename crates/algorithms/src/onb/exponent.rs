//! Memoised powers of two modulo the auxiliary prime

use core::num::NonZeroU32;
use once_cell::sync::OnceCell;

/// Compute `2^k mod modulus` by square-and-multiply
pub fn pow2mod(k: usize, modulus: NonZeroU32) -> u32 {
    let modulus = u64::from(modulus.get());
    let mut base = 2 % modulus;
    let mut result = 1 % modulus;
    let mut exponent = k;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exponent >>= 1;
    }
    result as u32
}

/// Memoisation table for `2^k mod p`, `k` in `[0, capacity)`.
///
/// Each slot is filled at most once and never invalidated. Concurrent first
/// accesses to the same slot race on a pure function, so a lost race only
/// costs a redundant computation. Exponents beyond the capacity are computed
/// on demand and not stored.
#[derive(Debug)]
pub struct ExponentCache {
    modulus: NonZeroU32,
    slots: Vec<OnceCell<u32>>,
}

impl ExponentCache {
    /// Create an empty cache for the given modulus
    pub fn new(modulus: NonZeroU32, capacity: usize) -> Self {
        Self {
            modulus,
            slots: (0..capacity).map(|_| OnceCell::new()).collect(),
        }
    }

    /// The modulus p
    pub fn modulus(&self) -> u32 {
        self.modulus.get()
    }

    /// Number of exponents the cache can hold
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Return `2^k mod p`, populating the slot for `k` on first access
    pub fn get(&self, k: usize) -> u32 {
        match self.slots.get(k) {
            Some(slot) => *slot.get_or_init(|| pow2mod(k, self.modulus)),
            None => pow2mod(k, self.modulus),
        }
    }

    /// Number of slots populated so far
    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }
}
