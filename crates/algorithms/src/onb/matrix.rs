//! Sparse multiplication matrix of a Type II optimal normal basis

use super::exponent::ExponentCache;
use onb233_params::ONB_MAX_TERMS_PER_ROW;

/// Decide whether coefficient pair `(i, j)` contributes a product term.
///
/// True when one of `±2^i ± 2^j`, reduced into `[0, p)`, equals 1.
pub fn compute_matrix_element(cache: &ExponentCache, i: usize, j: usize) -> bool {
    let p = i64::from(cache.modulus());
    let pow_i = i64::from(cache.get(i));
    let pow_j = i64::from(cache.get(j));

    [
        pow_i + pow_j,
        pow_i - pow_j,
        -pow_i + pow_j,
        -pow_i - pow_j,
    ]
    .iter()
    .any(|combination| combination.rem_euclid(p) == 1)
}

/// Coordinates `(i, j)` of the nonzero terms of the multiplication matrix.
///
/// Entries are ordered by row, then column. Each row holds at most
/// [`ONB_MAX_TERMS_PER_ROW`] entries; for a Type II basis row 0 holds one and
/// every other row two, `2m - 1` in total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplicationMatrix {
    degree: usize,
    entries: Vec<(usize, usize)>,
}

impl MultiplicationMatrix {
    /// Scan every row of the `degree x degree` matrix, keeping the first
    /// two contributing columns of each.
    pub fn build(cache: &ExponentCache, degree: usize) -> Self {
        let mut entries = Vec::with_capacity(ONB_MAX_TERMS_PER_ROW * degree);
        for i in 0..degree {
            let mut found = 0;
            for j in 0..degree {
                if compute_matrix_element(cache, i, j) {
                    entries.push((i, j));
                    found += 1;
                    if found == ONB_MAX_TERMS_PER_ROW {
                        break;
                    }
                }
            }
        }
        Self { degree, entries }
    }

    /// Field degree the matrix was built for
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// All recorded `(row, column)` pairs
    pub fn entries(&self) -> &[(usize, usize)] {
        &self.entries
    }

    /// Number of recorded pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no pair was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Columns recorded for row `i`, in increasing order
    pub fn row(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .filter(move |&&(row, _)| row == i)
            .map(|&(_, column)| column)
    }
}
