//! Cross-checks the bit-serial multiplier against a matrix-free reference

use onb233_algorithms::{FieldElement, Multiplier};
use onb233_tests::reference::PalindromicMultiplier;
use onb233_tests::{basis_element, random_nonzero, seeded_rng};

#[test]
fn test_random_products_match_reference() {
    let reference = PalindromicMultiplier::onb233();
    let multiplier = Multiplier::onb233();
    let mut rng = seeded_rng(0x0233);

    for _ in 0..24 {
        let a = FieldElement::random(&mut rng);
        let b = FieldElement::random(&mut rng);
        assert_eq!(multiplier.mul(&a, &b), reference.mul(&a, &b));
    }
}

#[test]
fn test_basis_products_match_reference() {
    let reference = PalindromicMultiplier::onb233();
    let multiplier = Multiplier::onb233();

    for (i, j) in [(0, 0), (0, 1), (1, 0), (5, 17), (41, 217), (100, 232), (232, 232)] {
        let a = basis_element(i);
        let b = basis_element(j);
        assert_eq!(
            multiplier.mul(&a, &b),
            reference.mul(&a, &b),
            "basis product ({}, {})",
            i,
            j
        );
    }
}

#[test]
fn test_reference_agrees_on_identity_and_inverse() {
    let reference = PalindromicMultiplier::onb233();
    let mut rng = seeded_rng(7);

    for _ in 0..4 {
        let a = random_nonzero(&mut rng);
        assert_eq!(reference.mul(&a, &FieldElement::one()), a);
        assert!(reference.mul(&a, &a.invert().unwrap()).is_one());
        assert_eq!(reference.mul(&a, &a), a.square());
    }
}
