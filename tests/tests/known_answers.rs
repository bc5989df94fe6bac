//! Known-answer tests for GF(2^233) normal basis arithmetic

use onb233_algorithms::{FieldElement, FieldParams, Inverter, Multiplier};
use onb233_api::Error;
use onb233_tests::vectors::*;

fn parse(s: &str) -> FieldElement {
    FieldElement::from_bit_string(s).unwrap()
}

#[test]
fn test_vectors_are_canonical() {
    for s in [A, B, N, A_PLUS_B, A_SQUARED, A_TIMES_B, A_INVERSE, A_POW_N] {
        assert_eq!(s.len(), 233);
        assert_eq!(parse(s).to_bit_string(), s);
    }
}

#[test]
fn test_addition() {
    assert_eq!(parse(A) + parse(B), parse(A_PLUS_B));
    assert_eq!((parse(A) + parse(B)).to_string(), A_PLUS_B);
}

#[test]
fn test_squaring() {
    assert_eq!(parse(A).square().to_bit_string(), A_SQUARED);
    assert_eq!(parse(A_SQUARED).sqrt(), parse(A));
}

#[test]
fn test_trace() {
    assert_eq!(parse(A).trace(), A_TRACE);
    assert_eq!(parse(B).trace(), B_TRACE);
    assert!(!parse(A_PLUS_B).trace());
}

#[test]
fn test_multiplication() {
    let a = parse(A);
    let b = parse(B);
    assert_eq!((a * b).to_bit_string(), A_TIMES_B);
    assert_eq!(b * a, parse(A_TIMES_B));

    let multiplier = Multiplier::onb233();
    let rounds = multiplier.product_bits(&a, &b);
    let rendered: String = rounds.iter().map(|&bit| if bit { '1' } else { '0' }).collect();
    assert_eq!(rendered, A_TIMES_B);
}

#[test]
fn test_inversion() {
    let a = parse(A);
    let inverse = a.invert().unwrap();
    assert_eq!(inverse.to_bit_string(), A_INVERSE);
    assert!((a * inverse).is_one());
    assert_eq!(parse(A_INVERSE).invert().unwrap(), a);
}

#[test]
fn test_power() {
    let a = parse(A);
    assert_eq!(a.pow(N).unwrap().to_bit_string(), A_POW_N);

    let inverter = Inverter::new(FieldParams::onb233()).unwrap();
    let via_bits = inverter.power_bits(&a, N.chars().map(|ch| ch == '1'));
    assert_eq!(via_bits, parse(A_POW_N));
}

#[test]
fn test_power_of_group_order_minus_one_is_inverse() {
    let exponent = format!("{}0", "1".repeat(232));
    let a = parse(A);
    assert_eq!(a.pow(&exponent).unwrap(), parse(A_INVERSE));
}

#[test]
fn test_identity_and_zero() {
    let a = parse(A);
    assert_eq!(a * FieldElement::one(), a);
    assert!((a * FieldElement::zero()).is_zero());
    assert_eq!(
        FieldElement::zero().invert(),
        Err(Error::UndefinedInverse {
            context: "Inverter::invert"
        })
    );
}

#[test]
fn test_rejects_malformed_operands() {
    let mut bad = A.to_string();
    bad.replace_range(7..8, "2");
    match FieldElement::from_bit_string(&bad) {
        Err(Error::InvalidEncoding { position, found, .. }) => {
            assert_eq!(position, 7);
            assert_eq!(found, '2');
        }
        other => panic!("Expected InvalidEncoding, got {:?}", other),
    }
    assert!(parse(A).pow("10x1").is_err());
}
