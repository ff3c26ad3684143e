//! End-to-end scenarios through the public facade

use bls12381::params::{G1_COMPRESSED_BYTES, G2_COMPRESSED_BYTES, GT_BYTES, MODULUS_HEX};
use bls12381::prelude::*;
use bls12381_tests::{cyclotomic, exponent_bytes, g1_mul, g2_mul, rng};

#[test]
fn gt_identity_scenario() {
    let one = Gt::one();
    let bytes = one.to_bytes();
    assert_eq!(bytes.len(), GT_BYTES);
    assert_eq!(bytes[GT_BYTES - 1], 1);
    assert!(bytes[..GT_BYTES - 1].iter().all(|b| *b == 0));

    let decoded = Gt::from_bytes(&bytes).unwrap();
    assert!(decoded.is_one());
    assert_eq!(decoded.to_bytes(), bytes);
}

#[test]
fn gt_exponent_laws() {
    let g = Gt::generator();
    let q = Gt::q();

    assert!(g.exp(&BigUint::from(0u32)).is_one());
    assert_eq!(g.exp(&BigUint::from(1u32)), g);
    assert!(g.exp(&q).is_one());

    let a = BigUint::from(0x5555_aaaa_u64);
    let b = BigUint::from(0x1357_9bdf_u64);
    assert_eq!(g.exp(&a) * g.exp(&b), g.exp(&(&a + &b)));
    assert_eq!(g.exp(&a).exp(&b), g.exp(&(&a * &b)));
    assert_eq!(g.exp_ct(&exponent_bytes(&a)), g.exp(&a));
}

#[test]
fn gt_validity() {
    let mut rng = rng(1);
    let f = Fp12::random(&mut rng);

    assert!(!Gt::is_valid(&f));
    assert!(!Gt::is_valid(&cyclotomic(f)));
    assert!(Gt::is_valid(
        MillerLoopResult::default().final_exponentiation().as_fp12()
    ));
    assert!(Gt::is_valid(Gt::random(&mut rng).as_fp12()));
}

#[test]
fn gt_decoding_errors() {
    let bytes = Gt::generator().to_bytes();

    for len in [0, 1, 575, 577, 1152] {
        let mut input = bytes.to_vec();
        input.resize(len, 0);
        assert_eq!(
            Gt::from_bytes(&input).unwrap_err(),
            Error::MalformedEncoding {
                context: "GT element",
                expected: GT_BYTES,
                actual: len,
            }
        );
    }

    let mut non_canonical = bytes;
    non_canonical[GT_BYTES - 48..].copy_from_slice(&hex::decode(MODULUS_HEX).unwrap());
    assert!(matches!(
        Gt::from_bytes(&non_canonical),
        Err(Error::NonCanonicalEncoding { .. })
    ));

    let mut tampered = bytes;
    tampered[GT_BYTES - 1] ^= 1;
    assert!(matches!(
        Gt::from_bytes(&tampered),
        Err(Error::InvalidElement { .. })
    ));
    assert!(Gt::from_bytes(&tampered).unwrap_err().is_decoding_error());
}

#[test]
fn pairing_bilinearity() {
    let a = BigUint::from(0xfeed_u32);
    let b = BigUint::from(0xbeef_u32);

    let lhs = pairing(&g1_mul(&a), &g2_mul(&b));
    let rhs = pairing(&G1Affine::generator(), &G2Affine::generator()).exp(&(&a * &b));
    assert_eq!(lhs, rhs);
    assert!(!lhs.is_one());
}

#[test]
fn pairing_product_check() {
    let s = BigUint::from(424_242u32);
    let t = BigUint::from(31_337u32);

    // e([s]G1, [t]G2) * e([-st]G1, G2) = 1
    let st = (&s * &t) % Gt::q();
    let neg_st = Gt::q() - st;
    assert!(pairing_check(&[
        (g1_mul(&s), g2_mul(&t)),
        (g1_mul(&neg_st), G2Affine::generator()),
    ]));
    assert!(!pairing_check(&[
        (g1_mul(&s), g2_mul(&t)),
        (g1_mul(&s), G2Affine::generator()),
    ]));
}

#[test]
fn prepared_pairs_match_pairings() {
    let mut rng = rng(2);
    let pairs: Vec<(G1Affine, G2Affine)> = (0..3)
        .map(|_| {
            (
                G1Affine::from(G1Projective::random(&mut rng)),
                G2Affine::from(G2Projective::random(&mut rng)),
            )
        })
        .collect();

    let prepared: Vec<G2Prepared> = pairs.iter().map(|(_, q)| G2Prepared::from(q)).collect();
    let terms: Vec<(&G1Affine, &G2Prepared)> = pairs
        .iter()
        .zip(prepared.iter())
        .map(|((p, _), q)| (p, q))
        .collect();

    let expected: Gt = pairs.iter().map(|(p, q)| pairing(p, q)).product();
    assert_eq!(multi_miller_loop(&terms).final_exponentiation(), expected);
}

#[test]
fn point_encodings_through_trait() {
    fn round_trip<T: Serialize + PartialEq + core::fmt::Debug>(value: T) {
        let bytes = value.to_bytes();
        assert_eq!(bytes.len(), T::ENCODED_LEN);
        assert_eq!(T::from_bytes(&bytes).unwrap(), value);
        assert!(matches!(
            T::from_bytes(&bytes[1..]),
            Err(Error::MalformedEncoding { .. })
        ));
    }

    let k = BigUint::from(99u32);
    round_trip(g1_mul(&k));
    round_trip(g2_mul(&k));
    round_trip(Gt::generator());

    assert_eq!(<G1Affine as Serialize>::ENCODED_LEN, G1_COMPRESSED_BYTES);
    assert_eq!(<G2Affine as Serialize>::ENCODED_LEN, G2_COMPRESSED_BYTES);
}

#[test]
fn serde_json_round_trip() {
    let e = Gt::generator();
    let json = serde_json::to_string(&e).unwrap();
    assert_eq!(serde_json::from_str::<Gt>(&json).unwrap(), e);
}

#[test]
fn representation_arithmetic_is_not_the_group_law() {
    let g = Gt::generator();
    let sum = g.add_representation(&g);
    assert_eq!(sum, *g.as_fp12() + *g.as_fp12());
    assert_ne!(sum, *g.square().as_fp12());
    assert!(!Gt::is_valid(&sum));
    assert_eq!(g.sub_representation(&g), Fp12::zero());
}

#[test]
fn inverse_of_zero_is_zero_at_every_level() {
    assert_eq!(Fp::zero().inverse(), Fp::zero());
    assert_eq!(Fp2::zero().inverse(), Fp2::zero());
    assert_eq!(Fp6::zero().inverse(), Fp6::zero());
    assert_eq!(Fp12::zero().inverse(), Fp12::zero());
}
