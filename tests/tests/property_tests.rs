//! Property-based tests over the field tower, backends and encodings

use bls12381::prelude::{Backend, BigUint, CpuFeatures, Error, Fp, Fp12, Fp2, Fp6, Gt};
use bls12381_tests::{cyclotomic, exponent_bytes, rng};
use proptest::prelude::*;

fn fp() -> impl Strategy<Value = Fp> {
    any::<u64>().prop_map(|seed| Fp::random(rng(seed)))
}

fn fp2() -> impl Strategy<Value = Fp2> {
    any::<u64>().prop_map(|seed| Fp2::random(rng(seed)))
}

fn fp6() -> impl Strategy<Value = Fp6> {
    any::<u64>().prop_map(|seed| Fp6::random(rng(seed)))
}

fn fp12() -> impl Strategy<Value = Fp12> {
    any::<u64>().prop_map(|seed| Fp12::random(rng(seed)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fp_field_axioms(a in fp(), b in fp(), c in fp()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a * b, b * a);
        prop_assert_eq!((a + b) + c, a + (b + c));
        prop_assert_eq!((a * b) * c, a * (b * c));
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!(a - a, Fp::zero());
        prop_assert_eq!(a.square(), a * a);
        if !bool::from(a.is_zero()) {
            prop_assert_eq!(a * a.inverse(), Fp::one());
        }
    }

    #[test]
    fn fp_bytes_round_trip(a in fp()) {
        prop_assert_eq!(Fp::from_slice(&a.to_bytes(), "fp").unwrap(), a);
    }

    #[test]
    fn backends_agree(a in fp(), b in fp()) {
        let expected = a * b;
        for backend in Backend::available(CpuFeatures::detect()) {
            prop_assert_eq!(backend.mul(&a, &b), expected);
            prop_assert_eq!(a.mul_with(&b, backend), expected);
            prop_assert_eq!(backend.square(&a), a.square());
        }
    }

    #[test]
    fn fp2_square_and_inverse(a in fp2(), b in fp2()) {
        prop_assert_eq!(a.square(), a * a);
        prop_assert_eq!((a * b).inverse(), a.inverse() * b.inverse());
    }

    #[test]
    fn fp6_square_and_inverse(a in fp6()) {
        prop_assert_eq!(a.square(), a * a);
        prop_assert_eq!(a * a.inverse(), Fp6::one());
    }

    #[test]
    fn fp12_square_and_inverse(a in fp12()) {
        prop_assert_eq!(a.square(), a * a);
        prop_assert_eq!(a * a.inverse(), Fp12::one());
        prop_assert_eq!(Fp12::from_slice(&a.to_bytes(), "fp12").unwrap(), a);
    }

    #[test]
    fn cyclotomic_square_matches_square(a in fp12()) {
        let m = cyclotomic(a);
        prop_assert_eq!(m.cyclotomic_square(), m.square());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn gt_round_trip(seed in any::<u64>()) {
        let e = Gt::random(rng(seed));
        prop_assert_eq!(Gt::from_bytes(&e.to_bytes()).unwrap(), e);
    }

    #[test]
    fn gt_exp_ct_matches_exp(seed in any::<u64>(), k in any::<[u8; 32]>()) {
        let e = Gt::random(rng(seed));
        let k = BigUint::from_bytes_be(&k);
        prop_assert_eq!(e.exp_ct(&exponent_bytes(&k)), e.exp(&k));
    }

    #[test]
    fn truncated_gt_is_malformed(len in 0usize..576) {
        let bytes = Gt::identity().to_bytes();
        let is_malformed = matches!(
            Gt::from_bytes(&bytes[..len]),
            Err(Error::MalformedEncoding { .. })
        );
        prop_assert!(is_malformed);
    }
}
