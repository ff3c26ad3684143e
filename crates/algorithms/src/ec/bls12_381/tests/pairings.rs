//! Pairing: reference value, bilinearity and multi-pairing

use num_bigint::BigUint;

use super::super::field::fp::Fp;
use super::super::field::fp12::Fp12;
use super::super::field::fp2::Fp2;
use super::super::field::fp6::Fp6;
use super::super::{
    multi_miller_loop, pairing, pairing_check, G1Affine, G1Projective, G2Affine, G2Prepared,
    G2Projective, Gt, MillerLoopResult,
};
use super::test_rng;

/// e(G1, G2) as computed by RELIC
fn reference_generator_pairing() -> Fp12 {
    Fp12 {
        c0: Fp6 {
            c0: Fp2 {
                c0: Fp::from_raw_unchecked([
                    0x1972_e433_a01f_85c5,
                    0x97d3_2b76_fd77_2538,
                    0xc8ce_546f_c96b_cdf9,
                    0xcef6_3e73_66d4_0614,
                    0xa611_3427_8184_3780,
                    0x13f3_448a_3fc6_d825,
                ]),
                c1: Fp::from_raw_unchecked([
                    0xd263_31b0_2e9d_6995,
                    0x9d68_a482_f779_7e7d,
                    0x9c9b_2924_8d39_ea92,
                    0xf480_1ca2_e131_07aa,
                    0xa16c_0732_bdbc_b066,
                    0x083c_a4af_ba36_0478,
                ])
            },
            c1: Fp2 {
                c0: Fp::from_raw_unchecked([
                    0x59e2_61db_0916_b641,
                    0x2716_b6f4_b23e_960d,
                    0xc8e5_5b10_a0bd_9c45,
                    0x0bdb_0bd9_9c4d_eda8,
                    0x8cf8_9ebf_57fd_aac5,
                    0x12d6_b792_9e77_7a5e,
                ]),
                c1: Fp::from_raw_unchecked([
                    0x5fc8_5188_b0e1_5f35,
                    0x34a0_6e3a_8f09_6365,
                    0xdb31_26a6_e02a_d62c,
                    0xfc6f_5aa9_7d9a_990b,
                    0xa12f_55f5_eb89_c210,
                    0x1723_703a_926f_8889,
                ])
            },
            c2: Fp2 {
                c0: Fp::from_raw_unchecked([
                    0x9358_8f29_7182_8778,
                    0x43f6_5b86_11ab_7585,
                    0x3183_aaf5_ec27_9fdf,
                    0xfa73_d7e1_8ac9_9df6,
                    0x64e1_76a6_a64c_99b0,
                    0x179f_a78c_5838_8f1f,
                ]),
                c1: Fp::from_raw_unchecked([
                    0x672a_0a11_ca2a_ef12,
                    0x0d11_b9b5_2aa3_f16b,
                    0xa444_12d0_699d_056e,
                    0xc01d_0177_221a_5ba5,
                    0x66e0_cede_6c73_5529,
                    0x05f5_a71e_9fdd_c339,
                ])
            }
        },
        c1: Fp6 {
            c0: Fp2 {
                c0: Fp::from_raw_unchecked([
                    0xd30a_88a1_b062_c679,
                    0x5ac5_6a5d_35fc_8304,
                    0xd0c8_34a6_a81f_290d,
                    0xcd54_30c2_da37_07c7,
                    0xf0c2_7ff7_8050_0af0,
                    0x0924_5da6_e2d7_2eae,
                ]),
                c1: Fp::from_raw_unchecked([
                    0x9f2e_0676_791b_5156,
                    0xe2d1_c823_4918_fe13,
                    0x4c9e_459f_3c56_1bf4,
                    0xa3e8_5e53_b9d3_e3c1,
                    0x820a_121e_21a7_0020,
                    0x15af_6183_41c5_9acc,
                ])
            },
            c1: Fp2 {
                c0: Fp::from_raw_unchecked([
                    0x7c95_658c_2499_3ab1,
                    0x73eb_3872_1ca8_86b9,
                    0x5256_d749_4774_34bc,
                    0x8ba4_1902_ea50_4a8b,
                    0x04a3_d3f8_0c86_ce6d,
                    0x18a6_4a87_fb68_6eaa,
                ]),
                c1: Fp::from_raw_unchecked([
                    0xbb83_e71b_b920_cf26,
                    0x2a52_77ac_92a7_3945,
                    0xfc0e_e59f_94f0_46a0,
                    0x7158_cdf3_7860_58f7,
                    0x7cc1_061b_82f9_45f6,
                    0x03f8_47aa_9fdb_e567,
                ])
            },
            c2: Fp2 {
                c0: Fp::from_raw_unchecked([
                    0x8078_dba5_6134_e657,
                    0x1cd7_ec9a_4399_8a6e,
                    0xb1aa_599a_1a99_3766,
                    0xc9a0_f62f_0842_ee44,
                    0x8e15_9be3_b605_dffa,
                    0x0c86_ba0d_4af1_3fc2,
                ]),
                c1: Fp::from_raw_unchecked([
                    0xe80f_f2a0_6a52_ffb1,
                    0x7694_ca48_721a_906c,
                    0x7583_183e_03b0_8514,
                    0xf567_afdd_40ce_e4e2,
                    0x9a6d_96d2_e526_a5fc,
                    0x197e_9f49_861f_2242,
                ])
            }
        }
    }
}

#[test]
fn test_pairing_matches_reference() {
    let res = pairing(&G1Affine::generator(), &G2Affine::generator());
    assert_eq!(*res.as_fp12(), reference_generator_pairing());
    assert_eq!(res, Gt::generator());
}

#[test]
fn test_prepared_pairing_matches_direct() {
    let a = G1Affine::generator();
    let b = G2Affine::generator();
    let prep = G2Prepared::from(b);

    assert_eq!(
        pairing(&a, &b),
        multi_miller_loop(&[(&a, &prep)]).final_exponentiation()
    );
}

#[test]
fn test_pairing_bilinearity() {
    let a = BigUint::from(0x1234_5678_9abc_def0u64);
    let b = BigUint::from(0x0fed_cba9_8765_4321u64);

    let p = G1Affine::from(G1Projective::generator() * &a);
    let q = G2Affine::from(G2Projective::generator() * &b);

    let expected = Gt::generator().exp(&(&a * &b));
    assert_eq!(pairing(&p, &q), expected);

    let p2 = G1Affine::from(G1Projective::generator() * (&a * &b));
    assert_eq!(pairing(&p2, &G2Affine::generator()), expected);

    let q2 = G2Affine::from(G2Projective::generator() * (&a * &b));
    assert_eq!(pairing(&G1Affine::generator(), &q2), expected);
}

#[test]
fn test_pairing_is_additive_in_each_argument() {
    let mut rng = test_rng();
    let p1 = G1Projective::random(&mut rng);
    let p2 = G1Projective::random(&mut rng);
    let q = G2Affine::from(G2Projective::random(&mut rng));

    let lhs = pairing(&G1Affine::from(p1 + p2), &q);
    let rhs = pairing(&G1Affine::from(p1), &q) * pairing(&G1Affine::from(p2), &q);
    assert_eq!(lhs, rhs);
}

#[test]
fn test_pairing_non_degeneracy() {
    let e = pairing(&G1Affine::generator(), &G2Affine::generator());
    assert!(!e.is_one());
    assert!(Gt::is_valid(e.as_fp12()));
}

#[test]
fn test_pairing_with_identity() {
    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();

    assert!(pairing(&G1Affine::identity(), &g2).is_one());
    assert!(pairing(&g1, &G2Affine::identity()).is_one());
    assert!(pairing(&G1Affine::identity(), &G2Affine::identity()).is_one());
}

#[test]
fn test_pairing_negation() {
    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();

    let e = pairing(&g1, &g2);
    assert_eq!(pairing(&-g1, &g2), e.inverse());
    assert_eq!(pairing(&g1, &-g2), -e);
    assert_eq!(pairing(&-g1, &-g2), e);
}

#[test]
fn test_multi_miller_loop() {
    let mut rng = test_rng();
    let a1 = G1Affine::generator();
    let b1 = G2Affine::generator();
    let a2 = G1Affine::from(G1Projective::random(&mut rng));
    let b2 = G2Affine::from(G2Projective::random(&mut rng));

    let expected = pairing(&a1, &b1) * pairing(&a2, &b2);

    let b1_prepared = G2Prepared::from(b1);
    let b2_prepared = G2Prepared::from(b2);
    let product = multi_miller_loop(&[(&a1, &b1_prepared), (&a2, &b2_prepared)]);
    assert_eq!(product.final_exponentiation(), expected);

    // Loops combine before the final exponentiation
    let separate = multi_miller_loop(&[(&a1, &b1_prepared)]) * multi_miller_loop(&[(&a2, &b2_prepared)]);
    assert_eq!(separate.final_exponentiation(), expected);
}

#[test]
fn test_multi_miller_loop_skips_identity_terms() {
    let a = G1Affine::generator();
    let b = G2Prepared::from(G2Affine::generator());
    let identity_prepared = G2Prepared::from(G2Affine::identity());
    let identity = G1Affine::identity();

    let expected = pairing(&a, &G2Affine::generator());
    let res = multi_miller_loop(&[(&a, &b), (&identity, &b), (&a, &identity_prepared)])
        .final_exponentiation();
    assert_eq!(res, expected);

    assert!(multi_miller_loop(&[]).final_exponentiation().is_one());
    assert!(MillerLoopResult::default().final_exponentiation().is_one());
}

#[test]
fn test_pairing_check() {
    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();
    let s = BigUint::from(1_000_003u32);

    let sg1 = G1Affine::from(G1Projective::generator() * &s);
    let sg2 = G2Affine::from(G2Projective::generator() * &s);

    // e([s]G1, G2) * e(-G1, [s]G2) = 1
    assert!(pairing_check(&[(sg1, g2), (-g1, sg2)]));
    assert!(!pairing_check(&[(sg1, g2), (g1, sg2)]));
    assert!(!pairing_check(&[(g1, g2)]));
    assert!(pairing_check(&[]));
    assert!(pairing_check(&[(G1Affine::identity(), g2)]));
}

#[test]
fn test_pairing_output_order_is_r() {
    let e = pairing(&G1Affine::generator(), &G2Affine::generator());
    assert!(e.exp(&Gt::q()).is_one());
}
