//! G1 and G2 group law, scalar multiplication and subgroup structure

use num_bigint::BigUint;
use subtle::{Choice, ConditionallySelectable};

use super::super::{G1Affine, G1Projective, G2Affine, G2Projective, Gt};
use super::{g1_outside_subgroup, g2_outside_subgroup, test_rng};

fn n(v: u64) -> BigUint {
    BigUint::from(v)
}

// ============================================================================
// G1
// ============================================================================

#[test]
fn test_g1_generator_is_valid() {
    let g = G1Affine::generator();
    assert!(bool::from(g.is_on_curve()));
    assert!(bool::from(g.is_torsion_free()));
    assert!(!bool::from(g.is_identity()));
}

#[test]
fn test_g1_identity_operations() {
    let identity = G1Projective::identity();
    let point = G1Projective::generator() * n(42);

    assert_eq!(identity + point, point);
    assert_eq!(point + identity, point);
    assert_eq!(identity * n(42), identity);
    assert_eq!(identity.double(), identity);
    assert_eq!(-identity, identity);
    assert_eq!(point - point, identity);
    assert!(bool::from(G1Affine::identity().is_on_curve()));
}

#[test]
fn test_g1_group_law() {
    let g = G1Projective::generator();
    let p = g * n(2);
    let q = g * n(3);
    let r = g * n(5);

    assert_eq!((p + q) + r, p + (q + r));
    assert_eq!(p + q, q + p);
    assert_eq!(p + q, g * n(5));
    assert_eq!(p.double(), p + p);
}

#[test]
fn test_g1_scalar_multiplication() {
    let p = G1Projective::generator();
    let a = n(42);
    let b = n(69);

    assert_eq!(p * (&a + &b), p * &a + p * &b);
    assert_eq!(p * (&a * &b), (p * &b) * &a);
    assert_eq!(p * n(0), G1Projective::identity());
    assert_eq!(p * n(1), p);

    // The subgroup order annihilates every subgroup element
    assert_eq!(p * Gt::q(), G1Projective::identity());
    assert_eq!(p * (Gt::q() + 1u32), p);
}

#[test]
fn test_g1_mixed_addition_consistency() {
    let g = G1Projective::generator();
    let p_proj = g * n(13);
    let q_proj = g * n(17);
    let p_aff = G1Affine::from(p_proj);
    let q_aff = G1Affine::from(q_proj);

    let expected = p_proj + q_proj;
    assert_eq!(p_proj + q_aff, expected);
    assert_eq!(p_aff + q_proj, expected);
    assert_eq!(p_proj.add_mixed(&q_aff), expected);
    assert_eq!(G1Projective::from(p_aff) + G1Projective::from(q_aff), expected);

    // Mixed addition of a point with itself doubles it
    assert_eq!(p_proj + p_aff, p_proj.double());
}

#[test]
fn test_g1_conditional_select() {
    let a = G1Affine::generator();
    let b = G1Affine::identity();

    assert_eq!(G1Affine::conditional_select(&a, &b, Choice::from(0u8)), a);
    assert_eq!(G1Affine::conditional_select(&a, &b, Choice::from(1u8)), b);
}

#[test]
fn test_g1_sum() {
    let g = G1Projective::generator();
    let points: Vec<_> = (1..=4).map(|i| g * n(i)).collect();
    let sum: G1Projective = points.iter().sum();
    assert_eq!(sum, g * n(10));
}

#[test]
fn test_g1_random_is_in_subgroup() {
    let mut rng = test_rng();
    for _ in 0..5 {
        let p = G1Affine::from(G1Projective::random(&mut rng));
        assert!(bool::from(p.is_on_curve()));
        assert!(bool::from(p.is_torsion_free()));
        assert!(!bool::from(p.is_identity()));
    }
}

#[test]
fn test_g1_subgroup_check_rejects_torsion_points() {
    let p = g1_outside_subgroup();
    assert!(bool::from(p.is_on_curve()));
    assert!(!bool::from(p.is_torsion_free()));

    let cleared = G1Affine::from(G1Projective::from(p).clear_cofactor());
    assert!(bool::from(cleared.is_on_curve()));
    assert!(bool::from(cleared.is_torsion_free()));
}

// ============================================================================
// G2
// ============================================================================

#[test]
fn test_g2_generator_is_valid() {
    let g = G2Affine::generator();
    assert!(bool::from(g.is_on_curve()));
    assert!(bool::from(g.is_torsion_free()));
    assert!(!bool::from(g.is_identity()));
}

#[test]
fn test_g2_identity_operations() {
    let identity = G2Projective::identity();
    let point = G2Projective::generator() * n(42);

    assert_eq!(identity + point, point);
    assert_eq!(point + identity, point);
    assert_eq!(identity * n(42), identity);
    assert_eq!(identity.double(), identity);
    assert_eq!(-identity, identity);
    assert_eq!(point - point, identity);
}

#[test]
fn test_g2_group_law() {
    let g = G2Projective::generator();
    let p = g * n(2);
    let q = g * n(3);
    let r = g * n(5);

    assert_eq!((p + q) + r, p + (q + r));
    assert_eq!(p + q, q + p);
    assert_eq!(p + q, g * n(5));
    assert_eq!(p.double(), p + p);
}

#[test]
fn test_g2_scalar_multiplication() {
    let p = G2Projective::generator();
    let a = n(42);
    let b = n(69);

    assert_eq!(p * (&a + &b), p * &a + p * &b);
    assert_eq!(p * (&a * &b), (p * &b) * &a);
    assert_eq!(p * Gt::q(), G2Projective::identity());
}

#[test]
fn test_g2_mixed_addition_consistency() {
    let g = G2Projective::generator();
    let p_proj = g * n(13);
    let q_aff = G2Affine::from(g * n(17));

    assert_eq!(p_proj + q_aff, g * n(30));
    assert_eq!(p_proj.add_mixed(&q_aff), g * n(30));
    assert_eq!(q_aff - p_proj, g * n(4));
}

#[test]
fn test_g2_sum() {
    let g = G2Projective::generator();
    let points: Vec<_> = (1..=4).map(|i| g * n(i)).collect();
    let sum: G2Projective = points.into_iter().sum();
    assert_eq!(sum, g * n(10));
}

#[test]
fn test_g2_random_is_in_subgroup() {
    let mut rng = test_rng();
    for _ in 0..3 {
        let p = G2Affine::from(G2Projective::random(&mut rng));
        assert!(bool::from(p.is_on_curve()));
        assert!(bool::from(p.is_torsion_free()));
    }
}

#[test]
fn test_g2_subgroup_check_rejects_torsion_points() {
    let p = g2_outside_subgroup();
    assert!(bool::from(p.is_on_curve()));
    assert!(!bool::from(p.is_torsion_free()));

    let cleared = G2Affine::from(G2Projective::from(p).clear_cofactor());
    assert!(bool::from(cleared.is_on_curve()));
    assert!(bool::from(cleared.is_torsion_free()));
}

// ============================================================================
// Projective membership and zeroization
// ============================================================================

#[test]
fn test_projective_is_on_curve() {
    // doubling leaves z != 1
    let p1 = G1Projective::generator().double();
    assert!(bool::from(p1.is_on_curve()));
    assert!(bool::from(G1Projective::identity().is_on_curve()));
    let mut bad1 = p1;
    bad1.y = bad1.y.double();
    assert!(!bool::from(bad1.is_on_curve()));

    let p2 = G2Projective::generator().double();
    assert!(bool::from(p2.is_on_curve()));
    assert!(bool::from(G2Projective::identity().is_on_curve()));
    let mut bad2 = p2;
    bad2.y = bad2.y.double();
    assert!(!bool::from(bad2.is_on_curve()));
}

#[test]
fn test_points_zeroize_to_identity() {
    use zeroize::Zeroize;

    let mut a1 = G1Affine::generator();
    let mut p1 = G1Projective::generator();
    a1.zeroize();
    p1.zeroize();
    assert_eq!(a1, G1Affine::identity());
    assert_eq!(p1, G1Projective::identity());

    let mut a2 = G2Affine::generator();
    let mut p2 = G2Projective::generator();
    a2.zeroize();
    p2.zeroize();
    assert_eq!(a2, G2Affine::identity());
    assert_eq!(p2, G2Projective::identity());
}
