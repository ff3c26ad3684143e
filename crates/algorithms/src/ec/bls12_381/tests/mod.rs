//! BLS12-381 test suite

use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use subtle::Choice;

use super::field::fp::Fp;
use super::field::fp2::Fp2;
use super::{G1Affine, G2Affine};

mod groups;
mod pairings;

/// Deterministic RNG so failures reproduce
pub(crate) fn test_rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x0123_4567_89ab_cdef)
}

/// A point on E(Fp) that is not in the order-r subgroup
pub(crate) fn g1_outside_subgroup() -> G1Affine {
    let b = Fp::from_u64(4);
    (1u64..)
        .filter_map(|i| {
            let x = Fp::from_u64(i);
            let y = (x.square() * x + b).sqrt().into_option()?;
            Some(G1Affine {
                x,
                y,
                infinity: Choice::from(0u8),
            })
        })
        .find(|p| !bool::from(p.is_torsion_free()))
        .unwrap()
}

/// A point on E'(Fp2) that is not in the order-r subgroup
pub(crate) fn g2_outside_subgroup() -> G2Affine {
    let b = Fp2 {
        c0: Fp::from_u64(4),
        c1: Fp::from_u64(4),
    };
    (1u64..)
        .filter_map(|i| {
            let x = Fp2::from(Fp::from_u64(i));
            let y = (x.square() * x + b).sqrt().into_option()?;
            Some(G2Affine {
                x,
                y,
                infinity: Choice::from(0u8),
            })
        })
        .find(|p| !bool::from(p.is_torsion_free()))
        .unwrap()
}
