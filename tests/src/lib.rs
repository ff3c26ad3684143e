//! Shared fixtures for the bls12381 integration and property tests

use bls12381::prelude::*;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

/// Deterministic RNG for a given test seed
pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// `[k]G1` as an affine point
pub fn g1_mul(k: &BigUint) -> G1Affine {
    G1Affine::from(G1Projective::generator() * k)
}

/// `[k]G2` as an affine point
pub fn g2_mul(k: &BigUint) -> G2Affine {
    G2Affine::from(G2Projective::generator() * k)
}

/// A 32-byte big-endian exponent for `Gt::exp_ct`
pub fn exponent_bytes(e: &BigUint) -> [u8; 32] {
    let be = e.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - be.len()..].copy_from_slice(&be);
    out
}

/// Raise `f` into the cyclotomic subgroup without landing in GT
pub fn cyclotomic(f: Fp12) -> Fp12 {
    let t = f.conjugate() * f.inverse();
    t.frobenius_map().frobenius_map() * t
}
