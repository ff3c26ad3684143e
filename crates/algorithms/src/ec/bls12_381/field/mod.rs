//! Extension tower over the BLS12-381 base field
//!
//! `Fp2 = Fp[u]/(u^2 + 1)`, `Fp6 = Fp2[v]/(v^3 - (u + 1))`,
//! `Fp12 = Fp6[w]/(w^2 - v)`. Only `Fp` multiplication goes through the
//! selected backend; every higher level is built from it.

pub mod fp;
pub mod fp12;
pub mod fp2;
pub mod fp6;
