//! BLS12-381 pairing-friendly elliptic curve
//!
//! The base field multiplication runs through a backend chosen once per
//! process (see [`backend`]). Everything above it, from the Fp2/Fp6/Fp12
//! tower to the pairing and the target group, is generic over that choice.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

#[macro_use]
mod macros;

pub mod backend;
pub mod field;

mod encoding;
mod g1;
mod g2;
mod gt;
mod pairings;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod tests;

pub use backend::{active, init, selected, Backend, BackendConfig, BackendKind, CpuFeatures};
pub use field::{fp::Fp, fp12::Fp12, fp2::Fp2, fp6::Fp6};
pub use g1::{G1Affine, G1Projective};
pub use g2::{G2Affine, G2Projective};
pub use gt::Gt;
pub use pairings::{multi_miller_loop, pairing, pairing_check, G2Prepared, MillerLoopResult};
