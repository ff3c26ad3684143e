//! BLS12-381 arithmetic: the extension-field tower, G1/G2, the optimal ate
//! pairing and the target group GT.
//!
//! Base-field multiplication is dispatched to one of several Montgomery
//! backends picked at first use (or explicitly with
//! [`ec::bls12_381::init`]). The library works in `no_std` environments;
//! the `std` feature adds runtime CPU detection and environment
//! configuration.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

pub mod ec;
pub mod error;

pub use error::{validate, Error, Result};

pub use ec::bls12_381::{
    multi_miller_loop, pairing, pairing_check, BackendConfig, BackendKind, Fp, Fp12, Fp2, Fp6,
    G1Affine, G1Projective, G2Affine, G2Prepared, G2Projective, Gt, MillerLoopResult,
};
