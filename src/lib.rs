//! # bls12381
//!
//! BLS12-381 extension-field tower, curve groups, optimal ate pairing and
//! target group, with a base-field multiplication backend chosen once per
//! process.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! bls12381 = "0.1"
//! ```
//!
//! ```
//! use bls12381::prelude::*;
//!
//! let e = pairing(&G1Affine::generator(), &G2Affine::generator());
//! let bytes = e.to_bytes();
//! assert_eq!(Gt::from_bytes(&bytes).unwrap(), e);
//! ```
//!
//! ## Features
//!
//! - `std` (default): runtime CPU feature detection and the
//!   `BLS12381_BACKEND` / `BLS12381_DISABLE_ADX` environment variables
//! - `serde`: byte-string serde for `G1Affine`, `G2Affine` and `Gt`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`api`]: error taxonomy and the `Serialize` encoding trait
//! - [`internal`]: limb arithmetic and big-endian conversions
//! - [`params`]: curve constants and encoding sizes
//! - [`algorithms`]: backends, tower, groups, pairing and GT

#![cfg_attr(not(feature = "std"), no_std)]

pub use bls12381_algorithms as algorithms;
pub use bls12381_api as api;
pub use bls12381_internal as internal;
pub use bls12381_params as params;

pub use num_bigint::BigUint;

/// Common imports for bls12381 users
pub mod prelude {
    pub use crate::api::{Error, Result, Serialize};

    pub use crate::algorithms::ec::bls12_381::{
        backend::{self, Backend, BackendConfig, BackendKind, CpuFeatures},
        multi_miller_loop, pairing, pairing_check, Fp, Fp12, Fp2, Fp6, G1Affine, G1Projective,
        G2Affine, G2Prepared, G2Projective, Gt, MillerLoopResult,
    };

    pub use num_bigint::BigUint;
    pub use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
}
