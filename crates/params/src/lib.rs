//! Constant values for the bls12381 workspace
//!
//! Curve parameters and canonical encoding sizes. Field elements in Montgomery
//! form live next to the arithmetic that uses them.

#![no_std]

pub mod bls12_381;

pub use bls12_381::*;
