//! Elliptic curve primitives
//!
//! Only the pairing-friendly BLS12-381 curve lives here.

pub mod bls12_381;
