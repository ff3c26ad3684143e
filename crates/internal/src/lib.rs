//! Internal utilities for the bls12381 workspace
//!
//! Fixed-width limb arithmetic shared by every base-field backend, and the
//! big-endian conversions used by the canonical encodings.

#![no_std]

pub mod endian;
pub mod limb;

pub use limb::{adc, mac, sbb};
