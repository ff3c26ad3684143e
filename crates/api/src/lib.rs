//! Public API types for the bls12381 workspace
//!
//! This crate holds the error taxonomy shared by every decoding and validation
//! path, and the byte-encoding trait implemented by the public group types.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};

#[cfg(feature = "alloc")]
pub use traits::Serialize;
