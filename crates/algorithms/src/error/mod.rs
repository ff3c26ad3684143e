//! Error handling for the curve and field code
//!
//! Every fallible operation in this crate reports the shared
//! [`bls12381_api::Error`]. Arithmetic on already-decoded values never
//! fails, so errors only come from decoders and backend configuration.

pub use bls12381_api::error::validate;
pub use bls12381_api::{Error, Result};
