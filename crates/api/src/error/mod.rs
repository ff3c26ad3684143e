//! Error handling for decoding, validation and backend configuration

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};
