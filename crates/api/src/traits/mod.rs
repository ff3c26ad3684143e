//! Traits shared across the workspace

#[cfg(feature = "alloc")]
pub mod serialize;

#[cfg(feature = "alloc")]
pub use serialize::Serialize;
