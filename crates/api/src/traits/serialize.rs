//! Byte serialization of public group elements.

use crate::Result;
use alloc::vec::Vec;

/// A type with one canonical, fixed-length byte encoding.
///
/// `from_bytes` performs every check the type needs to be valid (length,
/// canonical coordinates, curve equation, subgroup membership), so a value
/// obtained through it can be used without further validation.
pub trait Serialize: Sized {
    /// Length of the canonical encoding in bytes.
    const ENCODED_LEN: usize;

    /// Decodes and validates an element.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Produces the canonical encoding; always `ENCODED_LEN` bytes long.
    fn to_bytes(&self) -> Vec<u8>;
}
