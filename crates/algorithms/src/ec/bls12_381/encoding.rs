//! Flag bits carried in the first byte of point encodings

use subtle::{Choice, ConditionallySelectable};

const COMPRESSION: u8 = 1 << 7;
const INFINITY: u8 = 1 << 6;
const SORT: u8 = 1 << 5;

/// Clears the three flag bits from a leading byte
pub(crate) const COORDINATE_MASK: u8 = 0b0001_1111;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Flags {
    pub(crate) compression: bool,
    pub(crate) infinity: bool,
    pub(crate) sort: bool,
}

impl Flags {
    pub(crate) fn decode(byte: u8) -> Flags {
        Flags {
            compression: byte & COMPRESSION != 0,
            infinity: byte & INFINITY != 0,
            sort: byte & SORT != 0,
        }
    }

    /// Flag byte for an encoding; `sort` is ignored for the identity
    pub(crate) fn encode(compression: bool, infinity: Choice, sort: Choice) -> u8 {
        let mut byte = if compression { COMPRESSION } else { 0 };
        byte |= u8::conditional_select(&0u8, &INFINITY, infinity);
        byte |= u8::conditional_select(&0u8, &SORT, (!infinity) & sort);
        byte
    }
}
