//! Big-endian conversion between byte strings and little-endian limb arrays

/// Read a u64 from the first eight bytes of a big-endian slice
#[inline]
pub fn u64_from_be_bytes(bytes: &[u8]) -> u64 {
    u64::from_be_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Decode a big-endian byte string into limbs, least significant limb first
///
/// `bytes` must be exactly `8 * N` long.
#[inline]
pub fn limbs_from_be_bytes<const N: usize>(bytes: &[u8]) -> [u64; N] {
    debug_assert_eq!(bytes.len(), 8 * N);
    let mut limbs = [0u64; N];
    for (i, chunk) in bytes.chunks_exact(8).enumerate() {
        limbs[N - 1 - i] = u64_from_be_bytes(chunk);
    }
    limbs
}

/// Encode limbs (least significant first) as a big-endian byte string
///
/// `out` must be exactly `8 * N` long.
#[inline]
pub fn limbs_to_be_bytes<const N: usize>(limbs: &[u64; N], out: &mut [u8]) {
    debug_assert_eq!(out.len(), 8 * N);
    for (i, chunk) in out.chunks_exact_mut(8).enumerate() {
        chunk.copy_from_slice(&limbs[N - 1 - i].to_be_bytes());
    }
}
