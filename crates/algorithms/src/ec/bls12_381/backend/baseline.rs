//! Baseline backend: word-serial CIOS Montgomery multiplication
//!
//! Interleaves one row of the schoolbook product with one reduction step, so
//! the running sum never grows past seven limbs. Needs nothing beyond the
//! 64x64 -> 128 multiply every 64-bit target has.

use bls12381_internal::{adc, mac};

use super::{subtract_p, INV, MODULUS};

#[inline]
pub(crate) fn mul(a: &[u64; 6], b: &[u64; 6]) -> [u64; 6] {
    let mut t = [0u64; 7];

    for &bi in b.iter() {
        // t += a * b[i]
        let mut carry = 0;
        for j in 0..6 {
            let (lo, hi) = mac(t[j], a[j], bi, carry);
            t[j] = lo;
            carry = hi;
        }
        let (t6, _) = adc(t[6], carry, 0);
        t[6] = t6;

        // t = (t + m * p) / 2^64, with m chosen so the low limb cancels
        let m = t[0].wrapping_mul(INV);
        let (_, mut carry) = mac(t[0], m, MODULUS[0], 0);
        for j in 1..6 {
            let (lo, hi) = mac(t[j], m, MODULUS[j], carry);
            t[j - 1] = lo;
            carry = hi;
        }
        let (t5, t6) = adc(t[6], carry, 0);
        t[5] = t5;
        t[6] = t6;
    }

    subtract_p(&[t[0], t[1], t[2], t[3], t[4], t[5]])
}

#[inline]
pub(crate) fn square(a: &[u64; 6]) -> [u64; 6] {
    mul(a, a)
}
