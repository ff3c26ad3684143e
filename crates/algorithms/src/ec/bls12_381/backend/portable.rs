//! Portable backend: unrolled product scanning plus separate reduction
//!
//! Every step is a `const fn`, so this backend also evaluates field constants
//! at compile time. It carries the only dedicated squaring routine.

use bls12381_internal::{adc, mac};

use super::{subtract_p, INV, MODULUS};

/// Montgomery product of two reduced operands
#[inline]
pub(crate) const fn mul(a: &[u64; 6], b: &[u64; 6]) -> [u64; 6] {
    let (t0, carry) = mac(0, a[0], b[0], 0);
    let (t1, carry) = mac(0, a[0], b[1], carry);
    let (t2, carry) = mac(0, a[0], b[2], carry);
    let (t3, carry) = mac(0, a[0], b[3], carry);
    let (t4, carry) = mac(0, a[0], b[4], carry);
    let (t5, t6) = mac(0, a[0], b[5], carry);

    let (t1, carry) = mac(t1, a[1], b[0], 0);
    let (t2, carry) = mac(t2, a[1], b[1], carry);
    let (t3, carry) = mac(t3, a[1], b[2], carry);
    let (t4, carry) = mac(t4, a[1], b[3], carry);
    let (t5, carry) = mac(t5, a[1], b[4], carry);
    let (t6, t7) = mac(t6, a[1], b[5], carry);

    let (t2, carry) = mac(t2, a[2], b[0], 0);
    let (t3, carry) = mac(t3, a[2], b[1], carry);
    let (t4, carry) = mac(t4, a[2], b[2], carry);
    let (t5, carry) = mac(t5, a[2], b[3], carry);
    let (t6, carry) = mac(t6, a[2], b[4], carry);
    let (t7, t8) = mac(t7, a[2], b[5], carry);

    let (t3, carry) = mac(t3, a[3], b[0], 0);
    let (t4, carry) = mac(t4, a[3], b[1], carry);
    let (t5, carry) = mac(t5, a[3], b[2], carry);
    let (t6, carry) = mac(t6, a[3], b[3], carry);
    let (t7, carry) = mac(t7, a[3], b[4], carry);
    let (t8, t9) = mac(t8, a[3], b[5], carry);

    let (t4, carry) = mac(t4, a[4], b[0], 0);
    let (t5, carry) = mac(t5, a[4], b[1], carry);
    let (t6, carry) = mac(t6, a[4], b[2], carry);
    let (t7, carry) = mac(t7, a[4], b[3], carry);
    let (t8, carry) = mac(t8, a[4], b[4], carry);
    let (t9, t10) = mac(t9, a[4], b[5], carry);

    let (t5, carry) = mac(t5, a[5], b[0], 0);
    let (t6, carry) = mac(t6, a[5], b[1], carry);
    let (t7, carry) = mac(t7, a[5], b[2], carry);
    let (t8, carry) = mac(t8, a[5], b[3], carry);
    let (t9, carry) = mac(t9, a[5], b[4], carry);
    let (t10, t11) = mac(t10, a[5], b[5], carry);

    montgomery_reduce(&[t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11])
}

/// Montgomery square, sharing the off-diagonal products
#[inline]
pub(crate) const fn square(a: &[u64; 6]) -> [u64; 6] {
    let (t1, carry) = mac(0, a[0], a[1], 0);
    let (t2, carry) = mac(0, a[0], a[2], carry);
    let (t3, carry) = mac(0, a[0], a[3], carry);
    let (t4, carry) = mac(0, a[0], a[4], carry);
    let (t5, t6) = mac(0, a[0], a[5], carry);

    let (t3, carry) = mac(t3, a[1], a[2], 0);
    let (t4, carry) = mac(t4, a[1], a[3], carry);
    let (t5, carry) = mac(t5, a[1], a[4], carry);
    let (t6, t7) = mac(t6, a[1], a[5], carry);

    let (t5, carry) = mac(t5, a[2], a[3], 0);
    let (t6, carry) = mac(t6, a[2], a[4], carry);
    let (t7, t8) = mac(t7, a[2], a[5], carry);

    let (t7, carry) = mac(t7, a[3], a[4], 0);
    let (t8, t9) = mac(t8, a[3], a[5], carry);

    let (t9, t10) = mac(t9, a[4], a[5], 0);

    let t11 = t10 >> 63;
    let t10 = (t10 << 1) | (t9 >> 63);
    let t9 = (t9 << 1) | (t8 >> 63);
    let t8 = (t8 << 1) | (t7 >> 63);
    let t7 = (t7 << 1) | (t6 >> 63);
    let t6 = (t6 << 1) | (t5 >> 63);
    let t5 = (t5 << 1) | (t4 >> 63);
    let t4 = (t4 << 1) | (t3 >> 63);
    let t3 = (t3 << 1) | (t2 >> 63);
    let t2 = (t2 << 1) | (t1 >> 63);
    let t1 = t1 << 1;

    let (t0, carry) = mac(0, a[0], a[0], 0);
    let (t1, carry) = adc(t1, 0, carry);
    let (t2, carry) = mac(t2, a[1], a[1], carry);
    let (t3, carry) = adc(t3, 0, carry);
    let (t4, carry) = mac(t4, a[2], a[2], carry);
    let (t5, carry) = adc(t5, 0, carry);
    let (t6, carry) = mac(t6, a[3], a[3], carry);
    let (t7, carry) = adc(t7, 0, carry);
    let (t8, carry) = mac(t8, a[4], a[4], carry);
    let (t9, carry) = adc(t9, 0, carry);
    let (t10, carry) = mac(t10, a[5], a[5], carry);
    let (t11, _) = adc(t11, 0, carry);

    montgomery_reduce(&[t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11])
}

/// Reduces a 768-bit product t to t·R⁻¹ mod p
#[inline(always)]
pub(crate) const fn montgomery_reduce(t: &[u64; 12]) -> [u64; 6] {
    let [t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11] = *t;

    // Round 1
    let k = t0.wrapping_mul(INV);
    let (_, carry) = mac(t0, k, MODULUS[0], 0);
    let (r1, carry) = mac(t1, k, MODULUS[1], carry);
    let (r2, carry) = mac(t2, k, MODULUS[2], carry);
    let (r3, carry) = mac(t3, k, MODULUS[3], carry);
    let (r4, carry) = mac(t4, k, MODULUS[4], carry);
    let (r5, carry) = mac(t5, k, MODULUS[5], carry);
    let (r6, r7) = adc(t6, 0, carry);

    // Round 2
    let k = r1.wrapping_mul(INV);
    let (_, carry) = mac(r1, k, MODULUS[0], 0);
    let (r2, carry) = mac(r2, k, MODULUS[1], carry);
    let (r3, carry) = mac(r3, k, MODULUS[2], carry);
    let (r4, carry) = mac(r4, k, MODULUS[3], carry);
    let (r5, carry) = mac(r5, k, MODULUS[4], carry);
    let (r6, carry) = mac(r6, k, MODULUS[5], carry);
    let (r7, r8) = adc(t7, r7, carry);

    // Round 3
    let k = r2.wrapping_mul(INV);
    let (_, carry) = mac(r2, k, MODULUS[0], 0);
    let (r3, carry) = mac(r3, k, MODULUS[1], carry);
    let (r4, carry) = mac(r4, k, MODULUS[2], carry);
    let (r5, carry) = mac(r5, k, MODULUS[3], carry);
    let (r6, carry) = mac(r6, k, MODULUS[4], carry);
    let (r7, carry) = mac(r7, k, MODULUS[5], carry);
    let (r8, r9) = adc(t8, r8, carry);

    // Round 4
    let k = r3.wrapping_mul(INV);
    let (_, carry) = mac(r3, k, MODULUS[0], 0);
    let (r4, carry) = mac(r4, k, MODULUS[1], carry);
    let (r5, carry) = mac(r5, k, MODULUS[2], carry);
    let (r6, carry) = mac(r6, k, MODULUS[3], carry);
    let (r7, carry) = mac(r7, k, MODULUS[4], carry);
    let (r8, carry) = mac(r8, k, MODULUS[5], carry);
    let (r9, r10) = adc(t9, r9, carry);

    // Round 5
    let k = r4.wrapping_mul(INV);
    let (_, carry) = mac(r4, k, MODULUS[0], 0);
    let (r5, carry) = mac(r5, k, MODULUS[1], carry);
    let (r6, carry) = mac(r6, k, MODULUS[2], carry);
    let (r7, carry) = mac(r7, k, MODULUS[3], carry);
    let (r8, carry) = mac(r8, k, MODULUS[4], carry);
    let (r9, carry) = mac(r9, k, MODULUS[5], carry);
    let (r10, r11) = adc(t10, r10, carry);

    // Round 6
    let k = r5.wrapping_mul(INV);
    let (_, carry) = mac(r5, k, MODULUS[0], 0);
    let (r6, carry) = mac(r6, k, MODULUS[1], carry);
    let (r7, carry) = mac(r7, k, MODULUS[2], carry);
    let (r8, carry) = mac(r8, k, MODULUS[3], carry);
    let (r9, carry) = mac(r9, k, MODULUS[4], carry);
    let (r10, carry) = mac(r10, k, MODULUS[5], carry);
    let (r11, _) = adc(t11, r11, carry);

    subtract_p(&[r6, r7, r8, r9, r10, r11])
}
