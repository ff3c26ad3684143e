//! ADX backend: CIOS with MULX and two independent carry chains
//!
//! Each row adds the low halves of the partial products on one carry chain
//! and the high halves on another, which the compiler lowers to interleaved
//! ADCX/ADOX. The functions are compiled for `adx,bmi2` and must only be
//! called after both features were detected.

#![allow(unsafe_code)]

use core::arch::x86_64::{_addcarryx_u64, _mulx_u64};

use super::{subtract_p, INV, MODULUS};

/// Adds `x * y` into `t[0..7]` with separate carry chains for low and high words
#[inline]
#[target_feature(enable = "adx,bmi2")]
unsafe fn mul_add_row(t: &mut [u64; 7], x: &[u64; 6], y: u64) {
    let mut carry_lo = 0u8;
    let mut carry_hi = 0u8;
    for j in 0..6 {
        let mut hi = 0u64;
        let lo = _mulx_u64(x[j], y, &mut hi);
        let mut sum = 0u64;
        carry_lo = _addcarryx_u64(carry_lo, t[j], lo, &mut sum);
        t[j] = sum;
        carry_hi = _addcarryx_u64(carry_hi, t[j + 1], hi, &mut sum);
        t[j + 1] = sum;
    }
    // The running sum stays below 2^448, so the high chain ends clear and the
    // low chain carry lands in the top limb without overflow.
    debug_assert_eq!(carry_hi, 0);
    let mut top = 0u64;
    let _ = _addcarryx_u64(carry_lo, t[6], 0, &mut top);
    t[6] = top;
}

#[target_feature(enable = "adx,bmi2")]
unsafe fn mul_adx(a: &[u64; 6], b: &[u64; 6]) -> [u64; 6] {
    let mut t = [0u64; 7];

    for &bi in b.iter() {
        mul_add_row(&mut t, a, bi);

        let m = t[0].wrapping_mul(INV);
        mul_add_row(&mut t, &MODULUS, m);
        debug_assert_eq!(t[0], 0);

        t.copy_within(1..7, 0);
        t[6] = 0;
    }

    subtract_p(&[t[0], t[1], t[2], t[3], t[4], t[5]])
}

/// Safe entry point; only reachable through the ADX `Backend`.
#[inline]
pub(crate) fn mul(a: &[u64; 6], b: &[u64; 6]) -> [u64; 6] {
    // SAFETY: `Backend::for_kind` returns the ADX backend only after
    // `CpuFeatures::detect` saw ADX and BMI2 on the running CPU, and the
    // process-wide selection only installs backends obtained from it.
    unsafe { mul_adx(a, b) }
}

#[inline]
pub(crate) fn square(a: &[u64; 6]) -> [u64; 6] {
    mul(a, a)
}
