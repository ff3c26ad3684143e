//! BLS12-381 base field `GF(p)` where p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use bls12381_api::{validate, Result};
use bls12381_internal::endian::{limbs_from_be_bytes, limbs_to_be_bytes};
use bls12381_internal::{adc, sbb};
use bls12381_params::FP_BYTES;

use super::super::backend::{self, montgomery_reduce, subtract_p, Backend, MODULUS};

// ============================================================================
// Field Constants
// ============================================================================

/// Montgomery R = 2^384 mod p
const R: Fp = Fp([
    0x7609_0000_0002_fffd,
    0xebf4_000b_c40c_0002,
    0x5f48_9857_53c7_58ba,
    0x77ce_5853_7052_5745,
    0x5c07_1a97_a256_ec6d,
    0x15f6_5ec3_fa80_e493,
]);

/// Montgomery R^2 = 2^768 mod p
const R2: Fp = Fp([
    0xf4df_1f34_1c34_1746,
    0x0a76_e6a6_09d1_04f1,
    0x8de5_476c_4c95_b6d5,
    0x67eb_88a9_939d_83c0,
    0x9a79_3e85_b519_952d,
    0x1198_8fe5_92ca_e3aa,
]);

/// Montgomery R^3 = 2^1152 mod p
const R3: Fp = Fp([
    0xed48_ac6b_d94c_a1e0,
    0x315f_831e_03a7_adf8,
    0x9a53_352a_615e_29dd,
    0x34c0_4e5e_921e_1761,
    0x2512_d435_6572_4728,
    0x0aa6_3460_9175_5d4d,
]);

/// (p+1)/4, the square-root exponent for p = 3 mod 4
const P_PLUS_1_DIV_4: [u64; 6] = [
    0xee7f_bfff_ffff_eaab,
    0x07aa_ffff_ac54_ffff,
    0xd9cc_34a8_3dac_3d89,
    0xd91d_d2e1_3ce1_44af,
    0x92c6_e9ed_90d2_eb35,
    0x0680_447a_8e5f_f9a6,
];

/// p-2, the Fermat inversion exponent
const P_MINUS_2: [u64; 6] = [
    0xb9fe_ffff_ffff_aaa9,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// (p-1)/2 + 1, the smallest lexicographically large value
const HALF_P_PLUS_1: [u64; 6] = [
    0xdcff_7fff_ffff_d556,
    0x0f55_ffff_58a9_ffff,
    0xb398_6950_7b58_7b12,
    0xb23b_a5c2_79c2_895f,
    0x258d_d3db_21a5_d66b,
    0x0d00_88f5_1cbf_f34d,
];

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fp(a) = aR mod p, with R = 2^384
///
/// The limbs are always fully reduced, so equality is limb equality.
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 6]);

impl Fp {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0, 0, 0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Wrap Montgomery-form limbs without checking that they are reduced
    pub const fn from_raw_unchecked(v: [u64; 6]) -> Fp {
        Fp(v)
    }

    /// Embed a small integer
    pub fn from_u64(v: u64) -> Fp {
        Fp([v, 0, 0, 0, 0, 0]) * R2
    }

    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, carry) = adc(self.0[3], rhs.0[3], carry);
        let (d4, carry) = adc(self.0[4], rhs.0[4], carry);
        let (d5, _) = adc(self.0[5], rhs.0[5], carry);

        Fp(subtract_p(&[d0, d1, d2, d3, d4, d5]))
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        (&rhs.neg()).add(self)
    }

    /// Negate a field element
    #[inline]
    pub const fn neg(&self) -> Fp {
        let (d0, borrow) = sbb(MODULUS[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], self.0[2], borrow);
        let (d3, borrow) = sbb(MODULUS[3], self.0[3], borrow);
        let (d4, borrow) = sbb(MODULUS[4], self.0[4], borrow);
        let (d5, _) = sbb(MODULUS[5], self.0[5], borrow);

        // -0 must stay 0, not p
        let mask = (((self.0[0] | self.0[1] | self.0[2] | self.0[3] | self.0[4] | self.0[5]) == 0)
            as u64)
            .wrapping_sub(1);

        Fp([
            d0 & mask,
            d1 & mask,
            d2 & mask,
            d3 & mask,
            d4 & mask,
            d5 & mask,
        ])
    }

    /// `2 * self`
    #[inline]
    pub const fn double(&self) -> Fp {
        self.add(self)
    }

    /// Multiply two field elements on the process-wide backend
    #[inline]
    pub fn mul(&self, rhs: &Fp) -> Fp {
        backend::active().mul(self, rhs)
    }

    /// Square this element on the process-wide backend
    #[inline]
    pub fn square(&self) -> Fp {
        backend::active().square(self)
    }

    /// Multiply on an explicitly chosen backend
    ///
    /// Bypasses the process-wide selection; used to compare backends.
    #[inline]
    pub fn mul_with(&self, rhs: &Fp, backend: &Backend) -> Fp {
        backend.mul(self, rhs)
    }

    /// Leave Montgomery form: returns the canonical limbs of the value
    #[inline]
    pub(crate) const fn to_canonical(&self) -> [u64; 6] {
        montgomery_reduce(&[
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5], 0, 0, 0, 0, 0, 0,
        ])
    }
}

// ============================================================================
// Advanced Field Operations
// ============================================================================

impl Fp {
    /// Variable-time exponentiation by a little-endian limb exponent
    pub fn pow_vartime(&self, by: &[u64; 6]) -> Self {
        let mut res = Self::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// Square root, if one exists
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        let sqrt = self.pow_vartime(&P_PLUS_1_DIV_4);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Multiplicative inverse; none for zero
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        let t = self.pow_vartime(&P_MINUS_2);
        CtOption::new(t, !self.is_zero())
    }

    /// Multiplicative inverse with `inverse(0) = 0`
    #[inline]
    pub fn inverse(&self) -> Self {
        // 0^(p-2) is already 0
        self.pow_vartime(&P_MINUS_2)
    }

    /// Check if element > (p-1)/2
    pub fn lexicographically_largest(&self) -> Choice {
        let tmp = self.to_canonical();

        let (_, borrow) = sbb(tmp[0], HALF_P_PLUS_1[0], 0);
        let (_, borrow) = sbb(tmp[1], HALF_P_PLUS_1[1], borrow);
        let (_, borrow) = sbb(tmp[2], HALF_P_PLUS_1[2], borrow);
        let (_, borrow) = sbb(tmp[3], HALF_P_PLUS_1[3], borrow);
        let (_, borrow) = sbb(tmp[4], HALF_P_PLUS_1[4], borrow);
        let (_, borrow) = sbb(tmp[5], HALF_P_PLUS_1[5], borrow);

        // No borrow means tmp >= (p-1)/2 + 1
        !Choice::from((borrow as u8) & 1)
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode from big-endian bytes; none unless the value is below p
    pub fn from_bytes(bytes: &[u8; 48]) -> CtOption<Fp> {
        let limbs: [u64; 6] = limbs_from_be_bytes(bytes);

        let (_, borrow) = sbb(limbs[0], MODULUS[0], 0);
        let (_, borrow) = sbb(limbs[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(limbs[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(limbs[3], MODULUS[3], borrow);
        let (_, borrow) = sbb(limbs[4], MODULUS[4], borrow);
        let (_, borrow) = sbb(limbs[5], MODULUS[5], borrow);

        let is_some = (borrow as u8) & 1;

        // Convert to Montgomery form
        let tmp = Fp(limbs) * R2;

        CtOption::new(tmp, Choice::from(is_some))
    }

    /// Decode a 48-byte slice, reporting why it was rejected
    pub fn from_slice(bytes: &[u8], context: &'static str) -> Result<Fp> {
        validate::length(context, bytes.len(), FP_BYTES)?;
        let mut buf = [0u8; FP_BYTES];
        buf.copy_from_slice(bytes);
        let decoded = Fp::from_bytes(&buf);
        validate::canonical(
            bool::from(decoded.is_some()),
            context,
            "coordinate is not below the field modulus",
        )?;
        Ok(decoded.unwrap_or(Fp::zero()))
    }

    /// Encode to big-endian bytes
    pub fn to_bytes(self) -> [u8; 48] {
        let mut res = [0u8; 48];
        limbs_to_be_bytes(&self.to_canonical(), &mut res);
        res
    }

    /// Uniformly random field element
    pub fn random(mut rng: impl RngCore) -> Fp {
        let mut bytes = [0u8; 96];
        rng.fill_bytes(&mut bytes);
        Fp::from_u768(limbs_from_be_bytes(&bytes))
    }

    /// Reduce a 768-bit little-endian limb value modulo p
    fn from_u768(limbs: [u64; 12]) -> Fp {
        let lo = Fp([limbs[0], limbs[1], limbs[2], limbs[3], limbs[4], limbs[5]]);
        let hi = Fp([limbs[6], limbs[7], limbs[8], limbs[9], limbs[10], limbs[11]]);
        lo * R2 + hi * R3
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
            & self.0[4].ct_eq(&other.0[4])
            & self.0[5].ct_eq(&other.0[5])
    }
}

impl Eq for Fp {}
impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
            u64::conditional_select(&a.0[5], &b.0[5], choice),
        ])
    }
}

impl<'a> Neg for &'a Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp {
        Fp::neg(self)
    }
}

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp {
        Fp::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp {
        Fp::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp {
        Fp::mul(self, rhs)
    }
}

impl_neg_owned!(Fp);
impl_binops_additive!(Fp, Fp);
impl_binops_multiplicative!(Fp, Fp);
