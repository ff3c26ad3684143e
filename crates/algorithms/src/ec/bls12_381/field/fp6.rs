//! Cubic extension `Fp6 = Fp2[v] / (v^3 - (u + 1))`

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use bls12381_api::{validate, Result};
use bls12381_params::{FP2_BYTES, FP6_BYTES};

use super::fp::Fp;
use super::fp2::Fp2;

/// (u + 1)^((p - 1) / 3)
const FROBENIUS_COEFF_C1: Fp2 = Fp2 {
    c0: Fp::zero(),
    c1: Fp::from_raw_unchecked([
        0xcd03_c9e4_8671_f071,
        0x5dab_2246_1fcd_a5d2,
        0x5870_42af_d385_1b95,
        0x8eb6_0ebe_01ba_cb9e,
        0x03f9_7d6e_83d0_50d2,
        0x18f0_2065_5463_8741,
    ]),
};

/// (u + 1)^((2p - 2) / 3)
const FROBENIUS_COEFF_C2: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x890d_c9e4_8675_45c3,
        0x2af3_2253_3285_a5d5,
        0x5088_0866_309b_7e2c,
        0xa20d_1b8c_7e88_1024,
        0x14e4_f04f_e2db_9068,
        0x14e5_6d3f_1564_853a,
    ]),
    c1: Fp::zero(),
};

/// `c0 + c1 * v + c2 * v^2`
#[derive(Copy, Clone)]
pub struct Fp6 {
    /// Constant coefficient
    pub c0: Fp2,
    /// Coefficient of `v`
    pub c1: Fp2,
    /// Coefficient of `v^2`
    pub c2: Fp2,
}

impl From<Fp> for Fp6 {
    fn from(f: Fp) -> Fp6 {
        Fp6::from(Fp2::from(f))
    }
}

impl From<Fp2> for Fp6 {
    fn from(f: Fp2) -> Fp6 {
        Fp6 {
            c0: f,
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }
}

impl PartialEq for Fp6 {
    fn eq(&self, other: &Fp6) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Fp6 {}

impl Default for Fp6 {
    fn default() -> Self {
        Fp6::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp6 {}

impl fmt::Debug for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*v + ({:?})*v^2", self.c0, self.c1, self.c2)
    }
}

impl ConditionallySelectable for Fp6 {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp6 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl ConstantTimeEq for Fp6 {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl Fp6 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Self {
        Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Self {
        Fp6 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Uniformly random element
    pub fn random(mut rng: impl RngCore) -> Self {
        Fp6 {
            c0: Fp2::random(&mut rng),
            c1: Fp2::random(&mut rng),
            c2: Fp2::random(&mut rng),
        }
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Multiply by `c1 * v`
    pub fn mul_by_1(&self, c1: &Fp2) -> Fp6 {
        Fp6 {
            c0: (self.c2 * c1).mul_by_nonresidue(),
            c1: self.c0 * c1,
            c2: self.c1 * c1,
        }
    }

    /// Multiply by `c0 + c1 * v`
    pub fn mul_by_01(&self, c0: &Fp2, c1: &Fp2) -> Fp6 {
        let a_a = self.c0 * c0;
        let b_b = self.c1 * c1;

        let t1 = (self.c2 * c1).mul_by_nonresidue() + a_a;
        let t2 = (c0 + c1) * (self.c0 + self.c1) - a_a - b_b;
        let t3 = self.c2 * c0 + b_b;

        Fp6 {
            c0: t1,
            c1: t2,
            c2: t3,
        }
    }

    /// Multiply by the quadratic non-residue `v`
    pub fn mul_by_nonresidue(&self) -> Self {
        // (c0 + c1 v + c2 v^2) v = c2 (u + 1) + c0 v + c1 v^2
        Fp6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Raises this element to p
    #[inline(always)]
    pub fn frobenius_map(&self) -> Self {
        Fp6 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map() * FROBENIUS_COEFF_C1,
            c2: self.c2.frobenius_map() * FROBENIUS_COEFF_C2,
        }
    }

    /// Componentwise sum
    #[inline]
    pub fn add(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }

    /// Componentwise difference
    #[inline]
    pub fn sub(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }

    /// Componentwise negation
    #[inline]
    pub fn neg(&self) -> Fp6 {
        Fp6 {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }

    /// `self + self`
    #[inline]
    pub fn double(&self) -> Fp6 {
        Fp6 {
            c0: self.c0.double(),
            c1: self.c1.double(),
            c2: self.c2.double(),
        }
    }

    /// Karatsuba over three coefficients: six Fp2 products
    pub fn mul(&self, b: &Fp6) -> Fp6 {
        let aa = self.c0 * b.c0;
        let bb = self.c1 * b.c1;
        let cc = self.c2 * b.c2;

        let t1 = ((self.c1 + self.c2) * (b.c1 + b.c2) - bb - cc).mul_by_nonresidue() + aa;
        let t2 = (self.c0 + self.c1) * (b.c0 + b.c1) - aa - bb + cc.mul_by_nonresidue();
        let t3 = (self.c0 + self.c2) * (b.c0 + b.c2) - aa + bb - cc;

        Fp6 {
            c0: t1,
            c1: t2,
            c2: t3,
        }
    }

    /// Chung-Hasan SQR2
    pub fn square(&self) -> Fp6 {
        let s0 = self.c0.square();
        let s1 = (self.c0 * self.c1).double();
        let s2 = (self.c0 - self.c1 + self.c2).square();
        let s3 = (self.c1 * self.c2).double();
        let s4 = self.c2.square();

        Fp6 {
            c0: s3.mul_by_nonresidue() + s0,
            c1: s4.mul_by_nonresidue() + s1,
            c2: s1 + s2 + s3 - s0 - s4,
        }
    }

    /// Norm of this element down to Fp2, with the adjugate coefficients
    fn adjugate(&self) -> (Fp2, Fp6) {
        let c0 = self.c0.square() - (self.c1 * self.c2).mul_by_nonresidue();
        let c1 = self.c2.square().mul_by_nonresidue() - self.c0 * self.c1;
        let c2 = self.c1.square() - self.c0 * self.c2;

        let norm = ((self.c1 * c2) + (self.c2 * c1)).mul_by_nonresidue() + self.c0 * c0;
        (norm, Fp6 { c0, c1, c2 })
    }

    /// Multiplicative inverse; none for zero
    pub fn invert(&self) -> CtOption<Self> {
        let (norm, adj) = self.adjugate();
        norm.invert().map(|t| Fp6 {
            c0: adj.c0 * t,
            c1: adj.c1 * t,
            c2: adj.c2 * t,
        })
    }

    /// Multiplicative inverse with `inverse(0) = 0`
    pub fn inverse(&self) -> Self {
        let (norm, adj) = self.adjugate();
        let t = norm.inverse();
        Fp6 {
            c0: adj.c0 * t,
            c1: adj.c1 * t,
            c2: adj.c2 * t,
        }
    }

    /// Big-endian `c2 || c1 || c0`
    pub fn to_bytes(&self) -> [u8; FP6_BYTES] {
        let mut res = [0u8; FP6_BYTES];
        res[..FP2_BYTES].copy_from_slice(&self.c2.to_bytes());
        res[FP2_BYTES..2 * FP2_BYTES].copy_from_slice(&self.c1.to_bytes());
        res[2 * FP2_BYTES..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Decode `c2 || c1 || c0`, rejecting coefficients that are not below p
    pub fn from_slice(bytes: &[u8], context: &'static str) -> Result<Fp6> {
        validate::length(context, bytes.len(), FP6_BYTES)?;
        Ok(Fp6 {
            c2: Fp2::from_slice(&bytes[..FP2_BYTES], context)?,
            c1: Fp2::from_slice(&bytes[FP2_BYTES..2 * FP2_BYTES], context)?,
            c0: Fp2::from_slice(&bytes[2 * FP2_BYTES..], context)?,
        })
    }
}

impl<'a> Neg for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn neg(self) -> Fp6 {
        Fp6::neg(self)
    }
}

impl<'a, 'b> Sub<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn sub(self, rhs: &'b Fp6) -> Fp6 {
        Fp6::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn add(self, rhs: &'b Fp6) -> Fp6 {
        Fp6::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn mul(self, rhs: &'b Fp6) -> Fp6 {
        Fp6::mul(self, rhs)
    }
}

impl_neg_owned!(Fp6);
impl_binops_additive!(Fp6, Fp6);
impl_binops_multiplicative!(Fp6, Fp6);
