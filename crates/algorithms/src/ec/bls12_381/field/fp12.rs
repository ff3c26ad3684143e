//! Degree-12 extension `Fp12 = Fp6[w] / (w^2 - v)`
//!
//! Elements of the target group live in the cyclotomic subgroup of this
//! field, which is where the compressed squaring below is valid.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use bls12381_api::{validate, Result};
use bls12381_params::{FP6_BYTES, GT_BYTES};

use super::fp::Fp;
use super::fp2::Fp2;
use super::fp6::Fp6;

/// (u + 1)^((p - 1) / 6)
const FROBENIUS_COEFF: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x0708_9552_b319_d465,
        0xc669_5f92_b50a_8313,
        0x97e8_3ccc_d117_228f,
        0xa35b_aeca_b2dc_29ee,
        0x1ce3_93ea_5daa_ce4d,
        0x08f2_220f_b0fb_66eb,
    ]),
    c1: Fp::from_raw_unchecked([
        0xb2f6_6aad_4ce5_d646,
        0x5842_a06b_fc49_7cec,
        0xcf48_95d4_2599_d394,
        0xc11b_9cba_40a8_e8d0,
        0x2e38_13cb_e5a0_de89,
        0x110e_efda_8884_7faf,
    ]),
};

/// `c0 + c1 * w`
#[derive(Copy, Clone)]
pub struct Fp12 {
    /// Constant coefficient
    pub c0: Fp6,
    /// Coefficient of `w`
    pub c1: Fp6,
}

impl From<Fp> for Fp12 {
    fn from(f: Fp) -> Fp12 {
        Fp12::from(Fp6::from(f))
    }
}

impl From<Fp2> for Fp12 {
    fn from(f: Fp2) -> Fp12 {
        Fp12::from(Fp6::from(f))
    }
}

impl From<Fp6> for Fp12 {
    fn from(f: Fp6) -> Fp12 {
        Fp12 {
            c0: f,
            c1: Fp6::zero(),
        }
    }
}

impl PartialEq for Fp12 {
    fn eq(&self, other: &Fp12) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Fp12 {}

impl Default for Fp12 {
    fn default() -> Self {
        Fp12::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp12 {}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*w", self.c0, self.c1)
    }
}

impl ConditionallySelectable for Fp12 {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12 {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl ConstantTimeEq for Fp12 {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

// (a + b w)^2 in Fp4 = Fp2[w] / (w^2 - (u + 1)), used by the cyclotomic squaring
#[inline(always)]
fn fp4_square(a: Fp2, b: Fp2) -> (Fp2, Fp2) {
    let t0 = a.square();
    let t1 = b.square();
    let c0 = t1.mul_by_nonresidue() + t0;
    let c1 = (a + b).square() - t0 - t1;
    (c0, c1)
}

impl Fp12 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Self {
        Fp12 {
            c0: Fp6::zero(),
            c1: Fp6::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Self {
        Fp12 {
            c0: Fp6::one(),
            c1: Fp6::zero(),
        }
    }

    /// Uniformly random element
    pub fn random(mut rng: impl RngCore) -> Self {
        Fp12 {
            c0: Fp6::random(&mut rng),
            c1: Fp6::random(&mut rng),
        }
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Constant-time test against one
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Fp12::one())
    }

    /// Multiply by the sparse element `(c0 + c1 v) + c4 v w`, the shape of a
    /// Miller loop line evaluation
    pub fn mul_by_014(&self, c0: &Fp2, c1: &Fp2, c4: &Fp2) -> Fp12 {
        let aa = self.c0.mul_by_01(c0, c1);
        let bb = self.c1.mul_by_1(c4);
        let o = c1 + c4;
        let c1 = self.c1 + self.c0;
        let c1 = c1.mul_by_01(c0, &o);
        let c1 = c1 - aa - bb;
        let c0 = bb;
        let c0 = c0.mul_by_nonresidue();
        let c0 = c0 + aa;

        Fp12 { c0, c1 }
    }

    /// `c0 - c1 w`; the p^6-power Frobenius, and the inverse on the
    /// cyclotomic subgroup
    #[inline(always)]
    pub fn conjugate(&self) -> Self {
        Fp12 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Raises this element to p
    #[inline(always)]
    pub fn frobenius_map(&self) -> Self {
        let c0 = self.c0.frobenius_map();
        let c1 = self.c1.frobenius_map();

        // c1 = c1 * (u + 1)^((p - 1) / 6)
        let c1 = Fp6 {
            c0: c1.c0 * FROBENIUS_COEFF,
            c1: c1.c1 * FROBENIUS_COEFF,
            c2: c1.c2 * FROBENIUS_COEFF,
        };

        Fp12 { c0, c1 }
    }

    /// Componentwise sum
    #[inline]
    pub fn add(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    /// Componentwise difference
    #[inline]
    pub fn sub(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    /// Componentwise negation
    #[inline]
    pub fn neg(&self) -> Fp12 {
        Fp12 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    /// Karatsuba over Fp6: three Fp6 products
    pub fn mul(&self, other: &Fp12) -> Fp12 {
        let aa = self.c0 * other.c0;
        let bb = self.c1 * other.c1;
        let o = other.c0 + other.c1;
        let c1 = self.c1 + self.c0;
        let c1 = c1 * o;
        let c1 = c1 - aa;
        let c1 = c1 - bb;
        let c0 = bb.mul_by_nonresidue();
        let c0 = c0 + aa;

        Fp12 { c0, c1 }
    }

    /// Generic squaring, valid for every element
    pub fn square(&self) -> Self {
        let ab = self.c0 * self.c1;
        let c0c1 = self.c0 + self.c1;
        let c0 = self.c1.mul_by_nonresidue();
        let c0 = c0 + self.c0;
        let c0 = c0 * c0c1;
        let c0 = c0 - ab;
        let c1 = ab + ab;
        let c0 = c0 - ab.mul_by_nonresidue();

        Fp12 { c0, c1 }
    }

    /// Granger-Scott squaring, only valid on the cyclotomic subgroup
    ///
    /// Treats the element as three Fp4 values and squares each with two Fp2
    /// squarings, roughly half the cost of [`Fp12::square`].
    pub fn cyclotomic_square(&self) -> Self {
        let mut z0 = self.c0.c0;
        let mut z4 = self.c0.c1;
        let mut z3 = self.c0.c2;
        let mut z2 = self.c1.c0;
        let mut z1 = self.c1.c1;
        let mut z5 = self.c1.c2;

        let (t0, t1) = fp4_square(z0, z1);

        // z0 = 3 t0 - 2 z0, z1 = 3 t1 + 2 z1
        z0 = t0 - z0;
        z0 = z0.double() + t0;

        z1 = t1 + z1;
        z1 = z1.double() + t1;

        let (mut t0, t1) = fp4_square(z2, z3);
        let (t2, t3) = fp4_square(z4, z5);

        z4 = t0 - z4;
        z4 = z4.double() + t0;

        z5 = t1 + z5;
        z5 = z5.double() + t1;

        t0 = t3.mul_by_nonresidue();
        z2 = t0 + z2;
        z2 = z2.double() + t0;

        z3 = t2 - z3;
        z3 = z3.double() + t2;

        Fp12 {
            c0: Fp6 {
                c0: z0,
                c1: z4,
                c2: z3,
            },
            c1: Fp6 {
                c0: z2,
                c1: z1,
                c2: z5,
            },
        }
    }

    /// `self^x` for the unsigned BLS parameter, on the cyclotomic subgroup
    pub fn cyclotomic_exp(&self, exponent: u64) -> Self {
        let mut tmp = Fp12::one();
        let mut found_one = false;
        for i in (0..64).rev().map(|b| ((exponent >> b) & 1) == 1) {
            if found_one {
                tmp = tmp.cyclotomic_square();
            } else {
                found_one = i;
            }

            if i {
                tmp *= self;
            }
        }
        tmp
    }

    fn norm_inverse(&self, norm_inv: Fp6) -> Fp12 {
        Fp12 {
            c0: self.c0 * norm_inv,
            c1: self.c1 * -norm_inv,
        }
    }

    fn norm(&self) -> Fp6 {
        self.c0.square() - self.c1.square().mul_by_nonresidue()
    }

    /// Multiplicative inverse; none for zero
    pub fn invert(&self) -> CtOption<Self> {
        self.norm().invert().map(|t| self.norm_inverse(t))
    }

    /// Multiplicative inverse with `inverse(0) = 0`
    pub fn inverse(&self) -> Self {
        self.norm_inverse(self.norm().inverse())
    }

    /// Variable-time exponentiation by a little-endian limb exponent of any
    /// length, using generic squaring
    pub fn pow_vartime(&self, by: &[u64]) -> Self {
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

    /// Big-endian `c1 || c0`, 576 bytes
    pub fn to_bytes(&self) -> [u8; GT_BYTES] {
        let mut res = [0u8; GT_BYTES];
        res[..FP6_BYTES].copy_from_slice(&self.c1.to_bytes());
        res[FP6_BYTES..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Decode `c1 || c0`, rejecting coefficients that are not below p
    pub fn from_slice(bytes: &[u8], context: &'static str) -> Result<Fp12> {
        validate::length(context, bytes.len(), GT_BYTES)?;
        Ok(Fp12 {
            c1: Fp6::from_slice(&bytes[..FP6_BYTES], context)?,
            c0: Fp6::from_slice(&bytes[FP6_BYTES..], context)?,
        })
    }
}

impl<'a> Neg for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn neg(self) -> Fp12 {
        Fp12::neg(self)
    }
}

impl<'a, 'b> Sub<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn sub(self, rhs: &'b Fp12) -> Fp12 {
        Fp12::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn add(self, rhs: &'b Fp12) -> Fp12 {
        Fp12::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn mul(self, rhs: &'b Fp12) -> Fp12 {
        Fp12::mul(self, rhs)
    }
}

impl_neg_owned!(Fp12);
impl_binops_additive!(Fp12, Fp12);
impl_binops_multiplicative!(Fp12, Fp12);
