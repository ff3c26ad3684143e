//! Quadratic extension `Fp2 = Fp[u] / (u^2 + 1)`

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use bls12381_api::{validate, Result};
use bls12381_params::{FP2_BYTES, FP_BYTES};

use super::fp::Fp;

/// (p-3)/4
const P_MINUS_3_DIV_4: [u64; 6] = [
    0xee7f_bfff_ffff_eaaa,
    0x07aa_ffff_ac54_ffff,
    0xd9cc_34a8_3dac_3d89,
    0xd91d_d2e1_3ce1_44af,
    0x92c6_e9ed_90d2_eb35,
    0x0680_447a_8e5f_f9a6,
];

/// (p-1)/2
const P_MINUS_1_DIV_2: [u64; 6] = [
    0xdcff_7fff_ffff_d555,
    0x0f55_ffff_58a9_ffff,
    0xb398_6950_7b58_7b12,
    0xb23b_a5c2_79c2_895f,
    0x258d_d3db_21a5_d66b,
    0x0d00_88f5_1cbf_f34d,
];

/// `c0 + c1 * u`
#[derive(Copy, Clone)]
pub struct Fp2 {
    /// Real part
    pub c0: Fp,
    /// Coefficient of `u`
    pub c1: Fp,
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl Default for Fp2 {
    fn default() -> Self {
        Fp2::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp2 {}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn neg(self) -> Fp2 {
        Fp2::neg(self)
    }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        Fp2::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        Fp2::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        Fp2::mul(self, rhs)
    }
}

impl_neg_owned!(Fp2);
impl_binops_additive!(Fp2, Fp2);
impl_binops_multiplicative!(Fp2, Fp2);

impl Fp2 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Uniformly random element
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    /// `c0 - c1 * u`, which is also the p-power Frobenius
    #[inline]
    pub fn conjugate(&self) -> Self {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// `self^p`
    #[inline]
    pub fn frobenius_map(&self) -> Self {
        self.conjugate()
    }

    /// Multiply by the sextic non-residue `u + 1`
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        // (c0 + c1 u)(u + 1) = (c0 - c1) + (c0 + c1) u
        Fp2 {
            c0: self.c0 - self.c1,
            c1: self.c0 + self.c1,
        }
    }

    /// Returns true when c1 is lexicographically largest, or c1 is zero and
    /// c0 is
    #[inline]
    pub fn lexicographically_largest(&self) -> Choice {
        self.c1.lexicographically_largest()
            | (self.c1.is_zero() & self.c0.lexicographically_largest())
    }

    /// Componentwise sum, usable in constants
    #[inline]
    pub const fn add(&self, rhs: &Fp2) -> Fp2 {
        // Path calls: method syntax on an owned `Fp` resolves to the non-const `Add` impl.
        Fp2 {
            c0: Fp::add(&self.c0, &rhs.c0),
            c1: Fp::add(&self.c1, &rhs.c1),
        }
    }

    /// Componentwise difference
    #[inline]
    pub const fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: Fp::sub(&self.c0, &rhs.c0),
            c1: Fp::sub(&self.c1, &rhs.c1),
        }
    }

    /// Componentwise negation
    #[inline]
    pub const fn neg(&self) -> Fp2 {
        Fp2 {
            c0: Fp::neg(&self.c0),
            c1: Fp::neg(&self.c1),
        }
    }

    /// `self + self`
    #[inline]
    pub const fn double(&self) -> Fp2 {
        Fp2 {
            c0: Fp::double(&self.c0),
            c1: Fp::double(&self.c1),
        }
    }

    /// Karatsuba: three base-field products
    #[inline]
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let t2 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);

        Fp2 {
            c0: t0 - t1,
            c1: t2 - t0 - t1,
        }
    }

    /// Complex squaring: `(a + b)(a - b) + 2ab u`
    #[inline]
    pub fn square(&self) -> Fp2 {
        let a = self.c0 + self.c1;
        let b = self.c0 - self.c1;
        let c = self.c0.double();

        Fp2 {
            c0: a * b,
            c1: c * self.c1,
        }
    }

    /// Multiply both coefficients by a base-field element
    #[inline]
    pub fn mul_by_fp(&self, rhs: &Fp) -> Fp2 {
        Fp2 {
            c0: self.c0 * rhs,
            c1: self.c1 * rhs,
        }
    }

    /// Square root, if one exists
    ///
    /// Algorithm 9 of <https://eprint.iacr.org/2012/685.pdf>, specialised to
    /// p = 3 mod 4.
    pub fn sqrt(&self) -> CtOption<Self> {
        CtOption::new(Fp2::zero(), self.is_zero()).or_else(|| {
            // a1 = self^((p - 3) / 4)
            let a1 = self.pow_vartime(&P_MINUS_3_DIV_4);

            // alpha = a1^2 * self = self^((p - 3) / 2 + 1) = self^((p - 1) / 2)
            let alpha = a1.square() * self;

            // x0 = self^((p + 1) / 4)
            let x0 = a1 * self;

            // alpha == -1 means the root is x0 * u
            CtOption::new(
                Fp2 {
                    c0: -x0.c1,
                    c1: x0.c0,
                },
                alpha.ct_eq(&-Fp2::one()),
            )
            .or_else(|| {
                CtOption::new(
                    (alpha + Fp2::one()).pow_vartime(&P_MINUS_1_DIV_2) * x0,
                    Choice::from(1),
                )
            })
            .and_then(|sqrt| CtOption::new(sqrt, sqrt.square().ct_eq(self)))
        })
    }

    /// Multiplicative inverse; none for zero
    ///
    /// Uses `1/(a + bu) = (a - bu)/(a^2 + b^2)`.
    pub fn invert(&self) -> CtOption<Self> {
        (self.c0.square() + self.c1.square()).invert().map(|t| Fp2 {
            c0: self.c0 * t,
            c1: self.c1 * -t,
        })
    }

    /// Multiplicative inverse with `inverse(0) = 0`
    pub fn inverse(&self) -> Self {
        let t = (self.c0.square() + self.c1.square()).inverse();
        Fp2 {
            c0: self.c0 * t,
            c1: self.c1 * -t,
        }
    }

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

    /// Big-endian `c1 || c0`
    pub fn to_bytes(&self) -> [u8; FP2_BYTES] {
        let mut res = [0u8; FP2_BYTES];
        res[..FP_BYTES].copy_from_slice(&self.c1.to_bytes());
        res[FP_BYTES..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Decode `c1 || c0`, rejecting coefficients that are not below p
    pub fn from_slice(bytes: &[u8], context: &'static str) -> Result<Fp2> {
        validate::length(context, bytes.len(), FP2_BYTES)?;
        Ok(Fp2 {
            c1: Fp::from_slice(&bytes[..FP_BYTES], context)?,
            c0: Fp::from_slice(&bytes[FP_BYTES..], context)?,
        })
    }
}
