//! Target group GT: the order-r subgroup of `Fp12*`
//!
//! The group law is field multiplication. Field addition is still reachable
//! through [`Gt::add_representation`]/[`Gt::sub_representation`], but it
//! yields a bare [`Fp12`] since sums of group elements are not group
//! elements.

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::Product;
use core::ops::{Mul, Neg};

use num_bigint::BigUint;
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use bls12381_api::{validate, Result, Serialize};
use bls12381_internal::endian::limbs_to_be_bytes;
use bls12381_params::{GROUP_ORDER, GT_BYTES, SCALAR_BYTES};

use super::field::fp12::Fp12;
use super::g1::G1Affine;
use super::g2::G2Affine;
use super::pairings::{pairing, MillerLoopResult};

const CONTEXT: &str = "GT element";

/// Element of the target group, written multiplicatively
#[derive(Copy, Clone, Debug)]
pub struct Gt(pub(crate) Fp12);

impl Default for Gt {
    fn default() -> Self {
        Self::identity()
    }
}

impl zeroize::DefaultIsZeroes for Gt {}

impl fmt::Display for Gt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Gt(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl Eq for Gt {}
impl PartialEq for Gt {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a Gt {
    type Output = Gt;

    /// Group inverse
    #[inline]
    fn neg(self) -> Gt {
        self.inverse()
    }
}

impl_neg_owned!(Gt);

impl<'a, 'b> Mul<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn mul(self, rhs: &'b Gt) -> Gt {
        Gt::mul(self, rhs)
    }
}

impl_binops_multiplicative!(Gt, Gt);

impl<T> Product<T> for Gt
where
    T: Borrow<Gt>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc * item.borrow())
    }
}

impl Gt {
    /// The group identity, `1` in Fp12
    pub fn identity() -> Gt {
        Gt(Fp12::one())
    }

    /// Alias of [`Gt::identity`]
    pub fn one() -> Gt {
        Gt::identity()
    }

    /// `e(G1, G2)` for the fixed generators
    pub fn generator() -> Gt {
        pairing(&G1Affine::generator(), &G2Affine::generator())
    }

    /// Uniformly random element, via the final exponentiation of a random
    /// Fp12 element
    pub fn random(rng: impl RngCore) -> Gt {
        MillerLoopResult(Fp12::random(rng)).final_exponentiation()
    }

    /// Constant-time identity test
    pub fn is_identity(&self) -> Choice {
        self.0.is_one()
    }

    /// Whether this is the identity
    pub fn is_one(&self) -> bool {
        bool::from(self.is_identity())
    }

    /// Group law
    #[inline]
    pub fn mul(&self, rhs: &Gt) -> Gt {
        Gt(self.0 * rhs.0)
    }

    /// Cyclotomic squaring
    #[inline]
    pub fn square(&self) -> Gt {
        Gt(self.0.cyclotomic_square())
    }

    /// Group inverse, computed by tower inversion
    pub fn inverse(&self) -> Gt {
        Gt(self.0.inverse())
    }

    /// `self^e`, scanning the exponent's bits from the most significant one
    ///
    /// Runs in time that depends on e. Use [`Gt::exp_ct`] for secret exponents.
    pub fn exp(&self, e: &BigUint) -> Gt {
        let mut res = Fp12::one();
        for i in (0..e.bits()).rev() {
            res = res.cyclotomic_square();
            if e.bit(i) {
                res *= self.0;
            }
        }
        Gt(res)
    }

    /// `self^e` for a 32-byte big-endian exponent with a fixed sequence of
    /// 256 squarings and 256 conditional multiplications
    pub fn exp_ct(&self, e: &[u8; SCALAR_BYTES]) -> Gt {
        let mut res = Fp12::one();
        for byte in e.iter() {
            for i in (0..8).rev() {
                res = res.cyclotomic_square();
                let bit = Choice::from((byte >> i) & 1u8);
                res = Fp12::conditional_select(&res, &(res * self.0), bit);
            }
        }
        Gt(res)
    }

    /// Order of the group
    pub fn q() -> BigUint {
        let mut bytes = [0u8; SCALAR_BYTES];
        limbs_to_be_bytes(&GROUP_ORDER, &mut bytes);
        BigUint::from_bytes_be(&bytes)
    }

    /// True when `e^q == 1`, which also rules out zero
    pub fn is_valid(e: &Fp12) -> bool {
        bool::from(e.pow_vartime(&GROUP_ORDER).is_one())
    }

    /// Field sum of the two representations; not a group operation
    pub fn add_representation(&self, rhs: &Gt) -> Fp12 {
        self.0 + rhs.0
    }

    /// Field difference of the two representations; not a group operation
    pub fn sub_representation(&self, rhs: &Gt) -> Fp12 {
        self.0 - rhs.0
    }

    /// Underlying field element
    pub fn as_fp12(&self) -> &Fp12 {
        &self.0
    }

    /// Wrap a field element without checking membership
    ///
    /// Callers must know `e` is in GT; [`Gt::is_valid`] checks it.
    pub fn from_fp12_unchecked(e: Fp12) -> Gt {
        Gt(e)
    }

    /// Decode 576 bytes, checking every coefficient and group membership
    pub fn from_bytes(bytes: &[u8]) -> Result<Gt> {
        let e = Fp12::from_slice(bytes, CONTEXT)?;
        validate::element(Gt::is_valid(&e), CONTEXT)?;
        Ok(Gt(e))
    }

    /// 576-byte big-endian encoding, highest tower coefficient first
    pub fn to_bytes(&self) -> [u8; GT_BYTES] {
        self.0.to_bytes()
    }
}

impl Serialize for Gt {
    const ENCODED_LEN: usize = GT_BYTES;

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Gt::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Gt::to_bytes(self).to_vec()
    }
}
