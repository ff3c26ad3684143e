//! G₁ group implementation for BLS12-381: y² = x³ + 4 over Fp

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use bls12381_api::{validate, Error, Result, Serialize};
use bls12381_params::{BLS_X, BLS_X_IS_NEGATIVE, FP_BYTES, G1_COMPRESSED_BYTES, G1_UNCOMPRESSED_BYTES};

use super::encoding::{Flags, COORDINATE_MASK};
use super::field::fp::Fp;

const COMPRESSED_CONTEXT: &str = "G1 compressed point";
const UNCOMPRESSED_CONTEXT: &str = "G1 uncompressed point";

/// G₁ affine point representation.
#[derive(Copy, Clone, Debug)]
pub struct G1Affine {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) infinity: Choice,
}

impl Default for G1Affine {
    fn default() -> G1Affine {
        G1Affine::identity()
    }
}

impl zeroize::DefaultIsZeroes for G1Affine {}

impl<'a> From<&'a G1Projective> for G1Affine {
    fn from(p: &'a G1Projective) -> G1Affine {
        let zinv = p.z.inverse();
        let x = p.x * zinv;
        let y = p.y * zinv;

        let tmp = G1Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        };

        G1Affine::conditional_select(&tmp, &G1Affine::identity(), zinv.is_zero())
    }
}

impl From<G1Projective> for G1Affine {
    fn from(p: G1Projective) -> G1Affine {
        G1Affine::from(&p)
    }
}

impl ConstantTimeEq for G1Affine {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl ConditionallySelectable for G1Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Affine {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl Eq for G1Affine {}
impl PartialEq for G1Affine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Affine {
    type Output = G1Affine;

    #[inline]
    fn neg(self) -> G1Affine {
        G1Affine {
            x: self.x,
            y: Fp::conditional_select(&-self.y, &Fp::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl_neg_owned!(G1Affine);

impl<'a, 'b> Add<&'b G1Projective> for &'a G1Affine {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        rhs.add_mixed(self)
    }
}

impl<'a, 'b> Add<&'b G1Affine> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Affine) -> G1Projective {
        self.add_mixed(rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Projective> for &'a G1Affine {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Affine> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Affine) -> G1Projective {
        self + &(-rhs)
    }
}

impl<T> Sum<T> for G1Projective
where
    T: Borrow<G1Projective>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

impl_binops_additive!(G1Projective, G1Affine);
impl_binops_additive_specify_output!(G1Affine, G1Projective, G1Projective);

/// Curve parameter b = 4
const B: Fp = Fp::from_raw_unchecked([
    0xaa27_0000_000c_fff3,
    0x53cc_0032_fc34_000a,
    0x478f_e97a_6b0a_807f,
    0xb1d3_7ebe_e6ba_24d7,
    0x8ec9_733b_bf78_ab2f,
    0x09d6_4551_3d83_de7e,
]);

/// Cube root of unity in Fp
const BETA: Fp = Fp::from_raw_unchecked([
    0x30f1_361b_798a_64e8,
    0xf3b8_ddab_7ece_5a2a,
    0x16a8_ca3a_c615_77f7,
    0xc26a_2ff8_74fd_029b,
    0x3636_b766_6070_1c6e,
    0x051b_a4ab_241b_6160,
]);

fn endomorphism(p: &G1Affine) -> G1Affine {
    let mut res = *p;
    res.x *= BETA;
    res
}

impl G1Affine {
    /// Point at infinity.
    pub fn identity() -> G1Affine {
        G1Affine {
            x: Fp::zero(),
            y: Fp::one(),
            infinity: Choice::from(1u8),
        }
    }

    /// Fixed generator.
    pub fn generator() -> G1Affine {
        G1Affine {
            x: Fp::from_raw_unchecked([
                0x5cb3_8790_fd53_0c16,
                0x7817_fc67_9976_fff5,
                0x154f_95c7_143b_a1c1,
                0xf0ae_6acd_f3d0_e747,
                0xedce_6ecc_21db_f440,
                0x1201_7741_9e0b_fb75,
            ]),
            y: Fp::from_raw_unchecked([
                0xbaac_93d5_0ce7_2271,
                0x8c22_631a_7918_fd8e,
                0xdd59_5f13_5707_25ce,
                0x51ac_5829_5040_5194,
                0x0e1c_8c3f_ad00_59c0,
                0x0bbc_3efc_5008_a26a,
            ]),
            infinity: Choice::from(0u8),
        }
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Curve membership check.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() - (self.x.square() * self.x)).ct_eq(&B) | self.infinity
    }

    /// Subgroup check: `-[x²]P == (βx, y)` holds exactly on the order-r points.
    pub fn is_torsion_free(&self) -> Choice {
        let minus_x_squared_times_p = G1Projective::from(self).mul_by_x().mul_by_x().neg();
        let endomorphism_p = endomorphism(self);
        minus_x_squared_times_p.ct_eq(&G1Projective::from(endomorphism_p))
    }

    /// Compress to 48 bytes.
    pub fn to_compressed(&self) -> [u8; 48] {
        let mut res = Fp::conditional_select(&self.x, &Fp::zero(), self.infinity).to_bytes();
        res[0] |= Flags::encode(true, self.infinity, self.y.lexicographically_largest());
        res
    }

    /// Serialize to 96 bytes uncompressed.
    pub fn to_uncompressed(&self) -> [u8; 96] {
        let mut res = [0; 96];
        res[0..48].copy_from_slice(
            &Fp::conditional_select(&self.x, &Fp::zero(), self.infinity).to_bytes()[..],
        );
        res[48..96].copy_from_slice(
            &Fp::conditional_select(&self.y, &Fp::zero(), self.infinity).to_bytes()[..],
        );
        res[0] |= Flags::encode(false, self.infinity, Choice::from(0u8));
        res
    }

    /// Decode a 96-byte uncompressed point, checking the curve and subgroup
    pub fn from_uncompressed(bytes: &[u8]) -> Result<Self> {
        let p = Self::from_uncompressed_unchecked(bytes)?;
        validate::on_curve(bool::from(p.is_on_curve()), UNCOMPRESSED_CONTEXT)?;
        validate::subgroup(bool::from(p.is_torsion_free()), UNCOMPRESSED_CONTEXT)?;
        Ok(p)
    }

    /// Decode a 96-byte uncompressed point, checking only the encoding itself
    pub fn from_uncompressed_unchecked(bytes: &[u8]) -> Result<Self> {
        validate::length(UNCOMPRESSED_CONTEXT, bytes.len(), G1_UNCOMPRESSED_BYTES)?;
        let flags = Flags::decode(bytes[0]);
        validate::canonical(!flags.compression, UNCOMPRESSED_CONTEXT, "compression flag set")?;
        validate::canonical(!flags.sort, UNCOMPRESSED_CONTEXT, "sign flag set")?;

        let mut tmp = [0u8; FP_BYTES];
        tmp.copy_from_slice(&bytes[..FP_BYTES]);
        tmp[0] &= COORDINATE_MASK;
        let x = Fp::from_slice(&tmp, UNCOMPRESSED_CONTEXT)?;
        let y = Fp::from_slice(&bytes[FP_BYTES..], UNCOMPRESSED_CONTEXT)?;

        if flags.infinity {
            validate::canonical(
                bool::from(x.is_zero() & y.is_zero()),
                UNCOMPRESSED_CONTEXT,
                "identity with nonzero coordinates",
            )?;
            return Ok(G1Affine::identity());
        }

        Ok(G1Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        })
    }

    /// Decode a 48-byte compressed point, checking the subgroup
    pub fn from_compressed(bytes: &[u8]) -> Result<Self> {
        let p = Self::from_compressed_unchecked(bytes)?;
        validate::subgroup(bool::from(p.is_torsion_free()), COMPRESSED_CONTEXT)?;
        Ok(p)
    }

    /// Decode a 48-byte compressed point without the subgroup check
    ///
    /// The result is always on the curve: y is recovered from x.
    pub fn from_compressed_unchecked(bytes: &[u8]) -> Result<Self> {
        validate::length(COMPRESSED_CONTEXT, bytes.len(), G1_COMPRESSED_BYTES)?;
        let flags = Flags::decode(bytes[0]);
        validate::canonical(flags.compression, COMPRESSED_CONTEXT, "compression flag not set")?;

        let mut tmp = [0u8; FP_BYTES];
        tmp.copy_from_slice(bytes);
        tmp[0] &= COORDINATE_MASK;
        let x = Fp::from_slice(&tmp, COMPRESSED_CONTEXT)?;

        if flags.infinity {
            validate::canonical(
                !flags.sort && bool::from(x.is_zero()),
                COMPRESSED_CONTEXT,
                "identity with sign flag or nonzero x",
            )?;
            return Ok(G1Affine::identity());
        }

        let y = ((x.square() * x) + B)
            .sqrt()
            .into_option()
            .ok_or(Error::NotOnCurve {
                context: COMPRESSED_CONTEXT,
            })?;
        let y = Fp::conditional_select(
            &y,
            &-y,
            y.lexicographically_largest() ^ Choice::from(flags.sort as u8),
        );

        Ok(G1Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        })
    }
}

impl Serialize for G1Affine {
    const ENCODED_LEN: usize = G1_COMPRESSED_BYTES;

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        G1Affine::from_compressed(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_compressed().to_vec()
    }
}

/// G₁ projective point representation.
#[derive(Copy, Clone, Debug)]
pub struct G1Projective {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) z: Fp,
}

impl Default for G1Projective {
    fn default() -> G1Projective {
        G1Projective::identity()
    }
}

impl zeroize::DefaultIsZeroes for G1Projective {}

impl<'a> From<&'a G1Affine> for G1Projective {
    fn from(p: &'a G1Affine) -> G1Projective {
        G1Projective {
            x: p.x,
            y: p.y,
            z: Fp::conditional_select(&Fp::one(), &Fp::zero(), p.infinity),
        }
    }
}

impl From<G1Affine> for G1Projective {
    fn from(p: G1Affine) -> G1Projective {
        G1Projective::from(&p)
    }
}

impl ConstantTimeEq for G1Projective {
    fn ct_eq(&self, other: &Self) -> Choice {
        let x1 = self.x * other.z;
        let x2 = other.x * self.z;
        let y1 = self.y * other.z;
        let y2 = other.y * self.z;
        let self_is_zero = self.z.is_zero();
        let other_is_zero = other.z.is_zero();

        (self_is_zero & other_is_zero)
            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }
}

impl ConditionallySelectable for G1Projective {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Projective {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl Eq for G1Projective {}
impl PartialEq for G1Projective {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn neg(self) -> G1Projective {
        G1Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl_neg_owned!(G1Projective);

impl<'a, 'b> Add<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        G1Projective::add(self, rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Mul<&'b BigUint> for &'a G1Projective {
    type Output = G1Projective;

    fn mul(self, other: &'b BigUint) -> Self::Output {
        self.multiply(&other.to_bytes_le())
    }
}

impl<'a, 'b> Mul<&'b BigUint> for &'a G1Affine {
    type Output = G1Projective;

    fn mul(self, other: &'b BigUint) -> Self::Output {
        G1Projective::from(self).multiply(&other.to_bytes_le())
    }
}

impl_binops_additive!(G1Projective, G1Projective);
impl_binops_multiplicative!(G1Projective, BigUint);
impl_binops_multiplicative_mixed!(G1Affine, BigUint, G1Projective);

#[inline(always)]
fn mul_by_3b(a: Fp) -> Fp {
    let a = a + a; // 2
    let a = a + a; // 4
    a + a + a // 12
}

impl G1Projective {
    /// Point at infinity.
    pub fn identity() -> G1Projective {
        G1Projective {
            x: Fp::zero(),
            y: Fp::one(),
            z: Fp::zero(),
        }
    }

    /// Fixed generator.
    pub fn generator() -> G1Projective {
        G1Projective::from(G1Affine::generator())
    }

    /// Uniformly random point of the prime-order subgroup, never the identity
    pub fn random(mut rng: impl RngCore) -> Self {
        loop {
            let x = Fp::random(&mut rng);
            let flip_sign = rng.next_u32() % 2 != 0;

            let p = ((x.square() * x) + B).sqrt().map(|y| G1Affine {
                x,
                y: if flip_sign { -y } else { y },
                infinity: 0.into(),
            });

            if let Some(p) = p.into_option() {
                let p_cleared = G1Projective::from(p).clear_cofactor();
                if !bool::from(p_cleared.is_identity()) {
                    return p_cleared;
                }
            }
        }
    }

    /// Point doubling.
    pub fn double(&self) -> G1Projective {
        // Algorithm 9 from https://eprint.iacr.org/2015/1060.pdf
        let t0 = self.y.square();
        let z3 = t0 + t0;
        let z3 = z3 + z3;
        let z3 = z3 + z3;
        let t1 = self.y * self.z;
        let t2 = self.z.square();
        let t2 = mul_by_3b(t2);
        let x3 = t2 * z3;
        let y3 = t0 + t2;
        let z3 = t1 * z3;
        let t1 = t2 + t2;
        let t2 = t1 + t2;
        let t0 = t0 - t2;
        let y3 = t0 * y3;
        let y3 = x3 + y3;
        let t1 = self.x * self.y;
        let x3 = t0 * t1;
        let x3 = x3 + x3;

        let tmp = G1Projective { x: x3, y: y3, z: z3 };
        G1Projective::conditional_select(&tmp, &G1Projective::identity(), self.is_identity())
    }

    /// Point addition.
    pub fn add(&self, rhs: &G1Projective) -> G1Projective {
        // Algorithm 7 from https://eprint.iacr.org/2015/1060.pdf
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t2 = self.z * rhs.z;
        let t3 = self.x + self.y;
        let t4 = rhs.x + rhs.y;
        let t3 = t3 * t4;
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = self.y + self.z;
        let x3 = rhs.y + rhs.z;
        let t4 = t4 * x3;
        let x3 = t1 + t2;
        let t4 = t4 - x3;
        let x3 = self.x + self.z;
        let y3 = rhs.x + rhs.z;
        let x3 = x3 * y3;
        let y3 = t0 + t2;
        let y3 = x3 - y3;
        let x3 = t0 + t0;
        let t0 = x3 + t0;
        let t2 = mul_by_3b(t2);
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = mul_by_3b(y3);
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        G1Projective { x: x3, y: y3, z: z3 }
    }

    /// Mixed addition with affine point.
    pub fn add_mixed(&self, rhs: &G1Affine) -> G1Projective {
        // Algorithm 8 from https://eprint.iacr.org/2015/1060.pdf
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t3 = rhs.x + rhs.y;
        let t4 = self.x + self.y;
        let t3 = t3 * t4;
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = rhs.y * self.z;
        let t4 = t4 + self.y;
        let y3 = rhs.x * self.z;
        let y3 = y3 + self.x;
        let x3 = t0 + t0;
        let t0 = x3 + t0;
        let t2 = mul_by_3b(self.z);
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = mul_by_3b(y3);
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        let tmp = G1Projective { x: x3, y: y3, z: z3 };
        G1Projective::conditional_select(&tmp, self, rhs.is_identity())
    }

    /// Double-and-add over little-endian scalar bytes, one conditional
    /// select per bit
    fn multiply(&self, by: &[u8]) -> G1Projective {
        let mut acc = G1Projective::identity();
        for &byte in by.iter().rev() {
            for i in (0..8).rev() {
                acc = acc.double();
                let bit = Choice::from((byte >> i) & 1u8);
                acc = G1Projective::conditional_select(&acc, &(acc + self), bit);
            }
        }
        acc
    }

    /// `[x]P` for the (negative) BLS parameter x
    pub(crate) fn mul_by_x(&self) -> G1Projective {
        let mut xself = G1Projective::identity();
        let mut x = BLS_X >> 1;
        let mut tmp = *self;
        while x != 0 {
            tmp = tmp.double();
            if x % 2 == 1 {
                xself += tmp;
            }
            x >>= 1;
        }
        if BLS_X_IS_NEGATIVE {
            xself = -xself;
        }
        xself
    }

    /// Clear cofactor by multiplying with `1 - x`.
    pub fn clear_cofactor(&self) -> G1Projective {
        self - &self.mul_by_x()
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Curve membership check.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() * self.z)
            .ct_eq(&(self.x.square() * self.x + self.z.square() * self.z * B))
            | self.z.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta_is_cube_root_of_unity() {
        assert_ne!(BETA, Fp::one());
        assert_eq!(BETA.square() * BETA, Fp::one());
    }

    #[test]
    fn test_mul_by_x_matches_scalar_mul() {
        let g = G1Projective::generator();
        let x = BigUint::from(BLS_X);
        // x is negative, so [x]G = -[|x|]G
        assert_eq!(g.mul_by_x(), -(g * &x));
    }

    #[test]
    fn test_clear_cofactor_fixes_subgroup_points() {
        let g = G1Projective::generator();
        let h_eff = BigUint::from(BLS_X) + 1u32;
        assert_eq!(g.clear_cofactor(), g * &h_eff);
    }
}
