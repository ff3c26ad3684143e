//! Optimal ate pairing on BLS12-381
//!
//! The Miller loop runs over the bits of |x| with line functions evaluated in
//! sparse form (`Fp12::mul_by_014`); since x is negative the loop result is
//! conjugated. The final exponentiation uses the hard-part chain
//! `(x - 1)^2 (x + p) (x^2 + p^2 - 1) + 3`, so every output is the cube of the
//! textbook reduced pairing. Cubing is a bijection on GT, so bilinearity and
//! non-degeneracy carry over unchanged.

use alloc::vec::Vec;
use core::ops::Mul;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use bls12381_params::{BLS_X, BLS_X_IS_NEGATIVE};

use super::field::fp12::Fp12;
use super::field::fp2::Fp2;
use super::g1::G1Affine;
use super::g2::{G2Affine, G2Projective};
use super::gt::Gt;

/// Output of a Miller loop, not yet mapped into GT
#[derive(Copy, Clone, Debug)]
pub struct MillerLoopResult(pub(crate) Fp12);

impl Default for MillerLoopResult {
    fn default() -> Self {
        MillerLoopResult(Fp12::one())
    }
}

impl zeroize::DefaultIsZeroes for MillerLoopResult {}

impl ConditionallySelectable for MillerLoopResult {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        MillerLoopResult(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl<'a, 'b> Mul<&'b MillerLoopResult> for &'a MillerLoopResult {
    type Output = MillerLoopResult;

    #[inline]
    fn mul(self, rhs: &'b MillerLoopResult) -> MillerLoopResult {
        MillerLoopResult(self.0 * rhs.0)
    }
}

impl_binops_multiplicative!(MillerLoopResult, MillerLoopResult);

impl MillerLoopResult {
    /// Maps the loop output into GT
    pub fn final_exponentiation(&self) -> Gt {
        // f^(-x) computed as the conjugate of f^|x|
        fn exp_by_x(f: Fp12) -> Fp12 {
            let tmp = f.cyclotomic_exp(BLS_X);
            if BLS_X_IS_NEGATIVE {
                tmp.conjugate()
            } else {
                tmp
            }
        }

        let f = self.0;

        // Easy part: f^((p^6 - 1)(p^2 + 1)); the result is cyclotomic
        let t = f.conjugate() * f.inverse();
        let m = t.frobenius_map().frobenius_map() * t;

        // Hard part
        let a = exp_by_x(m) * m.conjugate();
        let a = exp_by_x(a) * a.conjugate();
        let b = exp_by_x(a) * a.frobenius_map();
        let c = exp_by_x(exp_by_x(b)) * b.frobenius_map().frobenius_map() * b.conjugate();

        Gt(c * m.cyclotomic_square() * m)
    }
}

/// Line coefficients of one Miller loop step, in `mul_by_014` order
type LineCoeffs = (Fp2, Fp2, Fp2);

/// Walks the bits of |x| once, calling the driver for every doubling and
/// addition step
trait MillerLoopDriver {
    type Output;

    fn doubling_step(&mut self, f: Self::Output) -> Self::Output;
    fn addition_step(&mut self, f: Self::Output) -> Self::Output;
    fn square_output(f: Self::Output) -> Self::Output;
    fn conjugate(f: Self::Output) -> Self::Output;
    fn one() -> Self::Output;
}

fn miller_loop<D: MillerLoopDriver>(driver: &mut D) -> D::Output {
    let mut f = D::one();

    let mut found_one = false;
    for i in (0..64).rev().map(|b| (((BLS_X >> 1) >> b) & 1) == 1) {
        if !found_one {
            found_one = i;
            continue;
        }

        f = driver.doubling_step(f);

        if i {
            f = driver.addition_step(f);
        }

        f = D::square_output(f);
    }

    f = driver.doubling_step(f);

    if BLS_X_IS_NEGATIVE {
        f = D::conjugate(f);
    }

    f
}

/// Evaluates a line at P and multiplies it in
fn ell(f: Fp12, coeffs: &LineCoeffs, p: &G1Affine) -> Fp12 {
    let mut c0 = coeffs.0;
    let mut c1 = coeffs.1;

    c0.c0 *= p.y;
    c0.c1 *= p.y;

    c1.c0 *= p.x;
    c1.c1 *= p.x;

    f.mul_by_014(&coeffs.2, &c1, &c0)
}

/// Tangent step in Jacobian coordinates on the twist
///
/// Adaptation of Algorithm 26, <https://eprint.iacr.org/2010/354.pdf>
fn doubling_step(r: &mut G2Projective) -> LineCoeffs {
    let tmp0 = r.x.square();
    let tmp1 = r.y.square();
    let tmp2 = tmp1.square();
    let tmp3 = (tmp1 + r.x).square() - tmp0 - tmp2;
    let tmp3 = tmp3 + tmp3;
    let tmp4 = tmp0 + tmp0 + tmp0;
    let tmp6 = r.x + tmp4;
    let tmp5 = tmp4.square();
    let zsquared = r.z.square();
    r.x = tmp5 - tmp3 - tmp3;
    r.z = (r.z + r.y).square() - tmp1 - zsquared;
    r.y = (tmp3 - r.x) * tmp4;
    let tmp2 = tmp2 + tmp2;
    let tmp2 = tmp2 + tmp2;
    let tmp2 = tmp2 + tmp2;
    r.y -= tmp2;
    let tmp3 = tmp4 * zsquared;
    let tmp3 = tmp3 + tmp3;
    let tmp3 = -tmp3;
    let tmp6 = tmp6.square() - tmp0 - tmp5;
    let tmp1 = tmp1 + tmp1;
    let tmp1 = tmp1 + tmp1;
    let tmp6 = tmp6 - tmp1;
    let tmp0 = r.z * zsquared;
    let tmp0 = tmp0 + tmp0;

    (tmp0, tmp3, tmp6)
}

/// Chord step through R and Q, Q affine
///
/// Adaptation of Algorithm 27, <https://eprint.iacr.org/2010/354.pdf>
fn addition_step(r: &mut G2Projective, q: &G2Affine) -> LineCoeffs {
    let zsquared = r.z.square();
    let ysquared = q.y.square();
    let t0 = zsquared * q.x;
    let t1 = ((q.y + r.z).square() - ysquared - zsquared) * zsquared;
    let t2 = t0 - r.x;
    let t3 = t2.square();
    let t4 = t3 + t3;
    let t4 = t4 + t4;
    let t5 = t4 * t2;
    let t6 = t1 - r.y - r.y;
    let t9 = t6 * q.x;
    let t7 = t4 * r.x;
    r.x = t6.square() - t5 - t7 - t7;
    r.z = (r.z + t2).square() - zsquared - t3;
    let t10 = q.y + r.z;
    let t8 = (t7 - r.x) * t6;
    let t0 = r.y * t5;
    let t0 = t0 + t0;
    r.y = t8 - t0;
    let t10 = t10.square() - ysquared;
    let ztsquared = r.z.square();
    let t10 = t10 - ztsquared;
    let t9 = t9 + t9 - t10;
    let t10 = r.z + r.z;
    let t6 = -t6;
    let t1 = t6 + t6;

    (t10, t1, t9)
}

/// A G2 point with its Miller loop line coefficients precomputed
///
/// Worth building when the same Q takes part in several pairings.
#[derive(Clone, Debug)]
pub struct G2Prepared {
    infinity: Choice,
    coeffs: Vec<LineCoeffs>,
}

impl From<G2Affine> for G2Prepared {
    fn from(q: G2Affine) -> G2Prepared {
        struct Adder {
            cur: G2Projective,
            base: G2Affine,
            coeffs: Vec<LineCoeffs>,
        }

        impl MillerLoopDriver for Adder {
            type Output = ();

            fn doubling_step(&mut self, _: Self::Output) -> Self::Output {
                let coeffs = doubling_step(&mut self.cur);
                self.coeffs.push(coeffs);
            }
            fn addition_step(&mut self, _: Self::Output) -> Self::Output {
                let coeffs = addition_step(&mut self.cur, &self.base);
                self.coeffs.push(coeffs);
            }
            fn square_output(_: Self::Output) -> Self::Output {}
            fn conjugate(_: Self::Output) -> Self::Output {}
            fn one() -> Self::Output {}
        }

        let is_identity = q.is_identity();
        let q = G2Affine::conditional_select(&q, &G2Affine::generator(), is_identity);

        let mut adder = Adder {
            cur: G2Projective::from(q),
            base: q,
            coeffs: Vec::with_capacity(68),
        };

        miller_loop(&mut adder);

        debug_assert_eq!(adder.coeffs.len(), 68);

        G2Prepared {
            infinity: is_identity,
            coeffs: adder.coeffs,
        }
    }
}

impl From<&G2Affine> for G2Prepared {
    fn from(q: &G2Affine) -> G2Prepared {
        G2Prepared::from(*q)
    }
}

/// Product of Miller loops over several (P, Q) pairs, sharing the squarings
///
/// Pairs with an identity on either side contribute nothing.
pub fn multi_miller_loop(terms: &[(&G1Affine, &G2Prepared)]) -> MillerLoopResult {
    struct Adder<'a, 'b, 'c> {
        terms: &'c [(&'a G1Affine, &'b G2Prepared)],
        index: usize,
    }

    impl<'a, 'b, 'c> Adder<'a, 'b, 'c> {
        fn step(&mut self, mut f: Fp12) -> Fp12 {
            let index = self.index;
            for term in self.terms {
                let either_identity = term.0.is_identity() | term.1.infinity;

                let new_f = ell(f, &term.1.coeffs[index], term.0);
                f = Fp12::conditional_select(&new_f, &f, either_identity);
            }
            self.index += 1;

            f
        }
    }

    impl<'a, 'b, 'c> MillerLoopDriver for Adder<'a, 'b, 'c> {
        type Output = Fp12;

        fn doubling_step(&mut self, f: Self::Output) -> Self::Output {
            self.step(f)
        }
        fn addition_step(&mut self, f: Self::Output) -> Self::Output {
            self.step(f)
        }
        fn square_output(f: Self::Output) -> Self::Output {
            f.square()
        }
        fn conjugate(f: Self::Output) -> Self::Output {
            f.conjugate()
        }
        fn one() -> Self::Output {
            Fp12::one()
        }
    }

    let mut adder = Adder { terms, index: 0 };

    let tmp = miller_loop(&mut adder);

    MillerLoopResult(tmp)
}

/// Computes the pairing e(P, Q); the identity on either side gives the
/// identity of GT
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
    struct Adder {
        cur: G2Projective,
        base: G2Affine,
        p: G1Affine,
    }

    impl MillerLoopDriver for Adder {
        type Output = Fp12;

        fn doubling_step(&mut self, f: Self::Output) -> Self::Output {
            let coeffs = doubling_step(&mut self.cur);
            ell(f, &coeffs, &self.p)
        }
        fn addition_step(&mut self, f: Self::Output) -> Self::Output {
            let coeffs = addition_step(&mut self.cur, &self.base);
            ell(f, &coeffs, &self.p)
        }
        fn square_output(f: Self::Output) -> Self::Output {
            f.square()
        }
        fn conjugate(f: Self::Output) -> Self::Output {
            f.conjugate()
        }
        fn one() -> Self::Output {
            Fp12::one()
        }
    }

    let either_identity = p.is_identity() | q.is_identity();
    let p = G1Affine::conditional_select(p, &G1Affine::generator(), either_identity);
    let q = G2Affine::conditional_select(q, &G2Affine::generator(), either_identity);

    let mut adder = Adder {
        cur: G2Projective::from(q),
        base: q,
        p,
    };

    let tmp = miller_loop(&mut adder);
    let tmp = MillerLoopResult(Fp12::conditional_select(
        &tmp,
        &Fp12::one(),
        either_identity,
    ));
    tmp.final_exponentiation()
}

/// True when the product of e(P_i, Q_i) over all pairs is the identity
///
/// An empty slice is trivially satisfied.
pub fn pairing_check(pairs: &[(G1Affine, G2Affine)]) -> bool {
    let prepared: Vec<G2Prepared> = pairs.iter().map(|(_, q)| G2Prepared::from(q)).collect();
    let terms: Vec<(&G1Affine, &G2Prepared)> = pairs
        .iter()
        .zip(prepared.iter())
        .map(|((p, _), q)| (p, q))
        .collect();

    bool::from(
        multi_miller_loop(&terms)
            .final_exponentiation()
            .ct_eq(&Gt::identity()),
    )
}
