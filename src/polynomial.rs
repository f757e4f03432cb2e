// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::mod_int::ModularReduce;
use crate::traits::PolynomialEval;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::slice;
use std::vec;

mod add_sub;
mod div_rem;
mod inv_series;
mod mul;
mod pool;
pub mod vec_ops;

pub use inv_series::INV_NEWTON_CUTOFF;
pub use pool::{PolyId, PolynomialPool};

/// Kernels working on bare coefficient slices.
///
/// They assume their preconditions (documented on each function) instead of
/// checking them, and never allocate the output.
pub mod raw {
    pub use super::div_rem::{
        div_newton_preinv_raw, divrem_basecase_raw, divrem_newton_preinv_raw,
    };
    pub use super::inv_series::inv_series_newton_raw;
    pub use super::mul::mullow_raw;
}

/// A single-variable polynomial with coefficients in `Z/pZ`.
///
/// the term at index `n` is `self.coefficients()[n] * pow(x, n)`
///
/// # Invariants
///
/// * every coefficient is in `0..self.modulus()`
/// * `self.coefficients().last()` is either `None` or `Some(v)` where `!v.is_zero()`
/// * `self.modulus()` is positive
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct ModPolynomial {
    coefficients: Vec<BigInt>,
    modulus: BigInt,
}

impl ModPolynomial {
    /// reduces `coefficients` modulo `modulus` and drops the zero top coefficients
    pub fn new(coefficients: Vec<BigInt>, modulus: BigInt) -> Self {
        assert!(modulus.is_positive(), "modulus must be positive");
        let mut retval = Self {
            coefficients,
            modulus,
        };
        vec_ops::scalar_mod_assign(&mut retval.coefficients, &retval.modulus);
        retval.normalize();
        retval
    }
    pub fn from_coefficients<T: Into<BigInt>, I: IntoIterator<Item = T>>(
        coefficients: I,
        modulus: impl Into<BigInt>,
    ) -> Self {
        Self::new(
            coefficients.into_iter().map(Into::into).collect(),
            modulus.into(),
        )
    }
    pub fn zero(modulus: BigInt) -> Self {
        Self::new(Vec::new(), modulus)
    }
    pub fn one(modulus: BigInt) -> Self {
        Self::new(vec![BigInt::one()], modulus)
    }
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }
    pub fn into_coefficients(self) -> Vec<BigInt> {
        self.coefficients
    }
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }
    pub fn iter(&self) -> slice::Iter<BigInt> {
        self.coefficients.iter()
    }
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
    pub fn is_zero(&self) -> bool {
        self.is_empty()
    }
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }
    /// number of coefficients the buffer can hold without reallocating
    pub fn alloc(&self) -> usize {
        self.coefficients.capacity()
    }
    pub fn leading_coefficient(&self) -> Option<&BigInt> {
        self.coefficients.last()
    }
    /// grows the buffer so it can hold at least `len` coefficients; never shrinks
    pub fn fit_length(&mut self, len: usize) {
        if len > self.alloc() {
            self.coefficients.reserve(len - self.len());
        }
    }
    /// copies `src` into `self`, reusing `self`'s buffer
    pub fn set(&mut self, src: &ModPolynomial) {
        self.require_matching_moduli(src);
        self.coefficients.clone_from(&src.coefficients);
    }
    pub fn set_zero(&mut self) {
        self.coefficients.clear();
    }
    /// the reversal of the first `len` coefficients as a polynomial of length at most `len`
    pub fn reverse(&self, len: usize) -> Self {
        let mut coefficients = vec![BigInt::zero(); len];
        let src = &self.coefficients[..len.min(self.len())];
        vec_ops::reverse_into(&mut coefficients, src);
        let mut retval = Self {
            coefficients,
            modulus: self.modulus.clone(),
        };
        retval.normalize();
        retval
    }
    /// drops the zero top coefficients
    pub fn normalize(&mut self) {
        let len = vec_ops::normalized_len(&self.coefficients);
        self.coefficients.truncate(len);
    }
    pub fn has_matching_moduli(&self, rhs: &Self) -> bool {
        self.modulus == rhs.modulus
    }
    fn require_matching_moduli(&self, rhs: &Self) {
        assert!(self.has_matching_moduli(rhs), "moduli don't match");
    }
}

impl<'a> PolynomialEval<BigInt> for &'a ModPolynomial {
    fn eval(self, x: &BigInt) -> BigInt {
        let x = x.clone().modular_reduce(&self.modulus);
        let mut iter = self.iter().rev();
        if let Some(last) = iter.next() {
            let mut retval = last.clone();
            for coefficient in iter {
                retval *= &x;
                retval += coefficient;
                retval.modular_reduce_assign(&self.modulus);
            }
            retval
        } else {
            Zero::zero()
        }
    }
}

impl PolynomialEval<BigInt> for ModPolynomial {
    fn eval(self, x: &BigInt) -> BigInt {
        (&self).eval(x)
    }
}

impl IntoIterator for ModPolynomial {
    type Item = BigInt;
    type IntoIter = vec::IntoIter<BigInt>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a> IntoIterator for &'a ModPolynomial {
    type Item = &'a BigInt;
    type IntoIter = slice::Iter<'a, BigInt>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ModPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coefficients.is_empty() {
            write!(f, "0")
        } else {
            for (power, coefficient) in self.coefficients.iter().enumerate() {
                match power {
                    0 => write!(f, "{}", coefficient)?,
                    1 => write!(f, " + {}*x", coefficient)?,
                    _ => write!(f, " + {}*x^{}", coefficient, power)?,
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(coefficients: Vec<i64>, modulus: i64) -> ModPolynomial {
        ModPolynomial::from_coefficients(coefficients, modulus)
    }

    #[test]
    fn test_new_reduces_and_normalizes() {
        let poly = p(vec![-1, 8, 14, 7], 7);
        assert_eq!(poly.coefficients(), &[BigInt::from(6), BigInt::from(1)]);
        assert_eq!(poly.degree(), Some(1));
        let poly = p(vec![7, 14, -21], 7);
        assert!(poly.is_zero());
        assert_eq!(poly.len(), 0);
        assert_eq!(poly.degree(), None);
    }

    #[test]
    #[should_panic(expected = "modulus must be positive")]
    fn test_new_rejects_zero_modulus() {
        p(vec![1], 0);
    }

    #[test]
    fn test_eval() {
        let poly = p(vec![], 1000);
        assert_eq!(poly.eval(&BigInt::from(10)), BigInt::from(0));
        let poly = p(vec![1, 2, 3], 1000);
        assert_eq!(poly.eval(&BigInt::from(10)), BigInt::from(321));
        let poly = p(vec![1, 2, 3, 4], 1000);
        assert_eq!(poly.eval(&BigInt::from(10)), BigInt::from(321));
        let poly = p(vec![1, 0, 1], 7);
        assert_eq!(poly.eval(&BigInt::from(-1)), BigInt::from(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", p(vec![], 7)), "0");
        assert_eq!(format!("{}", p(vec![1], 7)), "1");
        assert_eq!(format!("{}", p(vec![1, 2], 7)), "1 + 2*x");
        assert_eq!(format!("{}", p(vec![1, -1, 3], 7)), "1 + 6*x + 3*x^2");
    }

    #[test]
    fn test_reverse() {
        let poly = p(vec![1, 2, 3], 7);
        assert_eq!(poly.reverse(3), p(vec![3, 2, 1], 7));
        assert_eq!(poly.reverse(5), p(vec![0, 0, 3, 2, 1], 7));
        assert_eq!(poly.reverse(2), p(vec![2, 1], 7));
        assert_eq!(p(vec![0, 0, 1], 7).reverse(3), p(vec![1], 7));
    }

    #[test]
    fn test_fit_length_and_set() {
        let mut poly = p(vec![], 7);
        poly.fit_length(10);
        assert!(poly.alloc() >= 10);
        let alloc = poly.alloc();
        poly.fit_length(3);
        assert_eq!(poly.alloc(), alloc);
        poly.set(&p(vec![1, 2, 3], 7));
        assert_eq!(poly, p(vec![1, 2, 3], 7));
        assert_eq!(poly.alloc(), alloc);
        poly.set_zero();
        assert!(poly.is_zero());
    }

    #[test]
    #[should_panic(expected = "moduli don't match")]
    fn test_set_mismatched_moduli() {
        let mut poly = p(vec![1], 7);
        poly.set(&p(vec![1], 11));
    }
}
