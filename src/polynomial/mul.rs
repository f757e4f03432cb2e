// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::vec_ops;
use crate::polynomial::ModPolynomial;
use num_bigint::BigInt;
use num_traits::Zero;
use std::ops::{Mul, MulAssign};

/// Truncated product: `out = (lhs * rhs) mod x^out.len()`, reduced modulo `modulus`.
///
/// # Preconditions
///
/// * `lhs.len() >= rhs.len() >= 1`
/// * `out.len() <= lhs.len() + rhs.len() - 1`
///
/// The longer operand goes first so the outer loop runs over it and the
/// inner loop is cut short by the truncation.
pub fn mullow_raw(out: &mut [BigInt], lhs: &[BigInt], rhs: &[BigInt], modulus: &BigInt) {
    debug_assert!(lhs.len() >= rhs.len() && !rhs.is_empty());
    debug_assert!(out.len() < lhs.len() + rhs.len());
    let len = out.len();
    out.iter_mut().for_each(Zero::set_zero);
    for (l_index, l) in lhs.iter().take(len).enumerate() {
        if l.is_zero() {
            continue;
        }
        for (r_index, r) in rhs.iter().take(len - l_index).enumerate() {
            out[l_index + r_index] += l * r;
        }
    }
    vec_ops::scalar_mod_assign(out, modulus);
}

impl ModPolynomial {
    /// `(self * rhs) mod x^len`
    pub fn mullow(&self, rhs: &ModPolynomial, len: usize) -> ModPolynomial {
        self.require_matching_moduli(rhs);
        if self.is_zero() || rhs.is_zero() || len == 0 {
            return ModPolynomial::zero(self.modulus.clone());
        }
        let len = len.min(self.len() + rhs.len() - 1);
        let mut coefficients = vec![BigInt::zero(); len];
        if self.len() >= rhs.len() {
            mullow_raw(&mut coefficients, &self.coefficients, &rhs.coefficients, &self.modulus);
        } else {
            mullow_raw(&mut coefficients, &rhs.coefficients, &self.coefficients, &self.modulus);
        }
        let mut retval = ModPolynomial {
            coefficients,
            modulus: self.modulus.clone(),
        };
        retval.normalize();
        retval
    }
}

impl<'a> Mul for &'a ModPolynomial {
    type Output = ModPolynomial;
    fn mul(self, rhs: &ModPolynomial) -> ModPolynomial {
        self.mullow(rhs, self.len() + rhs.len())
    }
}

impl<'a> Mul<ModPolynomial> for &'a ModPolynomial {
    type Output = ModPolynomial;
    fn mul(self, rhs: ModPolynomial) -> ModPolynomial {
        self * &rhs
    }
}

impl<'a> Mul<&'a ModPolynomial> for ModPolynomial {
    type Output = ModPolynomial;
    fn mul(self, rhs: &ModPolynomial) -> ModPolynomial {
        &self * rhs
    }
}

impl Mul for ModPolynomial {
    type Output = ModPolynomial;
    fn mul(self, rhs: ModPolynomial) -> ModPolynomial {
        &self * &rhs
    }
}

impl MulAssign for ModPolynomial {
    fn mul_assign(&mut self, rhs: ModPolynomial) {
        *self = &*self * rhs;
    }
}

impl<'a> MulAssign<&'a ModPolynomial> for ModPolynomial {
    fn mul_assign(&mut self, rhs: &ModPolynomial) {
        *self = &*self * rhs;
    }
}
