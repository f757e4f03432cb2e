// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::error::PolynomialError;
use crate::mod_int::{ModularInverse, ModularReduce};
use crate::polynomial::mul::mullow_raw;
use crate::polynomial::vec_ops;
use crate::polynomial::ModPolynomial;
use num_bigint::BigInt;
use num_traits::Zero;

fn quotient_len(numerator_len: usize, denominator_len: usize) -> Option<usize> {
    debug_assert_ne!(denominator_len, 0);
    if numerator_len < denominator_len {
        None
    } else {
        Some(1 + numerator_len - denominator_len)
    }
}

/// Validates a division by a preinverse built to the divisor's length.
///
/// Returns `Ok(None)` when the dividend is shorter than the divisor, otherwise
/// the quotient length.
pub(crate) fn newton_quotient_len(
    dividend_len: usize,
    divisor_len: usize,
) -> Result<Option<usize>, PolynomialError> {
    if divisor_len == 0 {
        return Err(PolynomialError::DivisionByZero);
    }
    let quotient_len = match quotient_len(dividend_len, divisor_len) {
        None => return Ok(None),
        Some(quotient_len) => quotient_len,
    };
    // a constant divisor has an exact inverse, so any precision is fine
    if divisor_len > 1 && quotient_len > divisor_len {
        log::warn!(
            "refusing division of length {} by length {}: preinverse precision exceeded",
            dividend_len,
            divisor_len
        );
        return Err(PolynomialError::PrecisionExceeded {
            dividend_len,
            divisor_len,
        });
    }
    Ok(Some(quotient_len))
}

/// Quotient by preinverse: `q = rev(rev(a_high) * binv mod x^q.len())`.
///
/// # Preconditions
///
/// * `a.len() >= b.len() >= 1` and `q.len() == a.len() - b.len() + 1`
/// * `binv` agrees with `rev(b)^-1` modulo `x^q.len()` (a shorter `binv` is
///   treated as zero padded)
pub fn div_newton_preinv_raw(
    q: &mut [BigInt],
    a: &[BigInt],
    b: &[BigInt],
    binv: &[BigInt],
    modulus: &BigInt,
) {
    let quotient_len = q.len();
    debug_assert!(!b.is_empty() && a.len() >= b.len());
    debug_assert_eq!(quotient_len, a.len() - b.len() + 1);
    let binv = &binv[..binv.len().min(quotient_len)];
    if binv.is_empty() {
        q.iter_mut().for_each(Zero::set_zero);
        return;
    }
    let mut a_rev = vec![BigInt::zero(); quotient_len];
    vec_ops::reverse_into(&mut a_rev, &a[a.len() - quotient_len..]);
    mullow_raw(q, &a_rev, binv, modulus);
    q.reverse();
}

/// Division with remainder by preinverse.
///
/// Computes the quotient with [`div_newton_preinv_raw`], then
/// `r = a - q * b mod x^(b.len() - 1)` reduced into `0..modulus`. `r` is not
/// normalized.
///
/// # Preconditions
///
/// * the preconditions of [`div_newton_preinv_raw`]
/// * `r.len() == b.len() - 1`
pub fn divrem_newton_preinv_raw(
    q: &mut [BigInt],
    r: &mut [BigInt],
    a: &[BigInt],
    b: &[BigInt],
    binv: &[BigInt],
    modulus: &BigInt,
) {
    debug_assert_eq!(r.len() + 1, b.len());
    div_newton_preinv_raw(q, a, b, binv, modulus);
    if b.len() > 1 {
        let low_len = b.len() - 1;
        if q.len() >= low_len {
            mullow_raw(r, q, &b[..low_len], modulus);
        } else {
            mullow_raw(r, &b[..low_len], q, modulus);
        }
        vec_ops::sub_from(r, &a[..low_len]);
    }
    vec_ops::scalar_mod_assign(r, modulus);
}

/// Schoolbook division with remainder.
///
/// # Preconditions
///
/// * `a.len() >= b.len() >= 1`, `q.len() == a.len() - b.len() + 1` and
///   `r.len() == b.len() - 1`
/// * `lead_inv` is the inverse of `b`'s leading coefficient
pub fn divrem_basecase_raw(
    q: &mut [BigInt],
    r: &mut [BigInt],
    a: &[BigInt],
    b: &[BigInt],
    lead_inv: &BigInt,
    modulus: &BigInt,
) {
    debug_assert!(!b.is_empty() && a.len() >= b.len());
    debug_assert_eq!(r.len() + 1, b.len());
    let mut remainder = a.to_vec();
    let b_low = &b[..b.len() - 1];
    for quotient_index in (0..q.len()).rev() {
        let coefficient =
            (&remainder[quotient_index + b_low.len()] * lead_inv).modular_reduce(modulus);
        if !coefficient.is_zero() {
            for (b_index, b_coefficient) in b_low.iter().enumerate() {
                let element = &mut remainder[quotient_index + b_index];
                *element -= &coefficient * b_coefficient;
                element.modular_reduce_assign(modulus);
            }
        }
        q[quotient_index] = coefficient;
    }
    r.clone_from_slice(&remainder[..b_low.len()]);
    vec_ops::scalar_mod_assign(r, modulus);
}

/// Resizes `poly`'s buffer to exactly `len` coefficients for a kernel to overwrite.
fn prepare_output(poly: &mut ModPolynomial, len: usize) {
    poly.fit_length(len);
    poly.coefficients.resize(len, BigInt::zero());
}

impl ModPolynomial {
    fn require_division_moduli(&self, b: &ModPolynomial, binv: &ModPolynomial) {
        self.require_matching_moduli(b);
        self.require_matching_moduli(binv);
    }

    /// Division with remainder using the preinverse `binv = b.preinverse()`.
    ///
    /// Writes into `q` and `r`, growing their buffers when needed. On success
    /// `a = q * b + r` and `r.len() < b.len()`.
    ///
    /// Fails with [`PolynomialError::DivisionByZero`] if `b` is zero and with
    /// [`PolynomialError::PrecisionExceeded`] if `a.len() > 2 * b.len() - 1`
    /// for a non-constant `b`; `q` and `r` are left untouched on failure.
    pub fn divrem_newton_preinv_into(
        q: &mut ModPolynomial,
        r: &mut ModPolynomial,
        a: &ModPolynomial,
        b: &ModPolynomial,
        binv: &ModPolynomial,
    ) -> Result<(), PolynomialError> {
        a.require_division_moduli(b, binv);
        a.require_matching_moduli(q);
        a.require_matching_moduli(r);
        let quotient_len = match newton_quotient_len(a.len(), b.len())? {
            None => {
                r.set(a);
                q.set_zero();
                return Ok(());
            }
            Some(quotient_len) => quotient_len,
        };
        prepare_output(q, quotient_len);
        prepare_output(r, b.len() - 1);
        divrem_newton_preinv_raw(
            &mut q.coefficients,
            &mut r.coefficients,
            &a.coefficients,
            &b.coefficients,
            &binv.coefficients,
            &a.modulus,
        );
        q.normalize();
        r.normalize();
        Ok(())
    }

    /// Returns `(quotient, remainder)` of `self` by `b` given `binv = b.preinverse()`.
    pub fn divrem_newton_preinv(
        &self,
        b: &ModPolynomial,
        binv: &ModPolynomial,
    ) -> Result<(ModPolynomial, ModPolynomial), PolynomialError> {
        let mut q = ModPolynomial::zero(self.modulus.clone());
        let mut r = ModPolynomial::zero(self.modulus.clone());
        Self::divrem_newton_preinv_into(&mut q, &mut r, self, b, binv)?;
        Ok((q, r))
    }

    /// Like [`divrem_newton_preinv`](Self::divrem_newton_preinv), but panics
    /// on any error, including division by zero.
    pub fn div_rem_newton_preinv(
        &self,
        b: &ModPolynomial,
        binv: &ModPolynomial,
    ) -> (ModPolynomial, ModPolynomial) {
        match self.divrem_newton_preinv(b, binv) {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }

    /// Quotient of `self` by `b` given `binv = b.preinverse()`.
    pub fn div_newton_preinv(
        &self,
        b: &ModPolynomial,
        binv: &ModPolynomial,
    ) -> Result<ModPolynomial, PolynomialError> {
        self.require_division_moduli(b, binv);
        let quotient_len = match newton_quotient_len(self.len(), b.len())? {
            None => return Ok(ModPolynomial::zero(self.modulus.clone())),
            Some(quotient_len) => quotient_len,
        };
        let mut q = ModPolynomial::zero(self.modulus.clone());
        prepare_output(&mut q, quotient_len);
        div_newton_preinv_raw(
            &mut q.coefficients,
            &self.coefficients,
            &b.coefficients,
            &binv.coefficients,
            &self.modulus,
        );
        q.normalize();
        Ok(q)
    }

    /// Division with remainder through a preinverse built to exactly the
    /// precision the quotient needs, so there is no bound on `self.len()`.
    pub fn divrem_newton(
        &self,
        b: &ModPolynomial,
    ) -> Result<(ModPolynomial, ModPolynomial), PolynomialError> {
        self.require_matching_moduli(b);
        if b.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        let quotient_len = match quotient_len(self.len(), b.len()) {
            None => return Ok((ModPolynomial::zero(self.modulus.clone()), self.clone())),
            Some(quotient_len) => quotient_len,
        };
        let binv = b.reverse(b.len()).inv_series_newton(quotient_len)?;
        let mut q = ModPolynomial::zero(self.modulus.clone());
        let mut r = ModPolynomial::zero(self.modulus.clone());
        prepare_output(&mut q, quotient_len);
        prepare_output(&mut r, b.len() - 1);
        divrem_newton_preinv_raw(
            &mut q.coefficients,
            &mut r.coefficients,
            &self.coefficients,
            &b.coefficients,
            &binv.coefficients,
            &self.modulus,
        );
        q.normalize();
        r.normalize();
        Ok((q, r))
    }

    /// Schoolbook division with remainder.
    pub fn divrem_basecase(
        &self,
        b: &ModPolynomial,
    ) -> Result<(ModPolynomial, ModPolynomial), PolynomialError> {
        self.require_matching_moduli(b);
        let lead = b
            .leading_coefficient()
            .ok_or(PolynomialError::DivisionByZero)?;
        let lead_inv =
            lead.modular_inverse(&self.modulus)
                .ok_or_else(|| PolynomialError::NotInvertible {
                    value: lead.clone(),
                    modulus: self.modulus.clone(),
                })?;
        let quotient_len = match quotient_len(self.len(), b.len()) {
            None => return Ok((ModPolynomial::zero(self.modulus.clone()), self.clone())),
            Some(quotient_len) => quotient_len,
        };
        let mut q = ModPolynomial::zero(self.modulus.clone());
        let mut r = ModPolynomial::zero(self.modulus.clone());
        prepare_output(&mut q, quotient_len);
        prepare_output(&mut r, b.len() - 1);
        divrem_basecase_raw(
            &mut q.coefficients,
            &mut r.coefficients,
            &self.coefficients,
            &b.coefficients,
            &lead_inv,
            &self.modulus,
        );
        q.normalize();
        r.normalize();
        Ok((q, r))
    }
}
