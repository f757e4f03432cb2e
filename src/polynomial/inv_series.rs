// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::error::PolynomialError;
use crate::mod_int::ModularInverse;
use crate::mod_int::ModularReduce;
use crate::polynomial::mul::mullow_raw;
use crate::polynomial::ModPolynomial;
use num_bigint::BigInt;
use num_traits::Zero;

/// Series shorter than this are inverted with the classical recurrence
/// instead of Newton iteration.
pub const INV_NEWTON_CUTOFF: usize = 64;

fn inv_series_basecase(out: &mut [BigInt], h: &[BigInt], h0_inv: &BigInt, modulus: &BigInt) {
    let minus_h0_inv = -h0_inv;
    for i in 0..out.len() {
        if i == 0 {
            out[0] = h0_inv.clone();
            continue;
        }
        let mut sum = BigInt::zero();
        for j in 1..=i.min(h.len() - 1) {
            sum += &h[j] * &out[i - j];
        }
        out[i] = (sum * &minus_h0_inv).modular_reduce(modulus);
    }
}

/// Computes `out = h^-1 mod x^out.len()` by Newton iteration.
///
/// Each step doubles the precision of `g` using `g' = g - g * (h * g - 1)`;
/// the low half of `h * g - 1` is already zero, so only its top half is
/// multiplied back by `g`.
///
/// # Preconditions
///
/// * `out` and `h` are non-empty
/// * `h0_inv * h[0] == 1 (mod modulus)` and `h0_inv` is reduced
pub fn inv_series_newton_raw(out: &mut [BigInt], h: &[BigInt], h0_inv: &BigInt, modulus: &BigInt) {
    debug_assert!(!out.is_empty() && !h.is_empty());
    let len = out.len();
    let mut precisions = vec![len];
    while let Some(&precision) = precisions.last() {
        if precision <= INV_NEWTON_CUTOFF {
            break;
        }
        precisions.push((precision + 1) / 2);
    }
    let base_len = precisions[precisions.len() - 1];
    inv_series_basecase(&mut out[..base_len], h, h0_inv, modulus);
    let mut product = vec![BigInt::zero(); len];
    let mut correction = vec![BigInt::zero(); len];
    for step in precisions.windows(2).rev() {
        let (len, prev_len) = (step[0], step[1]);
        let h = &h[..h.len().min(len)];
        let product_len = len.min(h.len() + prev_len - 1);
        let (g, g_high) = out[..len].split_at_mut(prev_len);
        if h.len() >= g.len() {
            mullow_raw(&mut product[..product_len], h, g, modulus);
        } else {
            mullow_raw(&mut product[..product_len], g, h, modulus);
        }
        product[product_len..len].iter_mut().for_each(Zero::set_zero);
        let error_high = &product[prev_len..len];
        let correction = &mut correction[..len - prev_len];
        if error_high.iter().all(Zero::is_zero) {
            correction.iter_mut().for_each(Zero::set_zero);
        } else {
            mullow_raw(correction, g, error_high, modulus);
        }
        for (g_high, correction) in g_high.iter_mut().zip(correction.iter()) {
            *g_high = (-correction).modular_reduce(modulus);
        }
    }
}

impl ModPolynomial {
    /// Power-series inverse of `self` to `len` terms.
    pub fn inv_series_newton(&self, len: usize) -> Result<ModPolynomial, PolynomialError> {
        let h0 = self
            .coefficients
            .first()
            .ok_or(PolynomialError::DivisionByZero)?;
        let h0_inv =
            h0.modular_inverse(&self.modulus)
                .ok_or_else(|| PolynomialError::NotInvertible {
                    value: h0.clone(),
                    modulus: self.modulus.clone(),
                })?;
        let mut coefficients = vec![BigInt::zero(); len];
        if len != 0 {
            let h = &self.coefficients[..self.len().min(len)];
            inv_series_newton_raw(&mut coefficients, h, &h0_inv, &self.modulus);
        }
        log::debug!(
            "built series inverse to {} terms of a polynomial of length {}",
            len,
            self.len()
        );
        let mut retval = ModPolynomial {
            coefficients,
            modulus: self.modulus.clone(),
        };
        retval.normalize();
        Ok(retval)
    }

    /// The preinverse used for division by `self`: `rev(self)^-1 mod x^self.len()`.
    ///
    /// Fails with [`PolynomialError::DivisionByZero`] for the zero polynomial and
    /// with [`PolynomialError::NotInvertible`] if the leading coefficient is not a
    /// unit.
    pub fn preinverse(&self) -> Result<ModPolynomial, PolynomialError> {
        if self.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        self.reverse(self.len()).inv_series_newton(self.len())
    }
}
