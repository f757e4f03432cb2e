// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Polynomials addressed by handle, so one polynomial can be passed as both
//! an input and an output of the same operation.

use crate::error::PolynomialError;
use crate::polynomial::div_rem::{
    div_newton_preinv_raw, divrem_newton_preinv_raw, newton_quotient_len,
};
use crate::polynomial::ModPolynomial;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::mem;

/// Handle to a polynomial stored in a [`PolynomialPool`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PolyId(usize);

/// Polynomials sharing one modulus.
///
/// Operations take [`PolyId`]s for every operand. An output handle may equal
/// any input handle; the result then goes to a scratch buffer that replaces
/// the output's buffer once the inputs are no longer read.
#[derive(Clone, Debug)]
pub struct PolynomialPool {
    modulus: BigInt,
    polynomials: Vec<ModPolynomial>,
}

impl PolynomialPool {
    pub fn new(modulus: BigInt) -> Self {
        assert!(modulus.is_positive(), "modulus must be positive");
        Self {
            modulus,
            polynomials: Vec::new(),
        }
    }
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }
    pub fn len(&self) -> usize {
        self.polynomials.len()
    }
    pub fn is_empty(&self) -> bool {
        self.polynomials.is_empty()
    }
    pub fn insert(&mut self, polynomial: ModPolynomial) -> PolyId {
        assert!(polynomial.modulus == self.modulus, "moduli don't match");
        self.polynomials.push(polynomial);
        PolyId(self.polynomials.len() - 1)
    }
    pub fn insert_coefficients<T: Into<BigInt>, I: IntoIterator<Item = T>>(
        &mut self,
        coefficients: I,
    ) -> PolyId {
        let polynomial = ModPolynomial::from_coefficients(coefficients, self.modulus.clone());
        self.insert(polynomial)
    }
    pub fn get(&self, id: PolyId) -> &ModPolynomial {
        &self.polynomials[id.0]
    }
    /// stores `polynomial` under `id`, returning the previous value
    pub fn replace(&mut self, id: PolyId, polynomial: ModPolynomial) -> ModPolynomial {
        assert!(polynomial.modulus == self.modulus, "moduli don't match");
        mem::replace(&mut self.polynomials[id.0], polynomial)
    }
    /// moves the polynomial out of `id`, leaving zero behind
    pub fn take(&mut self, id: PolyId) -> ModPolynomial {
        let zero = ModPolynomial::zero(self.modulus.clone());
        mem::replace(&mut self.polynomials[id.0], zero)
    }

    /// Buffer of exactly `len` coefficients for the kernel to write `output` into.
    ///
    /// If `output` is one of `inputs` this is fresh scratch; otherwise it is
    /// the output's own buffer, moved out of the pool and grown as needed.
    fn resolve_output_buffer(
        &mut self,
        output: PolyId,
        inputs: &[PolyId],
        len: usize,
    ) -> Vec<BigInt> {
        if inputs.contains(&output) {
            log::debug!("output {:?} aliases an input, using scratch", output);
            return vec![BigInt::zero(); len];
        }
        let polynomial = &mut self.polynomials[output.0];
        polynomial.fit_length(len);
        let mut coefficients = mem::take(&mut polynomial.coefficients);
        coefficients.resize(len, BigInt::zero());
        coefficients
    }

    /// Installs a buffer from [`resolve_output_buffer`](Self::resolve_output_buffer),
    /// dropping whatever `output` held before.
    fn commit_output_buffer(&mut self, output: PolyId, coefficients: Vec<BigInt>) {
        let polynomial = &mut self.polynomials[output.0];
        polynomial.coefficients = coefficients;
        polynomial.normalize();
    }

    /// `(destination, source)` for distinct handles
    fn pair_mut(
        &mut self,
        destination: PolyId,
        source: PolyId,
    ) -> (&mut ModPolynomial, &ModPolynomial) {
        assert_ne!(destination, source);
        if destination.0 < source.0 {
            let (low, high) = self.polynomials.split_at_mut(source.0);
            (&mut low[destination.0], &high[0])
        } else {
            let (low, high) = self.polynomials.split_at_mut(destination.0);
            (&mut high[0], &low[source.0])
        }
    }

    /// Division with remainder of `a` by `b` given `binv = b.preinverse()`,
    /// storing the quotient in `q` and the remainder in `r`.
    ///
    /// `q` and `r` may each be any of `a`, `b` or `binv`, but not each other.
    /// Errors are those of [`ModPolynomial::divrem_newton_preinv_into`], and
    /// leave every polynomial untouched.
    pub fn divrem_newton_preinv(
        &mut self,
        q: PolyId,
        r: PolyId,
        a: PolyId,
        b: PolyId,
        binv: PolyId,
    ) -> Result<(), PolynomialError> {
        assert_ne!(q, r, "quotient and remainder must be distinct");
        let a_len = self.get(a).len();
        let b_len = self.get(b).len();
        let quotient_len = match newton_quotient_len(a_len, b_len)? {
            None => {
                if r != a {
                    let (r, a) = self.pair_mut(r, a);
                    r.set(a);
                }
                self.polynomials[q.0].set_zero();
                return Ok(());
            }
            Some(quotient_len) => quotient_len,
        };
        let inputs = [a, b, binv];
        let mut q_coefficients = self.resolve_output_buffer(q, &inputs, quotient_len);
        let mut r_coefficients = self.resolve_output_buffer(r, &inputs, b_len - 1);
        divrem_newton_preinv_raw(
            &mut q_coefficients,
            &mut r_coefficients,
            &self.polynomials[a.0].coefficients,
            &self.polynomials[b.0].coefficients,
            &self.polynomials[binv.0].coefficients,
            &self.modulus,
        );
        self.commit_output_buffer(q, q_coefficients);
        self.commit_output_buffer(r, r_coefficients);
        Ok(())
    }

    /// Quotient of `a` by `b` given `binv = b.preinverse()`, stored in `q`,
    /// which may be any of the inputs.
    pub fn div_newton_preinv(
        &mut self,
        q: PolyId,
        a: PolyId,
        b: PolyId,
        binv: PolyId,
    ) -> Result<(), PolynomialError> {
        let quotient_len = match newton_quotient_len(self.get(a).len(), self.get(b).len())? {
            None => {
                self.polynomials[q.0].set_zero();
                return Ok(());
            }
            Some(quotient_len) => quotient_len,
        };
        let mut q_coefficients = self.resolve_output_buffer(q, &[a, b, binv], quotient_len);
        div_newton_preinv_raw(
            &mut q_coefficients,
            &self.polynomials[a.0].coefficients,
            &self.polynomials[b.0].coefficients,
            &self.polynomials[binv.0].coefficients,
            &self.modulus,
        );
        self.commit_output_buffer(q, q_coefficients);
        Ok(())
    }
}
