// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Error type shared by the modular polynomial operations.

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum PolynomialError {
    /// The divisor is the zero polynomial.
    ///
    /// This is misuse of the API rather than bad data; callers wanting abort
    /// semantics use the panicking wrappers.
    #[error("polynomial division by zero")]
    DivisionByZero,

    /// The dividend is too long for a preinverse built to the divisor's length.
    #[error(
        "dividend of length {dividend_len} exceeds the preinverse precision \
         of a divisor of length {divisor_len}"
    )]
    PrecisionExceeded {
        dividend_len: usize,
        divisor_len: usize,
    },

    /// A coefficient that must be a unit modulo the modulus is not.
    #[error("{value} is not invertible modulo {modulus}")]
    NotInvertible { value: BigInt, modulus: BigInt },
}

impl From<PolynomialError> for std::io::Error {
    fn from(err: PolynomialError) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}
