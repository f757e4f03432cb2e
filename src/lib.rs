// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Division with remainder of polynomials over `Z/pZ` for arbitrary-precision
//! moduli, using Newton preinverses so division costs two truncated products.
//!
//! ```
//! use modpoly::prelude::*;
//!
//! // x^2 + 1 = (x + 1)(x + 6) + 2 over Z/7Z
//! let a = ModPolynomial::from_coefficients(vec![1, 0, 1], 7);
//! let b = ModPolynomial::from_coefficients(vec![1, 1], 7);
//! let binv = b.preinverse()?;
//! let (q, r) = a.divrem_newton_preinv(&b, &binv)?;
//! assert_eq!(q, ModPolynomial::from_coefficients(vec![6, 1], 7));
//! assert_eq!(r, ModPolynomial::from_coefficients(vec![2], 7));
//! # Ok::<(), PolynomialError>(())
//! ```

pub mod error;
pub mod mod_int;
pub mod polynomial;
pub mod prelude;
pub mod traits;
mod util;
