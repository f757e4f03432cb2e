// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    error::PolynomialError,
    mod_int::{ModularInverse as _, ModularReduce as _},
    polynomial::{ModPolynomial, PolyId, PolynomialPool},
    traits::PolynomialEval as _,
};
pub use num_traits::{One as _, Zero as _};
