// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Primitives on bare coefficient slices.
//!
//! Nothing here allocates or checks lengths beyond `debug_assert!`s; callers
//! pass slices that already have the right sizes.

use crate::mod_int::ModularReduce;
use num_bigint::BigInt;
use num_traits::Zero;
use std::mem;

/// `lhs[i] = rhs[i] - lhs[i]`
pub fn sub_from(lhs: &mut [BigInt], rhs: &[BigInt]) {
    debug_assert!(rhs.len() >= lhs.len());
    for (l, r) in lhs.iter_mut().zip(rhs) {
        let l_value = mem::take(l);
        *l = r - l_value;
    }
}

/// reduces every coefficient into `0..modulus`
pub fn scalar_mod_assign(values: &mut [BigInt], modulus: &BigInt) {
    for value in values {
        value.modular_reduce_assign(modulus);
    }
}

/// length of `values` once the zero top coefficients are dropped
pub fn normalized_len(values: &[BigInt]) -> usize {
    values
        .iter()
        .rposition(|v| !v.is_zero())
        .map_or(0, |index| index + 1)
}

/// writes the reversal of `values` padded with zeros to `out.len()` terms
pub fn reverse_into(out: &mut [BigInt], values: &[BigInt]) {
    let len = out.len();
    debug_assert!(values.len() <= len);
    for (index, o) in out.iter_mut().enumerate() {
        *o = values
            .get(len - 1 - index)
            .cloned()
            .unwrap_or_else(BigInt::zero);
    }
}
