// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use num_bigint::BigInt;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;

pub trait ModularReduce<V: Clone + Eq = Self>: Clone {
    fn modular_reduce_assign<M: Modulus<Value = V>>(&mut self, modulus: M);
    fn modular_reduce<M: Modulus<Value = V>>(mut self, modulus: M) -> Self {
        self.modular_reduce_assign(modulus);
        self
    }
}

/// Inverse with respect to multiplication modulo `modulus`.
///
/// Returns `None` when `self` and the modulus are not coprime.
pub trait ModularInverse<V: Clone + Eq = Self>: ModularReduce<V> {
    fn modular_inverse<M: Modulus<Value = V>>(&self, modulus: M) -> Option<Self>;
}

pub trait Modulus: Clone + Eq {
    type Value: Clone + Eq;
    fn to_modulus(&self) -> &Self::Value;
    fn into_modulus(self) -> Self::Value {
        self.to_modulus().clone()
    }
}

impl<T: Modulus> Modulus for &'_ T {
    type Value = T::Value;
    fn to_modulus(&self) -> &Self::Value {
        (**self).to_modulus()
    }
}

macro_rules! impl_bigint_modulus {
    ($t:ty) => {
        impl Modulus for $t {
            type Value = Self;
            fn to_modulus(&self) -> &Self::Value {
                self
            }
            fn into_modulus(self) -> Self::Value {
                self
            }
        }

        impl ModularReduce for $t {
            fn modular_reduce_assign<M: Modulus<Value = Self>>(&mut self, modulus: M) {
                let modulus = modulus.to_modulus();
                if !modulus.is_zero() {
                    *self = self.mod_floor(modulus);
                }
            }
            fn modular_reduce<M: Modulus<Value = Self>>(self, modulus: M) -> Self {
                let modulus = modulus.to_modulus();
                if !modulus.is_zero() {
                    self.mod_floor(modulus)
                } else {
                    self
                }
            }
        }
    };
}

impl_bigint_modulus!(BigInt);
impl_bigint_modulus!(BigUint);

impl ModularInverse for BigInt {
    fn modular_inverse<M: Modulus<Value = Self>>(&self, modulus: M) -> Option<Self> {
        let modulus = modulus.to_modulus();
        if modulus.is_zero() {
            return None;
        }
        let modulus = modulus.abs();
        if modulus.is_one() {
            return Some(Zero::zero());
        }
        let value = self.mod_floor(&modulus);
        let extended_gcd = value.extended_gcd(&modulus);
        if !extended_gcd.gcd.is_one() {
            return None;
        }
        Some(extended_gcd.x.mod_floor(&modulus))
    }
}

impl ModularInverse for BigUint {
    fn modular_inverse<M: Modulus<Value = Self>>(&self, modulus: M) -> Option<Self> {
        let modulus = BigInt::from(modulus.to_modulus().clone());
        BigInt::from(self.clone())
            .modular_inverse(&modulus)
            .and_then(|v| v.to_biguint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modular_reduce() {
        for m in 1..10i32 {
            for v in -20..20i32 {
                let mut expected = v % m;
                if expected < 0 {
                    expected += m;
                }
                assert_eq!(
                    BigInt::from(v).modular_reduce(BigInt::from(m)),
                    BigInt::from(expected),
                    "v = {}, m = {}",
                    v,
                    m
                );
            }
        }
        // zero modulus leaves the value alone
        assert_eq!(
            BigInt::from(-5).modular_reduce(BigInt::zero()),
            BigInt::from(-5)
        );
    }

    #[test]
    fn test_modular_inverse() {
        for m in 2..30i32 {
            let modulus = BigInt::from(m);
            for v in -m..(2 * m) {
                let value = BigInt::from(v);
                let is_unit = Integer::gcd(&v, &m) == 1;
                match value.modular_inverse(&modulus) {
                    Some(inverse) => {
                        assert!(is_unit, "v = {}, m = {}", v, m);
                        assert!(!inverse.is_negative() && inverse < modulus);
                        assert!((value.clone() * inverse).mod_floor(&modulus).is_one());
                    }
                    None => assert!(!is_unit, "v = {}, m = {}", v, m),
                }
            }
        }
        assert_eq!(
            BigUint::from(3u32).modular_inverse(BigUint::from(7u32)),
            Some(BigUint::from(5u32))
        );
        assert_eq!(BigUint::from(4u32).modular_inverse(BigUint::from(8u32)), None);
    }

    #[test]
    fn test_modular_inverse_big() {
        // 2^127 - 1 is prime
        let modulus: BigInt = (BigInt::one() << 127usize) - 1;
        let value: BigInt = "123456789012345678901234567890".parse().unwrap();
        let inverse = value.modular_inverse(&modulus).unwrap();
        assert!((value * inverse).mod_floor(&modulus).is_one());
    }
}
