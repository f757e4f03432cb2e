// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::vec_ops;
use crate::polynomial::ModPolynomial;
use num_bigint::BigInt;
use num_traits::Zero;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

fn add_sub_assign<AddSubAssign: Fn(&mut BigInt, &BigInt)>(
    lhs: &mut ModPolynomial,
    rhs: &ModPolynomial,
    add_sub_assign: AddSubAssign,
) {
    lhs.require_matching_moduli(rhs);
    if lhs.len() < rhs.len() {
        lhs.coefficients.resize(rhs.len(), BigInt::zero());
    }
    for (lhs_element, rhs_element) in lhs.coefficients.iter_mut().zip(&rhs.coefficients) {
        add_sub_assign(lhs_element, rhs_element);
    }
    vec_ops::scalar_mod_assign(&mut lhs.coefficients, &rhs.modulus);
    lhs.normalize();
}

impl<'a> AddAssign<&'a ModPolynomial> for ModPolynomial {
    fn add_assign(&mut self, rhs: &ModPolynomial) {
        add_sub_assign(self, rhs, |l, r| *l += r);
    }
}

impl AddAssign for ModPolynomial {
    fn add_assign(&mut self, rhs: ModPolynomial) {
        *self += &rhs;
    }
}

impl<'a> SubAssign<&'a ModPolynomial> for ModPolynomial {
    fn sub_assign(&mut self, rhs: &ModPolynomial) {
        add_sub_assign(self, rhs, |l, r| *l -= r);
    }
}

impl SubAssign for ModPolynomial {
    fn sub_assign(&mut self, rhs: ModPolynomial) {
        *self -= &rhs;
    }
}

impl Add for ModPolynomial {
    type Output = ModPolynomial;
    fn add(mut self, rhs: ModPolynomial) -> ModPolynomial {
        self += &rhs;
        self
    }
}

impl<'a> Add<&'a ModPolynomial> for ModPolynomial {
    type Output = ModPolynomial;
    fn add(mut self, rhs: &ModPolynomial) -> ModPolynomial {
        self += rhs;
        self
    }
}

impl<'a> Add<ModPolynomial> for &'a ModPolynomial {
    type Output = ModPolynomial;
    fn add(self, mut rhs: ModPolynomial) -> ModPolynomial {
        rhs += self;
        rhs
    }
}

impl<'a, 'b> Add<&'a ModPolynomial> for &'b ModPolynomial {
    type Output = ModPolynomial;
    fn add(self, rhs: &ModPolynomial) -> ModPolynomial {
        self.clone() + rhs
    }
}

impl Sub for ModPolynomial {
    type Output = ModPolynomial;
    fn sub(mut self, rhs: ModPolynomial) -> ModPolynomial {
        self -= &rhs;
        self
    }
}

impl<'a> Sub<&'a ModPolynomial> for ModPolynomial {
    type Output = ModPolynomial;
    fn sub(mut self, rhs: &ModPolynomial) -> ModPolynomial {
        self -= rhs;
        self
    }
}

impl<'a> Sub<ModPolynomial> for &'a ModPolynomial {
    type Output = ModPolynomial;
    fn sub(self, rhs: ModPolynomial) -> ModPolynomial {
        -rhs + self
    }
}

impl<'a, 'b> Sub<&'a ModPolynomial> for &'b ModPolynomial {
    type Output = ModPolynomial;
    fn sub(self, rhs: &ModPolynomial) -> ModPolynomial {
        self.clone() - rhs
    }
}

impl Neg for ModPolynomial {
    type Output = ModPolynomial;
    fn neg(mut self) -> ModPolynomial {
        for coefficient in &mut self.coefficients {
            if !coefficient.is_zero() {
                *coefficient = &self.modulus - &*coefficient;
            }
        }
        self
    }
}

impl<'a> Neg for &'a ModPolynomial {
    type Output = ModPolynomial;
    fn neg(self) -> ModPolynomial {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::tests::test_op_helper;

    fn p(coefficients: Vec<i64>, modulus: i64) -> ModPolynomial {
        ModPolynomial::from_coefficients(coefficients, modulus)
    }

    #[test]
    fn test_add() {
        let test = |l: ModPolynomial, r: ModPolynomial, expected: &ModPolynomial| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l += r,
                |l, r| *l += r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
            );
        };
        test(
            p(vec![1, 2, 3, 4], 11),
            p(vec![8, 7, 6, 5], 11),
            &p(vec![9, 9, 9, 9], 11),
        );
        test(
            p(vec![1, 2, 3, 4], 11),
            p(vec![8, 7, 6, 7], 11),
            &p(vec![9, 9, 9], 11),
        );
        test(p(vec![1], 11), p(vec![8, 7, 6], 11), &p(vec![9, 7, 6], 11));
        test(p(vec![], 11), p(vec![], 11), &p(vec![], 11));
    }

    #[test]
    fn test_sub() {
        let test = |l: ModPolynomial, r: ModPolynomial, expected: &ModPolynomial| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l -= r,
                |l, r| *l -= r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
            );
        };
        test(
            p(vec![1, 2, 3, 4], 11),
            p(vec![8, 7, 6, 5], 11),
            &p(vec![-7, -5, -3, -1], 11),
        );
        test(
            p(vec![1, 2, 3, 4, 10], 11),
            p(vec![8, 7, 6, 5, 10], 11),
            &p(vec![-7, -5, -3, -1], 11),
        );
        test(p(vec![1], 11), p(vec![1, 2], 11), &p(vec![0, -2], 11));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-p(vec![1, 0, 3], 7), p(vec![6, 0, 4], 7));
        assert_eq!(-&p(vec![], 7), p(vec![], 7));
        let poly = p(vec![5, 2, 1], 13);
        assert!((&poly + &-&poly).is_zero());
    }
}
