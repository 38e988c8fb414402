// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements modular arithmetic functions.

use crate::bigint::BigInt;

/// Calculates `a` modulo `n`,
/// returning the least non-negative remainder of `a (mod n)`.
///
/// Will panic if `n <= 0`.
pub(crate) fn modulo(a: &BigInt, n: &BigInt) -> BigInt {
    debug_assert!(n > &BigInt::zero());

    let r = a % n;
    if r < BigInt::zero() {
        r + n
    } else {
        r
    }
}

impl BigInt {
    /// Euclidean remainder of `self` divided by `n`: always in `0..n.abs()`,
    /// unlike `%`, whose sign follows the dividend.
    ///
    /// Panics if `n` is zero.
    pub fn rem_euclid(&self, n: &BigInt) -> BigInt {
        let n_abs = n.abs();
        modulo(self, &n_abs)
    }
}

#[cfg(test)]
mod rem_euclid_tests {
    use crate::bigint::BigInt;

    #[test]
    fn test_rem_euclid() {
        let data = [
            (7, 3, 1),
            (-7, 3, 2),
            (7, -3, 1),
            (-7, -3, 2),
            (0, 5, 0),
        ];
        for (a, n, result) in data {
            let a = BigInt::from(a);
            let n = BigInt::from(n);
            assert_eq!(a.rem_euclid(&n), BigInt::from(result));
        }
    }
}
