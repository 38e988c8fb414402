// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exponentiation by squaring.

use super::bigint_core::BigInt;
use super::error::BigIntError;
use super::small_ints::cached;

impl BigInt {
    /// `self` raised to the power `exp`, by repeated squaring.
    ///
    /// Fails with [`BigIntError::NegativeExponent`] if `exp` is negative.
    /// `self.checked_pow(&BigInt::zero())` is `Ok(1)`, including for `self == 0`.
    pub fn checked_pow(&self, exp: &BigInt) -> Result<BigInt, BigIntError> {
        if exp.is_sign_negative() {
            return Err(BigIntError::NegativeExponent);
        }

        let mut result = cached(1);
        let mut base = self.clone();
        let mut exp = exp.clone();

        while !exp.is_zero() {
            if exp.is_odd() {
                result = &result * &base;
            }
            base = &base * &base;
            exp = exp >> 1u32;
        }

        Ok(result)
    }

    /// Infallible `pow`, panicking on a negative exponent, mirroring the
    /// standard library's own `pow` methods.
    pub fn pow(&self, exp: &BigInt) -> BigInt {
        self.checked_pow(exp)
            .expect("attempt to raise to a negative exponent")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow() {
        let data = [
            (2, 0, 1),
            (2, 1, 2),
            (2, 10, 1024),
            (0, 5, 0),
            (5, 0, 1),
            (0, 0, 1),
            (-2, 3, -8),
            (-2, 4, 16),
        ];

        for (base, exp, result) in data {
            let base = BigInt::from(base);
            let exp = BigInt::from(exp);
            assert_eq!(base.pow(&exp), BigInt::from(result));
        }
    }

    #[test]
    fn test_checked_pow_rejects_negative_exponent() {
        assert_eq!(
            BigInt::from(2).checked_pow(&BigInt::from(-1)),
            Err(BigIntError::NegativeExponent)
        );
    }

    #[test]
    fn test_pow_large() {
        let two = BigInt::from(2);
        let got = two.pow(&BigInt::from(256));
        let expected = BigInt::from_hex(
            "10000000000000000000000000000000000000000000000000000000000000000",
        )
        .unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    #[should_panic]
    fn test_pow_panics_on_negative_exponent() {
        BigInt::from(2).pow(&BigInt::from(-1));
    }
}
