// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements `BigInt` constructors.

use super::digit::Digit;
use super::sign::Sign;
use crate::bigint::BigInt;

/// Splits `n` into little-endian `Digit`-sized chunks.
fn digits_from_u128(mut n: u128) -> Vec<Digit> {
    let mut digits = Vec::new();
    loop {
        digits.push(n as Digit);
        n >>= Digit::BITS;
        if n == 0 {
            break;
        }
    }
    digits
}

impl BigInt {
    /// Creates a `BigInt` from `u128` and an explicit sign.
    pub(crate) fn from_u128(n: u128, sign: Sign) -> BigInt {
        BigInt::from_digit_vec(digits_from_u128(n), sign)
    }

    /// Creates a `BigInt` from `i128`.
    ///
    /// Correctly handles `i128::MIN`, whose absolute value does not fit
    /// back into an `i128`.
    pub(crate) fn from_i128(i: i128) -> BigInt {
        if i >= 0 {
            Self::from_u128(i as u128, Sign::Positive)
        } else {
            // The absolute value of i128::MIN cannot be represented as an i128,
            // and attempting to calculate it will cause an overflow.
            let (negated, overflow) = i.overflowing_neg();
            let n = if overflow {
                // 1. Signed integers are represented by "two's complement",
                //     e.g., `i8::MIN` is represented by `0b10000000`.
                // 2. Rust's numeric cast, `as`, is a no-op for casting between
                //     two integers of the same size (e.g., i8 -> u8).
                // 3. Combining 1 and 2, we can negate `i128::MIN` by `i128::MIN as u128`.
                i as u128
            } else {
                negated as u128
            };
            Self::from_u128(n, Sign::Negative)
        }
    }

    pub fn zero() -> BigInt {
        Self::from(0)
    }

    pub fn one() -> BigInt {
        Self::from(1)
    }

    /// In-place assignment from any machine integer type, signed or
    /// unsigned. Collapses the reference library's separate `mov_from_int`
    /// and `mov_from_uint` operations, since `Into<BigInt>` already covers
    /// both through the `From` impls in [`mod@super::bigint_from`].
    pub fn assign<T: Into<BigInt>>(&mut self, v: T) {
        *self = v.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_i128_handles_most_negative() {
        let a = BigInt::from_i128(i128::MIN);
        assert!(a.is_sign_negative());
        assert_eq!(a, -BigInt::from_i128(i128::MAX) - BigInt::one());
    }

    #[test]
    fn test_assign() {
        let mut a = BigInt::from(7);
        a.assign(-3i64);
        assert_eq!(a, BigInt::from(-3));
        a.assign(9u32);
        assert_eq!(a, BigInt::from(9));
    }
}
