// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines `BigInt`.

use super::digit::Digit;
use super::len::len_digits;
use super::sign::Sign;

/// An arbitrary-precision signed integer.
///
/// Digits are stored in little-endian order, e.g., the "least significant
/// digit" is stored at position 0. `digits_storage` may carry trailing zero
/// digits beyond `digits_len`; `Vec`'s own capacity stands in for the
/// reference library's explicit capacity field, since growth is already
/// amortized by `Vec::push`/`Vec::reserve`.
///
/// A normalized `BigInt` always satisfies:
/// - `digits_len >= 1` and `digits_storage[digits_len - 1] != 0`, unless the
///   value is zero, in which case `digits_len == 1` and the lone digit is 0.
/// - zero is always `Sign::Positive`.
#[derive(Clone, Debug)]
pub struct BigInt {
    pub(crate) digits_storage: Vec<Digit>,
    pub(crate) digits_len: usize,
    pub(crate) sign: Sign,
}

impl BigInt {
    pub(crate) fn is_sign_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Creates and initializes a `BigInt` from digits whose length is already
    /// known (the common case: callers that just computed `digits_len` via a
    /// `*_digits` helper). This is the designated constructor most arithmetic
    /// operations call; it still forces zero to carry `Sign::Positive`.
    pub(crate) fn new(digits: Vec<Digit>, digits_len: usize, sign: Sign) -> BigInt {
        debug_assert_eq!(len_digits(&digits[..digits_len]), digits_len);
        let is_zero = digits_len == 1 && digits[0] == 0;
        BigInt {
            digits_storage: digits,
            digits_len,
            sign: if is_zero { Sign::Positive } else { sign },
        }
    }

    /// Builds a `BigInt` from an owned digit vector and a sign, normalizing
    /// away any trailing zero digits and forcing zero to be positive.
    pub(crate) fn from_digit_vec(mut digits: Vec<Digit>, sign: Sign) -> Self {
        if digits.is_empty() {
            digits.push(0);
        }
        let digits_len = len_digits(&digits);
        Self::new(digits, digits_len, sign)
    }

    /// Returns `self` with its sign replaced, forcing zero to stay positive.
    pub(crate) fn with_sign(mut self, sign: Sign) -> Self {
        let is_zero = self.digits_len == 1 && self.digits_storage[0] == 0;
        self.sign = if is_zero { Sign::Positive } else { sign };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::bigint_vec::digits_be;

    #[test]
    fn from_digit_vec_normalizes_trailing_zeros() {
        let a = BigInt::from_digit_vec(digits_be!(0, 0, 3, 2, 1), Sign::Negative);
        assert_eq!(a.digits_len, 3);
        assert_eq!(a.sign, Sign::Negative);
    }

    #[test]
    fn from_digit_vec_forces_zero_positive() {
        let a = BigInt::from_digit_vec(digits_be!(0, 0, 0), Sign::Negative);
        assert_eq!(a.digits_len, 1);
        assert_eq!(a.sign, Sign::Positive);
    }
}
