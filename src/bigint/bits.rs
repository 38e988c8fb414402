// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bit-level queries: length, trailing/leading zeros, power-of-two detection.

use super::bigint_core::BigInt;
use crate::bigint::bigint_slice::{is_valid_biguint_slice, BigUintSlice};
use crate::bigint::digit::Digit;
use crate::bigint::zero::is_zero_digits;

pub(crate) fn bit_len_digits(a: &BigUintSlice) -> usize {
    debug_assert!(is_valid_biguint_slice(a));

    if is_zero_digits(a) {
        return 0;
    }

    let most_significant_digit = a[a.len() - 1];
    a.len() * Digit::BITS as usize - most_significant_digit.leading_zeros() as usize
}

impl BigInt {
    /// Returns the number of bits representing the big integer.
    /// 0 is returned for the value zero.
    pub fn bit_len(&self) -> usize {
        bit_len_digits(self.as_digits())
    }

    pub(crate) fn le_bits(&self) -> Vec<bool> {
        if self.is_zero() {
            return vec![];
        }

        let digits = self.as_digits();
        let mut bits = Vec::with_capacity(self.bit_len());

        if let Some((last, elements)) = digits.split_last() {
            for digit in elements {
                let mut digit = *digit;
                for _ in 0..Digit::BITS {
                    bits.push(digit & 1 == 1);
                    digit >>= 1;
                }
            }

            // Handles the most significant digit
            let mut digit = *last;
            for _ in 0..(Digit::BITS - digit.leading_zeros()) {
                bits.push(digit & 1 == 1);
                digit >>= 1;
            }
        } else {
            panic!("invalid input")
        }

        debug_assert_eq!(bits.len(), self.bit_len());
        bits
    }

    /// Number of trailing zero bits. Defined as 0 for zero, matching the
    /// library's convention that `ctz` never panics.
    pub fn ctz(&self) -> usize {
        if self.is_zero() {
            return 0;
        }

        let digits = self.as_digits();
        let index = digits.iter().position(|&x| x != 0).unwrap();
        index * Digit::BITS as usize + digits[index].trailing_zeros() as usize
    }

    /// Number of leading zero bits within the top (most significant) digit
    /// only. Used by `to_f64`'s exponent computation.
    pub(crate) fn clz_top(&self) -> u32 {
        if self.is_zero() {
            return Digit::BITS;
        }
        self.digits_storage[self.digits_len - 1].leading_zeros()
    }

    /// True iff the magnitude is a power of two: all lower digits are zero
    /// and the top digit is itself a power of two.
    pub fn is_power_of_two(&self) -> bool {
        if self.is_zero() {
            return false;
        }
        let digits = self.as_digits();
        let (top, rest) = digits.split_last().unwrap();
        rest.iter().all(|&d| d == 0) && top.is_power_of_two()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::digit::{Digit, DoubleDigit};

    #[test]
    fn test_bit_len() {
        let data = [
            (BigInt::from(0), 0),
            (BigInt::from(1), 1),
            (BigInt::from(Digit::MAX), Digit::BITS),
            (BigInt::from(Digit::MAX / 2), Digit::BITS - 1),
            (BigInt::from(Digit::MAX as DoubleDigit + 1), Digit::BITS + 1),
        ];

        for (a, bit_len) in data {
            assert_eq!(a.bit_len(), bit_len as usize);
        }
    }

    #[test]
    fn test_ctz_of_zero_is_zero() {
        assert_eq!(BigInt::zero().ctz(), 0);
    }

    #[test]
    fn test_ctz() {
        for i in 0..(Digit::BITS as usize * 2 + 3) {
            let a = BigInt::from(1) << i;
            assert_eq!(a.ctz(), i);
        }
    }

    #[test]
    fn test_is_power_of_two() {
        assert!(!BigInt::zero().is_power_of_two());
        assert!(BigInt::one().is_power_of_two());
        assert!(BigInt::from(2).is_power_of_two());
        assert!(!BigInt::from(3).is_power_of_two());
        assert!((BigInt::one() << (Digit::BITS as usize * 3)).is_power_of_two());
        assert!(!((BigInt::one() << (Digit::BITS as usize * 3)) + BigInt::one()).is_power_of_two());
    }
}
