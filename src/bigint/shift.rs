// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bit-shifts across non-aligned digit boundaries.
//!
//! `shl`/`shr` on `u32` counts never fail (the count can't be negative and
//! `u32` always fits). [`BigInt::checked_shl`]/[`BigInt::checked_shr`] accept
//! a `BigInt`-valued count, as the library's textual and cross-language
//! surface requires, and report a domain error for a negative count or a
//! range error when the count doesn't fit a machine-sized unsigned integer.

use super::bigint_core::BigInt;
use super::error::BigIntError;
use super::len::len_digits;
use crate::bigint::bits::bit_len_digits;
use crate::bigint::digit::Digit;
use std::ops::{Shl, Shr};

/// Returns the effective digits length of the shifted.
pub(crate) fn shift_right_digits(digits: &mut [Digit], digits_len: usize, n: usize) -> usize {
    let bit_len = bit_len_digits(digits);

    if n >= bit_len {
        digits.fill(0);
        return 1;
    }

    let mut digits_len = digits_len;
    let shifting_digits_len = n / Digit::BITS as usize;
    let shifting_bits_len = n % Digit::BITS as usize;

    // Shifts in digit.
    if shifting_digits_len > 0 {
        digits[..shifting_digits_len].fill(0);
        digits.rotate_left(shifting_digits_len);
        digits_len -= shifting_digits_len;
    }

    // Shifts remaining bits.
    if shifting_bits_len > 0 {
        let next_shifting_bits_len = Digit::BITS as usize - shifting_bits_len;
        let mut carry = 0;
        for digit in digits[..digits_len].iter_mut().rev() {
            let t = *digit << next_shifting_bits_len;
            *digit = *digit >> shifting_bits_len | carry;
            carry = t;
        }
        digits_len = len_digits(digits);
    }

    digits_len
}

impl BigInt {
    fn shift_right(&mut self, n: usize) {
        self.digits_len = shift_right_digits(
            &mut self.digits_storage[..self.digits_len],
            self.digits_len,
            n,
        );
    }
}

impl<'a> Shr<u32> for &'a BigInt {
    type Output = BigInt;

    fn shr(self, rhs: u32) -> Self::Output {
        let mut a = self.clone();
        a.shift_right(rhs as usize);
        a
    }
}

impl Shr<u32> for BigInt {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self::Output {
        (&self).shr(rhs)
    }
}

/// Returns the effective digits length of the shifted.
pub(crate) fn shift_left_digits(digits: &mut Vec<Digit>, digits_len: usize, n: usize) -> usize {
    let mut digits_len = digits_len;

    let shifting_digits_len = n / Digit::BITS as usize;
    let shifting_bits_len = n % Digit::BITS as usize;

    // Shifts in digit.
    if shifting_digits_len > 0 {
        let available_slots_len = digits.len() - digits_len;
        if available_slots_len < shifting_digits_len {
            digits.extend(&vec![0; shifting_digits_len - available_slots_len]);
        }

        digits_len += shifting_digits_len;
        digits[..digits_len].rotate_right(shifting_digits_len);
    }

    // Shifts remaining bits.
    if shifting_bits_len > 0 {
        let next_shifting_bits_len = Digit::BITS as usize - shifting_bits_len;
        let mut carry = 0;
        if digits_len == digits.len() {
            // Extends the storage for the possible carry at the most significant digit.
            digits.push(0);
        }
        let digits = &mut digits[..digits_len + 1];
        for digit in digits.iter_mut() {
            let t = *digit >> next_shifting_bits_len;
            *digit = *digit << shifting_bits_len | carry;
            carry = t;
        }
        digits_len = len_digits(digits);
    }

    digits_len
}

impl BigInt {
    fn shift_left(&mut self, n: usize) {
        self.digits_len = shift_left_digits(&mut self.digits_storage, self.digits_len, n);
    }
}

impl<'a> Shl<u32> for &'a BigInt {
    type Output = BigInt;

    fn shl(self, rhs: u32) -> Self::Output {
        let mut a = self.clone();
        a.shift_left(rhs as usize);
        a
    }
}

impl Shl<u32> for BigInt {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self::Output {
        (&self).shl(rhs)
    }
}

impl BigInt {
    /// Fallible left shift taking a `BigInt`-valued count.
    ///
    /// Fails with [`BigIntError::NegativeShift`] if `n` is negative, or
    /// [`BigIntError::ShiftCountOutOfRange`] if it doesn't fit in a `u32`.
    pub fn checked_shl(&self, n: &BigInt) -> Result<BigInt, BigIntError> {
        let n = shift_count_as_u32(n)?;
        Ok(self << n)
    }

    /// Fallible right shift taking a `BigInt`-valued count.
    ///
    /// Fails with [`BigIntError::NegativeShift`] if `n` is negative, or
    /// [`BigIntError::ShiftCountOutOfRange`] if it doesn't fit in a `u32`.
    pub fn checked_shr(&self, n: &BigInt) -> Result<BigInt, BigIntError> {
        let n = shift_count_as_u32(n)?;
        Ok(self >> n)
    }
}

fn shift_count_as_u32(n: &BigInt) -> Result<u32, BigIntError> {
    if n.is_sign_negative() {
        return Err(BigIntError::NegativeShift);
    }
    n.to_u32().map_err(|_| BigIntError::ShiftCountOutOfRange)
}
