// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Division and remainder.
//!
//! Restoring long division with a growing "window": the window starts at
//! the dividend's most significant digit and gains one more digit of the
//! dividend each step, the way a schoolbook long division carries down the
//! next digit. Each step finds the largest single digit `q` with
//! `q * divisor <= window` by binary search (rather than the
//! guess-then-correct approach of Knuth's Algorithm D), subtracts
//! `q * divisor` from the window, and appends `q` to the quotient.

use super::bigint_core::BigInt;
use super::bigint_slice::{is_valid_biguint_slice, BigUintSlice};
use super::bigint_vec::DigitVec;
use super::cmp::cmp_digits;
use super::digit::{Digit, DoubleDigit, DIGIT_BITS};
use super::error::BigIntError;
use super::len::len_digits;
use super::mul::{digitvec_multiplying_output, mul_digits};
use super::sign::Sign;
use super::sub::{digitvec_subtracting_output, sub_digits};
use super::zero::is_zero_digits;
use std::cmp::Ordering;
use std::ops::{Div, DivAssign, Rem, RemAssign};

/// Divides the single-digit `divisor0` into `dividend`, returning the
/// quotient and remainder.
fn div_rem_single_digit(dividend: &BigUintSlice, divisor0: Digit) -> (DigitVec, DigitVec) {
    let divisor0 = divisor0 as DoubleDigit;
    let mut quotient = vec![0 as Digit; dividend.len()];
    let mut remainder0: DoubleDigit = 0;

    // Divides from the most significant digit to the least significant.
    for (dividend_digit, quotient_digit) in dividend.iter().rev().zip(quotient.iter_mut().rev()) {
        let t = (remainder0 << DIGIT_BITS) | *dividend_digit as DoubleDigit;
        *quotient_digit = (t / divisor0) as Digit;
        remainder0 = t % divisor0;
    }

    let quotient_len = len_digits(&quotient);
    quotient.truncate(quotient_len);
    (quotient, vec![remainder0 as Digit])
}

/// Returns the largest `q` in `0..=Digit::MAX` such that
/// `q * divisor <= window`.
///
/// `window < divisor * (Digit::MAX + 1)` is required (always true as long
/// as the invariant "remainder < divisor" is maintained between steps).
fn largest_quotient_digit(window: &BigUintSlice, divisor: &BigUintSlice) -> Digit {
    if cmp_digits(window, divisor) == Ordering::Less {
        return 0;
    }

    let mut product = digitvec_multiplying_output(1, divisor.len());
    let mut lo: DoubleDigit = 0;
    let mut hi: DoubleDigit = Digit::MAX as DoubleDigit;
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        let product_len = mul_digits(&[mid as Digit], divisor, &mut product);
        if cmp_digits(&product[..product_len], window) != Ordering::Greater {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo as Digit
}

/// Restoring long division for a multi-digit `divisor`.
fn div_rem_long(dividend: &BigUintSlice, divisor: &BigUintSlice) -> (DigitVec, DigitVec) {
    let mut quotient_msb_first: Vec<Digit> = Vec::with_capacity(dividend.len());
    let mut window: DigitVec = vec![0];

    for &digit in dividend.iter().rev() {
        // window = window * b + digit
        window.insert(0, digit);
        let window_len = len_digits(&window);
        window.truncate(window_len);

        let q = largest_quotient_digit(&window, divisor);
        if q != 0 {
            let mut product = digitvec_multiplying_output(1, divisor.len());
            let product_len = mul_digits(&[q], divisor, &mut product);
            let mut diff = digitvec_subtracting_output(window.len(), product_len);
            let diff_len = sub_digits(&window, &product[..product_len], &mut diff);
            diff.truncate(diff_len);
            window = diff;
        }
        quotient_msb_first.push(q);
    }

    quotient_msb_first.reverse();
    let quotient_len = len_digits(&quotient_msb_first);
    quotient_msb_first.truncate(quotient_len);

    (quotient_msb_first, window)
}

/// Divides `dividend` by `divisor`, returning `(quotient, remainder)`
/// magnitudes. Panics if `divisor` represents 0.
pub(crate) fn div_rem_digits(dividend: &BigUintSlice, divisor: &BigUintSlice) -> (DigitVec, DigitVec) {
    debug_assert!(is_valid_biguint_slice(dividend));
    debug_assert!(is_valid_biguint_slice(divisor));
    assert!(!is_zero_digits(divisor), "attempt to divide by zero");

    if is_zero_digits(dividend) {
        return (vec![0], vec![0]);
    }

    match cmp_digits(dividend, divisor) {
        Ordering::Less => return (vec![0], dividend.to_vec()),
        Ordering::Equal => return (vec![1], vec![0]),
        Ordering::Greater => {}
    }

    if divisor.len() == 1 {
        div_rem_single_digit(dividend, divisor[0])
    } else {
        div_rem_long(dividend, divisor)
    }
}

impl BigInt {
    /// Divides `self` by `rhs`, truncating the quotient toward zero and
    /// giving the remainder the dividend's sign (matching `std`'s integer
    /// `/`/`%`).
    ///
    /// Fails with [`BigIntError::DivisionByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }

        if rhs.is_power_of_two() {
            // Multi-digit power-of-two divisors are common enough (bit masks,
            // byte-aligned shifts) to warrant a shift-based fast path.
            let shift = rhs.ctz() as u32;
            let quotient_magnitude = &self.abs() >> shift;
            let remainder_magnitude = self.abs() - (&quotient_magnitude << shift);

            let quotient_sign = if self.sign == rhs.sign {
                Sign::Positive
            } else {
                Sign::Negative
            };
            let quotient = BigInt::from_digit_vec(quotient_magnitude.as_digits().to_vec(), quotient_sign);
            let remainder = BigInt::from_digit_vec(remainder_magnitude.as_digits().to_vec(), self.sign);
            return Ok((quotient, remainder));
        }

        let (quotient_digits, remainder_digits) = div_rem_digits(self.as_digits(), rhs.as_digits());
        let quotient_sign = if self.sign == rhs.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        let quotient = BigInt::from_digit_vec(quotient_digits, quotient_sign);
        let remainder = BigInt::from_digit_vec(remainder_digits, self.sign);
        Ok((quotient, remainder))
    }

    /// Fallible division. See [`BigInt::div_rem`].
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Fallible remainder. See [`BigInt::div_rem`].
    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }
}

impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> Self::Output {
        self.checked_div(rhs).expect("attempt to divide by zero")
    }
}

impl<'a> Div<&'a BigInt> for BigInt {
    type Output = BigInt;

    fn div(self, rhs: &Self) -> Self::Output {
        (&self).div(rhs)
    }
}

impl Div for BigInt {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        (&self).div(&rhs)
    }
}

impl<'a> DivAssign<&'a BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = (&*self).div(rhs);
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: BigInt) {
        *self = (&*self).div(&rhs);
    }
}

impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> Self::Output {
        self.checked_rem(rhs)
            .expect("attempt to calculate the remainder with a divisor of zero")
    }
}

impl<'a> Rem<&'a BigInt> for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &Self) -> Self::Output {
        (&self).rem(rhs)
    }
}

impl Rem for BigInt {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        (&self).rem(&rhs)
    }
}

impl<'a> RemAssign<&'a BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = (&*self).rem(rhs);
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: BigInt) {
        *self = (&*self).rem(&rhs);
    }
}
