// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parses text into a `BigInt`: integers, radix-prefixed integers
//! (`0b`/`0o`/`0x`, and a bare leading `0` for octal), and base-10 decimals
//! in scientific notation.
//!
//! The scientific-notation path scales the mantissa by consuming fractional
//! digits one at a time as the exponent is walked down to zero; any
//! fractional digits left over once the exponent is exhausted are handed
//! back to the caller as a borrowed residue slice rather than silently
//! dropped or rounded.

use super::bigint_core::BigInt;
use super::error::BigIntError;
use super::small_ints::cached;
use std::str::FromStr;

/// Detects the radix from a leading prefix and returns `(radix, prefix_len)`.
/// `prefix_len` is the number of bytes to skip before integer digits start.
fn detect_radix(s: &str) -> (u32, usize) {
    let mut chars = s.chars();
    match chars.next() {
        Some('0') => match chars.next() {
            Some('b') | Some('B') => (2, 2),
            Some('o') | Some('O') => (8, 2),
            Some('x') | Some('X') => (16, 2),
            Some('.') => (10, 0),
            Some(c) if c.is_ascii_digit() => (8, 1),
            _ => (10, 0),
        },
        _ => (10, 0),
    }
}

/// Parses a run of digits in the given radix into a magnitude, using the
/// small-integer cache for each digit value and the radix itself.
fn parse_magnitude_digits(digits: &str, radix: u32) -> Result<BigInt, BigIntError> {
    if digits.is_empty() {
        return Err(BigIntError::MalformedNumber);
    }

    let radix_value = cached(radix);
    let mut value = BigInt::zero();
    for c in digits.chars() {
        let d = c.to_digit(radix).ok_or(BigIntError::InvalidDigit)?;
        value = &value * &radix_value + cached(d);
    }
    Ok(value)
}

/// Parses `s` as a signed integer, with optional radix prefix for
/// non-decimal input, or as base-10 scientific notation
/// (`[sign] digits ['.' digits] ['e' ['+'] digits]`).
///
/// On success, returns the parsed value and, when the decimal form carried
/// more fractional digits than the exponent could absorb, the unconsumed
/// fractional digits as a slice borrowed from `s`.
pub fn parse_radix(s: &str) -> Result<(BigInt, Option<&str>), BigIntError> {
    let mut pos = 0usize;

    let negative = match s[pos..].chars().next() {
        Some('+') => {
            pos += 1;
            false
        }
        Some('-') => {
            pos += 1;
            true
        }
        _ => false,
    };

    let (radix, prefix_len) = detect_radix(&s[pos..]);
    pos += prefix_len;

    let digits_start = pos;
    while matches!(s[pos..].chars().next(), Some(c) if c.to_digit(radix).is_some()) {
        pos += 1;
    }
    let int_digits = &s[digits_start..pos];
    let mut mantissa = parse_magnitude_digits(int_digits, radix)?;

    let mut fraction_digits = "";
    if radix == 10 {
        if let Some('.') = s[pos..].chars().next() {
            pos += 1;
            let frac_start = pos;
            while matches!(s[pos..].chars().next(), Some(c) if c.is_ascii_digit()) {
                pos += 1;
            }
            fraction_digits = &s[frac_start..pos];
        }
    }

    let mut exponent: u32 = 0;
    if radix == 10 {
        if let Some(c) = s[pos..].chars().next() {
            if c == 'e' || c == 'E' {
                pos += 1;
                if let Some('+') = s[pos..].chars().next() {
                    pos += 1;
                }
                let exp_start = pos;
                while matches!(s[pos..].chars().next(), Some(c) if c.is_ascii_digit()) {
                    pos += 1;
                }
                let exp_digits = &s[exp_start..pos];
                if exp_digits.is_empty() {
                    return Err(BigIntError::MalformedNumber);
                }
                exponent = exp_digits
                    .parse::<u32>()
                    .map_err(|_| BigIntError::MalformedNumber)?;
            }
        }
    } else if matches!(s[pos..].chars().next(), Some('.') | Some('e') | Some('E')) {
        return Err(BigIntError::MalformedNumber);
    }

    if pos != s.len() {
        return Err(BigIntError::MalformedNumber);
    }

    let fraction_trimmed = fraction_digits.trim_end_matches('0');
    let mut remaining_fraction = fraction_trimmed;
    let mut e = exponent;
    while e > 0 {
        match remaining_fraction.chars().next() {
            Some(d) => {
                let digit_value = d.to_digit(10).ok_or(BigIntError::MalformedNumber)?;
                mantissa = &mantissa * &cached(10) + cached(digit_value);
                e -= 1;
                remaining_fraction = &remaining_fraction[d.len_utf8()..];
            }
            None => break,
        }
    }
    if e > 0 {
        let scale = cached(10).checked_pow(&BigInt::from(e)).unwrap();
        mantissa = &mantissa * &scale;
    }

    let value = if negative && !mantissa.is_zero() {
        -mantissa
    } else {
        mantissa
    };

    let fraction_out = if remaining_fraction.is_empty() {
        None
    } else {
        Some(remaining_fraction)
    };

    Ok((value, fraction_out))
}

impl BigInt {
    /// Parses `s` the way [`FromStr`] does, but also returns any fractional
    /// decimal digits left over once the exponent ran out, as a slice
    /// borrowed from `s`. See [`parse_radix`].
    pub fn parse_with_fraction(s: &str) -> Result<(BigInt, Option<&str>), BigIntError> {
        parse_radix(s)
    }

    /// Parses a signed, prefix-less hexadecimal string (`['+' | '-'] hexdigits`).
    pub fn from_hex(s: &str) -> Result<BigInt, BigIntError> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => match s.strip_prefix('+') {
                Some(rest) => (false, rest),
                None => (false, s),
            },
        };
        let magnitude = parse_magnitude_digits(digits, 16)?;
        Ok(if negative && !magnitude.is_zero() {
            -magnitude
        } else {
            magnitude
        })
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_radix(s).map(|(value, _fraction)| value)
    }
}
