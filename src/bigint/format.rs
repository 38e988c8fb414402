// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Renders a `BigInt` as text in any of the four supported radices
//! (`2`, `8`, `10`, `16`), the mirror image of [`super::parse`].

use super::bigint_core::BigInt;
use super::error::BigIntError;

fn radix_prefix(radix: u32) -> &'static str {
    match radix {
        2 => "0b",
        8 => "0o",
        16 => "0x",
        _ => "",
    }
}

impl BigInt {
    /// Writes the text representation of `self` in the given `radix` into
    /// `buf`, returning the number of bytes written.
    ///
    /// Fails with [`BigIntError::UnsupportedRadix`] if `radix` isn't one of
    /// `2`, `8`, `10`, `16`, or with [`BigIntError::BufferTooSmall`] if `buf`
    /// isn't big enough to hold the output.
    pub fn write_radix(&self, buf: &mut [u8], radix: u32) -> Result<usize, BigIntError> {
        if !matches!(radix, 2 | 8 | 10 | 16) {
            return Err(BigIntError::UnsupportedRadix);
        }

        let mut digits_lsb_first = Vec::new();
        let mut n = self.abs();
        if n.is_zero() {
            digits_lsb_first.push(b'0');
        } else {
            let radix_bigint = BigInt::from(radix);
            while !n.is_zero() {
                let (q, r) = n.div_rem(&radix_bigint).expect("radix is never zero");
                let digit_value = r.to_u32().expect("remainder fits the radix");
                let digit_char = std::char::from_digit(digit_value, radix)
                    .expect("digit_value is within the radix");
                digits_lsb_first.push(digit_char as u8);
                n = q;
            }
        }
        digits_lsb_first.reverse();

        let prefix = radix_prefix(radix);
        let needs_sign = self.is_sign_negative();
        let total_len = (needs_sign as usize) + prefix.len() + digits_lsb_first.len();
        if buf.len() < total_len {
            return Err(BigIntError::BufferTooSmall);
        }

        let mut i = 0;
        if needs_sign {
            buf[i] = b'-';
            i += 1;
        }
        buf[i..i + prefix.len()].copy_from_slice(prefix.as_bytes());
        i += prefix.len();
        buf[i..i + digits_lsb_first.len()].copy_from_slice(&digits_lsb_first);
        i += digits_lsb_first.len();

        Ok(i)
    }

    /// Like [`Self::write_radix`], growing a freshly allocated `String`
    /// instead of writing into a caller-provided buffer.
    pub fn to_radix_string(&self, radix: u32) -> Result<String, BigIntError> {
        let mut buf = vec![0u8; self.bit_len().max(1) + 4];
        loop {
            match self.write_radix(&mut buf, radix) {
                Ok(len) => {
                    buf.truncate(len);
                    return Ok(String::from_utf8(buf).expect("output is pure ASCII"));
                }
                Err(BigIntError::BufferTooSmall) => {
                    let new_len = buf.len() * 2;
                    buf.resize(new_len, 0);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_radix_string() {
        let data = [
            (0, 10, "0"),
            (255, 16, "0xff"),
            (-255, 16, "-0xff"),
            (8, 2, "0b1000"),
            (8, 8, "0o10"),
            (255, 10, "255"),
            (-255, 10, "-255"),
        ];

        for (n, radix, expected) in data {
            let n = BigInt::from(n);
            assert_eq!(n.to_radix_string(radix).unwrap(), expected);
        }
    }

    #[test]
    fn test_write_radix_rejects_unsupported_radix() {
        let mut buf = [0u8; 16];
        assert_eq!(
            BigInt::from(5).write_radix(&mut buf, 7),
            Err(BigIntError::UnsupportedRadix)
        );
    }

    #[test]
    fn test_write_radix_rejects_too_small_buffer() {
        let mut buf = [0u8; 2];
        assert_eq!(
            BigInt::from(-255).write_radix(&mut buf, 16),
            Err(BigIntError::BufferTooSmall)
        );
    }

    #[test]
    fn test_to_radix_string_roundtrips_through_parse() {
        let data = [0, 1, -1, 12345, -98765, i64::MAX, i64::MIN];
        for n in data {
            let a = BigInt::from(n);
            for radix in [2, 8, 10, 16] {
                let s = a.to_radix_string(radix).unwrap();
                let parsed: BigInt = s.parse().unwrap();
                assert_eq!(parsed, a);
            }
        }
    }
}
