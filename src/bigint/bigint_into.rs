// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fallible conversions to every machine integer width (`to_uint`/`to_int`
//! from the specification, spelled as `to_u8`..`to_u128`/`to_i8`..`to_i128`
//! so the destination width is part of the call site rather than a type
//! parameter).

use super::digit::DIGIT_BITS;
use super::error::BigIntError;
use crate::bigint::BigInt;

impl BigInt {
    /// Packs the magnitude's digits into a `u128`, low digit first.
    /// Returns `None` if the magnitude doesn't fit.
    pub(crate) fn magnitude_u128(&self) -> Option<u128> {
        let digits = self.as_digits();
        if digits.len() * DIGIT_BITS as usize > 128 {
            return None;
        }
        let mut acc: u128 = 0;
        for &digit in digits.iter().rev() {
            acc = acc.checked_shl(DIGIT_BITS)?;
            acc |= digit as u128;
        }
        Some(acc)
    }

    /// `to_uint` to `u128`: the widest unsigned width, everything else
    /// narrows from here.
    pub fn to_u128(&self) -> Result<u128, BigIntError> {
        if self.is_sign_negative() && !self.is_zero() {
            return Err(BigIntError::ConversionOutOfRange);
        }
        self.magnitude_u128().ok_or(BigIntError::ConversionOutOfRange)
    }

    /// `to_int` to `i128`, with explicit handling of the asymmetric
    /// most-negative case (`i128::MIN`'s magnitude doesn't fit in `i128`).
    pub fn to_i128(&self) -> Result<i128, BigIntError> {
        let m = self
            .magnitude_u128()
            .ok_or(BigIntError::ConversionOutOfRange)?;
        if self.is_sign_negative() {
            if m == i128::MAX as u128 + 1 {
                return Ok(i128::MIN);
            }
            let v = i128::try_from(m).map_err(|_| BigIntError::ConversionOutOfRange)?;
            Ok(-v)
        } else {
            i128::try_from(m).map_err(|_| BigIntError::ConversionOutOfRange)
        }
    }
}

macro_rules! impl_to_unsigned {
    ($(($name:ident, $t:ty)),+ $(,)?) => {
        impl BigInt {
            $(
                pub fn $name(&self) -> Result<$t, BigIntError> {
                    let v = self.to_u128()?;
                    <$t>::try_from(v).map_err(|_| BigIntError::ConversionOutOfRange)
                }
            )+
        }
    };
}

macro_rules! impl_to_signed {
    ($(($name:ident, $t:ty)),+ $(,)?) => {
        impl BigInt {
            $(
                pub fn $name(&self) -> Result<$t, BigIntError> {
                    let v = self.to_i128()?;
                    <$t>::try_from(v).map_err(|_| BigIntError::ConversionOutOfRange)
                }
            )+
        }
    };
}

impl_to_unsigned!(
    (to_u8, u8),
    (to_u16, u16),
    (to_u32, u32),
    (to_u64, u64),
    (to_usize, usize),
);
impl_to_signed!(
    (to_i8, i8),
    (to_i16, i16),
    (to_i32, i32),
    (to_i64, i64),
    (to_isize, isize),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_u128_rejects_negative() {
        assert_eq!(
            BigInt::from(-1).to_u128(),
            Err(BigIntError::ConversionOutOfRange)
        );
    }

    #[test]
    fn test_to_u8_range() {
        assert_eq!(BigInt::from(255).to_u8(), Ok(255));
        assert_eq!(
            BigInt::from(256).to_u8(),
            Err(BigIntError::ConversionOutOfRange)
        );
    }

    #[test]
    fn test_to_i8_range() {
        assert_eq!(BigInt::from(-128).to_i8(), Ok(-128));
        assert_eq!(
            BigInt::from(-129).to_i8(),
            Err(BigIntError::ConversionOutOfRange)
        );
        assert_eq!(BigInt::from(127).to_i8(), Ok(127));
        assert_eq!(
            BigInt::from(128).to_i8(),
            Err(BigIntError::ConversionOutOfRange)
        );
    }

    #[test]
    fn test_to_i128_roundtrips_most_negative() {
        let a = BigInt::from(i128::MIN);
        assert_eq!(a.to_i128(), Ok(i128::MIN));
    }

    #[test]
    fn test_to_u128_rejects_magnitude_wider_than_128_bits() {
        let a = BigInt::one() << 128u32;
        assert_eq!(a.to_u128(), Err(BigIntError::ConversionOutOfRange));
        assert_eq!(a.to_i128(), Err(BigIntError::ConversionOutOfRange));
    }
}
