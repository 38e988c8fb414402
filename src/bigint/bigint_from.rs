// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `From<integer>` conversions for every machine integer width.

use super::sign::Sign;
use crate::bigint::BigInt;

macro_rules! impl_from_unsigned {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for BigInt {
                fn from(v: $t) -> Self {
                    BigInt::from_u128(v as u128, Sign::Positive)
                }
            }
        )+
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for BigInt {
                fn from(v: $t) -> Self {
                    BigInt::from_i128(v as i128)
                }
            }
        )+
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;
    use ::quickcheck_macros::quickcheck;

    #[test]
    fn test_from_small_widths() {
        assert_eq!(BigInt::from(7u8), BigInt::from(7));
        assert_eq!(BigInt::from(-7i8), BigInt::from(-7));
        assert_eq!(BigInt::from(u8::MAX), BigInt::from(255));
        assert_eq!(BigInt::from(i8::MIN), BigInt::from(-128));
    }

    #[quickcheck]
    fn test_from_u128(n: u128) -> bool {
        let a = BigInt::from(n);
        n == a.to_u128().unwrap()
    }

    #[quickcheck]
    fn test_from_i128(n: i128) -> bool {
        let a = BigInt::from(n);
        n == a.to_i128().unwrap()
    }
}
