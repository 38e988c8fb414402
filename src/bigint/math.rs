// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::bigint::bigint_core::BigInt;

impl BigInt {
    pub(crate) fn is_even(&self) -> bool {
        assert!(!self.is_zero());

        let digit = self.digits_storage.first().unwrap();
        *digit & 1 == 0
    }

    pub(crate) fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Magnitude copy with the sign forced positive.
    pub fn abs(&self) -> BigInt {
        BigInt {
            digits_storage: self.digits_storage.clone(),
            digits_len: self.digits_len,
            sign: super::sign::Sign::Positive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_even_odd() {
        let data = [(1, false), (2, true), (3, false), (4, true), (17, false)];
        for (n, is_even) in data {
            assert_eq!(BigInt::from(n).is_even(), is_even);
            assert_eq!(BigInt::from(n).is_odd(), !is_even);
        }
    }

    #[test]
    fn test_abs() {
        assert_eq!(BigInt::from(-7).abs(), BigInt::from(7));
        assert_eq!(BigInt::from(7).abs(), BigInt::from(7));
        assert_eq!(BigInt::zero().abs(), BigInt::zero());
        assert_eq!(BigInt::from(-7).abs().abs(), BigInt::from(-7).abs());
    }
}
