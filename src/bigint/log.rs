// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integer (floor) logarithm, `logui`.
//!
//! `log_b(n)` is defined as the largest `k` such that `b^k <= n`, so that
//! `log_b(b^k) == k` exactly, the convention the reference library's Open
//! Question resolves to.

use super::bigint_core::BigInt;
use super::error::BigIntError;
use super::small_ints::cached;

impl BigInt {
    /// Floor of `log_base(self)`.
    ///
    /// Fails with [`BigIntError::LogBaseOutOfDomain`] if `base < 2`, or
    /// [`BigIntError::LogOfNonPositive`] if `self <= 0`.
    pub fn checked_log(&self, base: &BigInt) -> Result<u64, BigIntError> {
        if *base < cached(2) {
            return Err(BigIntError::LogBaseOutOfDomain);
        }
        if *self <= BigInt::zero() {
            return Err(BigIntError::LogOfNonPositive);
        }

        if base.is_power_of_two() {
            let shift = base.ctz() as u64;
            return Ok((self.bit_len() as u64 - 1) / shift);
        }

        let mut product = cached(1);
        let mut power: u64 = 0;
        while product <= *self {
            product = &product * base;
            power += 1;
        }
        Ok(power - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log() {
        let data = [
            (1, 10, 0),
            (9, 10, 0),
            (10, 10, 1),
            (99, 10, 1),
            (100, 10, 2),
            (1024, 2, 10),
            (1023, 2, 9),
            (8, 2, 3),
            (1, 2, 0),
        ];

        for (n, base, result) in data {
            let n = BigInt::from(n);
            let base = BigInt::from(base);
            assert_eq!(n.checked_log(&base), Ok(result));
        }
    }

    #[test]
    fn test_log_is_exact_inverse_of_pow() {
        let base = BigInt::from(7);
        for k in 0u32..20 {
            let n = base.pow(&BigInt::from(k));
            assert_eq!(n.checked_log(&base), Ok(k as u64));
        }
    }

    #[test]
    fn test_log_rejects_small_base() {
        assert_eq!(
            BigInt::from(10).checked_log(&BigInt::from(1)),
            Err(BigIntError::LogBaseOutOfDomain)
        );
        assert_eq!(
            BigInt::from(10).checked_log(&BigInt::zero()),
            Err(BigIntError::LogBaseOutOfDomain)
        );
    }

    #[test]
    fn test_log_rejects_non_positive_operand() {
        assert_eq!(
            BigInt::zero().checked_log(&BigInt::from(10)),
            Err(BigIntError::LogOfNonPositive)
        );
        assert_eq!(
            BigInt::from(-5).checked_log(&BigInt::from(10)),
            Err(BigIntError::LogOfNonPositive)
        );
    }

    #[test]
    fn test_log_power_of_two_base_fast_path() {
        // base = 4 is a power of two but not 2 itself, exercising the fast
        // path's `ctz` divisor other than 1.
        let base = BigInt::from(4);
        for n in 1..300u64 {
            let mut expected: u64 = 0;
            let mut product: u64 = 1;
            while product * 4 <= n {
                product *= 4;
                expected += 1;
            }
            assert_eq!(BigInt::from(n).checked_log(&base), Ok(expected));
        }
    }
}
