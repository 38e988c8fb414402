// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion to `f64`.

use super::error::BigIntError;
use crate::bigint::BigInt;

/// `f64`'s maximum binary exponent for finite values.
const DBL_MAX_EXP: usize = 1024;

impl BigInt {
    /// Converts to the nearest `f64`, saturating to signed infinity when the
    /// magnitude exceeds `f64`'s dynamic range.
    pub fn to_f64(&self) -> f64 {
        self.to_f64_checked().unwrap_or(if self.is_sign_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })
    }

    /// Converts to the nearest `f64`, failing with
    /// [`BigIntError::DoubleConversionOverflow`] instead of saturating.
    pub fn to_f64_checked(&self) -> Result<f64, BigIntError> {
        if self.is_zero() {
            return Ok(0.0);
        }

        let bits = self.bit_len();
        let exponent = bits - 1;
        if exponent > DBL_MAX_EXP - 1 {
            return Err(BigIntError::DoubleConversionOverflow);
        }

        // Takes the top 53 bits of the magnitude (f64's mantissa width,
        // implicit leading bit included) and scales back up.
        let shift = bits.saturating_sub(53);
        let top_bits = if shift == 0 {
            self.magnitude_u128().unwrap() as u64
        } else {
            (self >> shift as u32).magnitude_u128().unwrap() as u64
        };

        let value = (top_bits as f64) * 2f64.powi(shift as i32);
        Ok(if self.is_sign_negative() { -value } else { value })
    }
}
