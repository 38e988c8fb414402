// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Greatest common divisor, by Stein's binary GCD algorithm.
//!
//! Adapted from `ibig`'s `gcd::binary::gcd_in_place`: pull out the common
//! power of two, strip any remaining factors of two from each operand, then
//! alternately subtract the smaller magnitude from the larger and shift out
//! the resulting trailing zeros until one side reaches zero.

use crate::bigint::BigInt;

impl BigInt {
    /// Greatest common divisor of the magnitudes of `self` and `other`.
    /// Always non-negative; `gcd(0, 0) == 0`.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.abs();
        let mut b = other.abs();

        if a.is_zero() {
            return b;
        }
        if b.is_zero() {
            return a;
        }

        let common_twos = a.ctz().min(b.ctz());
        a = a >> common_twos as u32;
        b = b >> common_twos as u32;

        let shift = a.ctz() as u32;
        a = a >> shift;
        loop {
            let shift = b.ctz() as u32;
            b = b >> shift;
            if a == b {
                break;
            }
            if a > b {
                std::mem::swap(&mut a, &mut b);
            }
            b = b - &a;
        }

        a << common_twos as u32
    }
}
