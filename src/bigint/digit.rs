// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines "base" of multiple precision integers (big integers).
//!
//! Big integers are implemented as base b numbers.
//! While it is helpful to realize the situation when b = 10,
//! a Rust n-bit unsigned integer type is used as "digit".
//!
//! For any unsigned integer type chosen as digit,
//! a larger one must exist and be used as "double-digit".
//! Arithmetic operations that can carry (multiplication, and the
//! normalizing step of division) are performed on the double-digit type.
//!
//! The digit width `W` is a build-time choice: exactly one of the
//! `digit8`/`digit16`/`digit32` features selects a narrower digit; with
//! none of them enabled, `Digit` is `u64`.

#[cfg(feature = "digit8")]
pub type Digit = u8;
#[cfg(feature = "digit8")]
pub(crate) type DoubleDigit = u16;

#[cfg(feature = "digit16")]
pub type Digit = u16;
#[cfg(feature = "digit16")]
pub(crate) type DoubleDigit = u32;

#[cfg(feature = "digit32")]
pub type Digit = u32;
#[cfg(feature = "digit32")]
pub(crate) type DoubleDigit = u64;

#[cfg(not(any(feature = "digit8", feature = "digit16", feature = "digit32")))]
pub type Digit = u64;
#[cfg(not(any(feature = "digit8", feature = "digit16", feature = "digit32")))]
pub(crate) type DoubleDigit = u128;

pub const DIGIT_BITS: u32 = Digit::BITS;
pub const DIGIT_BYTES: u32 = Digit::BITS / 8;

#[cfg(test)]
mod tests {
    use super::{Digit, DoubleDigit};

    #[test]
    #[allow(unused_comparisons)]
    fn digit_is_unsigned() {
        assert!(Digit::MIN >= 0);
    }

    #[test]
    fn double_digit_is_at_least_twice_as_wide() {
        assert!(DoubleDigit::BITS >= Digit::BITS * 2);
    }
}
