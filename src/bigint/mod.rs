// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod add;
mod bigint_core;
mod bigint_display;
mod bigint_from;
mod bigint_into;
mod bigint_new;
mod bigint_slice;
mod bigint_vec;
mod bits;
mod cmp;
mod conversions;
mod digit;
mod divrem;
mod error;
mod format;
mod gcd;
mod helper_methods;
mod len;
mod log;
mod math;
mod modular;
mod mul;
mod neg;
mod parse;
mod pow;
mod shift;
mod sign;
mod small_ints;
mod sub;
mod zero;

pub use bigint_core::BigInt;
pub use digit::{Digit, DIGIT_BYTES};
pub use error::BigIntError;
pub use small_ints::{cleanup, init, is_initialized};
