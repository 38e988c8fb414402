// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An arbitrary-precision signed integer library.
//!
//! The crate's only public surface is [`bigint::BigInt`] and the operations
//! grouped under [`mod@bigint`]: construction, arithmetic, bit operations,
//! comparisons, conversions, and radix-based text I/O.

pub mod bigint;

#[cfg(test)]
pub(crate) mod testing_tools;
