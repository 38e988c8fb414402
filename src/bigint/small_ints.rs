// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A process-global table of pre-built small `BigInt` values (`0..=16`),
//! used internally by the parser (digit values, the decimal base) and by
//! `checked_pow`'s accumulator seed.
//!
//! `init`/`cleanup` are, per the library's concurrency model, the only two
//! operations not safe to call concurrently with each other or with
//! themselves — every other operation only reads the table, through
//! [`cached`], which falls back to building a fresh value when the cache
//! hasn't been initialized (or has been torn down), so correctness never
//! depends on a caller remembering to call `init` first.

use super::bigint_core::BigInt;
use std::sync::Mutex;

static CACHE: Mutex<Option<Vec<BigInt>>> = Mutex::new(None);

const CACHE_LEN: u32 = 16;

/// Builds the small-integer cache. Idempotent: calling twice without an
/// intervening [`cleanup`] is a no-op.
///
/// Not safe to call concurrently with itself or with [`cleanup`].
pub fn init() {
    let mut guard = CACHE.lock().unwrap();
    if guard.is_none() {
        *guard = Some((0..=CACHE_LEN).map(BigInt::from).collect());
    }
}

/// Tears down the small-integer cache.
///
/// Not safe to call concurrently with itself or with [`init`].
pub fn cleanup() {
    let mut guard = CACHE.lock().unwrap();
    *guard = None;
}

/// Returns whether the cache currently holds pre-built values.
pub fn is_initialized() -> bool {
    CACHE.lock().unwrap().is_some()
}

/// Returns a `BigInt` for the small non-negative value `n`, cloning it out
/// of the cache when available and `n` is in range, or constructing a fresh
/// value otherwise.
pub(crate) fn cached(n: u32) -> BigInt {
    if n <= CACHE_LEN {
        let guard = CACHE.lock().unwrap();
        if let Some(cache) = guard.as_ref() {
            return cache[n as usize].clone();
        }
    }
    BigInt::from(n)
}
