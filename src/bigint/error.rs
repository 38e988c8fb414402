// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The error taxonomy every fallible `BigInt` operation reports from.

use std::fmt;
use std::fmt::{Display, Formatter};

/// The single error type every fallible operation in this crate reports.
///
/// Variants group into the four kinds described by the library's error
/// model: domain errors (an input is out of the operation's domain,
/// e.g. division by zero), range errors (a value doesn't fit where it's
/// being put), invalid-input errors (malformed text), and the double
/// conversion's dynamic-range overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    /// Division or remainder by zero.
    DivisionByZero,
    /// A shift count was negative.
    NegativeShift,
    /// An exponent was negative.
    NegativeExponent,
    /// `logui`'s base was less than 2.
    LogBaseOutOfDomain,
    /// `logui`'s operand was zero or negative.
    LogOfNonPositive,
    /// A conversion (`to_i*`/`to_u*`) does not fit in the destination type.
    ConversionOutOfRange,
    /// A shift count does not fit in a machine-sized unsigned integer.
    ShiftCountOutOfRange,
    /// A text-formatting buffer was too small for the output.
    BufferTooSmall,
    /// A digit in the input string is out of range for the given radix.
    InvalidDigit,
    /// A radix outside `{2, 8, 10, 16}` (printing) or `2..=36` (parsing).
    UnsupportedRadix,
    /// The input string isn't a well-formed number for its radix.
    MalformedNumber,
    /// `to_f64` exceeded `f64`'s dynamic range; the result saturates to
    /// signed infinity.
    DoubleConversionOverflow,
}

impl Display for BigIntError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::DivisionByZero => write!(f, "division by zero"),
            BigIntError::NegativeShift => write!(f, "shift count is negative"),
            BigIntError::NegativeExponent => write!(f, "exponent is negative"),
            BigIntError::LogBaseOutOfDomain => write!(f, "log base must be at least 2"),
            BigIntError::LogOfNonPositive => write!(f, "log of a non-positive value"),
            BigIntError::ConversionOutOfRange => write!(f, "value out of range for destination type"),
            BigIntError::ShiftCountOutOfRange => write!(f, "shift count out of range"),
            BigIntError::BufferTooSmall => write!(f, "buffer too small"),
            BigIntError::InvalidDigit => write!(f, "invalid digit for radix"),
            BigIntError::UnsupportedRadix => write!(f, "unsupported radix"),
            BigIntError::MalformedNumber => write!(f, "malformed number"),
            BigIntError::DoubleConversionOverflow => {
                write!(f, "value exceeds the dynamic range of f64")
            }
        }
    }
}

impl std::error::Error for BigIntError {}
