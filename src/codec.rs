// This file is part of the bfloat16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bit-exact conversion between bf16 and IEEE 754 binary32/binary64
//!
//! Encoding rounds to nearest, ties to even.  Every NaN encodes to
//! [`BF16::NAN`][crate::BF16::NAN] regardless of its sign or payload, and finite values
//! that round past [`crate::BF16::MAX`] become infinity of the same sign.
//!
//! Decoding is exact.  NaNs decode to quiet binary32 NaNs with the sign bit
//! kept.

use crate::detail::{self, CANONICAL_NAN, QUIET_MASK, SHIFT, SIGNIFICAND_MASK, SIGN_MASK};

/// Encode binary32 as bf16 bits
#[must_use]
pub const fn encode(v: f32) -> u16 {
    if v.is_nan() {
        return CANONICAL_NAN;
    }
    detail::round_f32_bits(v.to_bits())
}

/// Encode binary64 as bf16 bits
///
/// The value is narrowed to binary32 first, so it is rounded twice.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn encode_f64(v: f64) -> u16 {
    encode(v as f32)
}

/// Decode bf16 bits to binary32
#[must_use]
pub const fn decode(v: u16) -> f32 {
    let v = if detail::is_nan(v) { v | QUIET_MASK } else { v };
    f32::from_bits((v as u32) << SHIFT)
}

/// Decode bf16 bits to binary64
#[must_use]
pub const fn decode_f64(v: u16) -> f64 {
    // Spelled out for NaN, whose payload `as` does not promise to keep
    if detail::is_nan(v) {
        let sign = ((v & SIGN_MASK) as u64) << 48;
        let payload = ((v & SIGNIFICAND_MASK | QUIET_MASK) as u64) << 45;
        return f64::from_bits(sign | 0x7FF0_0000_0000_0000 | payload);
    }
    decode(v) as f64
}
