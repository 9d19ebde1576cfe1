// This file is part of the bfloat16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Implementation details
//!
//! This module is not considered part of the public API.  The masks and
//! helpers here are shared by the codec, the operators, and the backends.

/// Sign bit of a bf16 bit pattern
pub const SIGN_MASK: u16 = 0x8000;

/// Exponent field of a bf16 bit pattern
pub const EXPONENT_MASK: u16 = 0x7F80;

/// Explicit significand field of a bf16 bit pattern
pub const SIGNIFICAND_MASK: u16 = 0x007F;

/// Top significand bit, set in quiet NaNs
pub const QUIET_MASK: u16 = 0x0040;

/// Everything but the sign bit
pub const MAGNITUDE_MASK: u16 = !SIGN_MASK;

/// Canonical quiet NaN produced by every NaN-yielding conversion
pub const CANONICAL_NAN: u16 = 0x7FC0;

/// Number of binary32 bits dropped when narrowing to bf16
pub const SHIFT: u32 = f32::MANTISSA_DIGITS - 8;

/// Check if the bit pattern is NaN
#[must_use]
pub const fn is_nan(x: u16) -> bool {
    x & MAGNITUDE_MASK > EXPONENT_MASK
}

/// Check if both bit patterns are zeros, regardless of their signs
#[must_use]
pub const fn both_zero(x: u16, y: u16) -> bool {
    (x | y) & MAGNITUDE_MASK == 0
}

/// Round binary32 bits to the nearest bf16 bits, ties to even
///
/// The caller must rule out NaN.  Carries from the significand propagate
/// into the exponent, so rounding past [`crate::BF16::MAX`] yields infinity.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn round_f32_bits(x: u32) -> u16 {
    let ulp = 1 << SHIFT;
    let bias = (ulp >> 1) - (!(x >> SHIFT) & 1);
    ((x + bias) >> SHIFT) as u16
}
