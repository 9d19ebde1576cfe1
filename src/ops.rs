// This file is part of the bfloat16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Arithmetic and comparison on bf16 bits
//!
//! Arithmetic decodes the operands to binary32, computes there, and encodes
//! the result once.  Square root goes through binary64 instead.  Negation and
//! absolute value only touch the sign bit.  Comparisons work on the bit
//! patterns directly and follow IEEE 754 partial ordering.

use crate::codec::{decode, decode_f64, encode, encode_f64};
use crate::detail::{self, MAGNITUDE_MASK, SIGN_MASK};

#[must_use]
pub fn add(a: u16, b: u16) -> u16 {
    encode(decode(a) + decode(b))
}

#[must_use]
pub fn sub(a: u16, b: u16) -> u16 {
    encode(decode(a) - decode(b))
}

#[must_use]
pub fn mul(a: u16, b: u16) -> u16 {
    encode(decode(a) * decode(b))
}

#[must_use]
pub fn div(a: u16, b: u16) -> u16 {
    encode(decode(a) / decode(b))
}

/// Truncating remainder, the same as `%` on binary32
#[must_use]
pub fn rem(a: u16, b: u16) -> u16 {
    encode(decode(a) % decode(b))
}

/// Fused multiply-add: `a * b + c` with a single binary32 rounding
#[must_use]
pub fn mul_add(a: u16, b: u16, c: u16) -> u16 {
    encode(libm::fmaf(decode(a), decode(b), decode(c)))
}

/// Square root computed in binary64
#[must_use]
pub fn sqrt(a: u16) -> u16 {
    encode_f64(libm::sqrt(decode_f64(a)))
}

#[must_use]
pub const fn neg(a: u16) -> u16 {
    a ^ SIGN_MASK
}

#[must_use]
pub const fn abs(a: u16) -> u16 {
    a & MAGNITUDE_MASK
}

/// IEEE equality: `+0 == -0` and NaN equals nothing
#[must_use]
pub const fn eq(a: u16, b: u16) -> bool {
    if detail::is_nan(a) || detail::is_nan(b) {
        return false;
    }
    a == b || detail::both_zero(a, b)
}

/// IEEE less-than
#[must_use]
pub const fn lt(a: u16, b: u16) -> bool {
    if detail::is_nan(a) || detail::is_nan(b) {
        return false;
    }
    match (a & SIGN_MASK != 0, b & SIGN_MASK != 0) {
        (false, false) => a < b,
        (false, true) => false,
        (true, false) => !detail::both_zero(a, b),
        (true, true) => a > b,
    }
}

#[must_use]
pub const fn le(a: u16, b: u16) -> bool {
    lt(a, b) || eq(a, b)
}

#[must_use]
pub const fn gt(a: u16, b: u16) -> bool {
    lt(b, a)
}

#[must_use]
pub const fn ge(a: u16, b: u16) -> bool {
    gt(a, b) || eq(a, b)
}
