// This file is part of the bfloat16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Brain floating point with bit-exact software emulation
//!
//! [`BF16`] keeps the sign and the 8-bit exponent of [`f32`] but only 7
//! explicit significand bits.  Conversion from binary32 rounds to nearest,
//! ties to even.  Arithmetic is carried out in binary32 and rounded once.
//!
//! The [`codec`] and [`ops`] modules expose the same operations on raw
//! `u16` bits.  [`backend`] selects at build time whether [`BF16`] runs on
//! the software emulation or on a native bf16 type (feature `native`).  Both
//! give bit-identical results.
#![no_std]

mod arith;
#[cfg(target_has_atomic = "16")]
mod atomic;
pub mod backend;
pub mod codec;
mod detail;
mod error;
#[cfg(feature = "native")]
pub mod native;
mod num;
pub mod ops;
#[cfg(feature = "serde")]
mod serialization;
mod test;

use core::cmp::Ordering;
use core::num::FpCategory;

use backend::{Backend, Selected};
use detail::{EXPONENT_MASK, MAGNITUDE_MASK, QUIET_MASK, SIGNIFICAND_MASK, SIGN_MASK};

#[cfg(target_has_atomic = "16")]
pub use atomic::AtomicBF16;
pub use backend::IS_NATIVE;
pub use error::Error;

/// 16-bit brain floating point
///
/// The bit layout is the top half of an [`f32`]: 1 sign bit, 8 exponent
/// bits biased by 127, and 7 explicit significand bits.
#[derive(Debug, Clone, Copy, Default)]
#[repr(transparent)]
pub struct BF16(u16);

impl BF16 {
    pub const RADIX: u32 = 2;
    pub const MANTISSA_DIGITS: u32 = 8;
    pub const EXPONENT_BITS: u32 = 8;
    pub const SIGNIFICAND_BITS: u32 = 7;
    pub const EXPONENT_BIAS: i32 = 127;
    pub const MAX_EXP: i32 = f32::MAX_EXP;
    pub const MIN_EXP: i32 = f32::MIN_EXP;

    pub const ZERO: Self = Self(0x0000);
    pub const NEG_ZERO: Self = Self(0x8000);
    pub const ONE: Self = Self(0x3F80);
    pub const NEG_ONE: Self = Self(0xBF80);

    /// Difference between 1.0 and the next larger value, 2<sup>-7</sup>
    pub const EPSILON: Self = Self(0x3C00);

    /// π rounded to bf16, 3.140625
    pub const PI: Self = Self(0x4049);

    /// Canonical quiet NaN, the only NaN conversions produce
    pub const NAN: Self = Self(detail::CANONICAL_NAN);

    /// Negative signaling NaN
    pub const SIGNALING_NAN: Self = Self(0xFF81);

    pub const INFINITY: Self = Self(0x7F80);
    pub const NEG_INFINITY: Self = Self(0xFF80);

    /// Largest finite value
    pub const MAX: Self = Self(0x7F7F);

    /// Smallest finite value
    pub const MIN: Self = Self(0xFF7F);

    /// Smallest positive normal value, 2<sup>-126</sup>
    pub const MIN_POSITIVE: Self = Self(0x0080);

    /// Smallest positive value, 2<sup>-133</sup>
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);

    #[must_use]
    pub const fn from_bits(v: u16) -> Self {
        Self(v)
    }

    #[must_use]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Assemble a value from its sign and raw fields
    ///
    /// Fields wider than their widths are truncated.
    #[must_use]
    pub const fn from_parts(negative: bool, exponent: u16, significand: u16) -> Self {
        let sign = if negative { SIGN_MASK } else { 0 };
        let exponent = (exponent << Self::SIGNIFICAND_BITS) & EXPONENT_MASK;
        Self(sign | exponent | significand & SIGNIFICAND_MASK)
    }

    /// Raw biased exponent field
    #[must_use]
    pub const fn exponent_bits(self) -> u16 {
        (self.0 & EXPONENT_MASK) >> Self::SIGNIFICAND_BITS
    }

    /// Raw explicit significand field
    #[must_use]
    pub const fn significand_bits(self) -> u16 {
        self.0 & SIGNIFICAND_MASK
    }

    /// Round from [`f32`] to the nearest value, ties to even
    ///
    /// Every NaN maps to [`BF16::NAN`].  Finite values rounding beyond
    /// [`BF16::MAX`] become infinity.
    #[must_use]
    pub fn from_f32(v: f32) -> Self {
        Self(Selected::from_f32(v))
    }

    /// Round from [`f64`] via [`f32`]
    #[must_use]
    pub fn from_f64(v: f64) -> Self {
        Self(Selected::from_f64(v))
    }

    /// Exact conversion to [`f32`]
    #[must_use]
    pub fn to_f32(self) -> f32 {
        Selected::to_f32(self.0)
    }

    /// Exact conversion to [`f64`]
    #[must_use]
    pub fn to_f64(self) -> f64 {
        Selected::to_f64(self.0)
    }

    /// Like [`BF16::from_f32`] but refuse finite values that would overflow
    ///
    /// NaN and infinities pass through.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `v` is finite and rounds to infinity.
    pub fn checked_from_f32(v: f32) -> Result<Self, Error> {
        Self::checked_from_f64(v.into())
    }

    /// Like [`BF16::from_f64`] but refuse finite values that would overflow
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `v` is finite and rounds to infinity.
    pub fn checked_from_f64(v: f64) -> Result<Self, Error> {
        let x = Self::from_f64(v);

        if v.is_finite() && x.is_infinite() {
            log::debug!("rejecting {v}: beyond the finite range of bf16");
            return Err(Error::OutOfRange { value: v });
        }
        Ok(x)
    }

    /// Convert from [`f32`] only if no rounding happens
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] on overflow, [`Error::Inexact`] if `v` has more
    /// significant bits than bf16 holds.
    pub fn from_f32_exact(v: f32) -> Result<Self, Error> {
        Self::from_f64_exact(v.into())
    }

    /// Convert from [`f64`] only if no rounding happens
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] on overflow, [`Error::Inexact`] if `v` has more
    /// significant bits than bf16 holds.
    pub fn from_f64_exact(v: f64) -> Result<Self, Error> {
        let x = Self::checked_from_f64(v)?;

        if !v.is_nan() && x.to_f64().to_bits() != v.to_bits() {
            log::debug!("rejecting {v}: not exactly representable in bf16");
            return Err(Error::Inexact { value: v });
        }
        Ok(x)
    }

    #[must_use]
    pub const fn is_nan(self) -> bool {
        detail::is_nan(self.0)
    }

    /// Check if the value is a NaN with the quiet bit clear
    #[must_use]
    pub const fn is_signaling_nan(self) -> bool {
        self.is_nan() && self.0 & QUIET_MASK == 0
    }

    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.0 & MAGNITUDE_MASK == EXPONENT_MASK
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0 & EXPONENT_MASK != EXPONENT_MASK
    }

    #[must_use]
    pub const fn is_normal(self) -> bool {
        let exponent = self.0 & EXPONENT_MASK;
        exponent != 0 && exponent != EXPONENT_MASK
    }

    #[must_use]
    pub const fn is_subnormal(self) -> bool {
        self.0 & EXPONENT_MASK == 0 && self.0 & SIGNIFICAND_MASK != 0
    }

    /// Check if the value is ±0
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 & MAGNITUDE_MASK == 0
    }

    #[must_use]
    pub const fn classify(self) -> FpCategory {
        match (self.0 & EXPONENT_MASK, self.0 & SIGNIFICAND_MASK) {
            (0, 0) => FpCategory::Zero,
            (0, _) => FpCategory::Subnormal,
            (EXPONENT_MASK, 0) => FpCategory::Infinite,
            (EXPONENT_MASK, _) => FpCategory::Nan,
            _ => FpCategory::Normal,
        }
    }

    #[must_use]
    pub const fn is_sign_positive(self) -> bool {
        self.0 & SIGN_MASK == 0
    }

    #[must_use]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// Unbiased binary exponent
    ///
    /// Subnormals are normalized.  Zeros give [`i32::MIN`], and infinities
    /// and NaNs give [`i32::MAX`].
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn exponent(self) -> i32 {
        if !self.is_finite() {
            return i32::MAX;
        }
        if self.is_zero() {
            return i32::MIN;
        }

        let biased = self.exponent_bits() as i32;

        if biased != 0 {
            return biased - Self::EXPONENT_BIAS;
        }
        // 2^-133 has 15 leading zeros in its significand
        -118 - self.significand_bits().leading_zeros() as i32
    }

    /// Significand scaled into [1, 2)
    ///
    /// Subnormals are normalized.  NaN is returned as is, while zeros and
    /// infinities lose their signs but keep their exponents.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn significand(self) -> Self {
        if self.is_nan() {
            return self;
        }
        let fraction = self.significand_bits();
        let bias = Self::EXPONENT_BIAS as u16;

        match self.exponent_bits() {
            0 if fraction != 0 => {
                // Move the leading 1 to the implicit bit
                let shift = fraction.leading_zeros() - 8;
                Self::from_parts(false, bias, fraction << shift)
            }
            0 | 0xFF => Self(self.0 & EXPONENT_MASK),
            _ => Self::from_parts(false, bias, fraction),
        }
    }

    /// Largest signed power of 2 not exceeding the magnitude
    ///
    /// NaN if `self` is not finite.
    #[must_use]
    pub const fn binade(self) -> Self {
        if !self.is_finite() {
            return Self::NAN;
        }
        if self.is_subnormal() {
            let top: u16 = 1 << (15 - self.significand_bits().leading_zeros());
            return Self(self.0 & SIGN_MASK | top);
        }
        Self(self.0 & (SIGN_MASK | EXPONENT_MASK))
    }

    /// Number of significand bits after the leading 1 up to the last 1
    ///
    /// -1 for zeros, infinities, and NaNs.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn significand_width(self) -> i32 {
        let fraction = self.significand_bits();

        if self.is_normal() {
            if fraction == 0 {
                return 0;
            }
            return Self::SIGNIFICAND_BITS as i32 - fraction.trailing_zeros() as i32;
        }
        if self.is_subnormal() {
            let spread = fraction.trailing_zeros() + fraction.leading_zeros() + 1;
            return (u16::BITS - spread) as i32;
        }
        -1
    }

    /// Compute ±`significand` × 2<sup>`exponent`</sup>, rounded once
    ///
    /// This inverts the decomposition into [`BF16::is_sign_negative`],
    /// [`BF16::exponent`], and [`BF16::significand`] for finite nonzero
    /// values.  A negative sign flips the sign of `significand`.
    #[must_use]
    pub fn from_sign_exponent_significand(negative: bool, exponent: i32, significand: Self) -> Self {
        let signed = if negative { -significand } else { significand };
        signed.scalbn(exponent)
    }

    /// Unit in the last place
    ///
    /// The distance from `self` to the next value away from zero.  It is NaN
    /// if `self` is not finite.
    #[must_use]
    pub const fn ulp(self) -> Self {
        let biased = self.exponent_bits();

        match biased {
            0xFF => Self::NAN,
            0 => Self::MIN_POSITIVE_SUBNORMAL,
            1..=7 => Self(1 << (biased - 1)),
            _ => Self((biased - 7) << Self::SIGNIFICAND_BITS),
        }
    }

    /// Least value greater than `self`
    ///
    /// NaN gives [`BF16::NAN`], ±0 gives [`BF16::MIN_POSITIVE_SUBNORMAL`],
    /// and +∞ stays.
    #[must_use]
    pub const fn next_up(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self::MIN_POSITIVE_SUBNORMAL;
        }
        match self.0 {
            0x7F80 => self,
            x if x & SIGN_MASK != 0 => Self(x - 1),
            x => Self(x + 1),
        }
    }

    /// Greatest value less than `self`
    ///
    /// NaN gives [`BF16::NAN`], ±0 gives the negative of
    /// [`BF16::MIN_POSITIVE_SUBNORMAL`], and -∞ stays.
    #[must_use]
    pub const fn next_down(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self(SIGN_MASK | 1);
        }
        match self.0 {
            0xFF80 => self,
            x if x & SIGN_MASK != 0 => Self(x + 1),
            x => Self(x - 1),
        }
    }

    /// Clear the sign bit
    #[must_use]
    pub fn abs(self) -> Self {
        Self(Selected::abs(self.0))
    }

    /// Square root, computed in binary64
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self(Selected::sqrt(self.0))
    }

    /// Fused multiply-add: `self * a + b` with a single rounding in binary32
    #[must_use]
    pub fn mul_add(self, a: Self, b: Self) -> Self {
        Self(Selected::mul_add(self.0, a.0, b.0))
    }

    /// IEEE 754 remainder, taking the quotient rounded to nearest
    ///
    /// The `%` operator truncates the quotient instead.
    #[must_use]
    pub fn remainder(self, other: Self) -> Self {
        Self::from_f32(libm::remainderf(self.to_f32(), other.to_f32()))
    }

    /// Multiply by 2<sup>`n`</sup>
    #[must_use]
    pub fn scalbn(self, n: i32) -> Self {
        Self::from_f32(libm::scalbnf(self.to_f32(), n))
    }

    /// Round half away from zero
    #[must_use]
    pub fn round(self) -> Self {
        Self::from_f32(libm::roundf(self.to_f32()))
    }

    /// Round half to even
    #[must_use]
    pub fn round_ties_even(self) -> Self {
        Self::from_f32(libm::rintf(self.to_f32()))
    }

    #[must_use]
    pub fn floor(self) -> Self {
        Self::from_f32(libm::floorf(self.to_f32()))
    }

    #[must_use]
    pub fn ceil(self) -> Self {
        Self::from_f32(libm::ceilf(self.to_f32()))
    }

    #[must_use]
    pub fn trunc(self) -> Self {
        Self::from_f32(libm::truncf(self.to_f32()))
    }

    /// 1 for positive values, -1 for negative values, NaN for NaN
    #[must_use]
    pub const fn signum(self) -> Self {
        if self.is_nan() {
            self
        } else if self.is_sign_negative() {
            Self::NEG_ONE
        } else {
            Self::ONE
        }
    }

    /// Magnitude of `self` with the sign of `sign`
    #[must_use]
    pub const fn copysign(self, sign: Self) -> Self {
        Self(self.0 & MAGNITUDE_MASK | sign.0 & SIGN_MASK)
    }

    /// Minimum of two values, ignoring NaN
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.is_nan() || other < self {
            other
        } else {
            self
        }
    }

    /// Maximum of two values, ignoring NaN
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self.is_nan() || other > self {
            other
        } else {
            self
        }
    }

    /// IEEE 754 total order
    ///
    /// Unlike [`PartialOrd`], this orders -0 before +0 and places NaNs at
    /// both ends according to their signs.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub const fn total_cmp(&self, other: &Self) -> Ordering {
        let mut left = self.0 as i16;
        let mut right = other.0 as i16;
        left ^= (((left >> 15) as u16) >> 1) as i16;
        right ^= (((right >> 15) as u16) >> 1) as i16;

        if left < right {
            Ordering::Less
        } else if left > right {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
