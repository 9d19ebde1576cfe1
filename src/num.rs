// This file is part of the bfloat16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! [`num_traits`] implementations
//!
//! Integers convert with a single rounding.  [`NumCast`] only sees the
//! source through [`ToPrimitive`], so it goes through [`f64`] instead.

use crate::arith::round_integer;
use crate::BF16;
use core::cmp::Ordering;
use num_traits::float::TotalOrder;
use num_traits::{
    Bounded, FromPrimitive, Inv, MulAdd, MulAddAssign, NumCast, One, ToPrimitive, Zero,
};

impl Zero for BF16 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(*self)
    }
}

impl One for BF16 {
    fn one() -> Self {
        Self::ONE
    }
}

impl Bounded for BF16 {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl ToPrimitive for BF16 {
    fn to_i64(&self) -> Option<i64> {
        Self::to_f32(*self).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        Self::to_f32(*self).to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        Self::to_f32(*self).to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        Self::to_f32(*self).to_u128()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(Self::to_f32(*self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Self::to_f64(*self))
    }
}

impl FromPrimitive for BF16 {
    fn from_i64(n: i64) -> Option<Self> {
        Some(round_integer(n < 0, n.unsigned_abs().into()))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(round_integer(false, n.into()))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(round_integer(n < 0, n.unsigned_abs()))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(round_integer(false, n))
    }

    fn from_f32(n: f32) -> Option<Self> {
        Some(Self::from_f32(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Some(Self::from_f64(n))
    }
}

impl NumCast for BF16 {
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        n.to_f64().map(Self::from_f64)
    }
}

impl MulAdd for BF16 {
    type Output = Self;

    fn mul_add(self, a: Self, b: Self) -> Self {
        Self::mul_add(self, a, b)
    }
}

impl MulAddAssign for BF16 {
    fn mul_add_assign(&mut self, a: Self, b: Self) {
        *self = Self::mul_add(*self, a, b);
    }
}

impl Inv for BF16 {
    type Output = Self;

    fn inv(self) -> Self {
        Self::ONE / self
    }
}

impl TotalOrder for BF16 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        Self::total_cmp(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities() {
        assert!(<BF16 as Zero>::zero().is_zero());
        assert!(Zero::is_zero(&BF16::NEG_ZERO));
        assert_eq!(<BF16 as One>::one(), BF16::ONE);
        assert_eq!(BF16::max_value(), BF16::MAX);
        assert_eq!(BF16::min_value(), BF16::MIN);
    }

    #[test]
    fn primitives() {
        assert_eq!(ToPrimitive::to_i32(&BF16::from_f32(-3.5)), Some(-3));
        assert_eq!(ToPrimitive::to_u8(&BF16::from_f32(300.0)), None);
        assert_eq!(ToPrimitive::to_i64(&BF16::NAN), None);
        assert_eq!(<BF16 as FromPrimitive>::from_i32(-7), Some(BF16::from_f32(-7.0)));
        assert_eq!(<BF16 as FromPrimitive>::from_u64(257), Some(BF16::from_f32(256.0)));
        assert_eq!(<BF16 as NumCast>::from(0.5_f64), Some(BF16::from_f32(0.5)));
    }

    #[test]
    fn wide_integers_round_once() {
        let n = (1 << 24) + (1 << 16) + 1;
        assert_eq!(<BF16 as FromPrimitive>::from_i64(n), Some(BF16::from_f32(16_908_288.0)));
        assert_eq!(<BF16 as FromPrimitive>::from_i64(-n), Some(BF16::from_f32(-16_908_288.0)));
        assert_eq!(<BF16 as FromPrimitive>::from_u64(u64::MAX), Some(BF16::from_f64(1.844_674_407_370_955_2e19)));
        assert_eq!(<BF16 as FromPrimitive>::from_u128(u128::MAX), Some(BF16::INFINITY));
        assert_eq!(<BF16 as FromPrimitive>::from_i128(i128::MIN), Some(BF16::from_f32(-f32::from_bits(254 << 23))));

        for n in [0_u64, 255, 257, 0xFF00, 1 << 40, (1 << 40) + 1] {
            let exact = BF16::try_from(n).ok();
            assert!(exact.is_none() || <BF16 as FromPrimitive>::from_u64(n) == exact);
        }
    }

    #[test]
    fn fused() {
        let two = BF16::from_f32(2.0);
        let mut x = BF16::ONE;
        x.mul_add_assign(two, two);
        assert_eq!(x, BF16::from_f32(4.0));
        assert_eq!(MulAdd::mul_add(two, two, BF16::ONE), BF16::from_f32(5.0));
        assert_eq!(two.inv(), BF16::from_f32(0.5));
    }

    #[test]
    fn total_order() {
        assert_eq!(TotalOrder::total_cmp(&BF16::NEG_ZERO, &BF16::ZERO), Ordering::Less);
        assert_eq!(TotalOrder::total_cmp(&BF16::NAN, &BF16::INFINITY), Ordering::Greater);
        assert_eq!(TotalOrder::total_cmp(&BF16::SIGNALING_NAN, &BF16::NEG_INFINITY), Ordering::Less);
    }
}
