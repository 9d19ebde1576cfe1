// This file is part of the bfloat16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Operator traits and conversions for [`BF16`]

use crate::backend::{Backend, Selected};
use crate::{Error, BF16};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

impl PartialEq for BF16 {
    fn eq(&self, other: &Self) -> bool {
        Selected::eq(self.0, other.0)
    }
}

impl PartialOrd for BF16 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            None
        } else if Selected::lt(self.0, other.0) {
            Some(Ordering::Less)
        } else if Selected::gt(self.0, other.0) {
            Some(Ordering::Greater)
        } else {
            Some(Ordering::Equal)
        }
    }

    fn lt(&self, other: &Self) -> bool {
        Selected::lt(self.0, other.0)
    }

    fn le(&self, other: &Self) -> bool {
        Selected::le(self.0, other.0)
    }

    fn gt(&self, other: &Self) -> bool {
        Selected::gt(self.0, other.0)
    }

    fn ge(&self, other: &Self) -> bool {
        Selected::ge(self.0, other.0)
    }
}

/// Zeros hash alike since they compare equal
impl Hash for BF16 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let bits = if self.is_zero() { 0 } else { self.0 };
        bits.hash(state);
    }
}

impl Neg for BF16 {
    type Output = Self;

    fn neg(self) -> Self {
        Self(Selected::neg(self.0))
    }
}

macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $Op for BF16 {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self {
                Self(Selected::$op(self.0, rhs.0))
            }
        }

        impl $OpAssign for BF16 {
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);
impl_binary_op!(Div, div, DivAssign, div_assign);
impl_binary_op!(Rem, rem, RemAssign, rem_assign);

impl From<BF16> for f32 {
    fn from(x: BF16) -> Self {
        x.to_f32()
    }
}

impl From<BF16> for f64 {
    fn from(x: BF16) -> Self {
        x.to_f64()
    }
}

impl From<i8> for BF16 {
    fn from(n: i8) -> Self {
        Self::from_f32(n.into())
    }
}

impl From<u8> for BF16 {
    fn from(n: u8) -> Self {
        Self::from_f32(n.into())
    }
}

/// Round an integer to nearest, ties to even, in a single step
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]
pub(crate) fn round_integer(negative: bool, magnitude: u128) -> BF16 {
    let width = u128::BITS - magnitude.leading_zeros();
    let shift = width.saturating_sub(BF16::MANTISSA_DIGITS);
    let mut kept = magnitude >> shift;

    if shift > 0 {
        let rest = magnitude & ((1 << shift) - 1);
        let half = 1 << (shift - 1);

        if rest > half || rest == half && kept & 1 == 1 {
            kept += 1;
        }
    }

    // `kept` fits in 9 bits, so scaling is exact up to overflow
    let x = BF16::from_f32(libm::scalbnf(kept as f32, shift as i32));
    if negative {
        -x
    } else {
        x
    }
}

/// Integers with at most 8 significant bits convert exactly
macro_rules! impl_try_from_int {
    ($($int:ty),+) => {$(
        impl TryFrom<$int> for BF16 {
            type Error = Error;

            #[allow(clippy::cast_precision_loss)]
            fn try_from(n: $int) -> Result<Self, Error> {
                let wide = i128::from(n);
                let m = wide.unsigned_abs();

                if m != 0 && m >> m.trailing_zeros() > 0xFF {
                    log::debug!("rejecting {n}: not exactly representable in bf16");
                    return Err(Error::Inexact { value: n as f64 });
                }
                Ok(round_integer(wide < 0, m))
            }
        }
    )+};
}

impl_try_from_int!(i16, i32, i64, u16, u32, u64);
