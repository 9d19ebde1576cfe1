// This file is part of the bfloat16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
#![cfg(test)]
#![allow(clippy::float_cmp)]

use crate::{Error, BF16};
use core::num::FpCategory;

#[test]
#[allow(clippy::unusual_byte_groupings)]
fn test_finite_bits() {
    assert_eq!(BF16::from_f32(2.0).to_bits(), 0b0_10000000_0000000);
    assert_eq!(BF16::from_f32(1.0).to_bits(), 0b0_01111111_0000000);
    assert_eq!(BF16::from_f32(-1.25).to_bits(), 0b1_01111111_0100000);
    assert_eq!(BF16::from_parts(true, 0x7F, 0b0100000), BF16::from_f32(-1.25));
    assert_eq!(BF16::from_parts(false, 0x1FF, 0xFF).to_bits(), 0x7FFF);
}

#[test]
fn test_fields() {
    let x = BF16::from_f32(-6.0);
    assert!(x.is_sign_negative());
    assert_eq!(x.exponent_bits(), 0x81);
    assert_eq!(x.significand_bits(), 0b1000000);
    assert_eq!(x.exponent(), 2);

    assert_eq!(BF16::MIN_POSITIVE.exponent(), -126);
    assert_eq!(BF16::MIN_POSITIVE_SUBNORMAL.exponent(), -133);
    assert_eq!(BF16::from_bits(0x0040).exponent(), -127);
    assert_eq!(BF16::ZERO.exponent(), i32::MIN);
    assert_eq!(BF16::NAN.exponent(), i32::MAX);
    assert_eq!(BF16::NEG_INFINITY.exponent(), i32::MAX);
}

#[test]
fn test_decomposition() {
    let x = BF16::from_f32(-6.0);
    assert_eq!(x.significand(), BF16::from_f32(1.5));
    assert_eq!(x.binade(), BF16::from_f32(-4.0));
    assert_eq!(x.significand_width(), 1);
    assert_eq!(BF16::ONE.significand_width(), 0);
    assert_eq!(BF16::MAX.significand_width(), 7);

    // Subnormals
    let x = BF16::from_bits(0x0041);
    assert_eq!(x.significand().to_bits(), 0x3F82);
    assert_eq!(x.binade().to_bits(), 0x0040);
    assert_eq!(x.significand_width(), 6);
    assert_eq!(BF16::from_bits(0x0005).significand().to_f32(), 1.25);
    assert_eq!(BF16::from_bits(0x0005).significand_width(), 2);
    assert_eq!(BF16::from_bits(0x8003).binade().to_bits(), 0x8002);
    assert_eq!(BF16::MIN_POSITIVE_SUBNORMAL.significand(), BF16::ONE);
    assert_eq!(BF16::MIN_POSITIVE_SUBNORMAL.binade(), BF16::MIN_POSITIVE_SUBNORMAL);
    assert_eq!(BF16::MIN_POSITIVE_SUBNORMAL.significand_width(), 0);

    // Specials
    assert_eq!(BF16::NEG_ZERO.significand().to_bits(), 0);
    assert_eq!(BF16::NEG_ZERO.binade().to_bits(), 0x8000);
    assert_eq!(BF16::NEG_INFINITY.significand(), BF16::INFINITY);
    assert!(BF16::NAN.significand().is_nan());
    assert!(BF16::INFINITY.binade().is_nan());
    assert_eq!(BF16::ZERO.significand_width(), -1);
    assert_eq!(BF16::INFINITY.significand_width(), -1);
    assert_eq!(BF16::NAN.significand_width(), -1);
}

#[test]
fn test_from_sign_exponent_significand() {
    let one = BF16::ONE;
    assert_eq!(BF16::from_sign_exponent_significand(true, 1, BF16::from_f32(1.5)), BF16::from_f32(-3.0));
    assert_eq!(BF16::from_sign_exponent_significand(true, -133, one).to_bits(), 0x8001);
    assert_eq!(BF16::from_sign_exponent_significand(false, -127, BF16::from_bits(0x3F82)).to_bits(), 0x0041);
    assert_eq!(BF16::from_sign_exponent_significand(false, 128, one), BF16::INFINITY);
    assert_eq!(BF16::from_sign_exponent_significand(true, 5, BF16::ZERO).to_bits(), 0x8000);
    assert!(BF16::from_sign_exponent_significand(false, 0, BF16::NAN).is_nan());
}

#[test]
fn test_classify() {
    assert_eq!(BF16::ZERO.classify(), FpCategory::Zero);
    assert_eq!(BF16::NEG_ZERO.classify(), FpCategory::Zero);
    assert_eq!(BF16::MIN_POSITIVE_SUBNORMAL.classify(), FpCategory::Subnormal);
    assert_eq!(BF16::MIN_POSITIVE.classify(), FpCategory::Normal);
    assert_eq!(BF16::NEG_INFINITY.classify(), FpCategory::Infinite);
    assert_eq!(BF16::SIGNALING_NAN.classify(), FpCategory::Nan);

    assert!(BF16::SIGNALING_NAN.is_signaling_nan());
    assert!(!BF16::NAN.is_signaling_nan());
    assert!(!BF16::INFINITY.is_signaling_nan());
    assert!(BF16::MAX.is_normal());
    assert!(!BF16::INFINITY.is_finite());
    assert!(BF16::from_bits(0x007F).is_subnormal());
}

#[test]
fn test_ulp() {
    assert_eq!(BF16::ONE.ulp(), BF16::EPSILON);
    assert_eq!(BF16::from_f32(-3.0).ulp(), BF16::from_f32(0.015_625));
    assert_eq!(BF16::MAX.ulp().to_f32(), f32::from_bits(247 << 23));
    assert_eq!(BF16::MIN_POSITIVE.ulp(), BF16::MIN_POSITIVE_SUBNORMAL);
    assert_eq!(BF16::from_bits(0x0400).ulp().to_f32(), f32::from_bits(1 << 23));
    assert_eq!(BF16::from_bits(0x0380).ulp().to_f32(), f32::from_bits(1 << 22));
    assert_eq!(BF16::ZERO.ulp(), BF16::MIN_POSITIVE_SUBNORMAL);
    assert!(BF16::INFINITY.ulp().is_nan());
}

#[test]
fn test_next() {
    assert_eq!(BF16::ONE.next_up().to_f32(), 1.0078125);
    assert_eq!(BF16::ONE.next_down().to_f32(), 0.99609375);
    assert_eq!(BF16::NEG_ONE.next_up().to_f32(), -0.99609375);
    assert_eq!(BF16::NEG_ZERO.next_up(), BF16::MIN_POSITIVE_SUBNORMAL);
    assert_eq!(BF16::ZERO.next_down(), -BF16::MIN_POSITIVE_SUBNORMAL);
    assert_eq!(BF16::MAX.next_up(), BF16::INFINITY);
    assert_eq!(BF16::INFINITY.next_up(), BF16::INFINITY);
    assert_eq!(BF16::NEG_INFINITY.next_up(), BF16::MIN);
    assert_eq!(BF16::NEG_INFINITY.next_down(), BF16::NEG_INFINITY);
    assert_eq!(BF16::SIGNALING_NAN.next_up().to_bits(), BF16::NAN.to_bits());
    assert_eq!(BF16::MIN_POSITIVE_SUBNORMAL.next_down().to_bits(), 0);
}

#[test]
fn test_rounding() {
    let x = BF16::from_f32(2.5);
    assert_eq!(x.round(), BF16::from_f32(3.0));
    assert_eq!(x.round_ties_even(), BF16::from_f32(2.0));
    assert_eq!(x.floor(), BF16::from_f32(2.0));
    assert_eq!(x.ceil(), BF16::from_f32(3.0));
    assert_eq!((-x).trunc(), BF16::from_f32(-2.0));
    assert_eq!((-x).floor(), BF16::from_f32(-3.0));
    assert_eq!(BF16::from_f32(127.5).round(), BF16::from_f32(128.0));
    assert!(BF16::NAN.floor().is_nan());
}

#[test]
fn test_remainders() {
    let seven = BF16::from_f32(7.0);
    let two = BF16::from_f32(2.0);
    assert_eq!(seven % two, BF16::ONE);
    assert_eq!(seven.remainder(two), BF16::NEG_ONE);
    assert!(seven.remainder(BF16::ZERO).is_nan());
}

#[test]
fn test_scalbn() {
    assert_eq!(BF16::ONE.scalbn(-133), BF16::MIN_POSITIVE_SUBNORMAL);
    assert_eq!(BF16::ONE.scalbn(-135), BF16::ZERO);
    assert_eq!(BF16::PI.scalbn(3).to_f32(), 25.125);
    assert_eq!(BF16::MAX.scalbn(1), BF16::INFINITY);
    assert_eq!(BF16::NEG_ZERO.scalbn(9).to_bits(), 0x8000);
}

#[test]
fn test_sign_helpers() {
    assert_eq!(BF16::PI.signum(), BF16::ONE);
    assert_eq!(BF16::NEG_ZERO.signum(), BF16::NEG_ONE);
    assert!(BF16::NAN.signum().is_nan());
    assert_eq!(BF16::PI.copysign(BF16::NEG_ZERO).to_f32(), -3.140625);
    assert_eq!(BF16::NEG_INFINITY.abs(), BF16::INFINITY);
}

#[test]
fn test_min_max() {
    let two = BF16::from_f32(2.0);
    assert_eq!(BF16::ONE.min(two), BF16::ONE);
    assert_eq!(BF16::ONE.max(two), two);
    assert_eq!(BF16::NAN.min(two), two);
    assert_eq!(two.max(BF16::NAN), two);
    assert!(BF16::NAN.max(BF16::NAN).is_nan());
}

#[test]
fn test_checked() {
    assert_eq!(BF16::checked_from_f32(1.5), Ok(BF16::from_f32(1.5)));
    assert_eq!(BF16::checked_from_f32(f32::MAX), Err(Error::OutOfRange { value: f32::MAX.into() }));
    assert_eq!(BF16::checked_from_f32(f32::NEG_INFINITY), Ok(BF16::NEG_INFINITY));
    assert!(BF16::checked_from_f64(f64::NAN).is_ok_and(BF16::is_nan));
    assert!(matches!(BF16::checked_from_f64(1e39), Err(Error::OutOfRange { .. })));

    assert_eq!(BF16::from_f32_exact(-0.75), Ok(BF16::from_f32(-0.75)));
    assert_eq!(BF16::from_f32_exact(1.001), Err(Error::Inexact { value: 1.001_f32.into() }));
    assert_eq!(BF16::from_f64_exact(-0.0).map(BF16::to_bits), Ok(0x8000));
    assert!(matches!(BF16::from_f64_exact(0.1), Err(Error::Inexact { .. })));
}

#[test]
fn sanity() {
    let x: f64 = BF16::from_f32(2.0).into();
    assert_eq!(x, 2.0);
    assert_eq!(crate::IS_NATIVE, cfg!(feature = "native"));
}
