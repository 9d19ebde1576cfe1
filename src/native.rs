// This file is part of the bfloat16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Backend on the `bf16` storage type of the `half` crate
//!
//! `half` keeps NaN payloads where this crate canonicalizes them, so every
//! NaN leaving this backend is replaced with the canonical quiet NaN.
//! Binary64 input is narrowed to binary32 first, as the emulation does.

use crate::backend::Backend;
use crate::detail::CANONICAL_NAN;
use half::bf16;

/// Native bf16 backend
#[derive(Debug, Clone, Copy)]
pub enum Native {}

#[inline]
fn canonical(x: bf16) -> u16 {
    if x.is_nan() {
        CANONICAL_NAN
    } else {
        x.to_bits()
    }
}

impl Backend for Native {
    const NATIVE: bool = true;

    #[inline]
    fn from_f32(v: f32) -> u16 {
        canonical(bf16::from_f32(v))
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(v: f64) -> u16 {
        Self::from_f32(v as f32)
    }

    #[inline]
    fn to_f32(v: u16) -> f32 {
        bf16::from_bits(v).to_f32()
    }

    #[inline]
    fn to_f64(v: u16) -> f64 {
        bf16::from_bits(v).to_f64()
    }

    #[inline]
    fn add(a: u16, b: u16) -> u16 {
        canonical(bf16::from_bits(a) + bf16::from_bits(b))
    }

    #[inline]
    fn sub(a: u16, b: u16) -> u16 {
        canonical(bf16::from_bits(a) - bf16::from_bits(b))
    }

    #[inline]
    fn mul(a: u16, b: u16) -> u16 {
        canonical(bf16::from_bits(a) * bf16::from_bits(b))
    }

    #[inline]
    fn div(a: u16, b: u16) -> u16 {
        canonical(bf16::from_bits(a) / bf16::from_bits(b))
    }

    #[inline]
    fn rem(a: u16, b: u16) -> u16 {
        canonical(bf16::from_bits(a) % bf16::from_bits(b))
    }

    #[inline]
    fn mul_add(a: u16, b: u16, c: u16) -> u16 {
        let [a, b, c] = [a, b, c].map(|x| bf16::from_bits(x).to_f32());
        Self::from_f32(libm::fmaf(a, b, c))
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn sqrt(a: u16) -> u16 {
        Self::from_f32(libm::sqrt(bf16::from_bits(a).to_f64()) as f32)
    }

    #[inline]
    fn neg(a: u16) -> u16 {
        (-bf16::from_bits(a)).to_bits()
    }

    #[inline]
    fn abs(a: u16) -> u16 {
        bf16::from_bits(a).to_bits() & !bf16::NEG_ZERO.to_bits()
    }

    #[inline]
    fn eq(a: u16, b: u16) -> bool {
        bf16::from_bits(a) == bf16::from_bits(b)
    }

    #[inline]
    fn lt(a: u16, b: u16) -> bool {
        bf16::from_bits(a) < bf16::from_bits(b)
    }

    #[inline]
    fn le(a: u16, b: u16) -> bool {
        bf16::from_bits(a) <= bf16::from_bits(b)
    }

    #[inline]
    fn gt(a: u16, b: u16) -> bool {
        bf16::from_bits(a) > bf16::from_bits(b)
    }

    #[inline]
    fn ge(a: u16, b: u16) -> bool {
        bf16::from_bits(a) >= bf16::from_bits(b)
    }
}
