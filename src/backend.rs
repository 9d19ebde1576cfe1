// This file is part of the bfloat16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Compile-time selection of the bf16 implementation
//!
//! [`BF16`][crate::BF16] forwards every conversion and operator to the
//! [`Selected`] backend.  The software [`Emulated`] backend is always built.
//! Enabling the `native` feature swaps in `native::Native`, which must
//! produce bit-identical results for identical inputs.

use crate::{codec, ops};

/// Strategy implementing the bf16 codec and operators on raw bits
pub trait Backend {
    /// Whether this backend is backed by a native bf16 type
    const NATIVE: bool;

    fn from_f32(v: f32) -> u16;
    fn from_f64(v: f64) -> u16;
    fn to_f32(v: u16) -> f32;
    fn to_f64(v: u16) -> f64;

    fn add(a: u16, b: u16) -> u16;
    fn sub(a: u16, b: u16) -> u16;
    fn mul(a: u16, b: u16) -> u16;
    fn div(a: u16, b: u16) -> u16;
    fn rem(a: u16, b: u16) -> u16;
    fn mul_add(a: u16, b: u16, c: u16) -> u16;
    fn sqrt(a: u16) -> u16;
    fn neg(a: u16) -> u16;
    fn abs(a: u16) -> u16;

    fn eq(a: u16, b: u16) -> bool;
    fn lt(a: u16, b: u16) -> bool;
    fn le(a: u16, b: u16) -> bool;
    fn gt(a: u16, b: u16) -> bool;
    fn ge(a: u16, b: u16) -> bool;
}

/// Software emulation through binary32
#[derive(Debug, Clone, Copy)]
pub enum Emulated {}

impl Backend for Emulated {
    const NATIVE: bool = false;

    #[inline]
    fn from_f32(v: f32) -> u16 {
        codec::encode(v)
    }

    #[inline]
    fn from_f64(v: f64) -> u16 {
        codec::encode_f64(v)
    }

    #[inline]
    fn to_f32(v: u16) -> f32 {
        codec::decode(v)
    }

    #[inline]
    fn to_f64(v: u16) -> f64 {
        codec::decode_f64(v)
    }

    #[inline]
    fn add(a: u16, b: u16) -> u16 {
        ops::add(a, b)
    }

    #[inline]
    fn sub(a: u16, b: u16) -> u16 {
        ops::sub(a, b)
    }

    #[inline]
    fn mul(a: u16, b: u16) -> u16 {
        ops::mul(a, b)
    }

    #[inline]
    fn div(a: u16, b: u16) -> u16 {
        ops::div(a, b)
    }

    #[inline]
    fn rem(a: u16, b: u16) -> u16 {
        ops::rem(a, b)
    }

    #[inline]
    fn mul_add(a: u16, b: u16, c: u16) -> u16 {
        ops::mul_add(a, b, c)
    }

    #[inline]
    fn sqrt(a: u16) -> u16 {
        ops::sqrt(a)
    }

    #[inline]
    fn neg(a: u16) -> u16 {
        ops::neg(a)
    }

    #[inline]
    fn abs(a: u16) -> u16 {
        ops::abs(a)
    }

    #[inline]
    fn eq(a: u16, b: u16) -> bool {
        ops::eq(a, b)
    }

    #[inline]
    fn lt(a: u16, b: u16) -> bool {
        ops::lt(a, b)
    }

    #[inline]
    fn le(a: u16, b: u16) -> bool {
        ops::le(a, b)
    }

    #[inline]
    fn gt(a: u16, b: u16) -> bool {
        ops::gt(a, b)
    }

    #[inline]
    fn ge(a: u16, b: u16) -> bool {
        ops::ge(a, b)
    }
}

/// Backend chosen at build time
#[cfg(feature = "native")]
pub type Selected = crate::native::Native;

/// Backend chosen at build time
#[cfg(not(feature = "native"))]
pub type Selected = Emulated;

/// Whether [`BF16`][crate::BF16] is backed by a native bf16 type
pub const IS_NATIVE: bool = <Selected as Backend>::NATIVE;

#[cfg(test)]
mod tests {
    use super::*;

    // Plain paths must resolve to the strategy methods alone
    #[test]
    fn dispatch() {
        assert!(Selected::eq(0x0000, 0x8000));
        assert!(!Selected::eq(0x7FC0, 0x7FC0));
        assert!(Selected::lt(0xBF80, 0x3F80));
        assert!(Emulated::ge(0x3F80, 0x3F80));
        assert_eq!(Selected::add(0x3F80, 0x3F80), 0x4000);
        assert_eq!(Emulated::neg(0x3F80), 0xBF80);
        assert_eq!(IS_NATIVE, cfg!(feature = "native"));
    }
}
