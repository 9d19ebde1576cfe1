// This file is part of the bfloat16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Atomic storage for [`BF16`]

use crate::BF16;
use core::sync::atomic::{AtomicU16, Ordering};

/// [`BF16`] that can be shared between threads
///
/// Values are stored by their bit patterns.  Comparisons in
/// [`AtomicBF16::compare_exchange`] are therefore bitwise: +0 and -0 differ,
/// and a NaN matches an identical NaN.
#[derive(Debug, Default)]
#[repr(transparent)]
pub struct AtomicBF16(AtomicU16);

impl AtomicBF16 {
    #[must_use]
    pub const fn new(v: BF16) -> Self {
        Self(AtomicU16::new(v.to_bits()))
    }

    #[must_use]
    pub fn into_inner(self) -> BF16 {
        BF16::from_bits(self.0.into_inner())
    }

    pub fn load(&self, order: Ordering) -> BF16 {
        BF16::from_bits(self.0.load(order))
    }

    pub fn store(&self, v: BF16, order: Ordering) {
        self.0.store(v.to_bits(), order);
    }

    pub fn swap(&self, v: BF16, order: Ordering) -> BF16 {
        BF16::from_bits(self.0.swap(v.to_bits(), order))
    }

    /// Store `new` if the current bits equal those of `current`
    ///
    /// # Errors
    ///
    /// The actual value if it differs from `current`.
    pub fn compare_exchange(
        &self,
        current: BF16,
        new: BF16,
        success: Ordering,
        failure: Ordering,
    ) -> Result<BF16, BF16> {
        self.0
            .compare_exchange(current.to_bits(), new.to_bits(), success, failure)
            .map(BF16::from_bits)
            .map_err(BF16::from_bits)
    }

    /// Apply `f` until it succeeds in replacing the stored value
    ///
    /// # Errors
    ///
    /// The last loaded value if `f` returns [`None`].
    pub fn fetch_update(
        &self,
        set_order: Ordering,
        fetch_order: Ordering,
        mut f: impl FnMut(BF16) -> Option<BF16>,
    ) -> Result<BF16, BF16> {
        self.0
            .fetch_update(set_order, fetch_order, |bits| {
                f(BF16::from_bits(bits)).map(BF16::to_bits)
            })
            .map(BF16::from_bits)
            .map_err(BF16::from_bits)
    }

    /// Add to the stored value, returning the previous one
    pub fn fetch_add(&self, v: BF16, order: Ordering) -> BF16 {
        let mut previous = self.load(Ordering::Relaxed);

        loop {
            match self.0.compare_exchange_weak(
                previous.to_bits(),
                (previous + v).to_bits(),
                order,
                Ordering::Relaxed,
            ) {
                Ok(bits) => return BF16::from_bits(bits),
                Err(bits) => previous = BF16::from_bits(bits),
            }
        }
    }
}

impl From<BF16> for AtomicBF16 {
    fn from(v: BF16) -> Self {
        Self::new(v)
    }
}
