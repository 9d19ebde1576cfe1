// This file is part of the bfloat16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Error from a checked conversion into [`BF16`][crate::BF16]
///
/// Unchecked conversions never fail.  They round, saturate to infinity, or
/// produce NaN as IEEE 754 prescribes.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// A finite value too large in magnitude for bf16
    #[error("{value} is out of range for bf16")]
    OutOfRange { value: f64 },

    /// A value that bf16 cannot represent exactly
    #[error("{value} is not exactly representable in bf16")]
    Inexact { value: f64 },
}
