// This file is part of the bfloat16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Serialization as binary32
//!
//! Deserialization accepts any number the format yields as binary64 and
//! refuses finite values that would overflow to infinity.

use crate::BF16;
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

impl Serialize for BF16 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.to_f32())
    }
}

impl<'de> Deserialize<'de> for BF16 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;

        Self::checked_from_f64(value).map_err(|e| {
            log::warn!("refusing to deserialize bf16: {e}");
            D::Error::custom(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json() {
        let x = BF16::from_f32(-1.5);
        let text = serde_json::to_string(&x).unwrap_or_default();
        assert_eq!(text, "-1.5");
        assert_eq!(serde_json::from_str::<BF16>(&text).ok(), Some(x));
        assert_eq!(serde_json::from_str::<BF16>("3").ok(), Some(BF16::from_f32(3.0)));
        assert_eq!(serde_json::from_str::<BF16>("3.14159").ok(), Some(BF16::PI));
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(serde_json::from_str::<BF16>("3.4e38").is_err());
        assert!(serde_json::from_str::<BF16>("-1e300").is_err());
        assert!(serde_json::from_str::<BF16>("3.38e38").is_ok());
    }
}
