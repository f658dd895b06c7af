// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{Error, Result};

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

/// Check that `base` is usable as a logarithm base: finite, positive and not 1.
pub(crate) fn validate_base(base: f64) -> Result<f64> {
    if base.is_finite() && base > 0.0 && base != 1.0 {
        Ok(base)
    } else {
        Err(Error::invalid_parameter(
            "base",
            format!("logarithm base must be positive, finite and not 1, got {base}"),
        ))
    }
}
