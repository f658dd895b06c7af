// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView2;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::estimators::approaches::{GaussianEntropy, KlVariant, KozachenkoLeonenkoEntropy};
pub use crate::estimators::traits::GlobalValue;

/// Estimator family selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorKind {
    /// Closed-form Gaussian estimate (`"gaussian"`).
    Gaussian,
    /// Raw Kozachenko–Leonenko estimate (`"kl"`).
    Kl,
    /// Offset Kozachenko–Leonenko estimate (`"klo"`).
    Klo,
}

impl EstimatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstimatorKind::Gaussian => "gaussian",
            EstimatorKind::Kl => "kl",
            EstimatorKind::Klo => "klo",
        }
    }

    /// The KL variant for the nearest-neighbour kinds, `None` for Gaussian.
    pub fn kl_variant(&self) -> Option<KlVariant> {
        match self {
            EstimatorKind::Gaussian => None,
            EstimatorKind::Kl => Some(KlVariant::Raw),
            EstimatorKind::Klo => Some(KlVariant::Offset),
        }
    }
}

impl fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstimatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gaussian" => Ok(EstimatorKind::Gaussian),
            "kl" => Ok(EstimatorKind::Kl),
            "klo" => Ok(EstimatorKind::Klo),
            other => Err(Error::invalid_parameter(
                "type",
                format!("incorrect type of estimator '{other}', expected \"gaussian\", \"kl\" or \"klo\""),
            )),
        }
    }
}

impl From<KlVariant> for EstimatorKind {
    fn from(v: KlVariant) -> Self {
        match v {
            KlVariant::Raw => EstimatorKind::Kl,
            KlVariant::Offset => EstimatorKind::Klo,
        }
    }
}

/// Entropy estimation methods for continuous multivariate samples
///
/// This struct provides static methods for creating entropy estimators.
/// Data is an n×d matrix with observations in rows and variables in columns.
pub struct Entropy;

impl Entropy {
    /// Creates a Gaussian (parametric) differential entropy estimator
    ///
    /// # Arguments
    ///
    /// * `data` - n×d sample matrix with full column rank
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateInput`] if the sample covariance is singular.
    pub fn new_gaussian(data: ArrayView2<'_, f64>) -> Result<GaussianEntropy> {
        GaussianEntropy::new(data)
    }

    /// Creates a Kozachenko–Leonenko differential entropy estimator
    ///
    /// # Arguments
    ///
    /// * `data` - n×d sample matrix with full column rank
    /// * `variant` - raw (`kl`) or offset (`klo`) estimator
    /// * `k` - neighbour order, 1 for the nearest neighbour
    pub fn new_kl(
        data: ArrayView2<'_, f64>,
        variant: KlVariant,
        k: usize,
    ) -> Result<KozachenkoLeonenkoEntropy> {
        KozachenkoLeonenkoEntropy::new(data, variant, k)
    }

    /// Creates an offset Kozachenko–Leonenko (KLo) estimator
    pub fn new_klo(data: ArrayView2<'_, f64>, k: usize) -> Result<KozachenkoLeonenkoEntropy> {
        KozachenkoLeonenkoEntropy::new(data, KlVariant::Offset, k)
    }

    /// Estimate differential entropy in bits with an estimator chosen at runtime.
    ///
    /// `k` is ignored by [`EstimatorKind::Gaussian`].
    pub fn estimate(kind: EstimatorKind, data: ArrayView2<'_, f64>, k: usize) -> Result<f64> {
        match kind.kl_variant() {
            None => Ok(GaussianEntropy::new(data)?.global_value()),
            Some(variant) => Ok(KozachenkoLeonenkoEntropy::new(data, variant, k)?.global_value()),
        }
    }
}
