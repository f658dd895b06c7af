// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gaussian (parametric) differential entropy and mutual information.
//!
//! The entropy of a d-dimensional normal distribution with covariance Σ is
//!
//! H = ½ · log( (2πe)^d · det(Σ) )
//!
//! The estimators plug in the unbiased sample covariance. For Gaussian data
//! the estimate is asymptotically unbiased; for anything else it is the
//! entropy of the Gaussian sharing the sample's first two moments.

use ndarray::{Array2, ArrayView2, Axis, concatenate};
use std::f64::consts::{E, PI};

use crate::error::{Error, Result};
use crate::estimators::approaches::common_nd::linalg::{covariance, ln_det_spd, validate_samples};
use crate::estimators::traits::{GlobalValue, validate_base};

/// Gaussian estimate of the differential entropy of a multivariate sample.
#[derive(Debug, Clone)]
pub struct GaussianEntropy {
    pub n: usize,
    pub d: usize,
    /// Natural log of the determinant of the sample covariance matrix.
    pub ln_det_cov: f64,
    pub base: f64,
}

impl GaussianEntropy {
    /// Construct from 2D data (rows = samples, cols = dimensions).
    ///
    /// Fails with [`Error::DegenerateInput`] if the covariance matrix of
    /// `data` does not have full rank.
    pub fn new(data: ArrayView2<'_, f64>) -> Result<Self> {
        validate_samples(data)?;
        let cov = covariance(data);
        Self::from_covariance(data.nrows(), &cov)
    }

    /// Construct from a covariance matrix computed from `n` validated samples.
    pub(crate) fn from_covariance(n: usize, cov: &Array2<f64>) -> Result<Self> {
        let ln_det_cov = ln_det_spd(cov)?;
        let d = cov.nrows();
        trace_debug!(n, d, ln_det_cov, "gaussian entropy");
        Ok(Self { n, d, ln_det_cov, base: 2.0 })
    }

    /// Set logarithm base (default 2)
    ///
    /// Fails with [`Error::InvalidParameter`] unless `base` is finite,
    /// positive and different from 1.
    pub fn with_base(mut self, base: f64) -> Result<Self> {
        self.base = validate_base(base)?;
        Ok(self)
    }

    /// Differential entropy in nats.
    pub fn entropy_nats(&self) -> f64 {
        0.5 * ((self.d as f64) * (2.0 * PI * E).ln() + self.ln_det_cov)
    }
}

impl GlobalValue for GaussianEntropy {
    fn global_value(&self) -> f64 {
        self.entropy_nats() / self.base.ln()
    }
}

/// Gaussian estimate of the mutual information between two paired samples,
/// I(X; Y) = H(X) + H(Y) - H(X, Y).
///
/// For finite or non-Gaussian samples the estimate may be slightly negative.
#[derive(Debug, Clone)]
pub struct GaussianMutualInformation {
    pub x: GaussianEntropy,
    pub y: GaussianEntropy,
    pub joint: GaussianEntropy,
}

impl GaussianMutualInformation {
    /// Construct from paired samples `x` (n×dx) and `y` (n×dy).
    ///
    /// The marginals and the joint `[x | y]` are validated in that order;
    /// the first failure is returned.
    pub fn new(x: ArrayView2<'_, f64>, y: ArrayView2<'_, f64>) -> Result<Self> {
        if x.nrows() != y.nrows() {
            return Err(Error::SampleMismatch { x_rows: x.nrows(), y_rows: y.nrows() });
        }
        let hx = GaussianEntropy::new(x)?;
        let hy = GaussianEntropy::new(y)?;
        let xy = concatenate(Axis(1), &[x.view(), y.view()]).map_err(|_| Error::SampleMismatch {
            x_rows: x.nrows(),
            y_rows: y.nrows(),
        })?;
        let joint = GaussianEntropy::new(xy.view())?;
        Ok(Self { x: hx, y: hy, joint })
    }

    /// Set logarithm base (default 2) for all three entropy terms.
    pub fn with_base(self, base: f64) -> Result<Self> {
        Ok(Self {
            x: self.x.with_base(base)?,
            y: self.y.with_base(base)?,
            joint: self.joint.with_base(base)?,
        })
    }
}

impl GlobalValue for GaussianMutualInformation {
    fn global_value(&self) -> f64 {
        self.x.global_value() + self.y.global_value() - self.joint.global_value()
    }
}
