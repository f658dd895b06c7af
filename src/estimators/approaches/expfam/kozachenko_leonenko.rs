// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array2, ArrayView2, Axis, concatenate};
use std::fmt;
use std::str::FromStr;

use super::utils::kl_entropy_nats;
use crate::error::{Error, Result};
use crate::estimators::approaches::common_nd::dataset::kth_neighbor_radii_unchecked;
use crate::estimators::approaches::common_nd::linalg::{covariance, validate_samples, whiten_with};
use crate::estimators::approaches::gaussian::GaussianEntropy;
use crate::estimators::traits::{GlobalValue, validate_base};

/// Flavour of the Kozachenko–Leonenko estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KlVariant {
    /// Raw KL estimate on the sample as given (`"kl"`).
    Raw,
    /// Offset KL (`"klo"`): KL estimate of the whitened sample plus the
    /// Gaussian entropy of the original sample.
    #[default]
    Offset,
}

impl KlVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            KlVariant::Raw => "kl",
            KlVariant::Offset => "klo",
        }
    }
}

impl fmt::Display for KlVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KlVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "kl" => Ok(KlVariant::Raw),
            "klo" => Ok(KlVariant::Offset),
            other => Err(Error::invalid_parameter(
                "type",
                format!("incorrect type of estimator '{other}', expected \"kl\" or \"klo\""),
            )),
        }
    }
}

/// Kozachenko–Leonenko (KL) differential entropy estimator (kNN-based, Euclidean metric)
///
/// H_hat = m * mean_i ln(rho_k,i) + ln(V_m) + ln(N - 1) - psi(k)
/// where V_m is the m-dimensional unit-ball volume and rho_k,i is the
/// distance to the k-th nearest neighbor of point i (self excluded).
///
/// With [`KlVariant::Offset`] the sample is first whitened to
/// `X Σ^{-1/2} / sqrt(2πe)` and the Gaussian entropy of the original sample
/// is added back, so only the departure from Gaussianity is estimated
/// non-parametrically.
///
/// Zero radii (exactly coincident points) contribute `ln 0 := 0`. This is an
/// approximation and under-estimates the entropy of data with duplicate rows.
#[derive(Debug, Clone)]
pub struct KozachenkoLeonenkoEntropy {
    /// Sample the neighbour search runs on; whitened for the offset variant.
    pub points: Array2<f64>,
    pub k: usize,
    pub variant: KlVariant,
    /// Gaussian entropy of the original sample in nats (zero for the raw variant).
    pub offset_nats: f64,
    pub base: f64,
}

impl KozachenkoLeonenkoEntropy {
    /// Construct from 2D data (rows = samples, cols = dimensions)
    ///
    /// `k` selects the k-th nearest neighbour (1 = nearest). Fails with
    /// [`Error::InvalidParameter`] if `k` is zero or not below the number of
    /// samples, and with [`Error::DegenerateInput`] if the covariance matrix of
    /// `data` is singular.
    pub fn new(data: ArrayView2<'_, f64>, variant: KlVariant, k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::invalid_parameter(
                "k",
                "k-nearest neighbour 'k' must be larger than 0",
            ));
        }
        validate_samples(data)?;
        let n = data.nrows();
        if k >= n {
            return Err(Error::invalid_parameter(
                "k",
                format!("k = {k} requires at least {} observations, got {n}", k + 1),
            ));
        }

        let (points, offset_nats) = match variant {
            KlVariant::Raw => (data.to_owned(), 0.0),
            KlVariant::Offset => {
                let cov = covariance(data);
                let gaussian = GaussianEntropy::from_covariance(n, &cov)?;
                (whiten_with(data, &cov)?, gaussian.entropy_nats())
            }
        };
        trace_debug!(n, d = data.ncols(), k, variant = variant.as_str(), offset_nats, "kl entropy");
        Ok(Self { points, k, variant, offset_nats, base: 2.0 })
    }

    /// Set logarithm base (default 2)
    ///
    /// Fails with [`Error::InvalidParameter`] unless `base` is finite,
    /// positive and different from 1.
    pub fn with_base(mut self, base: f64) -> Result<Self> {
        self.base = validate_base(base)?;
        Ok(self)
    }

    /// Non-parametric part of the estimate in nats, without the Gaussian offset.
    ///
    /// Builds a fresh KD-tree over [`Self::points`] on every call.
    pub fn knn_entropy_nats(&self) -> f64 {
        let radii = kth_neighbor_radii_unchecked(self.points.view(), self.k);
        kl_entropy_nats(&radii, self.points.ncols(), self.k)
    }

    /// Full estimate in nats.
    pub fn entropy_nats(&self) -> f64 {
        self.knn_entropy_nats() + self.offset_nats
    }
}

impl GlobalValue for KozachenkoLeonenkoEntropy {
    fn global_value(&self) -> f64 {
        self.entropy_nats() / self.base.ln()
    }
}

/// KL / KLo estimate of mutual information, I(X; Y) = H(X) + H(Y) - H(X, Y).
///
/// The same variant and neighbour order are used for both marginals and the
/// joint sample; mixing them is not supported.
#[derive(Debug, Clone)]
pub struct KozachenkoLeonenkoMutualInformation {
    pub x: KozachenkoLeonenkoEntropy,
    pub y: KozachenkoLeonenkoEntropy,
    pub joint: KozachenkoLeonenkoEntropy,
}

impl KozachenkoLeonenkoMutualInformation {
    /// Construct from paired samples `x` (n×dx) and `y` (n×dy).
    ///
    /// Sub-estimators are built for `x`, `y` and `[x | y]` in that order and
    /// the first failure is returned.
    pub fn new(
        x: ArrayView2<'_, f64>,
        y: ArrayView2<'_, f64>,
        variant: KlVariant,
        k: usize,
    ) -> Result<Self> {
        if x.nrows() != y.nrows() {
            return Err(Error::SampleMismatch { x_rows: x.nrows(), y_rows: y.nrows() });
        }
        let hx = KozachenkoLeonenkoEntropy::new(x, variant, k)?;
        let hy = KozachenkoLeonenkoEntropy::new(y, variant, k)?;
        let xy = concatenate(Axis(1), &[x.view(), y.view()]).map_err(|_| Error::SampleMismatch {
            x_rows: x.nrows(),
            y_rows: y.nrows(),
        })?;
        let joint = KozachenkoLeonenkoEntropy::new(xy.view(), variant, k)?;
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

impl GlobalValue for KozachenkoLeonenkoMutualInformation {
    fn global_value(&self) -> f64 {
        self.x.global_value() + self.y.global_value() - self.joint.global_value()
    }
}
