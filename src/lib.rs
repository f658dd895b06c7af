// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # klo
//!
//! Differential entropy and mutual information of continuous multivariate
//! samples, estimated either in closed form under a Gaussian assumption or
//! non-parametrically with the Kozachenko–Leonenko (KL) nearest-neighbour
//! estimator and its offset variant (KLo).
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::array;
//!
//! let x = array![[0.1, 1.2], [0.9, 0.3], [2.1, 1.9], [1.4, 3.2], [3.0, 2.2], [2.2, 0.4]];
//! let y = array![[0.4], [1.1], [1.7], [2.9], [2.6], [0.8]];
//!
//! let h_gauss = klo::entg(x.view()).unwrap();
//! let h_klo = klo::entkl(x.view(), "klo", 1).unwrap();
//! let mi = klo::mikl(x.view(), y.view(), "kl", 1).unwrap();
//! # let _ = (h_gauss, h_klo, mi);
//! ```
//!
//! Sample matrices hold observations in rows and variables in columns. All
//! results are in bits.
//!
//! ## Estimators
//!
//! | Function | Estimator | Measure |
//! |----------|-----------|---------|
//! | [`entg`] | Gaussian | Entropy |
//! | [`mig`] | Gaussian | Mutual information |
//! | [`entkl`] | KL / KLo | Entropy |
//! | [`mikl`] | KL / KLo | Mutual information |
//!
//! The typed estimators behind these functions live in
//! [`estimators::approaches`] and are created through the
//! [`Entropy`] and [`MutualInformation`] factories. They report their result
//! through [`GlobalValue`] and accept a different logarithm base via
//! `with_base`.
//!
//! ## Offset KL
//!
//! KLo whitens the sample against its own covariance, estimates the entropy of
//! the whitened sample with KL, and adds back the Gaussian entropy of the
//! original sample. The non-parametric step then only has to account for the
//! departure from Gaussianity, which reduces finite-sample bias.
//!
//! ## Coincident points
//!
//! A zero nearest-neighbour distance contributes `ln 0 := 0` to the KL sum
//! instead of `-inf`. Data with exactly duplicated rows is therefore accepted
//! but its entropy is under-estimated.
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing::debug!` events when estimators are constructed
//!   and neighbour radii are queried

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod error;
pub mod estimators;

use ndarray::ArrayView2;

pub use error::{Error, Result};
pub use estimators::approaches::KlVariant;
pub use estimators::{Entropy, EstimatorKind, GlobalValue, MutualInformation};

/// Gaussian estimate of the differential entropy of `x`, in bits.
///
/// `x` is an n×d matrix (rows = observations). Asymptotically unbiased if `x`
/// is multivariate Gaussian, otherwise the entropy of the Gaussian with the
/// same covariance.
///
/// # Errors
///
/// [`Error::DegenerateInput`] if the covariance matrix of `x` is singular.
pub fn entg(x: ArrayView2<'_, f64>) -> Result<f64> {
    Ok(Entropy::new_gaussian(x)?.global_value())
}

/// Gaussian estimate of the mutual information between `x` and `y`, in bits.
///
/// Computed as `entg(x) + entg(y) - entg([x | y])`; `x` and `y` must have the
/// same number of rows.
pub fn mig(x: ArrayView2<'_, f64>, y: ArrayView2<'_, f64>) -> Result<f64> {
    Ok(MutualInformation::new_gaussian(x, y)?.global_value())
}

/// Kozachenko–Leonenko estimate of the differential entropy of `x`, in bits.
///
/// `kind` is `"kl"` for the raw estimator or `"klo"` for the offset estimator,
/// and `k` selects the k-th nearest neighbour (1 = nearest).
///
/// # Errors
///
/// [`Error::InvalidParameter`] for an unknown `kind` or `k == 0`, then
/// [`Error::DegenerateInput`] if the covariance matrix of `x` is singular.
pub fn entkl(x: ArrayView2<'_, f64>, kind: &str, k: usize) -> Result<f64> {
    let variant: KlVariant = kind.parse()?;
    Ok(Entropy::new_kl(x, variant, k)?.global_value())
}

/// Kozachenko–Leonenko estimate of the mutual information between `x` and `y`,
/// in bits.
///
/// Computed as `entkl(x) + entkl(y) - entkl([x | y])` with the same `kind`
/// and `k` for all three terms.
pub fn mikl(x: ArrayView2<'_, f64>, y: ArrayView2<'_, f64>, kind: &str, k: usize) -> Result<f64> {
    let variant: KlVariant = kind.parse()?;
    Ok(MutualInformation::new_kl(x, y, variant, k)?.global_value())
}
