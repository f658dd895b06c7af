// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dense linear algebra on sample matrices: validation, covariance,
//! log-determinants and whitening.
//!
//! Sample matrices are `ndarray` arrays with observations in rows and
//! variables in columns. Decompositions are delegated to `nalgebra`.

use nalgebra::{Cholesky, DMatrix, SymmetricEigen};
use ndarray::{Array1, Array2, ArrayView2, Axis};
use std::f64::consts::{E, PI};

use crate::error::{Error, Result};

fn to_dmatrix(data: ArrayView2<'_, f64>) -> DMatrix<f64> {
    DMatrix::from_fn(data.nrows(), data.ncols(), |i, j| data[(i, j)])
}

fn from_dmatrix(m: &DMatrix<f64>) -> Array2<f64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)])
}

/// Subtract the column means from every observation.
pub fn center_columns(data: ArrayView2<'_, f64>) -> Array2<f64> {
    let mean = data
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(data.ncols()));
    &data - &mean
}

/// Numerical rank of a matrix.
///
/// Singular values below `sigma_max * max(nrows, ncols) * f64::EPSILON` are
/// treated as zero.
pub fn column_rank(data: ArrayView2<'_, f64>) -> usize {
    if data.is_empty() {
        return 0;
    }
    let singular = to_dmatrix(data).singular_values();
    let sigma_max = singular.iter().cloned().fold(0.0f64, f64::max);
    let tol = sigma_max * (data.nrows().max(data.ncols()) as f64) * f64::EPSILON;
    singular.iter().filter(|&&s| s > tol).count()
}

/// Check that a sample matrix can be fed to an entropy estimator.
///
/// The matrix must be non-empty, finite, and its centred version must have
/// full column rank, which is the same as requiring a non-singular sample
/// covariance matrix.
pub fn validate_samples(data: ArrayView2<'_, f64>) -> Result<()> {
    let (nrows, ncols) = data.dim();
    if nrows == 0 || ncols == 0 {
        return Err(Error::EmptyInput { nrows, ncols });
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFiniteInput);
    }
    let rank = column_rank(center_columns(data).view());
    if rank != ncols {
        return Err(Error::DegenerateInput { rank, ncols });
    }
    Ok(())
}

/// Unbiased sample covariance (divides by n - 1), columns as variables.
///
/// Requires at least two observations.
pub fn covariance(data: ArrayView2<'_, f64>) -> Array2<f64> {
    let n = data.nrows();
    let centered = center_columns(data);
    centered.t().dot(&centered) / ((n as f64) - 1.0)
}

/// Natural log of the determinant of a symmetric positive-definite matrix,
/// computed from its Cholesky factor.
pub fn ln_det_spd(cov: &Array2<f64>) -> Result<f64> {
    let d = cov.nrows();
    let chol = Cholesky::new(to_dmatrix(cov.view())).ok_or_else(|| Error::DegenerateInput {
        rank: column_rank(cov.view()),
        ncols: d,
    })?;
    let l = chol.l();
    Ok(2.0 * l.diagonal().iter().map(|v| v.ln()).sum::<f64>())
}

/// Inverse of the symmetric square root of a positive-definite matrix,
/// `V diag(1 / sqrt(lambda)) V^T`.
pub fn inverse_sqrt_spd(cov: &Array2<f64>) -> Result<Array2<f64>> {
    let d = cov.nrows();
    let eigen = SymmetricEigen::new(to_dmatrix(cov.view()));
    let positive = eigen.eigenvalues.iter().filter(|&&l| l > 0.0).count();
    if positive != d {
        return Err(Error::DegenerateInput { rank: positive, ncols: d });
    }
    let scale = DMatrix::from_diagonal(&eigen.eigenvalues.map(|l| 1.0 / l.sqrt()));
    let v = &eigen.eigenvectors;
    Ok(from_dmatrix(&(v * scale * v.transpose())))
}

/// Whiten a sample against its own covariance.
///
/// Returns `X · Σ^{-1/2} / sqrt(2πe)`: the columns become uncorrelated with
/// covariance `I / (2πe)`, i.e. a Gaussian with this spread has zero
/// differential entropy. The sample mean is not removed.
pub fn whiten(data: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
    validate_samples(data)?;
    whiten_with(data, &covariance(data))
}

/// [`whiten`] against a covariance matrix the caller already computed.
pub(crate) fn whiten_with(data: ArrayView2<'_, f64>, cov: &Array2<f64>) -> Result<Array2<f64>> {
    let inv_sqrt = inverse_sqrt_spd(cov)?;
    Ok(data.dot(&inv_sqrt) / (2.0 * PI * E).sqrt())
}
