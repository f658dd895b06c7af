// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView2;

use crate::error::Result;
use crate::estimators::approaches::{
    GaussianMutualInformation, KlVariant, KozachenkoLeonenkoMutualInformation,
};
use crate::estimators::entropy::EstimatorKind;
use crate::estimators::traits::GlobalValue;

/// Mutual information estimation methods for paired continuous samples
///
/// Every estimator decomposes I(X; Y) = H(X) + H(Y) - H(X, Y), evaluating the
/// marginal entropies of `x` and `y` and the joint entropy of their
/// column-wise concatenation `[x | y]`.
pub struct MutualInformation;

impl MutualInformation {
    /// Creates a Gaussian mutual information estimator
    ///
    /// # Arguments
    ///
    /// * `x` - n×dx sample matrix
    /// * `y` - n×dy sample matrix, row i paired with row i of `x`
    pub fn new_gaussian(
        x: ArrayView2<'_, f64>,
        y: ArrayView2<'_, f64>,
    ) -> Result<GaussianMutualInformation> {
        GaussianMutualInformation::new(x, y)
    }

    /// Creates a Kozachenko–Leonenko mutual information estimator
    ///
    /// # Arguments
    ///
    /// * `x` - n×dx sample matrix
    /// * `y` - n×dy sample matrix, row i paired with row i of `x`
    /// * `variant` - raw (`kl`) or offset (`klo`), shared by all three entropies
    /// * `k` - neighbour order, shared by all three entropies
    pub fn new_kl(
        x: ArrayView2<'_, f64>,
        y: ArrayView2<'_, f64>,
        variant: KlVariant,
        k: usize,
    ) -> Result<KozachenkoLeonenkoMutualInformation> {
        KozachenkoLeonenkoMutualInformation::new(x, y, variant, k)
    }

    /// Estimate mutual information in bits with an estimator chosen at runtime.
    ///
    /// `k` is ignored by [`EstimatorKind::Gaussian`].
    pub fn estimate(
        kind: EstimatorKind,
        x: ArrayView2<'_, f64>,
        y: ArrayView2<'_, f64>,
        k: usize,
    ) -> Result<f64> {
        match kind.kl_variant() {
            None => Ok(GaussianMutualInformation::new(x, y)?.global_value()),
            Some(variant) => {
                Ok(KozachenkoLeonenkoMutualInformation::new(x, y, variant, k)?.global_value())
            }
        }
    }
}
