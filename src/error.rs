// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors returned by the entropy and mutual information estimators.
///
/// All variants describe violated preconditions. They are raised before any
/// numeric work is done on the offending sample matrix and are never
/// recovered from internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The sample matrix does not have full column rank, so its covariance
    /// matrix is singular and the differential entropy is undefined.
    #[error(
        "degenerate input: covariance matrix does not have full rank (rank {rank}, {ncols} columns)"
    )]
    DegenerateInput {
        /// Numerical column rank of the centred sample matrix.
        rank: usize,
        /// Number of columns (variables) of the sample matrix.
        ncols: usize,
    },

    /// An estimator parameter is outside its valid domain.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The sample matrix has no rows or no columns.
    #[error("empty input: sample matrix has shape ({nrows}, {ncols})")]
    EmptyInput {
        /// Number of observations.
        nrows: usize,
        /// Number of variables.
        ncols: usize,
    },

    /// The sample matrix contains NaN or infinite values.
    #[error("sample matrix contains non-finite values")]
    NonFiniteInput,

    /// Paired sample matrices do not have the same number of observations.
    #[error("sample mismatch: x has {x_rows} observations but y has {y_rows}")]
    SampleMismatch {
        /// Observations in the first matrix.
        x_rows: usize,
        /// Observations in the second matrix.
        y_rows: usize,
    },
}

impl Error {
    /// `true` if the error signals a singular covariance matrix.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Error::DegenerateInput { .. })
    }

    /// `true` if the error signals an invalid estimator parameter.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::InvalidParameter { .. })
    }

    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter { name, reason: reason.into() }
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
