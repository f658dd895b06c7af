// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod common_nd;
pub mod expfam;
pub mod gaussian;

// Unified re-exports so tests and users can import
// klo::estimators::approaches::* ergonomically.
pub use expfam::kozachenko_leonenko::{
    KlVariant, KozachenkoLeonenkoEntropy, KozachenkoLeonenkoMutualInformation,
};
pub use gaussian::{GaussianEntropy, GaussianMutualInformation};
