// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod entropy;
pub mod mutual_information;
pub mod traits;
pub mod approaches;

pub use entropy::{Entropy, EstimatorKind};
pub use mutual_information::MutualInformation;
pub use traits::GlobalValue;
