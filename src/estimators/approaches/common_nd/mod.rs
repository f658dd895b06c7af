// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Common N-D utilities shared by the continuous estimators (Gaussian, kNN-based, MI)

pub mod dataset;
pub mod linalg;
