// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;

use klo::{EstimatorKind, Error, GlobalValue, MutualInformation, entg, mig};

use crate::test_helpers::{add_noise, generate_gaussian_data, with_duplicated_column};

#[test]
fn independent_samples_have_near_zero_mi() {
    let x = generate_gaussian_data(20_000, 1, 0.0, 1.0, 10);
    let y = generate_gaussian_data(20_000, 1, 0.0, 1.0, 11);
    assert_abs_diff_eq!(mig(x.view(), y.view()).unwrap(), 0.0, epsilon = 0.01);
}

#[test]
fn noisy_copy_matches_analytic_mi() {
    // Y = X + N(0, 0.5^2): I = ½ log2(1 + 1 / 0.25) per dimension
    let x = generate_gaussian_data(20_000, 2, 0.0, 1.0, 12);
    let y = add_noise(&x, 0.5, 13);
    let expected = 2.0 * 0.5 * 5.0f64.log2();
    assert_abs_diff_eq!(mig(x.view(), y.view()).unwrap(), expected, epsilon = 0.05);
}

#[test]
fn mi_is_decomposition_of_entropies() {
    let x = generate_gaussian_data(500, 2, 0.0, 1.0, 14);
    let y = add_noise(&x.column(0).insert_axis(ndarray::Axis(1)).to_owned(), 1.0, 15);
    let joint = ndarray::concatenate(ndarray::Axis(1), &[x.view(), y.view()]).unwrap();
    let expected =
        entg(x.view()).unwrap() + entg(y.view()).unwrap() - entg(joint.view()).unwrap();
    let est = MutualInformation::new_gaussian(x.view(), y.view()).unwrap();
    assert_abs_diff_eq!(est.global_value(), expected, epsilon = 1e-12);
    assert_abs_diff_eq!(
        MutualInformation::estimate(EstimatorKind::Gaussian, x.view(), y.view(), 1).unwrap(),
        expected,
        epsilon = 1e-12
    );
}

#[test]
fn mi_is_symmetric() {
    let x = generate_gaussian_data(400, 2, 0.0, 1.0, 16);
    let y = add_noise(&x, 2.0, 17);
    assert_abs_diff_eq!(
        mig(x.view(), y.view()).unwrap(),
        mig(y.view(), x.view()).unwrap(),
        epsilon = 1e-9
    );
}

#[test]
fn exact_copy_makes_joint_degenerate() {
    // [X | X] has rank d, not 2d: I(X; X) is infinite for continuous X
    let x = generate_gaussian_data(100, 2, 0.0, 1.0, 18);
    assert!(mig(x.view(), x.view()).unwrap_err().is_degenerate());
}

#[test]
fn degenerate_marginals_are_reported() {
    let x = generate_gaussian_data(100, 2, 0.0, 1.0, 19);
    let y = generate_gaussian_data(100, 1, 0.0, 1.0, 20);
    let x_dup = with_duplicated_column(&x, 0);
    assert_eq!(
        mig(x_dup.view(), y.view()).unwrap_err(),
        Error::DegenerateInput { rank: 2, ncols: 3 }
    );
    let y_dup = with_duplicated_column(&y, 0);
    assert_eq!(
        mig(x.view(), y_dup.view()).unwrap_err(),
        Error::DegenerateInput { rank: 1, ncols: 2 }
    );
    // first failure wins: x is checked before y
    assert_eq!(
        mig(x_dup.view(), y_dup.view()).unwrap_err(),
        Error::DegenerateInput { rank: 2, ncols: 3 }
    );
}

#[test]
fn mismatched_sample_counts_are_rejected() {
    let x = generate_gaussian_data(100, 1, 0.0, 1.0, 21);
    let y = generate_gaussian_data(90, 1, 0.0, 1.0, 22);
    assert_eq!(
        mig(x.view(), y.view()).unwrap_err(),
        Error::SampleMismatch { x_rows: 100, y_rows: 90 }
    );
}
