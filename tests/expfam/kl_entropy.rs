// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::{Array2, array};
use std::f64::consts::{E, LN_2, PI};

use klo::estimators::approaches::common_nd::linalg::whiten;
use klo::estimators::approaches::{KlVariant, KozachenkoLeonenkoEntropy};
use klo::{Entropy, EstimatorKind, Error, GlobalValue, entg, entkl};

use crate::test_helpers::{
    EULER_GAMMA, STD_NORMAL_ENTROPY_BITS, generate_gaussian_data, with_duplicated_column,
};

#[test]
fn raw_kl_on_equally_spaced_points() {
    // every nearest-neighbour radius is 1: H = (ln 2 + ln 2 + gamma) nats
    let x: Array2<f64> = array![[1.0], [2.0], [3.0]];
    let expected = 2.0 + EULER_GAMMA / LN_2;
    assert_abs_diff_eq!(entkl(x.view(), "kl", 1).unwrap(), expected, epsilon = 1e-9);
}

#[test]
fn coincident_points_contribute_zero_log_distance() {
    // radii [0, 0, 1, 1] -> every ln term is 0 under ln(0) := 0
    let x: Array2<f64> = array![[0.0], [0.0], [1.0], [2.0]];
    let h = entkl(x.view(), "kl", 1).unwrap();
    assert!(h.is_finite());
    let expected = 1.0 + 3.0f64.log2() + EULER_GAMMA / LN_2;
    assert_abs_diff_eq!(h, expected, epsilon = 1e-9);
}

#[test]
fn standard_normal_converges_to_analytic_entropy() {
    let x = generate_gaussian_data(5_000, 1, 0.0, 1.0, 30);
    let kl = entkl(x.view(), "kl", 1).unwrap();
    let klo = entkl(x.view(), "klo", 1).unwrap();
    assert_abs_diff_eq!(kl, STD_NORMAL_ENTROPY_BITS, epsilon = 0.1);
    assert_abs_diff_eq!(klo, STD_NORMAL_ENTROPY_BITS, epsilon = 0.1);
}

#[test]
fn offset_estimate_tracks_correlated_gaussian() {
    let z = generate_gaussian_data(3_000, 2, 0.0, 1.0, 31);
    let mix: Array2<f64> = array![[1.0, 0.8], [0.0, 0.6]];
    let x = z.dot(&mix);
    // cov = mix^T mix = [[1, 0.8], [0.8, 1.0]], det = 0.36
    let truth = 0.5 * ((2.0 * PI * E).powi(2) * 0.36).log2();
    for k in [1usize, 3] {
        let klo = entkl(x.view(), "klo", k).unwrap();
        assert_abs_diff_eq!(klo, truth, epsilon = 0.1);
    }
}

#[test]
fn offset_is_gaussian_entropy_plus_raw_kl_of_whitened_sample() {
    let x = generate_random_sample_with_structure(400, 32);
    for k in [1usize, 2, 5] {
        let klo = entkl(x.view(), "klo", k).unwrap();
        let w = whiten(x.view()).unwrap();
        let rebuilt = entg(x.view()).unwrap() + entkl(w.view(), "kl", k).unwrap();
        assert_abs_diff_eq!(klo, rebuilt, epsilon = 1e-9);

        let est = KozachenkoLeonenkoEntropy::new(x.view(), KlVariant::Offset, k).unwrap();
        assert_abs_diff_eq!(est.offset_nats / LN_2, entg(x.view()).unwrap(), epsilon = 1e-12);
    }
}

#[test]
fn raw_kl_is_translation_invariant() {
    let x = generate_gaussian_data(500, 2, 0.0, 1.0, 33);
    let shifted = &x + 25.0;
    assert_abs_diff_eq!(
        entkl(x.view(), "kl", 2).unwrap(),
        entkl(shifted.view(), "kl", 2).unwrap(),
        epsilon = 1e-6
    );
}

#[test]
fn offset_kl_shifts_by_log_det_under_linear_map() {
    let x = generate_random_sample_with_structure(500, 34);
    let a: Array2<f64> = array![[3.0, 1.0], [0.5, 2.0]]; // det 5.5
    let mapped = x.dot(&a);
    assert_abs_diff_eq!(
        entkl(mapped.view(), "klo", 1).unwrap(),
        entkl(x.view(), "klo", 1).unwrap() + 5.5f64.log2(),
        epsilon = 1e-6
    );
}

#[test]
fn wide_data_is_supported() {
    let x = generate_gaussian_data(200, 17, 0.0, 1.0, 35);
    let h = entkl(x.view(), "klo", 1).unwrap();
    assert!(h.is_finite());
}

#[test]
fn invalid_parameters_are_rejected() {
    let x = generate_gaussian_data(50, 2, 0.0, 1.0, 36);
    assert!(entkl(x.view(), "bogus", 1).unwrap_err().is_invalid_parameter());
    assert!(entkl(x.view(), "kl", 0).unwrap_err().is_invalid_parameter());
    assert!(entkl(x.view(), "klo", 50).unwrap_err().is_invalid_parameter());
    assert!(entkl(x.view(), "klo", 49).is_ok());
}

#[test]
fn parameters_are_checked_before_the_sample() {
    let x = generate_gaussian_data(50, 2, 0.0, 1.0, 37);
    let dup = with_duplicated_column(&x, 0);
    assert!(entkl(dup.view(), "bogus", 1).unwrap_err().is_invalid_parameter());
    assert!(entkl(dup.view(), "kl", 0).unwrap_err().is_invalid_parameter());
}

#[test]
fn duplicated_column_is_degenerate() {
    let x = generate_gaussian_data(100, 2, 0.0, 1.0, 38);
    let dup = with_duplicated_column(&x, 0);
    for kind in ["kl", "klo"] {
        assert_eq!(
            entkl(dup.view(), kind, 1).unwrap_err(),
            Error::DegenerateInput { rank: 2, ncols: 3 }
        );
    }
}

#[test]
fn with_base_and_factories_agree() {
    let x = generate_gaussian_data(300, 2, 0.0, 1.0, 39);
    let est = Entropy::new_klo(x.view(), 2).unwrap();
    let bits = est.global_value();
    assert_abs_diff_eq!(bits, entkl(x.view(), "klo", 2).unwrap(), epsilon = 1e-12);
    assert_abs_diff_eq!(est.clone().with_base(E).unwrap().global_value(), bits * LN_2, epsilon = 1e-12);
    assert_abs_diff_eq!(est.entropy_nats(), bits * LN_2, epsilon = 1e-12);
    assert!(est.clone().with_base(1.0).unwrap_err().is_invalid_parameter());
    assert!(est.clone().with_base(-E).unwrap_err().is_invalid_parameter());

    let raw = Entropy::new_kl(x.view(), KlVariant::Raw, 2).unwrap();
    assert_eq!(raw.offset_nats, 0.0);
    assert_abs_diff_eq!(
        Entropy::estimate(EstimatorKind::Kl, x.view(), 2).unwrap(),
        raw.global_value(),
        epsilon = 1e-12
    );
    assert_eq!(EstimatorKind::from(KlVariant::Offset), EstimatorKind::Klo);
}

/// Non-Gaussian 2D sample: a noisy parabola.
fn generate_random_sample_with_structure(size: usize, seed: u64) -> Array2<f64> {
    let base = generate_gaussian_data(size, 2, 0.0, 1.0, seed);
    Array2::from_shape_fn((size, 2), |(i, j)| {
        let t = base[(i, 0)];
        if j == 0 { t } else { t * t + 0.3 * base[(i, 1)] }
    })
}
