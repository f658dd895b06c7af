// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use statrs::function::gamma::{digamma, gamma};

/// Compute the volume of the unit m-ball in R^m.
/// c_m = pi^{m/2} / Gamma(m/2 + 1) = 2 pi^{m/2} / (m Gamma(m/2))
pub fn unit_ball_volume(m: usize) -> f64 {
    let m_f = m as f64;
    let numerator = std::f64::consts::PI.powf(m_f / 2.0);
    let denom = gamma(m_f / 2.0 + 1.0);
    numerator / denom
}

/// Natural log of a k-th neighbour distance with `ln(0) := 0`.
///
/// Exactly coincident points would otherwise contribute `-inf`. Dropping
/// their term biases the estimate downwards for data with duplicate rows.
pub fn ln_radius(r: f64) -> f64 {
    if r != 0.0 { r.ln() } else { 0.0 }
}

/// Kozachenko–Leonenko differential entropy in nats from k-th neighbour radii.
///
/// H = m * mean(ln rho_k,i) + ln(c_m) + ln(N - 1) - psi(k)
///
/// `radii` holds one distance per sample (N values), `m` is the dimension.
pub fn kl_entropy_nats(radii: &[f64], m: usize, k: usize) -> f64 {
    let n = radii.len();
    let mean_ln_r = radii.iter().map(|&r| ln_radius(r)).sum::<f64>() / (n as f64);
    (m as f64) * mean_ln_r + unit_ball_volume(m).ln() + ((n - 1) as f64).ln()
        - digamma(k as f64)
}
