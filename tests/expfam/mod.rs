//! Tests for the Kozachenko–Leonenko estimators.
mod kl_entropy;
