//! Tests for the shared N-D neighbour search and linear algebra helpers.
