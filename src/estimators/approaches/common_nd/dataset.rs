// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use kiddo::{ImmutableKdTree, SquaredEuclidean};
use ndarray::ArrayView2;
use std::num::NonZeroUsize;

use crate::error::{Error, Result};

/// Largest dimension served by the KD-tree; wider data uses a brute-force scan.
pub const MAX_TREE_DIM: usize = 16;

/// N-D point set with a KD-tree for k-th neighbour queries.
///
/// The tree is built once per dataset and dropped with it. Datasets are
/// created for a single estimate and never cached. Callers reach it through
/// [`kth_neighbor_radii`], which validates `k` first.
pub(crate) struct NdDataset<const K: usize> {
    pub points: Vec<[f64; K]>,
    pub n: usize,
    pub tree: ImmutableKdTree<f64, K>,
}

impl<const K: usize> NdDataset<K> {
    pub fn from_points(points: Vec<[f64; K]>) -> Self {
        let n = points.len();
        let tree = ImmutableKdTree::new_from_slice(&points);
        Self { points, n, tree }
    }

    pub fn from_view(data: ArrayView2<'_, f64>) -> Self {
        assert!(data.ncols() == K, "data.ncols() must equal K");
        Self::from_points(Self::to_points(data))
    }

    fn to_points(data: ArrayView2<'_, f64>) -> Vec<[f64; K]> {
        let n = data.nrows();
        let mut points: Vec<[f64; K]> = Vec::with_capacity(n);
        if let Some(slice) = data.as_slice() {
            for chunk in slice.chunks_exact(K) {
                let mut p = [0.0; K];
                p.copy_from_slice(&chunk[..K]);
                points.push(p);
            }
        } else {
            for r in 0..n {
                let mut p = [0.0; K];
                for (c, v) in p.iter_mut().enumerate() {
                    *v = data[(r, c)];
                }
                points.push(p);
            }
        }
        points
    }

    /// Euclidean distance to the k-th nearest neighbour of every point, self excluded.
    ///
    /// Queries `k + 1` neighbours and keeps the last one: the first hit is the
    /// query point itself at distance zero. Requires `1 <= k < n`.
    pub fn kth_neighbor_radii_euclidean(&self, k: usize) -> Vec<f64> {
        debug_assert!(k >= 1 && k < self.n, "k must be in 1..n for self-queries");
        let qty = NonZeroUsize::MIN.saturating_add(k);
        let mut radii = Vec::with_capacity(self.n);
        for p in self.points.iter() {
            let mut neigh = self.tree.nearest_n::<SquaredEuclidean>(p, qty);
            let kth = neigh.swap_remove(k);
            let (dist2, _idx): (f64, u64) = kth.into();
            radii.push(dist2.sqrt());
        }
        radii
    }
}

/// O(N^2) k-th neighbour radii, the fallback for dimensions the KD-tree is
/// not instantiated for.
///
/// Same contract and errors as [`kth_neighbor_radii`].
pub fn brute_force_kth_radii(data: ArrayView2<'_, f64>, k: usize) -> Result<Vec<f64>> {
    check_k(k, data.nrows())?;
    Ok(brute_force_radii_unchecked(data, k))
}

fn brute_force_radii_unchecked(data: ArrayView2<'_, f64>, k: usize) -> Vec<f64> {
    let n = data.nrows();
    let mut out = Vec::with_capacity(n);
    let mut dists: Vec<f64> = Vec::with_capacity(n.saturating_sub(1));
    for i in 0..n {
        dists.clear();
        let xi = data.row(i);
        for j in 0..n {
            if i == j {
                continue;
            }
            let acc: f64 = xi
                .iter()
                .zip(data.row(j).iter())
                .map(|(a, b)| (a - b) * (a - b))
                .sum();
            dists.push(acc);
        }
        dists.select_nth_unstable_by(k - 1, |a, b| a.total_cmp(b));
        out.push(dists[k - 1].sqrt());
    }
    out
}

macro_rules! tree_radii {
    ($data:expr, $k:expr; $($dim:literal),+) => {
        match $data.ncols() {
            $($dim => NdDataset::<$dim>::from_view($data).kth_neighbor_radii_euclidean($k),)+
            _ => brute_force_radii_unchecked($data, $k),
        }
    };
}

/// Euclidean distances to the k-th nearest neighbour (self excluded) for
/// every row of `data`.
///
/// Dimensions up to [`MAX_TREE_DIM`] use a KD-tree built for this call only;
/// wider data falls back to a quadratic scan.
///
/// # Errors
///
/// [`Error::InvalidParameter`] if `k == 0` or `k >= data.nrows()`.
pub fn kth_neighbor_radii(data: ArrayView2<'_, f64>, k: usize) -> Result<Vec<f64>> {
    check_k(k, data.nrows())?;
    Ok(kth_neighbor_radii_unchecked(data, k))
}

/// A point has `n - 1` neighbours besides itself.
fn check_k(k: usize, n: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::invalid_parameter("k", "k-nearest neighbour 'k' must be larger than 0"));
    }
    if k >= n {
        return Err(Error::invalid_parameter(
            "k",
            format!("k = {k} requires at least {} observations, got {n}", k + 1),
        ));
    }
    Ok(())
}

/// [`kth_neighbor_radii`] for callers that already validated `1 <= k < n`.
pub(crate) fn kth_neighbor_radii_unchecked(data: ArrayView2<'_, f64>, k: usize) -> Vec<f64> {
    trace_debug!(
        n = data.nrows(),
        d = data.ncols(),
        k,
        brute_force = data.ncols() > MAX_TREE_DIM,
        "querying k-th neighbour radii"
    );
    tree_radii!(data, k; 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16)
}
