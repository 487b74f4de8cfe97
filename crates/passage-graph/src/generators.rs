//! Example weight-matrix builders.
//!
//! Chains, rings and complete graphs for exact-value tests; distance-decay
//! and domain-block profiles for chromatin-like contact structure. Every
//! builder returns a valid [`WeightedGraph`] by construction.

use nalgebra::DMatrix;

use crate::error::GraphError;
use crate::matrix::WeightedGraph;

// ─────────────────────────────────────────────
// Regular topologies
// ─────────────────────────────────────────────

/// Unit-weight path `0—1—…—(n−1)`.
pub fn chain(n: usize) -> WeightedGraph {
    let mut m = DMatrix::zeros(n, n);
    for i in 1..n {
        m[(i - 1, i)] = 1.0;
        m[(i, i - 1)] = 1.0;
    }
    WeightedGraph::from_valid(m)
}

/// Unit-weight cycle: [`chain`] plus a wrap-around edge.
///
/// Below 3 nodes the wrap edge would duplicate the single chain edge, so
/// `ring(n) == chain(n)` for `n < 3`.
pub fn ring(n: usize) -> WeightedGraph {
    let mut m = chain(n).into_matrix();
    if n >= 3 {
        m[(0, n - 1)] = 1.0;
        m[(n - 1, 0)] = 1.0;
    }
    WeightedGraph::from_valid(m)
}

/// Unit weight between every distinct pair.
pub fn complete(n: usize) -> WeightedGraph {
    let m = DMatrix::from_fn(n, n, |i, j| if i == j { 0.0 } else { 1.0 });
    WeightedGraph::from_valid(m)
}

// ─────────────────────────────────────────────
// Contact profiles
// ─────────────────────────────────────────────

/// Fully coupled graph with power-law distance decay:
///
/// ```text
/// w_ij = |i − j|^(−alpha)      (i ≠ j)
/// ```
///
/// `alpha = 1` approximates the contact decay of an ideal polymer; `alpha = 0`
/// degenerates to [`complete`].
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] if `alpha` is not finite.
pub fn contact_decay(n: usize, alpha: f64) -> Result<WeightedGraph, GraphError> {
    if !alpha.is_finite() {
        return Err(GraphError::InvalidParameter(format!(
            "decay exponent must be finite, got {alpha}"
        )));
    }

    let m = DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            0.0
        } else {
            let dist = i.abs_diff(j) as f64;
            dist.powf(-alpha)
        }
    });
    Ok(WeightedGraph::from_valid(m))
}

/// Block-structured contact matrix: `w_intra` between nodes in the same
/// block, `w_inter` between nodes of different blocks. `sizes` gives the
/// block lengths along the diagonal; the node count is their sum.
///
/// With `w_inter` small but positive the graph stays connected while the
/// blocks act as insulated domains.
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] if either weight is negative or
/// non-finite.
pub fn domain_blocks(
    sizes: &[usize],
    w_intra: f64,
    w_inter: f64,
) -> Result<WeightedGraph, GraphError> {
    for (name, w) in [("w_intra", w_intra), ("w_inter", w_inter)] {
        if !w.is_finite() || w < 0.0 {
            return Err(GraphError::InvalidParameter(format!(
                "{name} must be finite and non-negative, got {w}"
            )));
        }
    }

    let n: usize = sizes.iter().sum();

    // block[i] = index of the block node i belongs to
    let mut block = Vec::with_capacity(n);
    for (b, &size) in sizes.iter().enumerate() {
        block.extend(std::iter::repeat(b).take(size));
    }

    let m = DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            0.0
        } else if block[i] == block[j] {
            w_intra
        } else {
            w_inter
        }
    });
    Ok(WeightedGraph::from_valid(m))
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
