//! Dense symmetric weighted-graph representation.
//!
//! ## Invariants
//!
//! Every [`WeightedGraph`] holds an N×N matrix of weights that is:
//!
//! - square,
//! - finite (no NaN / ±inf entries),
//! - non-negative,
//! - symmetric within [`SYMMETRY_TOL`].
//!
//! A zero diagonal (no self-loops) is the convention but is not enforced.
//! Validation happens once, in [`WeightedGraph::new`]; everything downstream
//! receives the invariants by type and never re-checks.
//!
//! ## Derived quantities
//!
//! | Quantity         | Definition                         |
//! |------------------|------------------------------------|
//! | degree `d_i`     | `Σ_j w_ij` (row sum)               |
//! | total weight `E` | `Σ_ij w_ij / 2`                    |

use nalgebra::{DMatrix, DVector};

use crate::error::GraphError;

/// Relative tolerance for the symmetry check. Exact equality is too brittle
/// for matrices assembled by floating-point arithmetic; any physically
/// meaningful asymmetry is orders of magnitude above this.
pub const SYMMETRY_TOL: f64 = 1e-12;

// ─────────────────────────────────────────────
// WeightedGraph
// ─────────────────────────────────────────────

/// A validated, undirected, non-negatively weighted dense graph.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph {
    weights: DMatrix<f64>,
}

impl WeightedGraph {
    /// Validate a weight matrix and wrap it.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotSquare`], [`GraphError::NonFinite`],
    /// [`GraphError::NegativeWeight`] or [`GraphError::Asymmetric`] when the
    /// corresponding invariant is violated. The first violation found (in
    /// row-major order) is reported.
    pub fn new(weights: DMatrix<f64>) -> Result<Self, GraphError> {
        let (rows, cols) = weights.shape();
        if rows != cols {
            return Err(GraphError::NotSquare { rows, cols });
        }

        for row in 0..rows {
            for col in 0..cols {
                let w = weights[(row, col)];
                if !w.is_finite() {
                    return Err(GraphError::NonFinite { row, col });
                }
                if w < 0.0 {
                    return Err(GraphError::NegativeWeight { row, col, value: w });
                }
            }
        }

        for row in 0..rows {
            for col in (row + 1)..cols {
                let a = weights[(row, col)];
                let b = weights[(col, row)];
                let delta = (a - b).abs();
                if delta > SYMMETRY_TOL * a.abs().max(b.abs()).max(1.0) {
                    return Err(GraphError::Asymmetric { row, col, delta });
                }
            }
        }

        Ok(Self { weights })
    }

    /// Wrap a matrix that is symmetric, finite and non-negative by
    /// construction (generators, noise injection).
    pub(crate) fn from_valid(weights: DMatrix<f64>) -> Self {
        debug_assert_eq!(weights.nrows(), weights.ncols());
        Self { weights }
    }

    /// Number of nodes N.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.weights.nrows()
    }

    /// Edge weight between nodes `i` and `j`.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[(i, j)]
    }

    /// The underlying weight matrix.
    #[inline]
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.weights
    }

    /// Consume the graph and return the weight matrix.
    pub fn into_matrix(self) -> DMatrix<f64> {
        self.weights
    }

    /// Weighted degree of node `i`: `d_i = Σ_j w_ij`.
    pub fn degree(&self, i: usize) -> f64 {
        self.weights.row(i).sum()
    }

    /// All weighted degrees as a vector.
    pub fn degrees(&self) -> DVector<f64> {
        DVector::from_fn(self.node_count(), |i, _| self.degree(i))
    }

    /// Total edge weight `E = Σ_ij w_ij / 2`.
    pub fn total_weight(&self) -> f64 {
        self.weights.sum() / 2.0
    }

    /// Number of connected components, counting edges with strictly
    /// positive weight. Zero for the empty graph.
    ///
    /// This is a cheap structural pre-check; the spectral zero-mode count in
    /// the solver remains the authoritative connectivity gate.
    pub fn component_count(&self) -> usize {
        let n = self.node_count();
        if n == 0 {
            return 0;
        }

        let mut uf = UnionFind::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                if self.weights[(i, j)] > 0.0 {
                    uf.union(i, j);
                }
            }
        }

        let mut roots: Vec<usize> = (0..n).map(|i| uf.find(i)).collect();
        roots.sort_unstable();
        roots.dedup();
        roots.len()
    }
}

// ── Union-Find ──────────────────────────────────────────────────────────────

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]); // path compression
        }
        self.parent[x]
    }

    fn union(&mut self, x: usize, y: usize) {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry { return; }
        // union by rank
        if self.rank[rx] < self.rank[ry] {
            self.parent[rx] = ry;
        } else if self.rank[rx] > self.rank[ry] {
            self.parent[ry] = rx;
        } else {
            self.parent[ry] = rx;
            self.rank[rx] += 1;
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
