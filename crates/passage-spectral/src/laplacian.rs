//! Combinatorial graph Laplacian and its eigenspectrum.
//!
//! ```text
//! L = diag(d) − W        d_i = Σ_j w_ij
//! ```
//!
//! `L` is symmetric positive semi-definite; every row sums to zero, so the
//! all-ones vector is an eigenvector with eigenvalue 0. The multiplicity of
//! the zero eigenvalue equals the number of connected components.
//!
//! The decomposition is delegated to `nalgebra`'s [`SymmetricEigen`] (real
//! eigenvalues, orthonormal eigenvectors); eigenpairs are re-sorted ascending
//! because the solver's closed form discards the zero mode at index 0.

use std::cmp::Ordering;

use nalgebra::{DMatrix, SymmetricEigen};

use passage_graph::WeightedGraph;

// ─────────────────────────────────────────────
// Laplacian construction
// ─────────────────────────────────────────────

/// Build the combinatorial Laplacian `L = diag(d) − W`.
pub fn laplacian(graph: &WeightedGraph) -> DMatrix<f64> {
    let n = graph.node_count();
    let degrees = graph.degrees();

    let mut lap = -graph.matrix().clone();
    for i in 0..n {
        lap[(i, i)] += degrees[i];
    }
    lap
}

// ─────────────────────────────────────────────
// LaplacianSpectrum
// ─────────────────────────────────────────────

/// Eigenvalues and eigenvectors of a graph Laplacian, sorted ascending by
/// eigenvalue. Column `i` of `eigenvectors` pairs with `eigenvalues[i]`.
///
/// Ties among degenerate eigenvalues are broken arbitrarily; the GMFPT sum
/// is invariant to the choice as long as the columns stay orthonormal
/// (which [`SymmetricEigen`] guarantees).
#[derive(Debug, Clone)]
pub struct LaplacianSpectrum {
    pub eigenvalues: Vec<f64>,
    pub eigenvectors: DMatrix<f64>,
}

impl LaplacianSpectrum {
    /// Decompose the Laplacian of `graph`.
    pub fn decompose(graph: &WeightedGraph) -> Self {
        let n = graph.node_count();
        if n == 0 {
            return Self {
                eigenvalues: Vec::new(),
                eigenvectors: DMatrix::zeros(0, 0),
            };
        }

        let eigen = SymmetricEigen::new(laplacian(graph));

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            eigen.eigenvalues[a]
                .partial_cmp(&eigen.eigenvalues[b])
                .unwrap_or(Ordering::Equal)
        });

        let eigenvalues: Vec<f64> = order.iter().map(|&i| eigen.eigenvalues[i]).collect();
        let eigenvectors = DMatrix::from_fn(n, n, |row, col| eigen.eigenvectors[(row, order[col])]);

        Self { eigenvalues, eigenvectors }
    }

    /// Number of eigenpairs (= node count).
    #[inline]
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }

    /// Largest eigenvalue, or 0.0 for an empty spectrum.
    pub fn lambda_max(&self) -> f64 {
        self.eigenvalues.last().copied().unwrap_or(0.0)
    }

    /// Count of eigenvalues with `|λ| ≤ tol`. For a connected graph and a
    /// sensible tolerance this is exactly 1.
    pub fn zero_modes(&self, tol: f64) -> usize {
        self.eigenvalues.iter().filter(|l| l.abs() <= tol).count()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
