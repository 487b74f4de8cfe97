//! Bulk-reservoir ("void") embedding.
//!
//! Extends an N-node graph with one structureless reservoir node coupled to
//! every real node in proportion to that node's degree:
//!
//! ```text
//! w_iv = p_void · d_i / (1 − p_void)
//! ```
//!
//! With this choice, a walker at node `i` escapes to the bulk on each step
//! with probability `w_iv / (d_i + w_iv) = p_void`, uniformly across nodes,
//! and the augmented chain spends a `p_void`-fraction of its stationary time
//! in the bulk. The base block is embedded untouched — relative internal
//! connectivity is exactly preserved, with no renormalization.
//!
//! Kept separate from the solver so the solver works on augmented and
//! non-augmented graphs alike.

use nalgebra::{DMatrix, DVector};

use passage_graph::WeightedGraph;

use crate::error::SpectralError;

// ─────────────────────────────────────────────
// Leak weights
// ─────────────────────────────────────────────

/// Per-node coupling weights to the void node:
/// `λ_i = p_void · d_i / (1 − p_void)`.
///
/// # Errors
///
/// [`SpectralError::InvalidVoidProbability`] unless `p_void ∈ (0, 1)`
/// strictly (NaN is rejected by the same comparison).
pub fn leak_weights(base: &WeightedGraph, p_void: f64) -> Result<DVector<f64>, SpectralError> {
    if !(p_void > 0.0 && p_void < 1.0) {
        return Err(SpectralError::InvalidVoidProbability { p: p_void });
    }
    let factor = p_void / (1.0 - p_void);
    Ok(base.degrees() * factor)
}

// ─────────────────────────────────────────────
// Augmentation
// ─────────────────────────────────────────────

/// Embed `base` into an (N+1)-node graph whose last node is the void state.
///
/// The top-left N×N block equals `base` exactly; row/column N carry the
/// [`leak_weights`]; entry `[N, N]` is zero. The result is a fresh matrix —
/// the base graph is never aliased or modified.
///
/// # Errors
///
/// [`SpectralError::InvalidVoidProbability`] unless `p_void ∈ (0, 1)`.
pub fn augment_with_void(
    base: &WeightedGraph,
    p_void: f64,
) -> Result<WeightedGraph, SpectralError> {
    let leak = leak_weights(base, p_void)?;
    let n = base.node_count();

    let mut aug = DMatrix::zeros(n + 1, n + 1);
    aug.view_mut((0, 0), (n, n)).copy_from(base.matrix());
    for i in 0..n {
        aug[(i, n)] = leak[i];
        aug[(n, i)] = leak[i];
    }

    Ok(WeightedGraph::new(aug)?)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use passage_graph::{chain, contact_decay};

    // ── structure ─────────────────────────────

    #[test]
    fn base_block_is_preserved_exactly() {
        let base = contact_decay(6, 1.0).unwrap();
        let aug = augment_with_void(&base, 0.3).unwrap();

        assert_eq!(aug.node_count(), 7);
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(
                    aug.weight(i, j),
                    base.weight(i, j),
                    "base block changed at ({i}, {j})"
                );
            }
        }
    }

    #[test]
    fn void_corner_is_zero() {
        let aug = augment_with_void(&chain(5), 0.4).unwrap();
        assert_eq!(aug.weight(5, 5), 0.0);
    }

    #[test]
    fn augmented_matrix_is_symmetric() {
        let aug = augment_with_void(&chain(5), 0.25).unwrap();
        let m = aug.matrix();
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(m[(i, j)], m[(j, i)]);
            }
        }
    }

    // ── degree identity ───────────────────────

    #[test]
    fn void_degree_matches_closed_form() {
        // sum(λ) = p/(1−p) · 2E
        let base = contact_decay(8, 0.7).unwrap();
        let p = 0.3;
        let aug = augment_with_void(&base, p).unwrap();

        let expected = p / (1.0 - p) * 2.0 * base.total_weight();
        let got = aug.degree(8);
        assert!(
            ((got - expected) / expected).abs() < 1e-12,
            "void degree {got} vs {expected}"
        );
    }

    #[test]
    fn leak_weight_is_proportional_to_degree() {
        let base = chain(5); // end degrees 1, inner degrees 2
        let leak = leak_weights(&base, 0.5).unwrap();
        // p/(1−p) = 1 at p = 0.5
        assert!((leak[0] - 1.0).abs() < 1e-12);
        assert!((leak[2] - 2.0).abs() < 1e-12);
    }

    // ── monotonicity ──────────────────────────

    #[test]
    fn coupling_strictly_increases_with_p_void() {
        let base = chain(6);
        let lo = leak_weights(&base, 0.2).unwrap();
        let hi = leak_weights(&base, 0.6).unwrap();
        for i in 0..6 {
            assert!(hi[i] > lo[i], "leak[{i}]: {} !> {}", hi[i], lo[i]);
        }
    }

    // ── parameter validation ──────────────────

    #[test]
    fn rejects_p_void_outside_open_interval() {
        let base = chain(4);
        for p in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            assert!(
                matches!(
                    augment_with_void(&base, p),
                    Err(SpectralError::InvalidVoidProbability { .. })
                ),
                "p = {p} was accepted"
            );
        }
    }

    // ── degenerate base ───────────────────────

    #[test]
    fn augmenting_empty_base_yields_isolated_void() {
        let base = passage_graph::WeightedGraph::new(nalgebra::DMatrix::zeros(0, 0)).unwrap();
        let aug = augment_with_void(&base, 0.3).unwrap();
        assert_eq!(aug.node_count(), 1);
        assert_eq!(aug.total_weight(), 0.0);
    }
}
