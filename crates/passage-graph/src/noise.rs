//! Synthetic contact noise for demonstration inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GraphError;
use crate::matrix::WeightedGraph;

/// Add uniform `[0, amplitude)` noise to every off-diagonal pair of `graph`,
/// applied symmetrically so the result remains a valid undirected graph. The
/// diagonal is untouched. A fresh matrix is returned; the input is never
/// modified.
///
/// The RNG is seeded so that a scenario can be reproduced exactly from
/// `(amplitude, seed)`.
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] if `amplitude` is negative or non-finite.
pub fn add_contact_noise(
    graph: &WeightedGraph,
    amplitude: f64,
    seed: u64,
) -> Result<WeightedGraph, GraphError> {
    if !amplitude.is_finite() || amplitude < 0.0 {
        return Err(GraphError::InvalidParameter(format!(
            "noise amplitude must be finite and non-negative, got {amplitude}"
        )));
    }
    if amplitude == 0.0 {
        return Ok(graph.clone());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let n = graph.node_count();
    let mut m = graph.matrix().clone();

    for i in 0..n {
        for j in (i + 1)..n {
            let eps = rng.gen_range(0.0..amplitude);
            m[(i, j)] += eps;
            m[(j, i)] = m[(i, j)];
        }
    }

    Ok(WeightedGraph::from_valid(m))
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::chain;

    #[test]
    fn noise_preserves_symmetry_and_diagonal() {
        let g = add_contact_noise(&chain(8), 0.2, 7).unwrap();
        let m = g.matrix();
        for i in 0..8 {
            assert_eq!(m[(i, i)], 0.0, "diagonal perturbed at {i}");
            for j in 0..8 {
                assert_eq!(m[(i, j)], m[(j, i)], "asymmetry at ({i}, {j})");
            }
        }
    }

    #[test]
    fn noise_only_adds_weight() {
        let base = chain(6);
        let noisy = add_contact_noise(&base, 0.5, 11).unwrap();
        for i in 0..6 {
            for j in 0..6 {
                if i != j {
                    assert!(noisy.weight(i, j) >= base.weight(i, j));
                }
            }
        }
    }

    #[test]
    fn same_seed_reproduces_same_matrix() {
        let base = chain(5);
        let a = add_contact_noise(&base, 0.3, 42).unwrap();
        let b = add_contact_noise(&base, 0.3, 42).unwrap();
        assert_eq!(a.matrix(), b.matrix());
    }

    #[test]
    fn different_seeds_differ() {
        let base = chain(5);
        let a = add_contact_noise(&base, 0.3, 1).unwrap();
        let b = add_contact_noise(&base, 0.3, 2).unwrap();
        assert_ne!(a.matrix(), b.matrix());
    }

    #[test]
    fn zero_amplitude_is_identity() {
        let base = chain(4);
        let same = add_contact_noise(&base, 0.0, 9).unwrap();
        assert_eq!(base.matrix(), same.matrix());
    }

    #[test]
    fn negative_amplitude_is_rejected() {
        assert!(matches!(
            add_contact_noise(&chain(4), -0.1, 0),
            Err(GraphError::InvalidParameter(_))
        ));
    }
}
