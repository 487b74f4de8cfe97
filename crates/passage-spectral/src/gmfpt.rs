//! Global Mean First Passage Time from the Laplacian eigenspectrum.
//!
//! For a discrete-time random walk on a connected weighted graph
//! (transition probability `w_ij / d_i`), the expected time to first reach
//! node `j` has a closed form over the eigenpairs `(λ_i, v_i)` of the
//! combinatorial Laplacian, sorted ascending with the trivial zero mode at
//! index 0 discarded:
//!
//! ```text
//! dv_i = Σ_k v_ik · d_k                      (degree projection, per mode)
//!
//! uniform start (average over all starts ≠ j):
//!     T_j = N/(N−1) · Σ_{i≥1} (1/λ_i) · (2E·v_ij² − v_ij·dv_i)
//!
//! stationary start (average weighted by π_k = d_k / 2E):
//!     T_j = 1/(2E) · Σ_{i≥1} (1/λ_i) · (2E·v_ij − dv_i)²
//! ```
//!
//! Both are dimensionless step counts: rescaling all weights by `c > 0`
//! rescales `λ`, `E` and `dv` by `c` and leaves `T` unchanged.
//!
//! ## Spectral preconditions
//!
//! Exactly one eigenvalue may be numerically zero. A second zero mode means
//! the graph is disconnected and every `1/λ_i` term for that mode diverges;
//! the solver fails fast with [`SpectralError::DegenerateSpectrum`] rather
//! than emitting NaN or infinities. Retained modes that sit close to zero
//! without crossing the threshold are reported via `tracing::warn!` since
//! they amplify floating-point error in the `1/λ_i` term.

use passage_graph::WeightedGraph;

use crate::error::SpectralError;
use crate::laplacian::LaplacianSpectrum;

// ─────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────

/// Numerical tolerances for [`GmfptSolver`]. Both are ratios of the largest
/// Laplacian eigenvalue, so they survive global rescaling of the weights.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Eigenvalues below `zero_tol · λ_max` count as zero modes.
    pub zero_tol: f64,
    /// Retained eigenvalues below `gap_warn · λ_max` are logged as
    /// numerically hazardous (near-disconnection).
    pub gap_warn: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            zero_tol: 1e-9,
            gap_warn: 1e-6,
        }
    }
}

// ─────────────────────────────────────────────
// Start weighting
// ─────────────────────────────────────────────

/// How the starting node of the walk is averaged over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartWeighting {
    /// Uniform average over the N−1 starting nodes other than the target.
    Uniform,
    /// Average over the stationary distribution `π_k = d_k / 2E` (the
    /// long-run occupation of the walk), target included with zero cost.
    #[default]
    Stationary,
}

impl StartWeighting {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Stationary => "stationary",
        }
    }
}

// ─────────────────────────────────────────────
// GmfptSolver
// ─────────────────────────────────────────────

/// Eigenspectrum GMFPT solver. Stateless — build once, call
/// [`solve`](GmfptSolver::solve) many times.
#[derive(Debug, Default)]
pub struct GmfptSolver {
    pub config: SolverConfig,
}

impl GmfptSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Compute the GMFPT to every node of `graph`.
    ///
    /// The output vector follows the input node ordering. All entries are
    /// finite and non-negative when the connectivity precondition holds.
    ///
    /// Edge cases: the empty graph yields an empty vector; a single node
    /// yields `[0.0]` (the walk starts at the only target).
    ///
    /// # Errors
    ///
    /// [`SpectralError::DegenerateSpectrum`] unless the Laplacian has
    /// exactly one numerically-zero eigenvalue.
    pub fn solve(
        &self,
        graph: &WeightedGraph,
        start: StartWeighting,
    ) -> Result<Vec<f64>, SpectralError> {
        let n = graph.node_count();
        if n == 0 {
            return Ok(Vec::new());
        }
        if n == 1 {
            return Ok(vec![0.0]);
        }

        let degrees = graph.degrees();
        let two_e = 2.0 * graph.total_weight();
        let spectrum = LaplacianSpectrum::decompose(graph);

        let lambda_max = spectrum.lambda_max();
        let zero_modes = spectrum.zero_modes(self.config.zero_tol * lambda_max);
        if zero_modes != 1 {
            return Err(SpectralError::DegenerateSpectrum { zero_modes });
        }

        let warn_below = self.config.gap_warn * lambda_max;
        let mut times = vec![0.0_f64; n];

        for mode in 1..n {
            let lambda = spectrum.eigenvalues[mode];
            if lambda < warn_below {
                tracing::warn!(
                    mode,
                    lambda,
                    lambda_max,
                    "retained eigenvalue is close to zero; 1/λ amplifies numerical error"
                );
            }

            let v = spectrum.eigenvectors.column(mode);
            // Degree projection — once per mode, reused across nodes.
            let dv = v.dot(&degrees);

            match start {
                StartWeighting::Uniform => {
                    for j in 0..n {
                        let vj = v[j];
                        times[j] += (two_e * vj * vj - vj * dv) / lambda;
                    }
                }
                StartWeighting::Stationary => {
                    for j in 0..n {
                        let r = two_e * v[j] - dv;
                        times[j] += r * r / lambda;
                    }
                }
            }
        }

        match start {
            StartWeighting::Uniform => {
                let scale = n as f64 / (n as f64 - 1.0);
                for t in times.iter_mut() {
                    *t *= scale;
                }
            }
            StartWeighting::Stationary => {
                for t in times.iter_mut() {
                    *t /= two_e;
                }
            }
        }

        Ok(times)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;
    use passage_graph::{chain, complete, contact_decay, ring, WeightedGraph};

    fn solve(graph: &WeightedGraph, start: StartWeighting) -> Vec<f64> {
        GmfptSolver::default().solve(graph, start).unwrap()
    }

    // ── closed forms ──────────────────────────

    #[test]
    fn path_of_three_matches_closed_form() {
        // MFPT system for 0—1—2 with unit weights:
        //   T_10 = 3, T_20 = 4, T_01 = T_21 = 1, ends symmetric.
        // Uniform average:    [ (3+4)/2, 1, (3+4)/2 ] = [3.5, 1.0, 3.5]
        // Stationary average: [ 3/2 + 4/4, 1/2, · ]   = [2.5, 0.5, 2.5]
        let g = chain(3);

        let uni = solve(&g, StartWeighting::Uniform);
        for (j, expected) in [3.5, 1.0, 3.5].iter().enumerate() {
            assert!((uni[j] - expected).abs() < 1e-9, "uniform[{j}] = {}", uni[j]);
        }

        let sta = solve(&g, StartWeighting::Stationary);
        for (j, expected) in [2.5, 0.5, 2.5].iter().enumerate() {
            assert!((sta[j] - expected).abs() < 1e-9, "stationary[{j}] = {}", sta[j]);
        }
    }

    #[test]
    fn complete_graph_times_are_uniform_across_nodes() {
        // K_n: every pairwise MFPT is n−1, so
        //   uniform    → n−1
        //   stationary → (n−1)²/n
        // The (n−1)-fold eigenvalue multiplicity also exercises tie-break
        // invariance of the mode sort.
        let n = 8;
        let g = complete(n);

        let uni = solve(&g, StartWeighting::Uniform);
        for (j, t) in uni.iter().enumerate() {
            assert!((t - 7.0).abs() < 1e-8, "uniform[{j}] = {t}");
        }

        let sta = solve(&g, StartWeighting::Stationary);
        let expected = 49.0 / 8.0;
        for (j, t) in sta.iter().enumerate() {
            assert!((t - expected).abs() < 1e-8, "stationary[{j}] = {t}");
        }
    }

    #[test]
    fn ring_is_vertex_transitive() {
        let g = ring(9);
        for start in [StartWeighting::Uniform, StartWeighting::Stationary] {
            let times = solve(&g, start);
            for t in &times[1..] {
                assert!(
                    (t - times[0]).abs() < 1e-8,
                    "{} variant not uniform on ring: {t} vs {}",
                    start.label(),
                    times[0]
                );
            }
        }
    }

    // ── symmetry and ordering ─────────────────

    #[test]
    fn path_ends_are_symmetric_and_slower_than_middle() {
        let g = chain(7);
        for start in [StartWeighting::Uniform, StartWeighting::Stationary] {
            let times = solve(&g, start);
            for j in 0..7 {
                assert!(
                    (times[j] - times[6 - j]).abs() < 1e-8,
                    "{}: asymmetric pair ({j}, {})",
                    start.label(),
                    6 - j
                );
            }
            assert!(times[3] < times[0], "middle should be reached fastest");
        }
    }

    // ── scale behavior ────────────────────────

    #[test]
    fn rescaling_weights_leaves_both_variants_unchanged() {
        // Step counts of the embedded discrete chain are dimensionless:
        // λ, E and dv all pick up the same factor c, which cancels.
        let base = contact_decay(6, 1.0).unwrap();
        let scaled = WeightedGraph::new(base.matrix() * 3.7).unwrap();

        for start in [StartWeighting::Uniform, StartWeighting::Stationary] {
            let a = solve(&base, start);
            let b = solve(&scaled, start);
            for j in 0..6 {
                assert!(
                    ((a[j] - b[j]) / a[j]).abs() < 1e-8,
                    "{}: node {j}: {} vs {}",
                    start.label(),
                    a[j],
                    b[j]
                );
            }
        }
    }

    // ── degeneracy handling ───────────────────

    #[test]
    fn disconnected_graph_fails_fast() {
        // 0—1 and 2—3: two components, two zero modes.
        let m = DMatrix::from_row_slice(4, 4, &[
            0.0, 1.0, 0.0, 0.0,
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
            0.0, 0.0, 1.0, 0.0,
        ]);
        let g = WeightedGraph::new(m).unwrap();
        let err = GmfptSolver::default()
            .solve(&g, StartWeighting::Stationary)
            .unwrap_err();
        assert!(
            matches!(&err, SpectralError::DegenerateSpectrum { zero_modes: 2 }),
            "got {err}"
        );
    }

    #[test]
    fn edgeless_graph_fails_fast() {
        let g = WeightedGraph::new(DMatrix::zeros(3, 3)).unwrap();
        assert!(matches!(
            GmfptSolver::default().solve(&g, StartWeighting::Uniform),
            Err(SpectralError::DegenerateSpectrum { .. })
        ));
    }

    // ── degenerate sizes ──────────────────────

    #[test]
    fn empty_graph_yields_empty_vector() {
        let g = WeightedGraph::new(DMatrix::zeros(0, 0)).unwrap();
        assert!(solve(&g, StartWeighting::Stationary).is_empty());
    }

    #[test]
    fn single_node_yields_zero() {
        let g = WeightedGraph::new(DMatrix::zeros(1, 1)).unwrap();
        assert_eq!(solve(&g, StartWeighting::Uniform), vec![0.0]);
        assert_eq!(solve(&g, StartWeighting::Stationary), vec![0.0]);
    }

    // ── output contract ───────────────────────

    #[test]
    fn outputs_are_finite_and_positive_on_connected_graphs() {
        let g = contact_decay(12, 1.5).unwrap();
        for start in [StartWeighting::Uniform, StartWeighting::Stationary] {
            for (j, t) in solve(&g, start).iter().enumerate() {
                assert!(t.is_finite(), "{}: node {j} not finite", start.label());
                assert!(*t > 0.0, "{}: node {j} not positive: {t}", start.label());
            }
        }
    }

    #[test]
    fn default_weighting_is_stationary() {
        assert_eq!(StartWeighting::default(), StartWeighting::Stationary);
    }
}
