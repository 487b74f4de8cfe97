//! Error types for the spectral pipeline.

use thiserror::Error;

use passage_graph::GraphError;

#[derive(Debug, Clone, Error)]
pub enum SpectralError {
    /// Input matrix failed validation.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// The bulk-escape probability must lie strictly inside (0, 1): at 0 the
    /// void node is isolated, at 1 the coupling weight diverges.
    #[error("void probability must be in (0, 1), got {p}")]
    InvalidVoidProbability { p: f64 },

    /// The Laplacian did not have exactly one numerically-zero eigenvalue.
    /// Two or more means the graph is disconnected; zero means the spectrum
    /// is inconsistent with a valid symmetric Laplacian. Either way the
    /// GMFPT formula is undefined.
    #[error("degenerate Laplacian spectrum: expected exactly one zero eigenvalue, found {zero_modes}")]
    DegenerateSpectrum { zero_modes: usize },
}
