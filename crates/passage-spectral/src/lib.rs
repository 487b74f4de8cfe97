//! `passage-spectral` — first-passage statistics from the Laplacian spectrum.
//!
//! Implements the two halves of the first-passage pipeline:
//!
//! | Module        | Responsibility                                          |
//! |---------------|---------------------------------------------------------|
//! | [`laplacian`] | `L = diag(d) − W` and its sorted eigenspectrum          |
//! | [`void`]      | degree-preserving bulk-reservoir embedding              |
//! | [`gmfpt`]     | [`GmfptSolver`] — eigenspectrum GMFPT, both start laws  |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use passage_graph::chain;
//! use passage_spectral::{augment_with_void, GmfptSolver, StartWeighting};
//!
//! let base = chain(10);
//! let bulk = augment_with_void(&base, 0.3)?;
//!
//! let solver = GmfptSolver::default();
//! let times = solver.solve(&bulk, StartWeighting::Stationary)?;
//! assert_eq!(times.len(), 11); // 10 chain nodes + the void node
//! ```

pub mod error;
pub mod gmfpt;
pub mod laplacian;
pub mod void;

// ── Errors ────────────────────────────────────────────────────────────────────
pub use error::SpectralError;

// ── Laplacian ─────────────────────────────────────────────────────────────────
pub use laplacian::{laplacian, LaplacianSpectrum};

// ── Void embedding ────────────────────────────────────────────────────────────
pub use void::{augment_with_void, leak_weights};

// ── GMFPT solver ──────────────────────────────────────────────────────────────
pub use gmfpt::{GmfptSolver, SolverConfig, StartWeighting};
