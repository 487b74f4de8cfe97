//! `passage-graph` — dense symmetric weighted-graph type and builders.
//!
//! Supplies the input side of the first-passage pipeline: a validated
//! [`WeightedGraph`] plus the contact-matrix builders used by tests and the
//! scenario runner.
//!
//! ## Crate structure
//!
//! | Module         | Responsibility                                     |
//! |----------------|----------------------------------------------------|
//! | [`matrix`]     | [`WeightedGraph`] — validation, degrees, components |
//! | [`generators`] | chain / ring / complete / decay / domain builders  |
//! | [`noise`]      | seeded symmetric contact noise                     |

pub mod error;
pub mod generators;
pub mod matrix;
pub mod noise;

pub use error::GraphError;
pub use generators::{chain, complete, contact_decay, domain_blocks, ring};
pub use matrix::{WeightedGraph, SYMMETRY_TOL};
pub use noise::add_contact_noise;
