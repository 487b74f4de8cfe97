//! # passage-experiment
//!
//! Scenario runner for the first-passage pipeline: assembles a contact
//! matrix, embeds the bulk reservoir, solves the GMFPT under both start
//! laws, and writes per-node telemetry as CSV.

pub mod scenario;
pub mod telemetry;
