//! Named scenarios: assemble a base contact matrix from the builders.

use passage_graph::{
    add_contact_noise, chain, complete, contact_decay, domain_blocks, ring, GraphError,
    WeightedGraph,
};

/// Intra-block contact weight for the `domains` scenario.
const DOMAIN_INTRA: f64 = 1.0;
/// Cross-block background weight; small but positive so the graph stays
/// connected.
const DOMAIN_INTER: f64 = 0.05;
/// Number of equal-size blocks in the `domains` scenario.
const DOMAIN_COUNT: usize = 4;

// ─────────────────────────────────────────────
// Scenario
// ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Unit-weight path.
    Chain,
    /// Unit-weight cycle.
    Ring,
    /// Unit-weight complete graph.
    Complete,
    /// Power-law distance-decay contact profile.
    Decay,
    /// Insulated domain blocks with weak background coupling.
    Domains,
}

impl Scenario {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chain" => Some(Self::Chain),
            "ring" => Some(Self::Ring),
            "complete" => Some(Self::Complete),
            "decay" => Some(Self::Decay),
            "domains" => Some(Self::Domains),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Chain => "chain",
            Self::Ring => "ring",
            Self::Complete => "complete",
            Self::Decay => "decay",
            Self::Domains => "domains",
        }
    }
}

// ─────────────────────────────────────────────
// Assembly
// ─────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub nodes: usize,
    /// Decay exponent (used by [`Scenario::Decay`] only).
    pub alpha: f64,
    /// Contact-noise amplitude; 0 disables noise.
    pub noise: f64,
    pub seed: u64,
}

/// Build the base graph for `scenario`, applying contact noise when the
/// configured amplitude is positive.
pub fn build(scenario: Scenario, config: &ScenarioConfig) -> Result<WeightedGraph, GraphError> {
    let base = match scenario {
        Scenario::Chain => chain(config.nodes),
        Scenario::Ring => ring(config.nodes),
        Scenario::Complete => complete(config.nodes),
        Scenario::Decay => contact_decay(config.nodes, config.alpha)?,
        Scenario::Domains => {
            let per_block = (config.nodes / DOMAIN_COUNT).max(1);
            let mut sizes = vec![per_block; DOMAIN_COUNT];
            // Absorb the remainder into the last block.
            let assigned = per_block * DOMAIN_COUNT;
            if config.nodes > assigned {
                sizes[DOMAIN_COUNT - 1] += config.nodes - assigned;
            }
            domain_blocks(&sizes, DOMAIN_INTRA, DOMAIN_INTER)?
        }
    };

    if config.noise > 0.0 {
        add_contact_noise(&base, config.noise, config.seed)
    } else {
        Ok(base)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
