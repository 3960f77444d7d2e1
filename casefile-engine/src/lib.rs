//! Casefile Investigation Rules Engine
//!
//! Pure, deterministic evaluation of detective-game progress:
//! - Requirement trees: nested all_of/any_of over evidence and metric thresholds
//! - Hypothesis unlocking: memoized unlock state with newly-unlocked diffing
//! - Contradiction tracking: discovery diffing and aggregate rates
//! - Evidence relevance: supports/contradicts/neutral against a focused hypothesis
//!
//! All player state lives in caller-supplied snapshots; the engine holds
//! no mutable state of its own and is safe to call redundantly.

// Module declarations
pub mod board;
pub mod contradiction;
pub mod errors;
pub mod relevance;
pub mod state;
pub mod unlock;

// Re-export main types
pub use board::{Case, CaseBoard, InvestigationEvent};

pub use contradiction::{
    all_discovered, discovery_rate, find_newly_discovered, resolution_rate, Contradiction,
};

pub use errors::{EngineError, Result};

pub use relevance::{evidence_relevance, EvidenceRelevance};

pub use state::{ContradictionId, EvidenceId, HypothesisId, PlayerState};

pub use unlock::{
    evaluate_requirement, find_newly_unlocked, is_hypothesis_unlocked, metric_value,
    unlock_trigger, Hypothesis, HypothesisTier, Metric, UnlockRequirement, UnlockTrigger,
};

/// Version of the engine crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the engine
pub fn init() {
    tracing::info!("Casefile Engine v{}", VERSION);
}
