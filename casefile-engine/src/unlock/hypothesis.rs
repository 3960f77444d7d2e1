//! Hypothesis content types
//!
//! Hypotheses are authored per case and never mutated at runtime. Tier 1
//! hypotheses are visible from the start of a case; tier 2 hypotheses
//! stay locked until their requirement list is satisfied.

use serde::{Deserialize, Serialize};

use super::requirement::UnlockRequirement;
use crate::errors::EngineError;
use crate::state::{EvidenceId, HypothesisId};

/// Reveal tier of a hypothesis
///
/// Serialized as the authored integer; anything outside 1..=2 is an
/// `EngineError::InvalidTier` at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HypothesisTier {
    /// Available from the start of the case
    One = 1,
    /// Gated behind unlock requirements
    Two = 2,
}

impl TryFrom<u8> for HypothesisTier {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(EngineError::InvalidTier { value }),
        }
    }
}

impl From<HypothesisTier> for u8 {
    fn from(tier: HypothesisTier) -> Self {
        tier as u8
    }
}

/// A candidate explanation the player can track
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: HypothesisId,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub tier: HypothesisTier,
    /// Ground truth, consumed by end-of-case scoring outside this engine
    #[serde(default)]
    pub is_correct: bool,
    /// Short-circuits unlocking regardless of tier ("something else" theories)
    #[serde(default)]
    pub is_always_available: bool,
    /// Implicitly AND-ed; multi-path unlocks wrap alternatives in a top-level any_of
    #[serde(default)]
    pub unlock_requirements: Vec<UnlockRequirement>,
    /// Authored relevance linkage consumed by the relevance scorer
    #[serde(default)]
    pub supporting_evidence: Vec<EvidenceId>,
    #[serde(default)]
    pub contradicting_evidence: Vec<EvidenceId>,
}

impl Hypothesis {
    /// Create a hypothesis with no requirements or evidence linkage
    pub fn new(
        id: impl Into<HypothesisId>,
        label: impl Into<String>,
        tier: HypothesisTier,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            tier,
            is_correct: false,
            is_always_available: false,
            unlock_requirements: Vec::new(),
            supporting_evidence: Vec::new(),
            contradicting_evidence: Vec::new(),
        }
    }
}
