//! Player-state snapshot and content identifiers
//!
//! Ids wrap the string identifiers authored in case content ("e5",
//! "h_gardener"). The engine treats `PlayerState` as an immutable
//! snapshot; the mutators here exist for the host reducer and for tests,
//! the engine itself only reads.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Identifier of an evidence piece in the case catalog
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceId(pub String);

impl EvidenceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EvidenceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EvidenceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an authored hypothesis
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HypothesisId(pub String);

impl HypothesisId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HypothesisId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for HypothesisId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for HypothesisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an authored contradiction
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContradictionId(pub String);

impl ContradictionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContradictionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ContradictionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContradictionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of player progress consumed by every engine function
///
/// `unlocked_hypotheses` and `discovered_contradictions` are write-once
/// memo sets maintained by the host: the engine reads them to decide what
/// is already known and reports deltas, but never writes them itself.
/// All sets are `IndexSet` so membership is duplicate-free and iteration
/// order stays reproducible across round-trips.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub collected_evidence: IndexSet<EvidenceId>,
    pub investigation_points_remaining: u32,
    pub unlocked_hypotheses: IndexSet<HypothesisId>,
    pub active_hypothesis: Option<HypothesisId>,
    pub discovered_contradictions: IndexSet<ContradictionId>,
    pub resolved_contradictions: IndexSet<ContradictionId>,
}

impl PlayerState {
    /// Initial snapshot with a full investigation-point budget
    pub fn new(investigation_points: u32) -> Self {
        Self {
            investigation_points_remaining: investigation_points,
            ..Self::default()
        }
    }

    /// Record a collected evidence piece; duplicates are a no-op
    pub fn collect_evidence(&mut self, id: impl Into<EvidenceId>) {
        self.collected_evidence.insert(id.into());
    }

    /// Spend investigation points, saturating at zero
    pub fn spend_points(&mut self, points: u32) {
        self.investigation_points_remaining =
            self.investigation_points_remaining.saturating_sub(points);
    }

    /// Fold a confirmed unlock into the memo set
    pub fn mark_unlocked(&mut self, id: impl Into<HypothesisId>) {
        self.unlocked_hypotheses.insert(id.into());
    }

    /// Fold a confirmed discovery into the memo set
    pub fn mark_discovered(&mut self, id: impl Into<ContradictionId>) {
        self.discovered_contradictions.insert(id.into());
    }

    /// Record that the player acknowledged a contradiction
    pub fn mark_resolved(&mut self, id: impl Into<ContradictionId>) {
        self.resolved_contradictions.insert(id.into());
    }

    /// Focus a hypothesis for relevance scoring
    pub fn focus(&mut self, id: impl Into<HypothesisId>) {
        self.active_hypothesis = Some(id.into());
    }

    /// Return to exploratory mode (no focused hypothesis)
    pub fn clear_focus(&mut self) {
        self.active_hypothesis = None;
    }

    /// Serialize the snapshot for the host persistence boundary
    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Re-hydrate a snapshot; behaves identically under re-evaluation
    pub fn from_json(json: &str) -> crate::errors::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
