//! Case content container and the host-facing evaluation facade
//!
//! `CaseBoard` owns the authored content for one case; every player-state
//! input stays a caller-supplied snapshot. `evaluate` computes both
//! deltas for one state transition and returns the events the host must
//! fold into the next snapshot before calling again.

use serde::{Deserialize, Serialize};

use crate::contradiction::{self, Contradiction};
use crate::errors::Result;
use crate::relevance::{evidence_relevance, EvidenceRelevance};
use crate::state::{EvidenceId, HypothesisId, PlayerState};
use crate::unlock::{
    find_newly_unlocked, is_hypothesis_unlocked, unlock_trigger, Hypothesis, UnlockTrigger,
};

/// Authored content for one investigation case
///
/// Loaded by the host's content pipeline (YAML authoring is outside this
/// crate) and handed in as-is; never mutated at runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub title: String,
    pub initial_investigation_points: u32,
    #[serde(default)]
    pub hypotheses: Vec<Hypothesis>,
    #[serde(default)]
    pub contradictions: Vec<Contradiction>,
}

impl Case {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One engine-computed delta for the host reducer to dispatch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InvestigationEvent {
    HypothesisUnlocked {
        hypothesis_id: HypothesisId,
        trigger: UnlockTrigger,
    },
    ContradictionDiscovered {
        contradiction: Contradiction,
    },
}

impl PlayerState {
    /// Fold a batch of engine events into the next snapshot
    ///
    /// Host-reducer helper; applying the same batch twice is a no-op.
    pub fn apply_events(&mut self, events: &[InvestigationEvent]) {
        for event in events {
            match event {
                InvestigationEvent::HypothesisUnlocked { hypothesis_id, .. } => {
                    self.unlocked_hypotheses.insert(hypothesis_id.clone());
                }
                InvestigationEvent::ContradictionDiscovered { contradiction } => {
                    self.discovered_contradictions.insert(contradiction.id.clone());
                }
            }
        }
    }
}

/// Facade over the four engine components for one case
pub struct CaseBoard {
    case: Case,
}

impl CaseBoard {
    pub fn new(case: Case) -> Self {
        Self { case }
    }

    pub fn case(&self) -> &Case {
        &self.case
    }

    pub fn initial_points(&self) -> u32 {
        self.case.initial_investigation_points
    }

    /// Initial snapshot with this case's full point budget
    pub fn new_player_state(&self) -> PlayerState {
        PlayerState::new(self.case.initial_investigation_points)
    }

    pub fn hypothesis(&self, id: &HypothesisId) -> Option<&Hypothesis> {
        self.case.hypotheses.iter().find(|h| h.id == *id)
    }

    /// Whether a hypothesis is unlocked for this snapshot
    ///
    /// Unknown ids are locked.
    pub fn is_unlocked(&self, id: &HypothesisId, state: &PlayerState) -> bool {
        self.hypothesis(id)
            .map(|h| is_hypothesis_unlocked(h, state, Some(self.initial_points())))
            .unwrap_or(false)
    }

    /// Compute both deltas for one state transition
    ///
    /// Returns unlock events first, then discovery events, each in
    /// content order. `last_collected` attributes unlocks to the
    /// triggering action when it names evidence present in the snapshot.
    /// The host must fold the events into the next snapshot (see
    /// `PlayerState::apply_events`) before evaluating again, otherwise
    /// the same deltas are reported a second time.
    pub fn evaluate(
        &self,
        state: &PlayerState,
        last_collected: Option<&EvidenceId>,
    ) -> Vec<InvestigationEvent> {
        let initial = Some(self.case.initial_investigation_points);
        let mut events = Vec::new();

        for hypothesis_id in find_newly_unlocked(&self.case.hypotheses, state, initial) {
            events.push(InvestigationEvent::HypothesisUnlocked {
                hypothesis_id,
                trigger: unlock_trigger(last_collected, state),
            });
        }

        for found in contradiction::find_newly_discovered(
            &self.case.contradictions,
            &state.collected_evidence,
            &state.discovered_contradictions,
        ) {
            events.push(InvestigationEvent::ContradictionDiscovered {
                contradiction: found.clone(),
            });
        }

        events
    }

    /// Relevance of one evidence piece to the focused hypothesis
    ///
    /// `None` in exploratory mode — no focused hypothesis, or a focused
    /// id that is not part of this case. The host skips badges entirely
    /// in that mode rather than rendering everything neutral.
    pub fn relevance(
        &self,
        evidence_id: &EvidenceId,
        state: &PlayerState,
    ) -> Option<EvidenceRelevance> {
        let active = state.active_hypothesis.as_ref()?;
        let hypothesis = self.hypothesis(active)?;
        Some(evidence_relevance(
            evidence_id,
            hypothesis,
            &self.case.contradictions,
        ))
    }

    pub fn all_contradictions_discovered(&self, state: &PlayerState) -> bool {
        contradiction::all_discovered(&self.case.contradictions, &state.discovered_contradictions)
    }

    pub fn discovery_rate(&self, state: &PlayerState) -> u8 {
        contradiction::discovery_rate(
            self.case.contradictions.len(),
            &state.discovered_contradictions,
        )
    }

    pub fn resolution_rate(&self, state: &PlayerState) -> u8 {
        contradiction::resolution_rate(
            self.case.contradictions.len(),
            &state.resolved_contradictions,
        )
    }
}
