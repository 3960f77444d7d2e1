//! Hypothesis unlocking
//!
//! Decides whether a hypothesis is unlocked for a given snapshot and
//! diffs player state for hypotheses that have just become unlocked.
//! The `unlocked_hypotheses` set on the snapshot is an authoritative
//! memo maintained by the host: once an id is present the hypothesis
//! stays unlocked, and `find_newly_unlocked` never reports it again.

pub mod hypothesis;
pub mod requirement;

pub use hypothesis::{Hypothesis, HypothesisTier};
pub use requirement::{evaluate_requirement, metric_value, Metric, UnlockRequirement};

use serde::{Deserialize, Serialize};

use crate::state::{EvidenceId, HypothesisId, PlayerState};

/// Attribution for an unlock event
///
/// Best-effort narrative flavor for the host's notification UI, not a
/// correctness-critical computation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UnlockTrigger {
    /// The unlock followed directly from collecting this evidence
    EvidenceCollected { evidence_id: EvidenceId },
    /// The unlock came from crossing a metric threshold
    ThresholdMet { metric: Metric, value: u32 },
}

/// Whether a hypothesis is unlocked for this snapshot
///
/// Always-available hypotheses and tier-1 hypotheses are unlocked in
/// every state, including the initial one. For tier-2 hypotheses the
/// `unlocked_hypotheses` memo wins over re-evaluation, so an unlock can
/// never be revoked by a later snapshot. A tier-2 hypothesis with an
/// empty requirement list is not unlockable through requirements at all.
pub fn is_hypothesis_unlocked(
    hypothesis: &Hypothesis,
    state: &PlayerState,
    initial_ip: Option<u32>,
) -> bool {
    if hypothesis.is_always_available || hypothesis.tier == HypothesisTier::One {
        return true;
    }
    if state.unlocked_hypotheses.contains(&hypothesis.id) {
        return true;
    }
    if hypothesis.unlock_requirements.is_empty() {
        return false;
    }

    // The authored requirement list is an implicit all_of
    hypothesis
        .unlock_requirements
        .iter()
        .all(|r| evaluate_requirement(r, state, initial_ip))
}

/// Tier-2 hypotheses that became unlocked since the last evaluation
///
/// Output order matches input order. Ids already present in the
/// `unlocked_hypotheses` memo are excluded, which is what lets the host
/// dispatch exactly one unlock event per hypothesis: fold the returned
/// ids into the memo before the next call.
pub fn find_newly_unlocked(
    hypotheses: &[Hypothesis],
    state: &PlayerState,
    initial_ip: Option<u32>,
) -> Vec<HypothesisId> {
    let newly: Vec<HypothesisId> = hypotheses
        .iter()
        .filter(|h| h.tier == HypothesisTier::Two)
        .filter(|h| !state.unlocked_hypotheses.contains(&h.id))
        .filter(|h| is_hypothesis_unlocked(h, state, initial_ip))
        .map(|h| h.id.clone())
        .collect();

    if !newly.is_empty() {
        tracing::debug!(count = newly.len(), "hypotheses newly unlocked");
    }
    newly
}

/// Attribute an unlock to the action that caused it
///
/// When the last collected evidence id is known and present in the
/// collected set, the unlock is attributed to that evidence; otherwise
/// the unlock really came from crossing a threshold and is attributed to
/// the current evidence count.
pub fn unlock_trigger(last_collected: Option<&EvidenceId>, state: &PlayerState) -> UnlockTrigger {
    match last_collected {
        Some(id) if !id.as_str().is_empty() && state.collected_evidence.contains(id) => {
            UnlockTrigger::EvidenceCollected {
                evidence_id: id.clone(),
            }
        }
        _ => UnlockTrigger::ThresholdMet {
            metric: Metric::EvidenceCount,
            value: state.collected_evidence.len() as u32,
        },
    }
}
