//! Evidence relevance scoring
//!
//! Classifies a single evidence piece against the currently focused
//! hypothesis. Authored linkage on the hypothesis is authoritative; the
//! only indirect inference is that evidence contradicting a
//! hypothesis-supporting piece scores as contradicting. The symmetric
//! inference (conflicting with a contradicting piece would imply
//! support) is deliberately not applied.

use serde::{Deserialize, Serialize};

use crate::contradiction::Contradiction;
use crate::state::EvidenceId;
use crate::unlock::Hypothesis;

/// Relevance of one evidence piece to a focused hypothesis
///
/// Computed per render, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceRelevance {
    Supports,
    Contradicts,
    Neutral,
}

/// Score one evidence piece against a focused hypothesis
///
/// First match wins: the hypothesis's supporting list, then its
/// contradicting list, then contradiction-pair inference, then neutral.
/// Pure and stable, so redundant per-card calls during re-renders are
/// safe. Only meaningful with a focused hypothesis; in exploratory mode
/// the host skips scoring entirely (see `CaseBoard::relevance`).
pub fn evidence_relevance(
    evidence_id: &EvidenceId,
    hypothesis: &Hypothesis,
    contradictions: &[Contradiction],
) -> EvidenceRelevance {
    if hypothesis.supporting_evidence.contains(evidence_id) {
        return EvidenceRelevance::Supports;
    }
    if hypothesis.contradicting_evidence.contains(evidence_id) {
        return EvidenceRelevance::Contradicts;
    }

    // Conflicting with a piece the hypothesis relies on counts against it.
    // The reverse direction implies nothing.
    for contradiction in contradictions {
        if let Some(other) = contradiction.other_evidence(evidence_id) {
            if hypothesis.supporting_evidence.contains(other) {
                return EvidenceRelevance::Contradicts;
            }
        }
    }

    EvidenceRelevance::Neutral
}
