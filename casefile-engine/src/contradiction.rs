//! Contradiction discovery tracking
//!
//! A contradiction is an authored pair of evidence ids whose simultaneous
//! collection reveals a narrative inconsistency. Discovery and resolution
//! are one-way transitions recorded in the player-state sets, never on
//! the authored entity itself.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::state::{ContradictionId, EvidenceId};

/// An authored inconsistency between two evidence pieces
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contradiction {
    pub id: ContradictionId,
    pub evidence_a: EvidenceId,
    pub evidence_b: EvidenceId,
    pub description: String,
    /// Authored explanation shown once the player resolves the pair
    #[serde(default)]
    pub resolution: Option<String>,
    /// Authored default, distinct from the player-state resolved set
    #[serde(default)]
    pub is_resolved: bool,
}

impl Contradiction {
    pub fn new(
        id: impl Into<ContradictionId>,
        evidence_a: impl Into<EvidenceId>,
        evidence_b: impl Into<EvidenceId>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            evidence_a: evidence_a.into(),
            evidence_b: evidence_b.into(),
            description: description.into(),
            resolution: None,
            is_resolved: false,
        }
    }

    /// Discovered iff both referenced evidence pieces are collected
    ///
    /// Pure set membership: an id that exists nowhere in the case catalog
    /// simply never matches.
    pub fn is_discovered(&self, collected_evidence: &IndexSet<EvidenceId>) -> bool {
        collected_evidence.contains(&self.evidence_a)
            && collected_evidence.contains(&self.evidence_b)
    }

    /// Whether the given evidence is one of the pair
    pub fn involves(&self, evidence_id: &EvidenceId) -> bool {
        self.evidence_a == *evidence_id || self.evidence_b == *evidence_id
    }

    /// The other half of the pair, if `evidence_id` is one of the two
    pub fn other_evidence(&self, evidence_id: &EvidenceId) -> Option<&EvidenceId> {
        if self.evidence_a == *evidence_id {
            Some(&self.evidence_b)
        } else if self.evidence_b == *evidence_id {
            Some(&self.evidence_a)
        } else {
            None
        }
    }
}

/// Contradictions discovered by this snapshot but not yet known to the host
///
/// Returns full objects in stable input order so the caller can dispatch
/// rich discovery events. Fold the returned ids into the discovered set
/// before the next call; after that they are excluded even though both
/// evidence pieces stay collected.
pub fn find_newly_discovered<'a>(
    contradictions: &'a [Contradiction],
    collected_evidence: &IndexSet<EvidenceId>,
    already_discovered: &IndexSet<ContradictionId>,
) -> Vec<&'a Contradiction> {
    let newly: Vec<&Contradiction> = contradictions
        .iter()
        .filter(|c| c.is_discovered(collected_evidence))
        .filter(|c| !already_discovered.contains(&c.id))
        .collect();

    if !newly.is_empty() {
        tracing::debug!(count = newly.len(), "contradictions newly discovered");
    }
    newly
}

/// Whether every authored contradiction has been discovered
///
/// Vacuously true for a case with no contradictions; extra ids in
/// `discovered` are tolerated.
pub fn all_discovered(
    contradictions: &[Contradiction],
    discovered: &IndexSet<ContradictionId>,
) -> bool {
    contradictions.iter().all(|c| discovered.contains(&c.id))
}

/// Percentage of contradictions resolved, round-half-up
///
/// Defined as 100 for a case with no contradictions.
pub fn resolution_rate(total: usize, resolved: &IndexSet<ContradictionId>) -> u8 {
    rate(total, resolved.len())
}

/// Percentage of contradictions discovered, round-half-up
pub fn discovery_rate(total: usize, discovered: &IndexSet<ContradictionId>) -> u8 {
    rate(total, discovered.len())
}

fn rate(total: usize, count: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let percent = (count as f64 / total as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collected(ids: &[&str]) -> IndexSet<EvidenceId> {
        ids.iter().map(|id| EvidenceId::from(*id)).collect()
    }

    fn discovered(ids: &[&str]) -> IndexSet<ContradictionId> {
        ids.iter().map(|id| ContradictionId::from(*id)).collect()
    }

    #[test]
    fn test_discovery_requires_both_pieces() {
        let contradiction = Contradiction::new("c1", "e1", "e2", "Times do not match");

        assert!(!contradiction.is_discovered(&collected(&[])));
        assert!(!contradiction.is_discovered(&collected(&["e1"])));
        assert!(!contradiction.is_discovered(&collected(&["e2"])));
        assert!(contradiction.is_discovered(&collected(&["e1", "e2"])));

        // Remains discovered for any superset
        assert!(contradiction.is_discovered(&collected(&["e1", "e2", "e3", "e4"])));
    }

    #[test]
    fn test_other_evidence() {
        let contradiction = Contradiction::new("c1", "e1", "e2", "");

        assert_eq!(
            contradiction.other_evidence(&"e1".into()),
            Some(&EvidenceId::from("e2"))
        );
        assert_eq!(
            contradiction.other_evidence(&"e2".into()),
            Some(&EvidenceId::from("e1"))
        );
        assert_eq!(contradiction.other_evidence(&"e3".into()), None);
        assert!(contradiction.involves(&"e1".into()));
        assert!(!contradiction.involves(&"e3".into()));
    }

    #[test]
    fn test_find_newly_discovered_filters_known() {
        let contradictions = vec![
            Contradiction::new("c1", "e1", "e2", "First"),
            Contradiction::new("c2", "e2", "e3", "Second"),
            Contradiction::new("c3", "e4", "e5", "Third"),
        ];

        let evidence = collected(&["e1", "e2", "e3"]);
        let newly = find_newly_discovered(&contradictions, &evidence, &discovered(&["c1"]));

        // c1 already known, c3 missing evidence
        assert_eq!(newly.len(), 1);
        assert_eq!(newly[0].id, ContradictionId::from("c2"));
    }

    #[test]
    fn test_find_newly_discovered_idempotent() {
        let contradictions = vec![Contradiction::new("c1", "e1", "e2", "")];
        let evidence = collected(&["e1", "e2"]);

        let first = find_newly_discovered(&contradictions, &evidence, &discovered(&[]));
        let second = find_newly_discovered(&contradictions, &evidence, &discovered(&[]));
        assert_eq!(first.len(), 1);
        assert_eq!(first, second);

        // Both pieces stay collected, but the id is now known
        assert!(find_newly_discovered(&contradictions, &evidence, &discovered(&["c1"])).is_empty());
    }

    #[test]
    fn test_all_discovered() {
        let contradictions = vec![
            Contradiction::new("c1", "e1", "e2", ""),
            Contradiction::new("c2", "e3", "e4", ""),
        ];

        assert!(!all_discovered(&contradictions, &discovered(&["c1"])));
        assert!(all_discovered(&contradictions, &discovered(&["c1", "c2"])));

        // Superset with unknown ids is fine
        assert!(all_discovered(
            &contradictions,
            &discovered(&["c1", "c2", "c99"])
        ));
    }

    #[test]
    fn test_all_discovered_vacuously_true() {
        assert!(all_discovered(&[], &discovered(&[])));
        assert!(all_discovered(&[], &discovered(&["c1"])));
    }

    #[test]
    fn test_resolution_rate_rounding() {
        assert_eq!(resolution_rate(3, &discovered(&["c1"])), 33);
        assert_eq!(resolution_rate(3, &discovered(&["c1", "c2"])), 67);
        assert_eq!(resolution_rate(3, &discovered(&["c1", "c2", "c3"])), 100);
    }

    #[test]
    fn test_rates_with_no_contradictions() {
        assert_eq!(resolution_rate(0, &discovered(&[])), 100);
        assert_eq!(discovery_rate(0, &discovered(&[])), 100);
    }

    #[test]
    fn test_discovery_rate() {
        assert_eq!(discovery_rate(4, &discovered(&[])), 0);
        assert_eq!(discovery_rate(4, &discovered(&["c1"])), 25);
        assert_eq!(discovery_rate(4, &discovered(&["c1", "c2", "c3"])), 75);
    }

    #[test]
    fn test_contradiction_json_round_trip() {
        let mut contradiction =
            Contradiction::new("c1", "e1", "e2", "Witness places him elsewhere");
        contradiction.resolution = Some("The clock was wrong".to_string());

        let json = serde_json::to_string(&contradiction).unwrap();
        let parsed: Contradiction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, contradiction);
    }
}
