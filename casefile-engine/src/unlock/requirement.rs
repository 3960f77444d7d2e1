//! Unlock requirement trees and their evaluation
//!
//! Requirements form a tree of leaf predicates (evidence membership,
//! metric thresholds) under `AllOf`/`AnyOf` composites. Evaluation is a
//! pure recursive walk over a player-state snapshot. The tree cannot
//! cycle by construction, so recursion needs no depth limit.

use serde::{Deserialize, Serialize};

use crate::state::{EvidenceId, PlayerState};

/// Player-progress metric a threshold requirement can test
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Number of distinct evidence pieces collected
    EvidenceCount,
    /// Investigation points spent so far
    IpSpent,
    /// Percentage of the initial point budget spent, 0-100
    InvestigationProgress,
}

/// A single unlock requirement, leaf or composite
///
/// The `type` tag matches the authored content vocabulary. An unknown tag
/// fails at deserialization; after parse the tree is a closed set of
/// variants and evaluation is total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UnlockRequirement {
    /// True iff the referenced evidence has been collected
    EvidenceCollected { evidence_id: EvidenceId },
    /// True iff the metric value has reached the threshold
    ThresholdMet { metric: Metric, threshold: u32 },
    /// True iff every child requirement holds; vacuously true when empty
    AllOf { requirements: Vec<UnlockRequirement> },
    /// True iff at least one child requirement holds; vacuously false when empty
    AnyOf { requirements: Vec<UnlockRequirement> },
}

/// Evaluate a requirement tree against a player-state snapshot
///
/// `initial_ip` is the case's starting investigation-point budget. It is
/// needed for `IpSpent` and `InvestigationProgress` thresholds; when it
/// is `None` those metrics behave as if the budget were zero (0 spent,
/// progress 100). Callers whose content authors IP-based thresholds must
/// always supply it.
///
/// A requirement referencing an evidence id that exists nowhere in the
/// case catalog simply evaluates to false; referential integrity is an
/// authoring-time concern.
pub fn evaluate_requirement(
    requirement: &UnlockRequirement,
    state: &PlayerState,
    initial_ip: Option<u32>,
) -> bool {
    match requirement {
        UnlockRequirement::EvidenceCollected { evidence_id } => {
            state.collected_evidence.contains(evidence_id)
        }
        UnlockRequirement::ThresholdMet { metric, threshold } => {
            metric_value(state, *metric, initial_ip) >= *threshold
        }
        UnlockRequirement::AllOf { requirements } => requirements
            .iter()
            .all(|r| evaluate_requirement(r, state, initial_ip)),
        UnlockRequirement::AnyOf { requirements } => requirements
            .iter()
            .any(|r| evaluate_requirement(r, state, initial_ip)),
    }
}

/// Current value of a metric for a player-state snapshot
///
/// Values are always non-negative; `InvestigationProgress` is a
/// round-half-up percentage clamped to [0, 100], defined as 100 for a
/// zero (or missing) initial budget.
pub fn metric_value(state: &PlayerState, metric: Metric, initial_ip: Option<u32>) -> u32 {
    match metric {
        Metric::EvidenceCount => state.collected_evidence.len() as u32,
        Metric::IpSpent => ip_spent(state, initial_ip),
        Metric::InvestigationProgress => {
            let initial = initial_ip.unwrap_or(0);
            if initial == 0 {
                return 100;
            }
            let spent = ip_spent(state, initial_ip);
            let progress = (f64::from(spent) / f64::from(initial) * 100.0).round();
            progress.clamp(0.0, 100.0) as u32
        }
    }
}

fn ip_spent(state: &PlayerState, initial_ip: Option<u32>) -> u32 {
    initial_ip
        .unwrap_or(0)
        .saturating_sub(state.investigation_points_remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence(id: &str) -> UnlockRequirement {
        UnlockRequirement::EvidenceCollected {
            evidence_id: id.into(),
        }
    }

    #[test]
    fn test_evidence_collected_membership() {
        let mut state = PlayerState::new(10);
        assert!(!evaluate_requirement(&evidence("e1"), &state, None));

        state.collect_evidence("e1");
        assert!(evaluate_requirement(&evidence("e1"), &state, None));
    }

    #[test]
    fn test_all_of_vacuously_true() {
        let req = UnlockRequirement::AllOf {
            requirements: vec![],
        };
        assert!(evaluate_requirement(&req, &PlayerState::new(0), None));
    }

    #[test]
    fn test_any_of_vacuously_false() {
        let req = UnlockRequirement::AnyOf {
            requirements: vec![],
        };
        assert!(!evaluate_requirement(&req, &PlayerState::new(0), None));
    }

    #[test]
    fn test_nested_all_of() {
        let req = UnlockRequirement::AllOf {
            requirements: vec![evidence("e3"), evidence("e7")],
        };

        let mut state = PlayerState::new(10);
        state.collect_evidence("e3");
        assert!(!evaluate_requirement(&req, &state, None));

        state.collect_evidence("e7");
        assert!(evaluate_requirement(&req, &state, None));
    }

    #[test]
    fn test_any_of_containing_all_of() {
        // Two alternative unlock paths, one of them compound
        let req = UnlockRequirement::AnyOf {
            requirements: vec![
                UnlockRequirement::AllOf {
                    requirements: vec![evidence("e1"), evidence("e2")],
                },
                evidence("e9"),
            ],
        };

        let mut state = PlayerState::new(10);
        state.collect_evidence("e1");
        assert!(!evaluate_requirement(&req, &state, None));

        state.collect_evidence("e9");
        assert!(evaluate_requirement(&req, &state, None));
    }

    #[test]
    fn test_ip_spent_metric() {
        let mut state = PlayerState::new(12);
        state.spend_points(6);

        assert_eq!(metric_value(&state, Metric::IpSpent, Some(12)), 6);

        let met = UnlockRequirement::ThresholdMet {
            metric: Metric::IpSpent,
            threshold: 6,
        };
        assert!(evaluate_requirement(&met, &state, Some(12)));

        let not_met = UnlockRequirement::ThresholdMet {
            metric: Metric::IpSpent,
            threshold: 7,
        };
        assert!(!evaluate_requirement(&not_met, &state, Some(12)));
    }

    #[test]
    fn test_ip_spent_without_initial_budget() {
        let mut state = PlayerState::new(12);
        state.spend_points(6);

        // Missing budget behaves as zero initial points
        assert_eq!(metric_value(&state, Metric::IpSpent, None), 0);
        assert_eq!(metric_value(&state, Metric::InvestigationProgress, None), 100);
    }

    #[test]
    fn test_investigation_progress_rounds() {
        let mut state = PlayerState::new(3);
        state.spend_points(1);

        // 1/3 of the budget spent -> 33
        assert_eq!(
            metric_value(&state, Metric::InvestigationProgress, Some(3)),
            33
        );

        state.spend_points(1);
        // 2/3 -> 67, round half up
        assert_eq!(
            metric_value(&state, Metric::InvestigationProgress, Some(3)),
            67
        );
    }

    #[test]
    fn test_investigation_progress_zero_budget() {
        assert_eq!(
            metric_value(&PlayerState::new(0), Metric::InvestigationProgress, Some(0)),
            100
        );
    }

    #[test]
    fn test_evidence_count_metric() {
        let mut state = PlayerState::new(10);
        state.collect_evidence("e1");
        state.collect_evidence("e2");
        state.collect_evidence("e2");

        assert_eq!(metric_value(&state, Metric::EvidenceCount, None), 2);
    }

    #[test]
    fn test_requirement_json_round_trip() {
        let req = UnlockRequirement::AnyOf {
            requirements: vec![
                evidence("e9"),
                UnlockRequirement::ThresholdMet {
                    metric: Metric::EvidenceCount,
                    threshold: 6,
                },
            ],
        };

        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"any_of\""));
        assert!(json.contains("\"evidence_count\""));

        let parsed: UnlockRequirement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, req);
    }

    #[test]
    fn test_unknown_requirement_tag_fails_fast() {
        let json = r#"{"type":"karma_check","threshold":3}"#;
        let result: std::result::Result<UnlockRequirement, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
