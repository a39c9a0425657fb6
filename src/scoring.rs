use crate::types::config::{AuditConfig, LevelThresholds};
use crate::types::event::RiskEvent;
use crate::types::scoring::{RiskLevel, ScoreReport};
use std::collections::BTreeMap;

/// Sums per-event weights into a total and a per-type breakdown, then
/// maps the total onto a level. Summation is commutative, so the event
/// order never changes the outcome.
pub fn aggregate(events: &[RiskEvent], config: &AuditConfig) -> ScoreReport {
    let mut total = 0u32;
    let mut by_type: BTreeMap<String, u32> = BTreeMap::new();
    for event in events {
        let weight = config.weight_for(event.kind.as_str());
        total += weight;
        *by_type.entry(event.kind.as_str().to_string()).or_insert(0) += weight;
    }

    ScoreReport {
        total,
        level: risk_level(total, &config.scoring.levels),
        by_type,
    }
}

pub fn risk_level(total: u32, levels: &LevelThresholds) -> RiskLevel {
    if total >= levels.critical {
        RiskLevel::Critical
    } else if total >= levels.high {
        RiskLevel::High
    } else if total >= levels.medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::event::{EventDetails, EventType, RiskEvent};

    fn event(kind: EventType) -> RiskEvent {
        RiskEvent::for_commit_set(
            kind,
            vec!["abc".to_string()],
            EventDetails::KeywordMatches { matches: vec![] },
        )
    }

    #[test]
    fn totals_are_weight_sums_per_type() {
        let events = vec![
            event(EventType::DirectCommitMainline),
            event(EventType::DirectCommitMainline),
            event(EventType::MergeConflict),
        ];

        let report = aggregate(&events, &AuditConfig::default());
        assert_eq!(report.total, 10);
        assert_eq!(report.by_type.get("direct_commit_mainline"), Some(&6));
        assert_eq!(report.by_type.get("merge_conflict"), Some(&4));
        assert_eq!(report.level, RiskLevel::Medium);
    }

    #[test]
    fn empty_event_list_scores_zero_low() {
        let report = aggregate(&[], &AuditConfig::default());
        assert_eq!(report.total, 0);
        assert_eq!(report.level, RiskLevel::Low);
        assert!(report.by_type.is_empty());
    }

    #[test]
    fn order_does_not_change_the_score() {
        let forward = vec![event(EventType::MergeCommit), event(EventType::HugeCommit)];
        let backward = vec![event(EventType::HugeCommit), event(EventType::MergeCommit)];

        let config = AuditConfig::default();
        assert_eq!(
            aggregate(&forward, &config).total,
            aggregate(&backward, &config).total
        );
    }

    #[test]
    fn level_thresholds_are_inclusive() {
        let levels = LevelThresholds::default();
        assert_eq!(risk_level(0, &levels), RiskLevel::Low);
        assert_eq!(risk_level(7, &levels), RiskLevel::Low);
        assert_eq!(risk_level(8, &levels), RiskLevel::Medium);
        assert_eq!(risk_level(19, &levels), RiskLevel::Medium);
        assert_eq!(risk_level(20, &levels), RiskLevel::High);
        assert_eq!(risk_level(34, &levels), RiskLevel::High);
        assert_eq!(risk_level(35, &levels), RiskLevel::Critical);
    }

    #[test]
    fn cleared_weight_table_falls_back_to_shipped_defaults() {
        let mut config = AuditConfig::default();
        config.scoring.weights.clear();

        let events = vec![event(EventType::HugeCommit), event(EventType::MergeCommit)];
        let report = aggregate(&events, &config);
        assert_eq!(report.total, 6);
        assert_eq!(report.by_type.get("huge_commit"), Some(&4));
    }
}
