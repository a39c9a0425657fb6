use super::matches_any;
use crate::types::event::{EventDetails, EventType, RiskEvent};
use crate::types::record::CommitRecord;

/// Every merge commit is recorded at low severity. When the message
/// also hints at conflict resolution, a second high-severity event is
/// emitted for the same commit.
pub fn detect(commits: &[CommitRecord], conflict_patterns: &[String]) -> Vec<RiskEvent> {
    let mut events = Vec::new();
    for commit in commits {
        if !commit.is_merge() {
            continue;
        }
        let conflict_hint = matches_any(&commit.search_text(), conflict_patterns);
        events.push(RiskEvent::for_commit(
            EventType::MergeCommit,
            commit,
            EventDetails::Merge {
                parents: commit.parent_ids.clone(),
                conflict_hint,
            },
        ));
        if conflict_hint {
            events.push(RiskEvent::for_commit(
                EventType::MergeConflict,
                commit,
                EventDetails::Conflict {
                    heuristic: "commit_message",
                    parents: commit.parent_ids.clone(),
                },
            ));
        }
    }
    events
}
