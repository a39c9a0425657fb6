use crate::types::config::SizeThresholds;
use crate::types::event::{EventDetails, EventType, RiskEvent};
use crate::types::record::CommitRecord;

/// Classifies commits by changeset size. A commit is huge when it
/// reaches either huge threshold, else large when it reaches either
/// large threshold; one event per qualifying commit, never both.
pub fn detect(commits: &[CommitRecord], thresholds: &SizeThresholds) -> Vec<RiskEvent> {
    let mut events = Vec::new();
    for commit in commits {
        let lines = commit.line_changes();
        let huge =
            commit.file_count >= thresholds.huge_files || lines >= thresholds.huge_lines;
        let large =
            commit.file_count >= thresholds.large_files || lines >= thresholds.large_lines;
        if !large {
            continue;
        }
        let kind = if huge {
            EventType::HugeCommit
        } else {
            EventType::LargeCommit
        };
        events.push(RiskEvent::for_commit(
            kind,
            commit,
            EventDetails::ChangeStats {
                additions: commit.additions,
                deletions: commit.deletions,
                file_count: commit.file_count,
            },
        ));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::fixtures::commit;
    use crate::types::event::Severity;

    fn sized(files: usize, additions: u64, deletions: u64) -> CommitRecord {
        let mut record = commit("c", &["p"], "Update everything");
        record.file_count = files;
        record.additions = additions;
        record.deletions = deletions;
        record
    }

    #[test]
    fn below_both_large_thresholds_yields_nothing() {
        let commits = vec![sized(19, 400, 99)];
        assert!(detect(&commits, &SizeThresholds::default()).is_empty());
    }

    #[test]
    fn reaching_the_file_threshold_is_large() {
        let events = detect(&[sized(20, 10, 0)], &SizeThresholds::default());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventType::LargeCommit);
        assert_eq!(events[0].severity, Severity::Medium);
    }

    #[test]
    fn reaching_the_line_threshold_is_large() {
        let events = detect(&[sized(3, 250, 250)], &SizeThresholds::default());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventType::LargeCommit);
    }

    #[test]
    fn huge_thresholds_replace_the_large_event() {
        let by_files = detect(&[sized(50, 10, 0)], &SizeThresholds::default());
        assert_eq!(by_files.len(), 1);
        assert_eq!(by_files[0].kind, EventType::HugeCommit);
        assert_eq!(by_files[0].severity, Severity::High);

        let by_lines = detect(&[sized(3, 1500, 0)], &SizeThresholds::default());
        assert_eq!(by_lines.len(), 1);
        assert_eq!(by_lines[0].kind, EventType::HugeCommit);
    }

    #[test]
    fn evidence_carries_the_raw_stats() {
        let events = detect(&[sized(25, 30, 12)], &SizeThresholds::default());
        match &events[0].details {
            EventDetails::ChangeStats {
                additions,
                deletions,
                file_count,
            } => {
                assert_eq!((*additions, *deletions, *file_count), (30, 12, 25));
            }
            other => panic!("unexpected details: {other:?}"),
        }
    }
}
