use crate::types::event::{EventDetails, EventType, RiskEvent};
use crate::types::record::CommitRecord;

/// Flags commits that landed on the mainline without a merge. Input is
/// the first-parent commit set, so anything with at most one parent was
/// committed (or fast-forwarded) straight onto the trunk.
pub fn detect(mainline_commits: &[CommitRecord], mainline_ref: &str) -> Vec<RiskEvent> {
    mainline_commits
        .iter()
        .filter(|commit| commit.parent_ids.len() <= 1)
        .map(|commit| {
            let mut event = RiskEvent::for_commit(
                EventType::DirectCommitMainline,
                commit,
                EventDetails::ChangeStats {
                    additions: commit.additions,
                    deletions: commit.deletions,
                    file_count: commit.file_count,
                },
            );
            event.mainline_ref = Some(mainline_ref.to_string());
            event
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::fixtures::commit;
    use crate::types::event::Severity;

    #[test]
    fn every_non_merge_mainline_commit_is_flagged() {
        let commits = vec![
            commit("a", &[], "Initial commit"),
            commit("b", &["a"], "Tweak config"),
        ];

        let events = detect(&commits, "main");
        assert_eq!(events.len(), 2);
        for event in &events {
            assert_eq!(event.kind, EventType::DirectCommitMainline);
            assert_eq!(event.severity, Severity::Medium);
            assert_eq!(event.mainline_ref.as_deref(), Some("main"));
        }
        assert_eq!(events[1].commit.as_deref(), Some("b"));
        assert_eq!(events[1].author.as_deref(), Some("Ada"));
    }

    #[test]
    fn merges_on_the_mainline_are_not_direct_commits() {
        let commits = vec![commit("m", &["a", "b"], "Merge branch 'dev'")];
        assert!(detect(&commits, "main").is_empty());
    }

    #[test]
    fn empty_input_yields_no_events() {
        assert!(detect(&[], "main").is_empty());
    }
}
