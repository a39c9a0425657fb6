use super::matching_patterns;
use crate::types::event::{EventDetails, EventType, RiskEvent};
use crate::types::record::CommitRecord;

/// Flags commits whose message contains any configured keyword; every
/// matching keyword is recorded as evidence.
pub fn detect_suspicious(commits: &[CommitRecord], patterns: &[String]) -> Vec<RiskEvent> {
    let mut events = Vec::new();
    for commit in commits {
        let matches = matching_patterns(&commit.search_text(), patterns);
        if matches.is_empty() {
            continue;
        }
        events.push(RiskEvent::for_commit(
            EventType::SuspiciousMessage,
            commit,
            EventDetails::KeywordMatches { matches },
        ));
    }
    events
}

/// Two independent rules, both may fire for the same commit set: two or
/// more revert commits produce one aggregate event referencing all of
/// them, and each revert of a revert produces its own event.
pub fn detect_chained_reverts(commits: &[CommitRecord]) -> Vec<RiskEvent> {
    let reverts: Vec<&CommitRecord> = commits
        .iter()
        .filter(|commit| is_revert_subject(&commit.subject))
        .collect();

    let mut events = Vec::new();
    if reverts.len() >= 2 {
        events.push(RiskEvent::for_commit_set(
            EventType::ChainedRevert,
            reverts.iter().map(|commit| commit.id.clone()).collect(),
            EventDetails::RevertChain {
                count: reverts.len(),
                messages: reverts.iter().map(|commit| commit.subject.clone()).collect(),
            },
        ));
    }
    for commit in reverts {
        if commit.subject.to_lowercase().contains("revert \"revert") {
            events.push(RiskEvent::for_commit_set(
                EventType::ChainedRevert,
                vec![commit.id.clone()],
                EventDetails::RevertChain {
                    count: 1,
                    messages: vec![commit.subject.clone()],
                },
            ));
        }
    }
    events
}

/// A revert subject starts with the word "revert", case-insensitive;
/// "Reverted" or "Revertify" do not count.
fn is_revert_subject(subject: &str) -> bool {
    match subject.to_lowercase().strip_prefix("revert") {
        Some(rest) => rest
            .chars()
            .next()
            .map_or(true, |next| !next.is_alphanumeric() && next != '_'),
        None => false,
    }
}
