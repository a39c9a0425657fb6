use super::record::{CommitRecord, ReflogEntry};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    DirectCommitMainline,
    MergeCommit,
    MergeConflict,
    LargeCommit,
    HugeCommit,
    SuspiciousMessage,
    ChainedRevert,
    HistoryRewrite,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::DirectCommitMainline => "direct_commit_mainline",
            EventType::MergeCommit => "merge_commit",
            EventType::MergeConflict => "merge_conflict",
            EventType::LargeCommit => "large_commit",
            EventType::HugeCommit => "huge_commit",
            EventType::SuspiciousMessage => "suspicious_message",
            EventType::ChainedRevert => "chained_revert",
            EventType::HistoryRewrite => "history_rewrite",
        }
    }

    /// Severity is fixed per type; it qualifies the event, the numeric
    /// weight used for scoring is looked up separately.
    pub fn severity(self) -> Severity {
        match self {
            EventType::MergeCommit => Severity::Low,
            EventType::DirectCommitMainline
            | EventType::LargeCommit
            | EventType::SuspiciousMessage => Severity::Medium,
            EventType::MergeConflict
            | EventType::HugeCommit
            | EventType::ChainedRevert
            | EventType::HistoryRewrite => Severity::High,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// Literal evidence attached to an event. Informational only: the
/// aggregator keys weights on the event type and never reads this.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EventDetails {
    ChangeStats {
        additions: u64,
        deletions: u64,
        #[serde(rename = "fileCount")]
        file_count: usize,
    },
    Merge {
        parents: Vec<String>,
        #[serde(rename = "conflictHint")]
        conflict_hint: bool,
    },
    Conflict {
        heuristic: &'static str,
        parents: Vec<String>,
    },
    KeywordMatches {
        matches: Vec<String>,
    },
    RevertChain {
        count: usize,
        messages: Vec<String>,
    },
    Rewrite {
        action: &'static str,
        selector: String,
        message: String,
    },
}

/// The single output unit of every detector. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEvent {
    #[serde(rename = "type")]
    pub kind: EventType,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mainline_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub details: EventDetails,
}

impl RiskEvent {
    pub fn for_commit(kind: EventType, commit: &CommitRecord, details: EventDetails) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            mainline_ref: None,
            commit: Some(commit.id.clone()),
            commits: None,
            message: Some(commit.subject.clone()),
            author: Some(commit.author_name.clone()),
            date: Some(commit.timestamp.clone()),
            details,
        }
    }

    /// Reflog-derived events carry no author or subject line.
    pub fn for_reflog(kind: EventType, entry: &ReflogEntry, details: EventDetails) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            mainline_ref: None,
            commit: Some(entry.id.clone()),
            commits: None,
            message: None,
            author: None,
            date: Some(entry.timestamp.clone()),
            details,
        }
    }

    pub fn for_commit_set(kind: EventType, ids: Vec<String>, details: EventDetails) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            mainline_ref: None,
            commit: None,
            commits: Some(ids),
            message: None,
            author: None,
            date: None,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_severity_is_fixed() {
        assert_eq!(EventType::MergeCommit.severity(), Severity::Low);
        assert_eq!(EventType::DirectCommitMainline.severity(), Severity::Medium);
        assert_eq!(EventType::MergeConflict.severity(), Severity::High);
        assert_eq!(EventType::HistoryRewrite.severity(), Severity::High);
    }

    #[test]
    fn event_serializes_with_wire_names() {
        let event = RiskEvent::for_commit_set(
            EventType::ChainedRevert,
            vec!["a".to_string(), "b".to_string()],
            EventDetails::RevertChain {
                count: 2,
                messages: vec!["Revert A".to_string(), "Revert B".to_string()],
            },
        );

        let rendered = serde_json::to_string(&event).expect("event should serialize");
        assert!(rendered.contains("\"type\":\"chained_revert\""));
        assert!(rendered.contains("\"severity\":\"high\""));
        assert!(rendered.contains("\"commits\":[\"a\",\"b\"]"));
        assert!(!rendered.contains("\"author\""));
    }
}
