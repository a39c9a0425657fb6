pub mod direct;
pub mod merges;
pub mod messages;
pub mod rewrite;
pub mod size;

use crate::extract::HistoryModel;
use crate::types::config::AuditConfig;
use crate::types::event::RiskEvent;
use tracing::debug;

/// Runs every detector and concatenates the results. Detectors are
/// independent and additive; none consumes another's output, so the
/// order here only affects display order, never the score.
pub fn detect_all(model: &HistoryModel, config: &AuditConfig) -> Vec<RiskEvent> {
    let mut events = Vec::new();
    events.extend(direct::detect(&model.mainline_commits, &model.mainline_ref));
    events.extend(merges::detect(&model.commits, &config.patterns.conflict));
    events.extend(size::detect(&model.commits, &config.thresholds));
    events.extend(messages::detect_suspicious(
        &model.commits,
        &config.patterns.suspicious,
    ));
    events.extend(messages::detect_chained_reverts(&model.commits));
    events.extend(rewrite::detect(&model.reflog, &config.patterns));
    debug!(events = events.len(), "detection finished");
    events
}

pub(crate) fn matches_any(text: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| text.contains(pattern.as_str()))
}

pub(crate) fn matching_patterns(text: &str, patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .filter(|pattern| text.contains(pattern.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::types::record::{CommitRecord, ReflogEntry};

    pub fn commit(id: &str, parents: &[&str], subject: &str) -> CommitRecord {
        CommitRecord {
            id: id.to_string(),
            parent_ids: parents.iter().map(|parent| parent.to_string()).collect(),
            author_name: "Ada".to_string(),
            author_email: "ada@example.com".to_string(),
            timestamp: "2024-05-01T10:00:00+02:00".to_string(),
            subject: subject.to_string(),
            body: String::new(),
            file_count: 1,
            additions: 1,
            deletions: 0,
        }
    }

    pub fn reflog_entry(id: &str, message: &str) -> ReflogEntry {
        ReflogEntry {
            id: id.to_string(),
            selector: "HEAD@{0}".to_string(),
            message: message.to_string(),
            timestamp: "2024-05-01T10:00:00+02:00".to_string(),
        }
    }
}
