use super::event::RiskEvent;
use super::scoring::ScoreReport;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetadata {
    pub repo_path: String,
    pub mainline_ref: String,
    pub range: String,
    pub commit_count: usize,
    /// RFC 3339 timestamp of the analysis run.
    pub analyzed_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AiStatus {
    Ok,
    Skipped,
    Error,
}

/// Outcome of the optional narrative enrichment. Always present in the
/// report, whether or not enrichment ran.
#[derive(Debug, Clone, Serialize)]
pub struct AiSection {
    pub status: AiStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AiSection {
    pub fn ok(response: String) -> Self {
        Self {
            status: AiStatus::Ok,
            response: Some(response),
            error: None,
        }
    }

    pub fn skipped() -> Self {
        Self {
            status: AiStatus::Skipped,
            response: None,
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: AiStatus::Error,
            response: None,
            error: Some(message),
        }
    }
}

/// The durable external contract: downstream tooling consumes this
/// shape, so field names and nesting must remain stable.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub metadata: RunMetadata,
    pub scoring: ScoreReport,
    pub events: Vec<RiskEvent>,
    pub ai: AiSection,
}
