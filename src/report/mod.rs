pub mod json;
pub mod md;

use crate::error::AuditError;
use crate::types::event::RiskEvent;
use crate::types::report::{AiSection, AuditReport, RunMetadata};
use crate::types::scoring::ScoreReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Pure assembly: no decision logic happens past this point.
pub fn assemble(
    metadata: RunMetadata,
    scoring: ScoreReport,
    events: Vec<RiskEvent>,
    ai: AiSection,
) -> AuditReport {
    AuditReport {
        metadata,
        scoring,
        events,
        ai,
    }
}

pub fn render(report: &AuditReport, format: OutputFormat) -> Result<String, AuditError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AuditError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
