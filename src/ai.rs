//! Optional narrative enrichment. Consulted only after scoring; any
//! failure is captured in the report and never aborts the run.

use crate::types::event::RiskEvent;
use crate::types::report::AiSection;
use crate::types::scoring::ScoreReport;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "You are a senior Git integrity analyst. You receive structured \
risk events detected in one repository.\n\
Your answer must:\n\
1) Explain what happened.\n\
2) Explain why it is risky.\n\
3) Explain the possible impact.\n\
4) Recommend concrete remediation steps.\n\
\n\
Do not assume anything beyond the supplied data. Do not invent \
information. Write clear, professional prose.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    None,
    OpenAi,
}

#[derive(Debug, Clone)]
pub struct AiOptions {
    pub enabled: bool,
    pub provider: Provider,
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Debug, Error)]
enum AiError {
    #[error("missing OPENAI_API_KEY environment variable")]
    MissingApiKey,

    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    Parse(String),

    #[error("request failed: {0}")]
    Transport(String),
}

/// Produces the report's `ai` section. Disabled or provider `none`
/// means skipped; every failure mode collapses into an error status.
pub fn request_explanation(
    events: &[RiskEvent],
    scoring: &ScoreReport,
    mainline_ref: &str,
    repo_path: &str,
    options: &AiOptions,
) -> AiSection {
    if !options.enabled || options.provider == Provider::None {
        return AiSection::skipped();
    }
    match generate(events, scoring, mainline_ref, repo_path, options) {
        Ok(response) => AiSection::ok(response),
        Err(error) => {
            debug!(%error, "narrative generation failed");
            AiSection::error(error.to_string())
        }
    }
}

fn build_context(
    events: &[RiskEvent],
    scoring: &ScoreReport,
    mainline_ref: &str,
    repo_path: &str,
) -> serde_json::Value {
    json!({
        "repository": repo_path,
        "mainlineRef": mainline_ref,
        "summary": scoring,
        "events": events,
    })
}

fn generate(
    events: &[RiskEvent],
    scoring: &ScoreReport,
    mainline_ref: &str,
    repo_path: &str,
    options: &AiOptions,
) -> Result<String, AiError> {
    let api_key = options.api_key.as_deref().ok_or(AiError::MissingApiKey)?;
    let context = build_context(events, scoring, mainline_ref, repo_path);
    let body = ChatRequest {
        model: options.model.clone(),
        messages: vec![
            Message {
                role: "system",
                content: SYSTEM_PROMPT.to_string(),
            },
            Message {
                role: "user",
                content: serde_json::to_string_pretty(&context).unwrap_or_default(),
            },
        ],
        temperature: 0.2,
    };

    let agent = make_agent();
    let response = agent
        .post(API_URL)
        .header("Content-Type", "application/json")
        .header("Authorization", &format!("Bearer {api_key}"))
        .send_json(&body)
        .map_err(|e| AiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    if status >= 400 {
        let message = response.into_body().read_to_string().unwrap_or_default();
        return Err(AiError::Api { status, message });
    }

    let parsed: ChatResponse = response
        .into_body()
        .read_json()
        .map_err(|e| AiError::Parse(e.to_string()))?;
    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| AiError::Parse("no response choices".to_string()))
}

fn make_agent() -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(Some(Duration::from_secs(120)))
        .build()
        .new_agent()
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::AiStatus;
    use crate::types::scoring::RiskLevel;
    use std::collections::BTreeMap;

    fn score() -> ScoreReport {
        ScoreReport {
            total: 0,
            level: RiskLevel::Low,
            by_type: BTreeMap::new(),
        }
    }

    #[test]
    fn disabled_enrichment_is_skipped() {
        let options = AiOptions {
            enabled: false,
            provider: Provider::OpenAi,
            api_key: Some("key".to_string()),
            model: DEFAULT_MODEL.to_string(),
        };

        let section = request_explanation(&[], &score(), "main", "/tmp/repo", &options);
        assert_eq!(section.status, AiStatus::Skipped);
        assert!(section.response.is_none());
    }

    #[test]
    fn provider_none_is_skipped_even_when_enabled() {
        let options = AiOptions {
            enabled: true,
            provider: Provider::None,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        };

        let section = request_explanation(&[], &score(), "main", "/tmp/repo", &options);
        assert_eq!(section.status, AiStatus::Skipped);
    }

    #[test]
    fn missing_credential_degrades_to_error_status() {
        let options = AiOptions {
            enabled: true,
            provider: Provider::OpenAi,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        };

        let section = request_explanation(&[], &score(), "main", "/tmp/repo", &options);
        assert_eq!(section.status, AiStatus::Error);
        assert!(section
            .error
            .as_deref()
            .unwrap_or_default()
            .contains("OPENAI_API_KEY"));
    }

    #[test]
    fn context_payload_carries_the_structured_data() {
        let context = build_context(&[], &score(), "main", "/tmp/repo");
        assert_eq!(context["repository"], "/tmp/repo");
        assert_eq!(context["mainlineRef"], "main");
        assert_eq!(context["summary"]["level"], "LOW");
        assert!(context["events"].as_array().is_some());
    }
}
