//! Resume generation assistant — the single point of entry for LLM calls.
//!
//! The assistant is optional: when no API key is configured, or when any
//! call fails, callers substitute `fallback_content()` and the client never
//! sees an upstream error.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

use crate::models::resume::ExperienceEntry;
use prompts::{GENERATE_PROMPT_TEMPLATE, GENERATE_SYSTEM};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("assistant returned empty content")]
    EmptyContent,
}

/// Content produced for the resume builder: a summary, an augmented skill
/// list, and a seed experience entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
}

#[async_trait]
pub trait ResumeAssistant: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedContent, AssistantError>;
}

/// The canned content served whenever the assistant is unconfigured or
/// failing. Callers must degrade to this rather than surface an error.
pub fn fallback_content() -> GeneratedContent {
    GeneratedContent {
        summary: "Generated professional summary based on your experience.".to_string(),
        skills: ["JavaScript", "React", "Node.js", "Python"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        experience: vec![ExperienceEntry {
            company: Some("Tech Company".to_string()),
            position: Some("Software Developer".to_string()),
            description: Some("Developed web applications using modern technologies.".to_string()),
            ..Default::default()
        }],
    }
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

/// Anthropic-backed assistant. No automatic retries — a failed call simply
/// degrades to the fallback at the call site.
pub struct AnthropicAssistant {
    client: Client,
    api_key: String,
}

impl AnthropicAssistant {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl ResumeAssistant for AnthropicAssistant {
    async fn generate(&self, prompt: &str) -> Result<GeneratedContent, AssistantError> {
        let full_prompt = GENERATE_PROMPT_TEMPLATE.replace("{background}", prompt);
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system: GENERATE_SYSTEM,
            messages: vec![AnthropicMessage {
                role: "user",
                content: &full_prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AssistantError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: AnthropicResponse = response.json().await?;
        let text = body
            .content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
            .ok_or(AssistantError::EmptyContent)?;

        debug!("Assistant call succeeded ({} chars)", text.len());

        let content: GeneratedContent = serde_json::from_str(strip_json_fences(text))?;
        Ok(content)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
