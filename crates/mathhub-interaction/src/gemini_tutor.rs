//! GeminiTutor - direct REST implementation of the tutor service.
//!
//! Talks to the Gemini generateContent endpoint without any SDK dependency.
//! The API key is read from the environment at call time; an absent key is
//! sent as an empty string and the upstream rejection surfaces as an API
//! error like any other.

use async_trait::async_trait;
use mathhub_core::config::{self, HubConfig};
use mathhub_core::error::{HubError, Result};
use mathhub_core::explanation::Explanation;
use mathhub_core::settings::Settings;
use mathhub_core::syllabus::Syllabus;
use mathhub_core::tutor::TutorService;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::prompt;
use crate::schema::{EXPLANATION_SCHEMA, SYLLABUS_SCHEMA};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Token budget for the model's internal reasoning when deep thinking is on.
const THINKING_BUDGET: u32 = 16000;

/// Tutor implementation backed by the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiTutor {
    client: Client,
    config: HubConfig,
}

impl GeminiTutor {
    /// Creates a tutor using the model and timeout from `config`.
    pub fn new(config: HubConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| HubError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { client, config })
    }

    async fn generate(
        &self,
        prompt_text: String,
        system_instruction: String,
        response_schema: &Value,
        thinking_budget: u32,
    ) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt_text }],
            }],
            system_instruction: Content {
                role: "system",
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema.clone(),
                thinking_config: ThinkingConfig { thinking_budget },
            },
        };

        self.send_request(&request).await
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.config.model,
            api_key = config::api_key()
        );

        tracing::debug!(model = %self.config.model, "sending generateContent request");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| HubError::api(None, format!("Gemini API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| HubError::schema(format!("Failed to parse Gemini response: {err}")))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl TutorService for GeminiTutor {
    async fn fetch_explanation(&self, topic: &str, settings: &Settings) -> Result<Explanation> {
        let thinking_budget = if settings.enable_thinking {
            THINKING_BUDGET
        } else {
            0
        };

        let text = self
            .generate(
                prompt::explanation_prompt(topic, settings.grade_level),
                prompt::explanation_system_instruction(settings),
                &EXPLANATION_SCHEMA,
                thinking_budget,
            )
            .await?;

        serde_json::from_str(&text).map_err(|err| {
            HubError::schema(format!("explanation response violated the schema: {err}"))
        })
    }

    async fn fetch_syllabus(&self, grade_level: u8) -> Result<Syllabus> {
        // Curriculum listing needs no deep reasoning; thinking stays off.
        let text = self
            .generate(
                prompt::syllabus_prompt(grade_level),
                prompt::syllabus_system_instruction(grade_level),
                &SYLLABUS_SCHEMA,
                0,
            )
            .await?;

        serde_json::from_str(&text).map_err(|err| {
            HubError::schema(format!("syllabus response violated the schema: {err}"))
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
    thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| HubError::schema("Gemini API returned no text in the response candidates"))
}

fn map_http_error(status: StatusCode, body: String) -> HubError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    HubError::api(Some(status.as_u16()), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_text(text: &str) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(ContentResponse {
                    parts: vec![PartResponse {
                        text: Some(text.to_string()),
                    }],
                }),
            }]),
        }
    }

    #[test]
    fn test_extract_text_response_returns_first_text_part() {
        let result = extract_text_response(response_with_text("{\"ok\":true}")).unwrap();
        assert_eq!(result, "{\"ok\":true}");
    }

    #[test]
    fn test_extract_text_response_rejects_empty_candidates() {
        let response = GenerateContentResponse {
            candidates: Some(vec![]),
        };
        let err = extract_text_response(response).unwrap_err();
        assert!(err.is_schema());

        let err = extract_text_response(GenerateContentResponse { candidates: None }).unwrap_err();
        assert!(err.is_schema());
    }

    #[test]
    fn test_map_http_error_composes_status_and_message() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body.to_string());
        assert!(err.is_api());
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("RESOURCE_EXHAUSTED: Quota exceeded"));
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert!(err.to_string().contains("upstream down"));
    }

    #[test]
    fn test_request_serializes_camel_case_wire_keys() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: "Explain".to_string(),
                }],
            }],
            system_instruction: Content {
                role: "system",
                parts: vec![Part {
                    text: "You are a tutor".to_string(),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: EXPLANATION_SCHEMA.clone(),
                thinking_config: ThinkingConfig {
                    thinking_budget: 16000,
                },
            },
        };

        let wire = serde_json::to_value(&request).unwrap();
        assert!(wire.get("systemInstruction").is_some());
        let config = wire.get("generationConfig").unwrap();
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["thinkingConfig"]["thinkingBudget"], 16000);
        assert!(config.get("responseSchema").is_some());
    }
}
