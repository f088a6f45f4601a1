//! LLM (`OpenAI`) API client module
//!
//! Chat-completions backend for the summarizer. The bounds requested by the
//! page are passed to the model as instructions plus a token ceiling.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use openai_api_rs::v1::common::GPT4_O;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::Summarizer;
use super::prompt_builder::build_prompt;
use crate::core::config::DEFAULT_OPENAI_API_URL;
use crate::core::models::{SummaryOptions, SummaryOutput};
use crate::errors::SummarizeError;

pub const DEFAULT_MODEL: &str = GPT4_O;

const TOKEN_BUFFER: u32 = 16;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Output ceiling for a summary of at most `max_length` words.
#[must_use]
pub fn max_output_tokens(options: &SummaryOptions) -> u32 {
    options.max_length.saturating_mul(4) / 3 + TOKEN_BUFFER
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

impl CompletionResponse {
    /// One output per choice that carries non-blank text.
    #[must_use]
    pub fn into_outputs(self) -> Vec<SummaryOutput> {
        self.choices
            .into_iter()
            .filter_map(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|summary_text| SummaryOutput { summary_text })
            .collect()
    }
}

/// LLM API client for generating summaries
pub struct LlmClient {
    client: Client,
    api_key: String,
    org_id: Option<String>,
    model_name: String,
    base_url: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns `HttpError` if the underlying HTTP client cannot be built.
    pub fn new(
        api_key: String,
        org_id: Option<String>,
        model_name: String,
    ) -> Result<Self, SummarizeError> {
        let client = Client::builder().build().map_err(|e| {
            SummarizeError::HttpError(format!("Failed to build OpenAI HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            api_key,
            org_id,
            model_name,
            base_url: DEFAULT_OPENAI_API_URL.into(),
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    #[must_use]
    pub fn build_request_body(&self, text: &str, options: &SummaryOptions) -> Value {
        let prompt = build_prompt(text, options);

        let mut body = json!({
            "model": self.model_name,
            "messages": chat_messages_json(&prompt),
            "max_tokens": max_output_tokens(options),
            "n": 1,
        });
        if options.deterministic {
            body["temperature"] = json!(0);
        }
        body
    }

    fn headers(&self) -> Result<reqwest::header::HeaderMap, SummarizeError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| SummarizeError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                SummarizeError::HttpError(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        Ok(headers)
    }
}

/// Converts typed chat messages into the JSON shape of the completions API.
pub(crate) fn chat_messages_json(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                MessageRole::assistant => "assistant",
            };

            match &m.content {
                Content::Text(t) => Some(json!({ "role": role_str, "content": t })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}

#[async_trait]
impl Summarizer for LlmClient {
    async fn summarize(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<Vec<SummaryOutput>, SummarizeError> {
        let request_body = self.build_request_body(text, options);

        #[cfg(feature = "debug-logs")]
        info!("Using ChatGPT prompt:\n{}", request_body["messages"]);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %self.model_name,
            estimated_input_tokens = estimate_tokens(text),
            "Requesting summary from OpenAI"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .headers(self.headers()?)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizeError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizeError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            SummarizeError::OpenAIError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        Ok(completion.into_outputs())
    }
}
