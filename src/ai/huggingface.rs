//! Hugging Face Inference API backend
//!
//! Sends text to a hosted summarization pipeline (BART CNN by default) and
//! returns the `summary_text` objects it produces.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::Summarizer;
use crate::core::config::DEFAULT_HF_API_URL;
use crate::core::models::{SummaryOptions, SummaryOutput};
use crate::errors::SummarizeError;

pub struct HuggingFaceClient {
    client: Client,
    api_token: Option<String>,
    model: String,
    base_url: String,
}

impl HuggingFaceClient {
    /// # Errors
    ///
    /// Returns `HttpError` if the underlying HTTP client cannot be built.
    pub fn new(
        model: impl Into<String>,
        api_token: Option<String>,
    ) -> Result<Self, SummarizeError> {
        let client = Client::builder().build().map_err(|e| {
            SummarizeError::HttpError(format!("Failed to build Hugging Face HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            api_token,
            model: model.into(),
            base_url: DEFAULT_HF_API_URL.into(),
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Request body for the summarization task.
#[must_use]
pub fn build_request_body(text: &str, options: &SummaryOptions) -> Value {
    json!({
        "inputs": text,
        "parameters": {
            "min_length": options.min_length,
            "max_length": options.max_length,
            "do_sample": !options.deterministic,
        },
        "options": {
            "wait_for_model": true,
        }
    })
}

/// Parses a successful response body.
///
/// The pipeline answers with a list of `{"summary_text": ...}` objects, but
/// the hosted API can also answer 200 with `{"error": ...}` while a model is
/// loading.
///
/// # Errors
///
/// Returns `ApiError` for an embedded error object and `ParseError` for
/// any other shape.
pub fn parse_response(body: Value) -> Result<Vec<SummaryOutput>, SummarizeError> {
    if let Some(message) = body.get("error").and_then(|e| e.as_str()) {
        return Err(SummarizeError::ApiError {
            status: 200,
            message: message.to_string(),
        });
    }

    Ok(serde_json::from_value::<Vec<SummaryOutput>>(body)?)
}

#[async_trait]
impl Summarizer for HuggingFaceClient {
    async fn summarize(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<Vec<SummaryOutput>, SummarizeError> {
        info!(
            model = %self.model,
            input_chars = text.chars().count(),
            "Requesting summary from Hugging Face"
        );

        let mut request = self
            .client
            .post(self.endpoint())
            .json(&build_request_body(text, options));

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizeError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        let outputs = parse_response(body)?;
        debug!(results = outputs.len(), "Hugging Face returned summaries");

        Ok(outputs)
    }
}
