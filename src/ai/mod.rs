//! Summarization backends
//!
//! The page handler only ever sees the [`Summarizer`] trait; which model
//! actually produces the text is decided once at startup by [`from_config`].

pub mod client;
pub mod huggingface;
pub mod prompt_builder;

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::config::{AppConfig, Backend};
use crate::core::models::{SummaryOptions, SummaryOutput};
use crate::errors::SummarizeError;

// Re-export main types for convenience
pub use client::LlmClient;
pub use huggingface::HuggingFaceClient;

/// An external capability that reduces text to a shorter abstractive summary.
///
/// Implementations return every result the backend produced; callers use
/// the first one.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<Vec<SummaryOutput>, SummarizeError>;
}

/// Builds the configured backend.
///
/// # Errors
///
/// Returns `ConfigError` if the selected backend is missing a required
/// credential, or `HttpError` if the HTTP client cannot be built.
pub fn from_config(config: &AppConfig) -> Result<Arc<dyn Summarizer>, SummarizeError> {
    match config.backend {
        Backend::HuggingFace => {
            let client = HuggingFaceClient::new(
                config.hf_model.clone(),
                config.hf_api_token.clone(),
            )?
            .with_base_url(config.hf_api_url.clone());
            Ok(Arc::new(client))
        }
        Backend::OpenAI => {
            let api_key = config.openai_api_key.clone().ok_or_else(|| {
                SummarizeError::ConfigError("OPENAI_API_KEY is not set".to_string())
            })?;
            let model = config
                .openai_model
                .clone()
                .unwrap_or_else(|| client::DEFAULT_MODEL.to_string());
            let client = LlmClient::new(api_key, config.openai_org_id.clone(), model)?
                .with_base_url(config.openai_api_url.clone());
            Ok(Arc::new(client))
        }
    }
}
