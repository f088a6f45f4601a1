use std::sync::Arc;

use tracing::{error, info};

use crate::ai::Summarizer;
use crate::core::models::SummaryOptions;
use crate::errors::SummarizeError;

/// Inputs shorter than this many characters are not sent to the model.
pub const MIN_INPUT_CHARS: usize = 20;

pub const SHORT_INPUT_MESSAGE: &str =
    "The input text is not long enough to be summarized. Please try again.";

/// Canonical failure message shown to users when summarization fails.
pub const FAILURE_MESSAGE: &str = "ERROR: Please try again.";

/// What happened to one submission.
#[derive(Debug)]
pub enum SummaryOutcome {
    TooShort,
    Summary(String),
    Failed(SummarizeError),
}

impl SummaryOutcome {
    /// The text shown on the page. Failure detail never leaves this type.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            SummaryOutcome::TooShort => SHORT_INPUT_MESSAGE,
            SummaryOutcome::Summary(text) => text,
            SummaryOutcome::Failed(_) => FAILURE_MESSAGE,
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, SummaryOutcome::Failed(_))
    }
}

#[must_use]
pub fn is_too_short(text: &str) -> bool {
    text.chars().count() < MIN_INPUT_CHARS
}

/// Owns the summarization backend for the lifetime of the server.
#[derive(Clone)]
pub struct SummaryService {
    summarizer: Arc<dyn Summarizer>,
    options: SummaryOptions,
}

impl SummaryService {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            summarizer,
            options: SummaryOptions::default(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &SummaryOptions {
        &self.options
    }

    /// Runs the length check and, when it passes, the backend.
    ///
    /// Errors are folded into [`SummaryOutcome::Failed`]; this never returns `Err`.
    pub async fn summarize(&self, text: &str) -> SummaryOutcome {
        if is_too_short(text) {
            info!(input_chars = text.chars().count(), "Input too short to summarize");
            return SummaryOutcome::TooShort;
        }

        match self.first_summary(text).await {
            Ok(summary) => SummaryOutcome::Summary(summary),
            Err(e) => {
                error!("Failed to generate summary: {}", e);
                SummaryOutcome::Failed(e)
            }
        }
    }

    async fn first_summary(&self, text: &str) -> Result<String, SummarizeError> {
        let outputs = self.summarizer.summarize(text, &self.options).await?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or(SummarizeError::EmptyResult)
    }
}
