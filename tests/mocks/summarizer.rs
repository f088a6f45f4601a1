use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use textsum::ai::Summarizer;
use textsum::core::models::{SummaryOptions, SummaryOutput};
use textsum::errors::SummarizeError;

#[derive(Clone)]
pub struct MockSummarizer {
    pub summaries: Vec<String>,
    pub calls: Arc<Mutex<Vec<(String, SummaryOptions)>>>,
    pub fail_with: Option<String>,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self::with_summaries(&[summary])
    }

    pub fn with_summaries(summaries: &[&str]) -> Self {
        Self {
            summaries: summaries.iter().map(|s| (*s).to_string()).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            summaries: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(
        &self,
        text: &str,
        options: &SummaryOptions,
    ) -> Result<Vec<SummaryOutput>, SummarizeError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), *options));
        if let Some(ref msg) = self.fail_with {
            return Err(SummarizeError::ApiError {
                status: 503,
                message: msg.clone(),
            });
        }
        Ok(self
            .summaries
            .iter()
            .map(|s| SummaryOutput {
                summary_text: s.clone(),
            })
            .collect())
    }
}
