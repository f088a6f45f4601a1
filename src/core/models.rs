use serde::Deserialize;

/// Length bounds and decoding mode requested from the summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    pub min_length: u32,
    pub max_length: u32,
    pub deterministic: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            min_length: 30,
            max_length: 130,
            deterministic: true,
        }
    }
}

/// One result object produced by a summarization backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryOutput {
    pub summary_text: String,
}

/// Values rendered into the page. `None` means the section is left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    pub input_text: Option<String>,
    pub summary: Option<String>,
}

impl PageView {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_result(input_text: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            input_text: Some(input_text.into()),
            summary: Some(summary.into()),
        }
    }
}
