use thiserror::Error;

/// Internal failure reasons for a summarization request.
///
/// None of these are shown to the person using the form; they are logged
/// and collapsed into the generic error message by the page handler.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Missing form field: {0}")]
    MissingField(String),

    #[error("Failed to parse form data: {0}")]
    ParseError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Summarization API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Summarization backend returned no summary")]
    EmptyResult,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => SummarizeError::ApiError {
                status: status.as_u16(),
                message: error.to_string(),
            },
            None => SummarizeError::HttpError(error.to_string()),
        }
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(error: serde_json::Error) -> Self {
        SummarizeError::ParseError(format!("Invalid JSON: {error}"))
    }
}
