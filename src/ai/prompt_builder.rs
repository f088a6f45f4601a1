use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

use crate::core::models::SummaryOptions;

/// Upper bound on characters forwarded to the chat model.
pub const MAX_PROMPT_INPUT_CHARS: usize = 100_000;

/// Drops control characters other than line breaks and tabs and hard-truncates.
/// Used only for the prompt copy; the text echoed back to the page is untouched.
#[must_use]
pub fn sanitize_input(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .take(MAX_PROMPT_INPUT_CHARS)
        .collect()
}

#[must_use]
pub fn system_instructions(options: &SummaryOptions) -> String {
    format!(
        "You are a summarization model. Write a single abstractive summary of the text the user \
         provides. The summary MUST be between {} and {} words long. Output ONLY the summary: \
         no preamble, no headings, no bullet points, no commentary.",
        options.min_length, options.max_length
    )
}

#[must_use]
pub fn build_prompt(text: &str, options: &SummaryOptions) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(system_instructions(options)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(sanitize_input(text)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
