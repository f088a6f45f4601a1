mod mocks;

use std::sync::Arc;

use mocks::summarizer::MockSummarizer;
use textsum::core::models::SummaryOptions;
use textsum::errors::SummarizeError;
use textsum::features::summarize::{
    FAILURE_MESSAGE, MIN_INPUT_CHARS, SHORT_INPUT_MESSAGE, SummaryOutcome, SummaryService,
    is_too_short,
};

const ARTICLE: &str = "The city council voted on Tuesday to expand the downtown bike lane \
    network, adding twelve miles of protected lanes over the next three years. Supporters \
    argued the plan would reduce traffic injuries and encourage commuting by bicycle.";

fn service(mock: &MockSummarizer) -> SummaryService {
    SummaryService::new(Arc::new(mock.clone()))
}

#[tokio::test]
async fn short_input_never_reaches_summarizer() {
    let mock = MockSummarizer::new("unused");
    let outcome = service(&mock).summarize("Hello").await;

    assert!(matches!(outcome, SummaryOutcome::TooShort));
    assert_eq!(outcome.message(), SHORT_INPUT_MESSAGE);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn empty_input_is_too_short() {
    let mock = MockSummarizer::new("unused");
    let outcome = service(&mock).summarize("").await;

    assert_eq!(
        outcome.message(),
        "The input text is not long enough to be summarized. Please try again."
    );
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn boundary_length_is_summarized() {
    let mock = MockSummarizer::new("A short summary.");
    let text = "a".repeat(MIN_INPUT_CHARS);
    let outcome = service(&mock).summarize(&text).await;

    assert_eq!(outcome.message(), "A short summary.");
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn length_counts_characters_not_bytes() {
    let nineteen = "é".repeat(19);
    assert!(nineteen.len() > MIN_INPUT_CHARS);
    assert!(is_too_short(&nineteen));
    assert!(!is_too_short(&"é".repeat(20)));
}

#[tokio::test]
async fn summarizer_receives_exact_text_and_bounds() {
    let mock = MockSummarizer::new("Council expands bike lanes.");
    let text = format!("  {ARTICLE}\n");
    let outcome = service(&mock).summarize(&text).await;

    assert_eq!(outcome.message(), "Council expands bike lanes.");

    let calls = mock.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, text);
    assert_eq!(
        calls[0].1,
        SummaryOptions {
            min_length: 30,
            max_length: 130,
            deterministic: true,
        }
    );
}

#[tokio::test]
async fn first_result_is_used() {
    let mock = MockSummarizer::with_summaries(&["first", "second"]);
    let outcome = service(&mock).summarize(ARTICLE).await;
    assert_eq!(outcome.message(), "first");
}

#[tokio::test]
async fn backend_failure_becomes_generic_message() {
    let mock = MockSummarizer::failing("model unavailable");
    let outcome = service(&mock).summarize(ARTICLE).await;

    assert!(outcome.is_failure());
    assert_eq!(outcome.message(), "ERROR: Please try again.");
    assert!(!outcome.message().contains("model unavailable"));
    match outcome {
        SummaryOutcome::Failed(SummarizeError::ApiError { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "model unavailable");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn empty_result_list_is_a_failure() {
    let mock = MockSummarizer::with_summaries(&[]);
    let outcome = service(&mock).summarize(ARTICLE).await;

    assert!(matches!(
        outcome,
        SummaryOutcome::Failed(SummarizeError::EmptyResult)
    ));
    assert_eq!(outcome.message(), FAILURE_MESSAGE);
}

#[test]
fn default_options_match_page_contract() {
    let service = SummaryService::new(Arc::new(MockSummarizer::new("x")));
    assert_eq!(service.options().min_length, 30);
    assert_eq!(service.options().max_length, 130);
    assert!(service.options().deterministic);
}
