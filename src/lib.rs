//! textsum - a single-page web form that summarizes a block of text with a
//! pretrained summarization model.
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the HTTP listener and routing
//! - reqwest for talking to the summarization backend
//!   (Hugging Face Inference API by default, `OpenAI` optionally)
//! - tracing with a JSON formatter for structured logs
//! - Tokio for async runtime
//!
//! The backend is built once at startup and handed to the page handler
//! through a [`features::summarize::SummaryService`].
//!
//! # Example
//!
//! ```no_run
//! use textsum::core::config::AppConfig;
//! use textsum::features::summarize::SummaryService;
//! use textsum::web::AppState;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     textsum::setup_logging();
//!
//!     let config = AppConfig::from_env().map_err(anyhow::Error::msg)?;
//!     let summarizer = textsum::ai::from_config(&config)?;
//!     let state = AppState::new(SummaryService::new(summarizer));
//!
//!     textsum::web::serve(state).await
//! }
//! ```

// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod features;
pub mod web;

pub use errors::SummarizeError;

/// Configure structured logging with JSON format.
///
/// The level defaults to `info` and can be overridden with `RUST_LOG`.
///
/// # Example
///
/// ```
/// textsum::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
