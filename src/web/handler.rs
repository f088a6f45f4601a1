//! HTTP surface: one route, `/`, serving the form and accepting submissions.

use std::sync::Arc;

use axum::{
    Router,
    extract::{FromRequest, Multipart, Request, State},
    response::Html,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use uuid::Uuid;

use super::{form, views};
use crate::core::models::PageView;
use crate::errors::SummarizeError;
use crate::features::summarize::{SummaryOutcome, SummaryService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: SummaryService,
}

impl AppState {
    pub fn new(service: SummaryService) -> Self {
        Self { service }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<String> {
    Html(views::render_page(&PageView::empty()))
}

/// Handles a form submission. Always answers 200 with the rendered page.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %Uuid::new_v4()))]
async fn submit(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Html<String> {
    let (input_text, outcome) = match read_text(request).await {
        Ok(text) => {
            let outcome = state.service.summarize(&text).await;
            (text, outcome)
        }
        Err(e) => {
            error!("Rejected form submission: {}", e);
            (String::new(), SummaryOutcome::Failed(e))
        }
    };

    info!(failed = outcome.is_failure(), "Rendering summary page");

    Html(views::render_page(&PageView::with_result(
        input_text,
        outcome.message(),
    )))
}

/// Reads `text` from either a multipart or a urlencoded body.
async fn read_text(request: Request) -> Result<String, SummarizeError> {
    if form::is_multipart(request.headers()) {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| SummarizeError::ParseError(format!("Invalid multipart body: {e}")))?;
        return form::extract_multipart_text(multipart).await;
    }

    let body = String::from_request(request, &())
        .await
        .map_err(|e| SummarizeError::ParseError(format!("Unreadable body: {e}")))?;
    form::extract_text(&body)
}
