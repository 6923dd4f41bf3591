//! Axum route handlers for the Digest API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::digest::generator::generate_digest;
use crate::digest::topic::Topic;
use crate::digest::view::DigestView;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DigestRequest {
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct DigestResponse {
    pub request_id: Uuid,
    /// The unparsed model reply, for copying.
    pub result: String,
    pub view: DigestView,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/digest
///
/// Validates the topic, makes a single completion call and returns the raw
/// reply alongside its parsed view. 400 for invalid input, 500 when the
/// service is not configured or the call fails.
pub async fn handle_digest(
    State(state): State<AppState>,
    payload: Result<Json<DigestRequest>, JsonRejection>,
) -> Result<Json<DigestResponse>, AppError> {
    let Json(request) = payload?;
    let topic = Topic::parse(&request.topic)?;

    let service = state.completion.as_ref().ok_or(AppError::NotConfigured)?;

    let request_id = Uuid::new_v4();
    let digest = generate_digest(service.as_ref(), &topic)
        .instrument(info_span!("digest", %request_id))
        .await?;

    let view = DigestView::build(&digest.raw, &digest.parsed);

    Ok(Json(DigestResponse {
        request_id,
        result: digest.raw,
        view,
        model: digest.model,
        generated_at: Utc::now(),
    }))
}
