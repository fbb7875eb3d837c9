//! REST handlers over the indexed events.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db;
use crate::errors::IndexerError;
use crate::events::{EventRecord, SubjectKind};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(get_all_events))
        .route("/topics/:title/events", get(get_topic_events))
        .route("/residences/:id/events", get(get_residence_events))
        .with_state(state)
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SubjectEventsResponse {
    pub subject: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    /// Restrict to one stored `event_type`, e.g. `quota_paid`.
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

fn internal_error(e: IndexerError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /events[?type=<event_type>]`
pub async fn get_all_events(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<EventsQuery>,
) -> Response {
    match db::get_all_events(&state.pool, query.event_type.as_deref()).await {
        Ok(events) => Json(AllEventsResponse {
            count: events.len(),
            events,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

/// `GET /topics/:title/events`
pub async fn get_topic_events(
    State(state): State<Arc<ApiState>>,
    Path(title): Path<String>,
) -> Response {
    subject_events(&state.pool, SubjectKind::Topic, title).await
}

/// `GET /residences/:id/events`
///
/// Non-numeric ids are rejected by the extractor with `400`.
pub async fn get_residence_events(
    State(state): State<Arc<ApiState>>,
    Path(residence_id): Path<u32>,
) -> Response {
    subject_events(&state.pool, SubjectKind::Residence, residence_id.to_string()).await
}

async fn subject_events(pool: &SqlitePool, kind: SubjectKind, subject: String) -> Response {
    match db::get_events_for_subject(pool, kind, &subject).await {
        Ok(events) => Json(SubjectEventsResponse {
            subject,
            count: events.len(),
            events,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}
