//! HTTP handlers for the `/event` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use calendar_core::{filter_by_range, filter_today, Event};

use crate::error::ApiError;
use crate::extract::{EventBody, EventIdPath, RangeQuery};
use crate::server::AppState;

pub const NO_EVENTS_TODAY: &str = "There are no events for today!";

/// POST /event
pub async fn create_event(
    State(state): State<AppState>,
    EventBody(fields): EventBody,
) -> Result<Json<Value>, ApiError> {
    let new_event = fields.validate()?;
    let event = state.events.create(&new_event)?;

    Ok(Json(json!({
        "message": "The event has been added!",
        "event": event.name,
        "date": event.date.to_string(),
    })))
}

/// GET /event
pub async fn list_events(
    State(state): State<AppState>,
    RangeQuery(range): RangeQuery,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.events.list()?;
    Ok(Json(filter_by_range(events, &range)))
}

/// GET /event/today
///
/// An empty day answers with a `{"data": ...}` object rather than `[]`.
pub async fn today_events(State(state): State<AppState>) -> Result<Response, ApiError> {
    let today = state.clock.today();
    let events = filter_today(state.events.list()?, today);

    if events.is_empty() {
        return Ok(Json(json!({ "data": NO_EVENTS_TODAY })).into_response());
    }
    Ok(Json(events).into_response())
}

/// GET /event/{id}
pub async fn get_event(
    State(state): State<AppState>,
    EventIdPath(id): EventIdPath,
) -> Result<Json<Event>, ApiError> {
    Ok(Json(state.events.get(id)?))
}

/// DELETE /event/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    EventIdPath(id): EventIdPath,
) -> Result<Json<Value>, ApiError> {
    state.events.delete(id)?;
    Ok(Json(json!({ "message": "The event has been deleted!" })))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.events.count() {
        Ok(count) => (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "events": count })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy" })),
            )
        }
    }
}
