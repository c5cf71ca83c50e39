//! Typed request extractors.
//!
//! Every handler input is parsed and validated here, so handlers only ever see
//! `EventFields`, `DateRange` and `EventId` values.

use axum::body::Bytes;
use axum::extract::{Form, FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;

use calendar_core::{DateRange, EventFields, EventId, RangeParams};

use crate::error::ApiError;

/// Create-request fields, read from a JSON or url-encoded form body, with the
/// query string filling any field the body leaves out.
///
/// An empty body yields empty fields so that validation, not parsing, reports
/// what is missing.
#[derive(Debug)]
pub struct EventBody(pub EventFields);

impl<S> FromRequest<S> for EventBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(from_query) = Query::<EventFields>::try_from_uri(req.uri())
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        let EventFields { event, date } = read_body(req, state).await?;
        Ok(Self(EventFields {
            event: event.or(from_query.event),
            date: date.or(from_query.date),
        }))
    }
}

async fn read_body<S>(req: Request, state: &S) -> Result<EventFields, ApiError>
where
    S: Send + Sync,
{
    let is_form = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().starts_with("application/x-www-form-urlencoded"));

    if is_form {
        let Form(fields) = Form::<EventFields>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        return Ok(fields);
    }

    let bytes = Bytes::from_request(req, state)
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(EventFields::default());
    }
    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))
}

/// `start_time` / `end_time` query parameters, validated into a range.
#[derive(Debug)]
pub struct RangeQuery(pub DateRange);

impl<S> FromRequestParts<S> for RangeQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<RangeParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(Self(params.validate()?))
    }
}

/// `{id}` path segment. Anything that is not an integer names no event.
#[derive(Debug)]
pub struct EventIdPath(pub EventId);

impl<S> FromRequestParts<S> for EventIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;
        raw.parse().map(Self).map_err(|_| ApiError::NotFound)
    }
}
