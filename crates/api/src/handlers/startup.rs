//! Handlers for the `/startups` and `/startup` resources.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use explorer_core::error::CoreError;
use explorer_core::pagination::{clamp_count, clamp_start, parse_lenient};
use explorer_core::types::{parse_db_id, DbId};
use explorer_db::models::startup::StartupInput;
use explorer_db::repositories::StartupRepo;

use crate::error::{AppError, AppResult};
use crate::payload::decode_payload;
use crate::query::ListParams;
use crate::response::json_response;
use crate::state::AppState;

// Client-facing messages. The casing differences between routes are part of
// the public contract.
const INVALID_STARTUP_ID: &str = "Invalid startup ID";
const INVALID_ID: &str = "Invalid ID";
const INVALID_CREATE_PAYLOAD: &str = "Invalid request payload";
const INVALID_UPDATE_PAYLOAD: &str = "invalid request payload";

/// Any path the extractor cannot decode (e.g. invalid UTF-8) gets the same
/// fixed message as a non-numeric id.
fn parse_path_id(path: Result<Path<String>, PathRejection>, message: &str) -> AppResult<DbId> {
    let bad_request = || AppError::BadRequest(message.to_string());
    let Path(raw) = path.map_err(|err| {
        tracing::debug!(error = %err, "Rejected undecodable path id");
        bad_request()
    })?;
    parse_db_id(&raw).ok_or_else(bad_request)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /startups?start=&count=
///
/// Unparseable `start`/`count` act as `0`, then `count` is clamped into
/// `[1, 10]` (falling back to 10) and `start` to `>= 0`. A repeated key
/// uses its first value.
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    let params = ListParams::from_pairs(pairs);
    let count = clamp_count(parse_lenient(params.count.as_deref()));
    let start = clamp_start(parse_lenient(params.start.as_deref()));

    let startups = StartupRepo::list(&state.pool, start, count).await?;
    Ok(json_response(StatusCode::OK, &startups))
}

/// GET /startup/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Response> {
    let id = parse_path_id(path, INVALID_STARTUP_ID)?;

    let startup = StartupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Startup",
            id,
        }))?;
    Ok(json_response(StatusCode::OK, &startup))
}

/// POST /startup
pub async fn create(State(state): State<AppState>, body: Bytes) -> AppResult<Response> {
    let input: StartupInput = decode_payload(&body, INVALID_CREATE_PAYLOAD)?;

    let startup = StartupRepo::create(&state.pool, &input).await?;
    tracing::info!(id = startup.id, "Startup created");
    Ok(json_response(StatusCode::CREATED, &startup))
}

/// PUT /startup/{id}
///
/// The path id always wins over any id in the body. The response echoes the
/// submitted fields without re-reading the row, and an id that matches no
/// row still answers 200.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> AppResult<Response> {
    let id = parse_path_id(path, INVALID_ID)?;
    let input: StartupInput = decode_payload(&body, INVALID_UPDATE_PAYLOAD)?;
    let startup = input.into_startup(id);

    let matched = StartupRepo::update(&state.pool, &startup).await?;
    if !matched {
        tracing::warn!(id, "Update matched no startup row");
    }
    Ok(json_response(StatusCode::OK, &startup))
}
