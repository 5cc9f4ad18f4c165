//! Route definitions for the startup resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::startup;
use crate::state::AppState;

/// ```text
/// GET    /startups          -> list
/// POST   /startup           -> create
/// GET    /startup/{id}      -> get_by_id
/// PUT    /startup/{id}      -> update
/// ```
///
/// `{id}` is captured as a raw string; the handlers reject anything that is
/// not a plain non-negative integer with a 400.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/startups", get(startup::list))
        .route("/startup", post(startup::create))
        .route("/startup/{id}", get(startup::get_by_id).put(startup::update))
}
