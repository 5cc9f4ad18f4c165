pub mod health;
pub mod startup;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /startups                                        list (GET)
/// /startup                                         create (POST)
/// /startup/{id}                                    get (GET), update (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(startup::router())
}
