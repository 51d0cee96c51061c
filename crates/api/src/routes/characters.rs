//! Route definitions for the `/characters` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::characters;
use crate::state::AppState;

/// Character routes.
///
/// ```text
/// GET /characters/        -> list
/// GET /characters/{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/characters/", get(characters::list))
        .route("/characters", get(characters::list))
        .route("/characters/{id}", get(characters::get_by_id))
}
