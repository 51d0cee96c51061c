//! Route definitions for the `/lines` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::lines;
use crate::state::AppState;

/// Line routes.
///
/// ```text
/// GET /lines/                              -> list
/// GET /lines/{id}                          -> get_by_id
/// GET /lines/bycharacter/{character_id}    -> list_by_character
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lines/", get(lines::list))
        .route("/lines", get(lines::list))
        .route("/lines/{id}", get(lines::get_by_id))
        .route(
            "/lines/bycharacter/{character_id}",
            get(lines::list_by_character),
        )
}
