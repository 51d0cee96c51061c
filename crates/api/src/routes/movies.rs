//! Route definitions for the `/movies` resource and its conversations.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{conversations, movies};
use crate::state::AppState;

/// Movie routes.
///
/// ```text
/// GET  /movies/                               -> list
/// GET  /movies/{id}                           -> get_by_id
/// POST /movies/{movie_id}/conversations/      -> conversations::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies/", get(movies::list))
        .route("/movies", get(movies::list))
        .route("/movies/{id}", get(movies::get_by_id))
        .route(
            "/movies/{movie_id}/conversations/",
            post(conversations::create),
        )
        .route(
            "/movies/{movie_id}/conversations",
            post(conversations::create),
        )
}
