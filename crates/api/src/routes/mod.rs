pub mod characters;
pub mod health;
pub mod lines;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the corpus route tree.
///
/// Route hierarchy:
///
/// ```text
/// /characters/                                     list (filter, sort, page)
/// /characters/{id}                                 detail with conversation partners
///
/// /lines/                                          list (filter, sort, page)
/// /lines/{id}                                      detail with conversation context
/// /lines/bycharacter/{character_id}                lines spoken by a character
///
/// /movies/                                         list (filter, sort, page)
/// /movies/{id}                                     detail with top characters
/// /movies/{movie_id}/conversations/                append a conversation (POST)
/// ```
///
/// Listing and creation routes answer both with and without the trailing
/// slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(characters::router())
        .merge(lines::router())
        .merge(movies::router())
}
