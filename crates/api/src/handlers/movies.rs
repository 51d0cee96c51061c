//! Handlers for the `/movies` resource.

use axum::extract::{Path, State};
use axum::Json;
use screenplay_core::error::CoreError;
use screenplay_core::listing::MAX_TOP_CHARACTERS;
use screenplay_core::types::DbId;
use screenplay_db::models::movie::{Movie, TopCharacter};
use screenplay_db::models::ListQuery;
use screenplay_db::repositories::MovieRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{MovieListParams, ValidatedQuery};
use crate::state::AppState;

/// Response of `GET /movies/{id}`.
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub movie_id: DbId,
    pub movie_title: String,
    /// Characters with the most lines, at most five.
    pub top_characters: Vec<TopCharacterItem>,
}

#[derive(Debug, Serialize)]
pub struct TopCharacterItem {
    pub character_id: DbId,
    pub character: String,
    pub num_lines: i64,
}

impl From<TopCharacter> for TopCharacterItem {
    fn from(row: TopCharacter) -> Self {
        Self {
            character_id: row.character_id,
            character: row.name,
            num_lines: row.num_lines,
        }
    }
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieResponse>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;

    let top = MovieRepo::top_characters(&state.pool, id, MAX_TOP_CHARACTERS).await?;

    Ok(Json(MovieResponse {
        movie_id: movie.movie_id,
        movie_title: movie.title,
        top_characters: top.into_iter().map(TopCharacterItem::from).collect(),
    }))
}

/// GET /movies/?name=&limit=&offset=&sort=
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<MovieListParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let query = ListQuery {
        filter: params.name,
        sort: params.sort,
        limit: params.limit,
        offset: params.offset,
    };
    let movies = MovieRepo::list(&state.pool, &query).await?;
    Ok(Json(movies))
}
