//! Handlers for the `/characters` resource.

use axum::extract::{Path, State};
use axum::Json;
use screenplay_core::error::CoreError;
use screenplay_core::ranking::{PartnerStat, MAX_PARTNERS};
use screenplay_core::types::DbId;
use screenplay_db::models::character::CharacterSummary;
use screenplay_db::models::ListQuery;
use screenplay_db::repositories::CharacterRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{CharacterListParams, ValidatedQuery};
use crate::state::AppState;

/// Response of `GET /characters/{id}`.
#[derive(Debug, Serialize)]
pub struct CharacterResponse {
    pub character_id: DbId,
    pub character: String,
    pub movie: String,
    pub gender: Option<String>,
    /// Characters sharing the most lines with this one, movie-wide.
    pub top_conversations: Vec<ConversationPartner>,
}

/// One entry of [`CharacterResponse::top_conversations`].
#[derive(Debug, Serialize)]
pub struct ConversationPartner {
    pub character_id: DbId,
    pub character: String,
    pub gender: Option<String>,
    pub number_of_lines_together: i64,
}

impl From<PartnerStat> for ConversationPartner {
    fn from(stat: PartnerStat) -> Self {
        Self {
            character_id: stat.character_id,
            character: stat.character_name,
            gender: stat.gender,
            number_of_lines_together: stat.lines_together_count,
        }
    }
}

/// One entry of `GET /characters/`.
#[derive(Debug, Serialize)]
pub struct CharacterListItem {
    pub character_id: DbId,
    pub character: String,
    pub movie_id: DbId,
    pub num_lines: i64,
}

impl From<CharacterSummary> for CharacterListItem {
    fn from(row: CharacterSummary) -> Self {
        Self {
            character_id: row.character_id,
            character: row.name,
            movie_id: row.movie_id,
            num_lines: row.num_lines,
        }
    }
}

/// GET /characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterResponse>> {
    let character = CharacterRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;

    let partners = CharacterRepo::rank_partners(&state.pool, id, MAX_PARTNERS).await?;

    Ok(Json(CharacterResponse {
        character_id: character.character_id,
        character: character.name,
        movie: character.movie_title,
        gender: character.gender,
        top_conversations: partners.into_iter().map(ConversationPartner::from).collect(),
    }))
}

/// GET /characters/?name=&limit=&offset=&sort=
///
/// Sort keys: `character` (name), `movie` (movie title), `number_of_lines`
/// (highest first). Ties are broken by character id.
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<CharacterListParams>,
) -> AppResult<Json<Vec<CharacterListItem>>> {
    let query = ListQuery {
        filter: params.name,
        sort: params.sort,
        limit: params.limit,
        offset: params.offset,
    };
    let rows = CharacterRepo::list(&state.pool, &query).await?;
    Ok(Json(rows.into_iter().map(CharacterListItem::from).collect()))
}
