//! Handlers for the `/lines` resource.

use axum::extract::{Path, State};
use axum::Json;
use screenplay_core::error::CoreError;
use screenplay_core::transcript::{build_transcript, TranscriptEntry};
use screenplay_core::types::DbId;
use screenplay_db::models::line::{Line, LineSummary};
use screenplay_db::models::ListQuery;
use screenplay_db::repositories::{CharacterRepo, LineRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{LineListParams, PaginationParams, ValidatedQuery};
use crate::state::AppState;

/// Response of `GET /lines/{id}`.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    pub line_id: DbId,
    /// Title of the movie the line belongs to.
    pub title: String,
    pub said_by: String,
    pub text: String,
    /// The whole conversation containing the line, in speaking order.
    pub in_context: Vec<ContextEntry>,
}

#[derive(Debug, Serialize)]
pub struct ContextEntry {
    pub speaker_name: String,
    pub text: String,
    pub is_highlighted: bool,
}

impl From<TranscriptEntry> for ContextEntry {
    fn from(entry: TranscriptEntry) -> Self {
        Self {
            speaker_name: entry.speaker_name,
            text: entry.text,
            is_highlighted: entry.is_highlighted,
        }
    }
}

/// One entry of `GET /lines/`.
#[derive(Debug, Serialize)]
pub struct LineListItem {
    pub line_id: DbId,
    pub movie_id: DbId,
    pub movie_title: String,
    pub text: String,
    pub conversation_id: DbId,
    pub characters_involved: [DbId; 2],
}

impl From<LineSummary> for LineListItem {
    fn from(row: LineSummary) -> Self {
        Self {
            line_id: row.line_id,
            movie_id: row.movie_id,
            movie_title: row.movie_title,
            text: row.line_text,
            conversation_id: row.conversation_id,
            characters_involved: [row.character1_id, row.character2_id],
        }
    }
}

/// One entry of `GET /lines/bycharacter/{character_id}`.
#[derive(Debug, Serialize)]
pub struct CharacterLineItem {
    pub line_id: DbId,
    pub movie_id: DbId,
    pub character_id: DbId,
    pub text: String,
    pub conversation_id: DbId,
}

impl From<Line> for CharacterLineItem {
    fn from(line: Line) -> Self {
        Self {
            line_id: line.line_id,
            movie_id: line.movie_id,
            character_id: line.character_id,
            text: line.line_text,
            conversation_id: line.conversation_id,
        }
    }
}

/// GET /lines/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LineResponse>> {
    let line = LineRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Line", id }))?;

    let conversation = LineRepo::conversation_lines(&state.pool, line.conversation_id).await?;
    let in_context = build_transcript(line.line_id, conversation)?;

    Ok(Json(LineResponse {
        line_id: line.line_id,
        title: line.movie_title,
        said_by: line.said_by,
        text: line.line_text,
        in_context: in_context.into_iter().map(ContextEntry::from).collect(),
    }))
}

/// GET /lines/?text=&limit=&offset=&sort=
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<LineListParams>,
) -> AppResult<Json<Vec<LineListItem>>> {
    let query = ListQuery {
        filter: params.text,
        sort: params.sort,
        limit: params.limit,
        offset: params.offset,
    };
    let rows = LineRepo::list(&state.pool, &query).await?;
    Ok(Json(rows.into_iter().map(LineListItem::from).collect()))
}

/// GET /lines/bycharacter/{character_id}?limit=&offset=
///
/// Lines spoken by one character, ordered by line id.
pub async fn list_by_character(
    State(state): State<AppState>,
    Path(character_id): Path<DbId>,
    ValidatedQuery(page): ValidatedQuery<PaginationParams>,
) -> AppResult<Json<Vec<CharacterLineItem>>> {
    CharacterRepo::find_by_id(&state.pool, character_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id: character_id,
        }))?;

    let lines =
        LineRepo::list_by_character(&state.pool, character_id, page.limit, page.offset).await?;
    Ok(Json(lines.into_iter().map(CharacterLineItem::from).collect()))
}
