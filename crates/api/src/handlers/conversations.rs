//! Handler for appending a conversation to a movie.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use screenplay_core::conversation::{validate_new_conversation, Participant};
use screenplay_core::error::CoreError;
use screenplay_core::types::DbId;
use screenplay_db::models::conversation::CreateConversation;
use screenplay_db::repositories::{CharacterRepo, ConversationRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /movies/{movie_id}/conversations/
///
/// Validates the participants and speakers, then stores the conversation and
/// its lines. Responds with the new conversation id.
pub async fn create(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    payload: Result<Json<CreateConversation>, JsonRejection>,
) -> AppResult<Json<DbId>> {
    let Json(input) = payload.map_err(|rejection| CoreError::Validation(rejection.body_text()))?;

    let first = participant(&state, input.character_1_id).await?;
    let second = participant(&state, input.character_2_id).await?;

    validate_new_conversation(
        movie_id,
        first,
        second,
        input.lines.iter().map(|line| line.character_id),
    )?;

    let conversation = ConversationRepo::create(&state.pool, movie_id, &input).await?;

    tracing::info!(
        conversation_id = conversation.conversation_id,
        movie_id,
        lines = input.lines.len(),
        "Conversation created"
    );

    Ok(Json(conversation.conversation_id))
}

async fn participant(state: &AppState, character_id: DbId) -> Result<Participant, AppError> {
    let character = CharacterRepo::find_by_id(&state.pool, character_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Character",
            id: character_id,
        })?;
    Ok(Participant {
        character_id: character.character_id,
        movie_id: character.movie_id,
    })
}
