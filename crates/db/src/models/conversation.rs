//! Conversation rows and the create DTO.

use screenplay_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `conversations` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Conversation {
    pub conversation_id: DbId,
    pub character1_id: DbId,
    pub character2_id: DbId,
    pub movie_id: DbId,
}

/// DTO for appending a conversation to a movie.
///
/// The movie comes from the request path. Lines are stored in the order
/// given here.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConversation {
    pub character_1_id: DbId,
    pub character_2_id: DbId,
    pub lines: Vec<CreateLine>,
}

/// One line of a [`CreateConversation`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLine {
    pub character_id: DbId,
    pub line_text: String,
}
