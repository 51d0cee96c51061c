//! Line rows.

use screenplay_core::transcript::ConversationLine;
use screenplay_core::types::DbId;
use sqlx::FromRow;

/// A row from the `lines` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Line {
    pub line_id: DbId,
    pub character_id: DbId,
    pub movie_id: DbId,
    pub conversation_id: DbId,
    pub line_sort: i32,
    pub line_text: String,
}

/// A line joined with its movie title and speaker name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct LineDetail {
    pub line_id: DbId,
    pub line_text: String,
    pub conversation_id: DbId,
    pub movie_title: String,
    pub said_by: String,
}

/// One entry of the line listing, with both participants of its conversation.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct LineSummary {
    pub line_id: DbId,
    pub movie_id: DbId,
    pub movie_title: String,
    pub line_text: String,
    pub conversation_id: DbId,
    pub character1_id: DbId,
    pub character2_id: DbId,
}

/// A line of a conversation with the speaker's name.
#[derive(Debug, Clone, FromRow)]
pub struct ConversationLineRow {
    pub line_id: DbId,
    pub line_sort: i32,
    pub speaker_name: String,
    pub line_text: String,
}

impl From<ConversationLineRow> for ConversationLine {
    fn from(row: ConversationLineRow) -> Self {
        ConversationLine {
            line_id: row.line_id,
            line_sort: row.line_sort,
            speaker_name: row.speaker_name,
            text: row.line_text,
        }
    }
}
