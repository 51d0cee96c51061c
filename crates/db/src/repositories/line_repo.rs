//! Repository for the `lines` table.

use screenplay_core::listing::{contains_pattern, LineSort};
use screenplay_core::transcript::ConversationLine;
use screenplay_core::types::DbId;
use sqlx::PgPool;

use crate::models::line::{ConversationLineRow, Line, LineDetail, LineSummary};
use crate::models::ListQuery;

const COLUMNS: &str = "line_id, character_id, movie_id, conversation_id, line_sort, line_text";

/// Lookups and listings over lines of dialogue.
pub struct LineRepo;

impl LineRepo {
    /// Find a line by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Line>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lines WHERE line_id = $1");
        sqlx::query_as::<_, Line>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a line by id together with its movie title and speaker name.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<LineDetail>, sqlx::Error> {
        sqlx::query_as::<_, LineDetail>(
            "SELECT l.line_id, l.line_text, l.conversation_id, \
                    m.title AS movie_title, c.name AS said_by \
             FROM lines l \
             JOIN movies m ON m.movie_id = l.movie_id \
             JOIN characters c ON c.character_id = l.character_id \
             WHERE l.line_id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// All lines of a conversation with their speakers, in conversation order.
    pub async fn conversation_lines(
        pool: &PgPool,
        conversation_id: DbId,
    ) -> Result<Vec<ConversationLine>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ConversationLineRow>(
            "SELECT l.line_id, l.line_sort, c.name AS speaker_name, l.line_text \
             FROM lines l \
             JOIN characters c ON c.character_id = l.character_id \
             WHERE l.conversation_id = $1 \
             ORDER BY l.line_sort ASC, l.line_id ASC",
        )
        .bind(conversation_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(ConversationLine::from).collect())
    }

    /// List lines whose text contains `params.filter`, one page at a time.
    pub async fn list(
        pool: &PgPool,
        params: &ListQuery<LineSort>,
    ) -> Result<Vec<LineSummary>, sqlx::Error> {
        let query = format!(
            "SELECT l.line_id, l.movie_id, m.title AS movie_title, l.line_text, \
                    l.conversation_id, cv.character1_id, cv.character2_id \
             FROM lines l \
             JOIN movies m ON m.movie_id = l.movie_id \
             JOIN conversations cv ON cv.conversation_id = l.conversation_id \
             WHERE ($1::TEXT IS NULL OR l.line_text ILIKE $1 ESCAPE '\\') \
             ORDER BY {} \
             LIMIT $2 OFFSET $3",
            order_by(params.sort)
        );
        sqlx::query_as::<_, LineSummary>(&query)
            .bind(contains_pattern(params.filter.as_deref()))
            .bind(params.limit)
            .bind(params.offset)
            .fetch_all(pool)
            .await
    }

    /// Lines spoken by a character, ordered by line id.
    pub async fn list_by_character(
        pool: &PgPool,
        character_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Line>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lines \
             WHERE character_id = $1 \
             ORDER BY line_id ASC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Line>(&query)
            .bind(character_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}

fn order_by(sort: LineSort) -> &'static str {
    match sort {
        LineSort::Line => "l.line_id ASC",
        LineSort::MovieTitle => "m.title ASC, l.line_id ASC",
        LineSort::Conversation => "l.conversation_id ASC, l.line_sort ASC, l.line_id ASC",
    }
}
