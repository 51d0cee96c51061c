//! Repository for the `conversations` table: the only write path.

use screenplay_core::types::DbId;
use sqlx::PgPool;

use crate::models::conversation::{Conversation, CreateConversation};

const COLUMNS: &str = "conversation_id, character1_id, character2_id, movie_id";

/// Append-only access to conversations and their lines.
pub struct ConversationRepo;

impl ConversationRepo {
    /// Find a conversation by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Conversation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM conversations WHERE conversation_id = $1");
        sqlx::query_as::<_, Conversation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a conversation and its lines in one transaction.
    ///
    /// The input is assumed to be validated. Ids continue after the highest
    /// existing conversation and line ids. Writers are serialized by a
    /// `SHARE ROW EXCLUSIVE` lock on `conversations`, which conflicts with
    /// itself but not with readers, so two concurrent calls never allocate
    /// the same ids. Each line's `line_sort` is its index in `input.lines`.
    pub async fn create(
        pool: &PgPool,
        movie_id: DbId,
        input: &CreateConversation,
    ) -> Result<Conversation, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("LOCK TABLE conversations IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let conversation_id = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(MAX(conversation_id) + 1, 0) FROM conversations",
        )
        .fetch_one(&mut *tx)
        .await?;

        let first_line_id =
            sqlx::query_scalar::<_, i64>("SELECT COALESCE(MAX(line_id) + 1, 0) FROM lines")
                .fetch_one(&mut *tx)
                .await?;

        let insert_query = format!(
            "INSERT INTO conversations (conversation_id, character1_id, character2_id, movie_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let conversation = sqlx::query_as::<_, Conversation>(&insert_query)
            .bind(conversation_id)
            .bind(input.character_1_id)
            .bind(input.character_2_id)
            .bind(movie_id)
            .fetch_one(&mut *tx)
            .await?;

        if !input.lines.is_empty() {
            let mut line_ids = Vec::with_capacity(input.lines.len());
            let mut speakers = Vec::with_capacity(input.lines.len());
            let mut sorts = Vec::with_capacity(input.lines.len());
            let mut texts = Vec::with_capacity(input.lines.len());
            for (index, line) in (0_i32..).zip(&input.lines) {
                line_ids.push(first_line_id + i64::from(index));
                speakers.push(line.character_id);
                sorts.push(index);
                texts.push(line.line_text.clone());
            }

            sqlx::query(
                "INSERT INTO lines \
                    (line_id, character_id, movie_id, conversation_id, line_sort, line_text) \
                 SELECT line_id, character_id, $5::BIGINT, $6::BIGINT, line_sort, line_text \
                 FROM UNNEST($1::BIGINT[], $2::BIGINT[], $3::INTEGER[], $4::TEXT[]) \
                    AS t(line_id, character_id, line_sort, line_text)",
            )
            .bind(&line_ids)
            .bind(&speakers)
            .bind(&sorts)
            .bind(&texts)
            .bind(movie_id)
            .bind(conversation_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::debug!(
            conversation_id,
            movie_id,
            lines = input.lines.len(),
            "Conversation appended"
        );
        Ok(conversation)
    }
}
