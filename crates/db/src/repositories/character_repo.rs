//! Repository for the `characters` table, including partner ranking.

use screenplay_core::listing::{contains_pattern, CharacterSort};
use screenplay_core::ranking::{rank_partners, CharacterLineCount, PartnerStat};
use screenplay_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{Character, CharacterDetail, CharacterSummary, LineCountRow};
use crate::models::ListQuery;

const COLUMNS: &str = "character_id, name, movie_id, gender";

/// Lookups, listings and co-occurrence ranking over characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Find a character by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE character_id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a character by id together with its movie title.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CharacterDetail>, sqlx::Error> {
        sqlx::query_as::<_, CharacterDetail>(
            "SELECT c.character_id, c.name, c.gender, c.movie_id, m.title AS movie_title \
             FROM characters c \
             JOIN movies m ON m.movie_id = c.movie_id \
             WHERE c.character_id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List characters whose name contains `params.filter`, with their line
    /// counts. Characters without lines are not listed.
    pub async fn list(
        pool: &PgPool,
        params: &ListQuery<CharacterSort>,
    ) -> Result<Vec<CharacterSummary>, sqlx::Error> {
        let query = format!(
            "SELECT c.character_id, c.name, c.movie_id, COUNT(l.line_id) AS num_lines \
             FROM characters c \
             JOIN movies m ON m.movie_id = c.movie_id \
             JOIN lines l ON l.character_id = c.character_id \
             WHERE ($1::TEXT IS NULL OR c.name ILIKE $1 ESCAPE '\\') \
             GROUP BY c.character_id, m.title \
             ORDER BY {} \
             LIMIT $2 OFFSET $3",
            order_by(params.sort)
        );
        sqlx::query_as::<_, CharacterSummary>(&query)
            .bind(contains_pattern(params.filter.as_deref()))
            .bind(params.limit)
            .bind(params.offset)
            .fetch_all(pool)
            .await
    }

    /// Number of lines spoken by a character.
    pub async fn line_count(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM lines WHERE character_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Line counts of every other character speaking in the movies where
    /// `id` speaks. The movie is taken from the lines, not the character row.
    pub async fn co_speaker_line_counts(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Vec<CharacterLineCount>, sqlx::Error> {
        let rows = sqlx::query_as::<_, LineCountRow>(
            "SELECT c.character_id, c.name, c.gender, COUNT(*) AS line_count \
             FROM lines l \
             JOIN characters c ON c.character_id = l.character_id \
             WHERE l.movie_id IN (SELECT DISTINCT movie_id FROM lines WHERE character_id = $1) \
               AND l.character_id <> $1 \
             GROUP BY c.character_id, c.name, c.gender",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(CharacterLineCount::from).collect())
    }

    /// The `limit` characters sharing the most lines with `id`, movie-wide.
    ///
    /// See [`screenplay_core::ranking`] for the co-occurrence definition.
    /// The caller is responsible for checking that `id` exists; an unknown
    /// id yields an empty ranking.
    pub async fn rank_partners(
        pool: &PgPool,
        id: DbId,
        limit: usize,
    ) -> Result<Vec<PartnerStat>, sqlx::Error> {
        let own_lines = Self::line_count(pool, id).await?;
        if own_lines == 0 {
            return Ok(Vec::new());
        }
        let candidates = Self::co_speaker_line_counts(pool, id).await?;
        Ok(rank_partners(id, own_lines, candidates, limit))
    }
}

fn order_by(sort: CharacterSort) -> &'static str {
    match sort {
        CharacterSort::Character => "c.name ASC, c.character_id ASC",
        CharacterSort::Movie => "m.title ASC, c.character_id ASC",
        CharacterSort::NumberOfLines => "num_lines DESC, c.character_id ASC",
    }
}
