//! Repository for the `movies` table.

use screenplay_core::listing::{contains_pattern, MovieSort};
use screenplay_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{Movie, TopCharacter};
use crate::models::ListQuery;

const COLUMNS: &str = "movie_id, title, year, imdb_rating, imdb_votes";

/// Lookups and listings over movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Find a movie by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE movie_id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies whose title contains `params.filter`, one page at a time.
    pub async fn list(
        pool: &PgPool,
        params: &ListQuery<MovieSort>,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies \
             WHERE ($1::TEXT IS NULL OR title ILIKE $1 ESCAPE '\\') \
             ORDER BY {} \
             LIMIT $2 OFFSET $3",
            order_by(params.sort)
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(contains_pattern(params.filter.as_deref()))
            .bind(params.limit)
            .bind(params.offset)
            .fetch_all(pool)
            .await
    }

    /// The characters of a movie with the most lines, most talkative first.
    ///
    /// Characters without lines are not listed. Ties are broken by
    /// character id.
    pub async fn top_characters(
        pool: &PgPool,
        movie_id: DbId,
        limit: i64,
    ) -> Result<Vec<TopCharacter>, sqlx::Error> {
        sqlx::query_as::<_, TopCharacter>(
            "SELECT c.character_id, c.name, COUNT(l.line_id) AS num_lines \
             FROM characters c \
             JOIN lines l ON l.character_id = c.character_id \
             WHERE c.movie_id = $1 \
             GROUP BY c.character_id, c.name \
             ORDER BY num_lines DESC, c.character_id ASC \
             LIMIT $2",
        )
        .bind(movie_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}

fn order_by(sort: MovieSort) -> &'static str {
    match sort {
        MovieSort::MovieTitle => "title ASC, movie_id ASC",
        MovieSort::Year => "year ASC NULLS LAST, movie_id ASC",
        MovieSort::Rating => "imdb_rating DESC NULLS LAST, movie_id ASC",
    }
}
