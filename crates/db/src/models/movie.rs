//! Movie rows.

use screenplay_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `movies` table. Serializes in the movie listing shape.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub movie_id: DbId,
    #[serde(rename = "movie_title")]
    pub title: String,
    pub year: Option<i32>,
    pub imdb_rating: Option<f64>,
    pub imdb_votes: Option<i32>,
}

/// A character of a movie together with how many lines they speak.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TopCharacter {
    pub character_id: DbId,
    pub name: String,
    pub num_lines: i64,
}
