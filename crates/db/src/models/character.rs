//! Character rows.

use screenplay_core::ranking::CharacterLineCount;
use screenplay_core::types::DbId;
use sqlx::FromRow;

/// A row from the `characters` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Character {
    pub character_id: DbId,
    pub name: String,
    pub movie_id: DbId,
    pub gender: Option<String>,
}

/// A character joined with the title of its movie.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CharacterDetail {
    pub character_id: DbId,
    pub name: String,
    pub gender: Option<String>,
    pub movie_id: DbId,
    pub movie_title: String,
}

/// One entry of the character listing.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CharacterSummary {
    pub character_id: DbId,
    pub name: String,
    pub movie_id: DbId,
    pub num_lines: i64,
}

/// Lines spoken by one character in a movie.
#[derive(Debug, Clone, FromRow)]
pub struct LineCountRow {
    pub character_id: DbId,
    pub name: String,
    pub gender: Option<String>,
    pub line_count: i64,
}

impl From<LineCountRow> for CharacterLineCount {
    fn from(row: LineCountRow) -> Self {
        CharacterLineCount {
            character_id: row.character_id,
            name: row.name,
            gender: row.gender,
            line_count: row.line_count,
        }
    }
}
