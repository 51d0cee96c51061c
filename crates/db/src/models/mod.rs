//! Row structs and request DTOs for the corpus tables.
//!
//! Each submodule contains:
//! - `FromRow` structs matching the columns a repository query selects
//! - `Deserialize` DTOs for the write path, where one exists

pub mod character;
pub mod conversation;
pub mod line;
pub mod movie;

/// Filter, sort key and page window of a listing query.
///
/// `limit` and `offset` are expected to be validated by the caller; the
/// repository passes them to SQL unchanged.
#[derive(Debug, Clone)]
pub struct ListQuery<S> {
    /// Case-insensitive substring filter on the listing's text column.
    pub filter: Option<String>,
    pub sort: S,
    pub limit: i64,
    pub offset: i64,
}
