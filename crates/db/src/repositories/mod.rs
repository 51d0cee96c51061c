//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. All user input reaches SQL
//! through bound parameters; `ORDER BY` fragments come from fixed strings
//! selected by the sort enums in `screenplay_core::listing`.

pub mod character_repo;
pub mod conversation_repo;
pub mod line_repo;
pub mod movie_repo;

pub use character_repo::CharacterRepo;
pub use conversation_repo::ConversationRepo;
pub use line_repo::LineRepo;
pub use movie_repo::MovieRepo;
