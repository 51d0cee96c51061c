//! Validation rules for appending a conversation to a movie.
//!
//! Existence of both participants is checked by the caller (it needs the
//! database); everything else is decided here.

use crate::error::CoreError;
use crate::types::DbId;

pub const ERR_DUPLICATE_PARTICIPANT: &str = "conversation must contain unique characters";
pub const ERR_UNKNOWN_SPEAKER: &str = "lines contain unknown character";
pub const ERR_CHARACTER_NOT_IN_MOVIE: &str = "character not in movie";

/// A conversation participant as resolved from the `characters` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant {
    pub character_id: DbId,
    pub movie_id: DbId,
}

/// Check a conversation request against its resolved participants.
///
/// Rules are applied in order and the first failure is returned:
/// 1. the participants differ;
/// 2. every speaker is one of the participants;
/// 3. both participants belong to `movie_id`.
pub fn validate_new_conversation<I>(
    movie_id: DbId,
    first: Participant,
    second: Participant,
    speakers: I,
) -> Result<(), CoreError>
where
    I: IntoIterator<Item = DbId>,
{
    if first.character_id == second.character_id {
        return Err(CoreError::InvalidArgument(
            ERR_DUPLICATE_PARTICIPANT.to_string(),
        ));
    }

    let is_participant = |id: DbId| id == first.character_id || id == second.character_id;
    if !speakers.into_iter().all(is_participant) {
        return Err(CoreError::InvalidArgument(ERR_UNKNOWN_SPEAKER.to_string()));
    }

    if first.movie_id != movie_id || second.movie_id != movie_id {
        return Err(CoreError::InvalidArgument(
            ERR_CHARACTER_NOT_IN_MOVIE.to_string(),
        ));
    }

    Ok(())
}
