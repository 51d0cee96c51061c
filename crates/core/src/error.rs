use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A semantically invalid write request (bad participants, speakers, movie).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed or out-of-range request parameters.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
