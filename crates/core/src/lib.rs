//! Domain logic for the movie dialogue service.
//!
//! Everything here is free of I/O: the repository layer fetches rows and
//! hands them to these functions for ranking, transcript assembly and
//! request validation.

pub mod conversation;
pub mod error;
pub mod listing;
pub mod ranking;
pub mod transcript;
pub mod types;
