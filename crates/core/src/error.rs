//! Domain error model.

use thiserror::Error;

/// Result type used across the billing domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic data or configuration failure. None of
/// them is transient, so callers never retry; the statement being computed is
/// abandoned and the error is handed back unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A play's genre has no pricing rule.
    #[error("unknown play type: {genre} (play {play_id})")]
    UnknownPlayGenre { genre: String, play_id: String },

    /// A performance references a play the catalog does not contain.
    #[error("play not found: {play_id}")]
    PlayNotFound { play_id: String },

    /// A value failed validation (e.g. malformed configuration).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. blank).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Checked money or credit arithmetic overflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

impl DomainError {
    pub fn unknown_genre(genre: impl Into<String>, play_id: impl Into<String>) -> Self {
        Self::UnknownPlayGenre {
            genre: genre.into(),
            play_id: play_id.into(),
        }
    }

    pub fn play_not_found(play_id: impl Into<String>) -> Self {
        Self::PlayNotFound {
            play_id: play_id.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }
}
