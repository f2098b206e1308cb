//! Tournament error types.

use super::models::PlayerId;
use crate::db::StorageError;
use thiserror::Error;

/// Broad error category surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected before touching the store
    Validation,
    /// A referenced player does not exist
    NotFound,
    /// The store failed or timed out
    Storage,
}

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Player name is empty or blank
    #[error("Player name must not be empty")]
    EmptyName,

    /// A player was reported as beating themselves
    #[error("Player {0} cannot play a match against themselves")]
    SelfMatch(PlayerId),

    /// Unknown player
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// Store failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TournamentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TournamentError::EmptyName | TournamentError::SelfMatch(_) => ErrorKind::Validation,
            TournamentError::PlayerNotFound(_) => ErrorKind::NotFound,
            TournamentError::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Get a client-safe error message that doesn't leak storage details
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::Storage(StorageError::Timeout(_)) => {
                "Tournament store timed out".to_string()
            }
            TournamentError::Storage(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<sqlx::Error> for TournamentError {
    fn from(err: sqlx::Error) -> Self {
        TournamentError::Storage(StorageError::Database(err))
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
