//! Error type for the game core.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A heading outside up/down/left/right was requested.
    #[error("invalid direction {0:?}, expected one of up, down, left, right")]
    InvalidDirection(String),
}
