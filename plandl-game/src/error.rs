use thiserror::Error;

use crate::round::Round;

/// Failures raised by the core game rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("catalog contains no aircraft")]
    EmptyCatalog,
    #[error("catalog JSON is invalid: {0}")]
    CatalogFormat(String),
    #[error("round {0} is outside 1..=5")]
    InvalidRound(u8),
    #[error("round {0} is not accepting guesses")]
    NotAcceptingGuesses(Round),
    #[error("round {0} has no resolved guess to advance from")]
    NothingToAdvance(Round),
    #[error("today's game is already complete")]
    AlreadyCompleted,
}

/// Errors surfaced by [`crate::GameEngine`], which also persists state.
#[derive(Debug, Error)]
pub enum EngineError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("storage failure: {0}")]
    Storage(#[source] E),
    #[error("could not encode round state: {0}")]
    Encode(#[source] serde_json::Error),
}

impl<E> EngineError<E>
where
    E: std::error::Error + 'static,
{
    /// The rule violation behind this error, or `None` when only storage or
    /// encoding failed.
    #[must_use]
    pub fn into_rule_violation(self) -> Option<GameError> {
        match self {
            Self::Game(err) => Some(err),
            Self::Storage(_) | Self::Encode(_) => None,
        }
    }
}
