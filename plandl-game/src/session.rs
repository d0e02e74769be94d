use crate::catalog::Catalog;
use crate::error::GameError;
use crate::evaluator::GuessInput;
use crate::seed::DaySeed;
use crate::selector::{DailyAnswer, ImageFrame, select_daily};
use crate::state::{Advance, GamePhase, GuessOutcome, RoundState};

/// High-level session wrapper binding today's answer to the round state.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySession {
    answer: DailyAnswer,
    state: RoundState,
}

impl DailySession {
    /// Select today's answer and resume `stored` when it is still valid.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyCatalog`] when the catalog has no entries.
    pub fn start(
        catalog: &Catalog,
        seed: DaySeed,
        stored: Option<RoundState>,
    ) -> Result<Self, GameError> {
        let answer = select_daily(catalog, seed)?;
        let state = RoundState::restore(stored, seed);
        Ok(Self { answer, state })
    }

    #[must_use]
    pub const fn answer(&self) -> &DailyAnswer {
        &self.answer
    }

    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Image frame for the current phase; fully revealed once complete.
    #[must_use]
    pub fn frame(&self) -> ImageFrame {
        match self.phase() {
            GamePhase::Completed => self.answer.full_frame(),
            GamePhase::Playing(round) | GamePhase::RoundResolved(round) => {
                self.answer.frame(round)
            }
        }
    }

    /// # Errors
    ///
    /// See [`RoundState::submit_guess`].
    pub fn submit_guess(&mut self, input: GuessInput) -> Result<GuessOutcome, GameError> {
        self.state.submit_guess(input, &self.answer)
    }

    /// # Errors
    ///
    /// See [`RoundState::advance`].
    pub fn advance(&mut self) -> Result<Advance, GameError> {
        self.state.advance()
    }
}
