//! Plandl Game Engine
//!
//! Platform-agnostic core logic for the Plandl daily aircraft guessing game.
//! This crate provides selection, scoring, and round progression without UI
//! or platform-specific dependencies.

pub mod catalog;
pub mod constants;
pub mod countdown;
pub mod error;
pub mod evaluator;
pub mod persistence;
pub mod round;
pub mod seed;
pub mod selector;
pub mod session;
pub mod share;
pub mod state;

// Re-export commonly used types
pub use catalog::{Aircraft, Catalog, image_filename, image_path};
pub use countdown::{countdown_label, format_countdown, seconds_until_midnight};
pub use error::{EngineError, GameError};
pub use evaluator::{Correctness, GuessDraft, GuessInput, evaluate, round_score};
pub use persistence::{MemoryStorage, load_round_state, save_round_state};
pub use round::{RevealLevel, Round};
pub use seed::{DaySeed, SeededRandom};
pub use selector::{DailyAnswer, ImageFrame, select_daily};
pub use session::DailySession;
pub use share::share_text;
pub use state::{Advance, GamePhase, Guess, GuessOutcome, RoundState};

/// Trait for abstracting the device-local key-value slot.
/// Platform-specific implementations should provide this
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be accessed.
    fn read_slot(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn write_slot(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be accessed.
    fn clear_slot(&self, key: &str) -> Result<(), Self::Error>;
}

/// Main game engine binding the catalog to a storage backend.
///
/// Every state-changing transition is written through to storage.
pub struct GameEngine<S>
where
    S: GameStorage,
{
    catalog: Catalog,
    storage: S,
}

impl<S> GameEngine<S>
where
    S: GameStorage,
{
    /// Create a new game engine with the provided catalog and storage
    pub const fn new(catalog: Catalog, storage: S) -> Self {
        Self { catalog, storage }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Select the day's puzzle and resume any saved progress for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is empty or storage cannot be read.
    pub fn start_day(&self, seed: DaySeed) -> Result<DailySession, EngineError<S::Error>> {
        let stored = load_round_state(&self.storage, seed).map_err(EngineError::Storage)?;
        let session = DailySession::start(&self.catalog, seed, Some(stored))?;
        Ok(session)
    }

    /// Submit a guess and persist the resolved round.
    ///
    /// # Errors
    ///
    /// Returns an error if the guess is not allowed in the current phase or
    /// the state cannot be saved. A save failure leaves `session` transitioned.
    pub fn submit_guess(
        &self,
        session: &mut DailySession,
        input: GuessInput,
    ) -> Result<GuessOutcome, EngineError<S::Error>> {
        let outcome = session.submit_guess(input)?;
        save_round_state(&self.storage, session.state())?;
        Ok(outcome)
    }

    /// Advance past a resolved round and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if there is nothing to advance or the state cannot be
    /// saved. A save failure leaves `session` transitioned.
    pub fn advance(&self, session: &mut DailySession) -> Result<Advance, EngineError<S::Error>> {
        let advance = session.advance()?;
        save_round_state(&self.storage, session.state())?;
        Ok(advance)
    }
}
