//! Reading and writing the single saved-game slot.
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

use crate::GameStorage;
use crate::constants::STORAGE_KEY;
use crate::error::EngineError;
use crate::seed::DaySeed;
use crate::state::RoundState;

/// Load today's state, falling back to a fresh one.
///
/// Unparseable, inconsistent, or stale records are treated as absent and
/// removed from the slot.
///
/// # Errors
///
/// Returns an error only if the storage backend itself fails.
pub fn load_round_state<S: GameStorage>(
    storage: &S,
    today: DaySeed,
) -> Result<RoundState, S::Error> {
    let Some(raw) = storage.read_slot(STORAGE_KEY)? else {
        return Ok(RoundState::new(today));
    };
    let parsed = match serde_json::from_str::<RoundState>(&raw) {
        Ok(state) => Some(state),
        Err(err) => {
            log::warn!("ignoring unreadable saved state: {err}");
            None
        }
    };
    let restored = RoundState::restore(parsed.clone(), today);
    if parsed.as_ref() != Some(&restored) {
        storage.clear_slot(STORAGE_KEY)?;
    }
    Ok(restored)
}

/// Overwrite the slot with `state`.
///
/// # Errors
///
/// Returns [`EngineError::Encode`] if the state cannot be serialized and
/// [`EngineError::Storage`] if the storage backend rejects the write.
pub fn save_round_state<S: GameStorage>(
    storage: &S,
    state: &RoundState,
) -> Result<(), EngineError<S::Error>> {
    let json = serde_json::to_string(state).map_err(EngineError::Encode)?;
    storage
        .write_slot(STORAGE_KEY, &json)
        .map_err(EngineError::Storage)
}

/// In-memory slot store for hosts without persistent storage and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw slot contents, for inspection.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl GameStorage for MemoryStorage {
    type Error = Infallible;

    fn read_slot(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear_slot(&self, key: &str) -> Result<(), Self::Error> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
