//! Web-specific game engine implementation
//!
//! This module provides the browser implementations of the plandl-game traits
//! and re-exports the core game logic types.

use crate::dom;

// Re-export all types from plandl-game
pub use plandl_game::*;

/// Catalog location relative to the page.
pub const CATALOG_URL: &str = "planes.json";

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Catalog error: {0}")]
    Catalog(#[from] GameError),
}

/// Download and parse the aircraft catalog.
///
/// # Errors
///
/// Returns an error if the request fails or the JSON is not a catalog.
#[allow(clippy::future_not_send)]
pub async fn fetch_catalog(url: &str) -> Result<Catalog, WebDataError> {
    let body = dom::fetch_text(url)
        .await
        .map_err(|e| WebDataError::Network(dom::js_error_message(&e)))?;
    let catalog = Catalog::from_json(&body)?;
    if catalog.is_empty() {
        return Err(GameError::EmptyCatalog.into());
    }
    Ok(catalog)
}

/// Web-specific game storage using localStorage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebGameStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WebStorageError {
    fn from_js(value: &wasm_bindgen::JsValue) -> Self {
        Self::Storage(dom::js_error_message(value))
    }
}

impl GameStorage for WebGameStorage {
    type Error = WebStorageError;

    fn read_slot(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage().map_err(|e| WebStorageError::from_js(&e))?;
        storage.get_item(key).map_err(|e| WebStorageError::from_js(&e))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage().map_err(|e| WebStorageError::from_js(&e))?;
        storage
            .set_item(key, value)
            .map_err(|e| WebStorageError::from_js(&e))
    }

    fn clear_slot(&self, key: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage().map_err(|e| WebStorageError::from_js(&e))?;
        storage
            .remove_item(key)
            .map_err(|e| WebStorageError::from_js(&e))
    }
}

/// Create a web-compatible game engine backed by `localStorage`
#[must_use]
pub fn create_web_game_engine(catalog: Catalog) -> GameEngine<WebGameStorage> {
    GameEngine::new(catalog, WebGameStorage)
}
