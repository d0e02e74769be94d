//! Guess evaluation and the cascading selection draft.
use serde::{Deserialize, Serialize};

use crate::catalog::{Aircraft, Catalog};
use crate::round::Round;

/// A submitted (manufacturer, model, version) triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessInput {
    pub manufacturer: String,
    pub model: String,
    pub version: String,
}

impl GuessInput {
    #[must_use]
    pub fn new(manufacturer: &str, model: &str, version: &str) -> Self {
        Self {
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
            version: version.to_string(),
        }
    }
}

/// Per-field match flags for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Correctness {
    pub manufacturer: bool,
    pub model: bool,
    pub version: bool,
}

impl Correctness {
    #[must_use]
    pub const fn all(self) -> bool {
        self.manufacturer && self.model && self.version
    }

    /// Flags in display order: manufacturer, model, version.
    #[must_use]
    pub const fn fields(self) -> [bool; 3] {
        [self.manufacturer, self.model, self.version]
    }
}

/// Exact, field-by-field comparison against the answer.
#[must_use]
pub fn evaluate(guess: &GuessInput, answer: &Aircraft) -> Correctness {
    Correctness {
        manufacturer: guess.manufacturer == answer.manufacturer,
        model: guess.model == answer.model,
        version: guess.version == answer.version,
    }
}

/// Points for a round: full value only when every field matches.
#[must_use]
pub const fn round_score(round: Round, correctness: Correctness) -> u32 {
    if correctness.all() { round.points() } else { 0 }
}

/// In-progress dropdown selection. Choosing a parent field clears its children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuessDraft {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub version: Option<String>,
}

impl GuessDraft {
    pub fn select_manufacturer(&mut self, manufacturer: Option<String>) {
        self.manufacturer = manufacturer.filter(|m| !m.is_empty());
        self.model = None;
        self.version = None;
    }

    pub fn select_model(&mut self, model: Option<String>) {
        self.model = model.filter(|m| !m.is_empty() && self.manufacturer.is_some());
        self.version = None;
    }

    pub fn select_version(&mut self, version: Option<String>) {
        self.version = version.filter(|v| !v.is_empty() && self.model.is_some());
    }

    /// Model options, empty until a manufacturer is chosen.
    #[must_use]
    pub fn model_options(&self, catalog: &Catalog) -> Vec<String> {
        self.manufacturer
            .as_deref()
            .map(|m| catalog.models(m))
            .unwrap_or_default()
    }

    /// Version options, empty until a model is chosen.
    #[must_use]
    pub fn version_options(&self, catalog: &Catalog) -> Vec<String> {
        match (self.manufacturer.as_deref(), self.model.as_deref()) {
            (Some(m), Some(model)) => catalog.versions(m, model),
            _ => Vec::new(),
        }
    }

    /// The submittable triple once all three fields are chosen.
    #[must_use]
    pub fn complete(&self) -> Option<GuessInput> {
        Some(GuessInput {
            manufacturer: self.manufacturer.clone()?,
            model: self.model.clone()?,
            version: self.version.clone()?,
        })
    }
}
