//! Round numbering, multipliers, and the image reveal table.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    BASE_ROUND_POINTS, MAX_ROUNDS, REVEAL_BLUR_PX, REVEAL_SCALE_PCT, ROUND_MULTIPLIERS,
};
use crate::error::GameError;

/// A round number guaranteed to lie in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Round(u8);

impl Round {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(MAX_ROUNDS);

    /// Validate a raw round number.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidRound`] when `n` is outside `1..=5`.
    pub fn new(n: u8) -> Result<Self, GameError> {
        if n >= 1 && n <= MAX_ROUNDS {
            Ok(Self(n))
        } else {
            Err(GameError::InvalidRound(n))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        self.0 == MAX_ROUNDS
    }

    /// The following round, or `None` after the last one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        if self.is_last() {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    #[must_use]
    pub const fn multiplier(self) -> u32 {
        ROUND_MULTIPLIERS[self.index()]
    }

    /// Points awarded for a fully correct guess in this round.
    #[must_use]
    pub const fn points(self) -> u32 {
        BASE_ROUND_POINTS * self.multiplier()
    }

    #[must_use]
    pub const fn reveal(self) -> RevealLevel {
        RevealLevel {
            scale_pct: REVEAL_SCALE_PCT[self.index()],
            blur_px: REVEAL_BLUR_PX[self.index()],
        }
    }

    /// All rounds in play order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_ROUNDS).map(Self)
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u8> for Round {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Round> for u8 {
    fn from(round: Round) -> Self {
        round.0
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zoom and blur applied to the puzzle image for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealLevel {
    pub scale_pct: u16,
    pub blur_px: u8,
}

impl RevealLevel {
    /// CSS `background-size` value.
    #[must_use]
    pub fn background_size(self) -> String {
        format!("{}%", self.scale_pct)
    }

    /// CSS `filter` value; `none` when the image is sharp.
    #[must_use]
    pub fn filter(self) -> String {
        if self.blur_px > 0 {
            format!("blur({}px)", self.blur_px)
        } else {
            "none".to_string()
        }
    }
}
