//! Date-derived seeds and the reproducible linear-congruential generator.
//!
//! The recurrence `seed = (seed * 9301 + 49297) mod 233280` must stay exactly
//! as is: every client, in any language, has to land on the same aircraft for
//! the same calendar day.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{LCG_INCREMENT, LCG_MODULUS, LCG_MULTIPLIER};

/// `year * 10000 + month * 100 + day`, e.g. `20261019`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySeed(u32);

impl DaySeed {
    #[must_use]
    pub const fn from_ymd(year: u32, month: u32, day: u32) -> Self {
        Self(year * 10_000 + month * 100 + day)
    }

    /// Seed for a calendar date in the player's local time zone.
    #[must_use]
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        let year = u32::try_from(date.year()).unwrap_or(0);
        Self::from_ymd(year, date.month(), date.day())
    }

    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn rng(self) -> SeededRandom {
        SeededRandom::new(u64::from(self.0))
    }
}

impl fmt::Display for DaySeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minimal LCG yielding values in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the generator.
    #[allow(clippy::cast_precision_loss)] // state < 233280, exact in f64
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state.wrapping_mul(LCG_MULTIPLIER) + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn day_seed_packs_calendar_fields() {
        assert_eq!(DaySeed::from_ymd(2024, 3, 7).get(), 20_240_307);
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(DaySeed::from_date(&date), DaySeed::from_ymd(2026, 10, 19));
    }

    #[test]
    fn lcg_matches_reference_sequence() {
        let mut rng = SeededRandom::new(1);
        // (1 * 9301 + 49297) % 233280 = 58598
        assert!((rng.next_f64() - 58_598.0 / 233_280.0).abs() < f64::EPSILON);
        // (58598 * 9301 + 49297) % 233280 = 545_069_295 % 233280
        let expected = (58_598_u64 * 9301 + 49_297) % 233_280;
        assert!((rng.next_f64() - expected as f64 / 233_280.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lcg_values_stay_in_unit_interval() {
        let mut rng = DaySeed::from_ymd(2025, 12, 31).rng();
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
