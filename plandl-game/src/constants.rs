//! Centralized tuning constants for Plandl game logic.
//!
//! These values define the deterministic math for the daily puzzle. Keeping
//! them together ensures that scoring and selection can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Rounds and scoring -------------------------------------------------------
pub const MAX_ROUNDS: u8 = 5;
pub const BASE_ROUND_POINTS: u32 = 100;
/// Score multiplier for rounds 1..=5.
pub const ROUND_MULTIPLIERS: [u32; MAX_ROUNDS as usize] = [5, 4, 3, 2, 1];

// Image reveal (background-size %, blur px) per round ----------------------
pub const REVEAL_SCALE_PCT: [u16; MAX_ROUNDS as usize] = [300, 225, 160, 120, 100];
pub const REVEAL_BLUR_PX: [u8; MAX_ROUNDS as usize] = [2, 1, 0, 0, 0];

// Daily selector LCG -------------------------------------------------------
pub(crate) const LCG_MULTIPLIER: u64 = 9301;
pub(crate) const LCG_INCREMENT: u64 = 49_297;
pub(crate) const LCG_MODULUS: u64 = 233_280;
pub(crate) const OFFSET_RANGE_PCT: f64 = 100.0;

// Persistence --------------------------------------------------------------
pub const STORAGE_KEY: &str = "plandlState";

// Share text ---------------------------------------------------------------
pub(crate) const SHARE_TITLE: &str = "Plandl \u{2708}\u{fe0f}";
pub(crate) const SHARE_HIT: &str = "\u{1f7e9}";
pub(crate) const SHARE_MISS: &str = "\u{1f7e5}";

// Assets -------------------------------------------------------------------
pub const IMAGE_DIR: &str = "images";
pub const IMAGE_EXTENSION: &str = "jpg";
