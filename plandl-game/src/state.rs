//! Per-day round state machine.
//!
//! Phase is derived from the stored fields, so the persisted record never
//! needs a separate phase tag:
//!
//! - `completed` set: [`GamePhase::Completed`]
//! - one guess recorded for the current round: [`GamePhase::RoundResolved`]
//! - otherwise: [`GamePhase::Playing`]

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::evaluator::{Correctness, GuessInput, evaluate, round_score};
use crate::round::Round;
use crate::seed::DaySeed;
use crate::selector::DailyAnswer;

/// One submitted guess, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub round: Round,
    pub manufacturer: String,
    pub model: String,
    pub version: String,
    pub correct: Correctness,
}

impl Guess {
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.correct.all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing(Round),
    RoundResolved(Round),
    Completed,
}

/// Result of a guess submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub round: Round,
    pub correct: Correctness,
    pub points: u32,
    /// Whether the following `advance` will finish the game.
    pub finishes_game: bool,
}

/// Result of advancing from a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextRound(Round),
    Completed { final_score: u32 },
}

/// Round progress for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundState {
    #[serde(rename = "date")]
    pub seed: DaySeed,
    pub round: Round,
    pub score: u32,
    #[serde(default)]
    pub guesses: Vec<Guess>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_score: Option<u32>,
}

impl RoundState {
    /// Fresh state at round 1.
    #[must_use]
    pub const fn new(seed: DaySeed) -> Self {
        Self {
            seed,
            round: Round::FIRST,
            score: 0,
            guesses: Vec::new(),
            completed: false,
            final_score: None,
        }
    }

    /// Resume `stored` when it belongs to `today` and is internally consistent,
    /// otherwise start over.
    #[must_use]
    pub fn restore(stored: Option<Self>, today: DaySeed) -> Self {
        match stored {
            Some(state) if state.seed != today => {
                log::info!("discarding saved state from {} (today is {today})", state.seed);
                Self::new(today)
            }
            Some(state) if !state.is_consistent() => {
                log::warn!("discarding inconsistent saved state for {today}");
                Self::new(today)
            }
            Some(state) => state,
            None => Self::new(today),
        }
    }

    /// Structural invariants a persisted record must satisfy.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let round = usize::from(self.round.get());
        let count = self.guesses.len();
        let rounds_in_order = self
            .guesses
            .iter()
            .enumerate()
            .all(|(i, g)| usize::from(g.round.get()) == i + 1);
        let count_ok = if self.completed {
            count == round
                && self.final_score == Some(self.score)
                && (self.won() || self.round.is_last())
        } else {
            count == round || (count + 1 == round && !self.won())
        };
        // a correct guess must end the game at that round
        let early_win_ok = self
            .guesses
            .iter()
            .rev()
            .skip(1)
            .all(|g| !g.is_correct());
        rounds_in_order && count_ok && early_win_ok
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.completed {
            GamePhase::Completed
        } else if self.guesses.len() == usize::from(self.round.get()) {
            GamePhase::RoundResolved(self.round)
        } else {
            GamePhase::Playing(self.round)
        }
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        self.guesses.last()
    }

    /// `true` once a guess has matched the answer exactly.
    #[must_use]
    pub fn won(&self) -> bool {
        self.last_guess().is_some_and(Guess::is_correct)
    }

    /// Score to display: final once complete, running otherwise.
    #[must_use]
    pub fn display_score(&self) -> u32 {
        self.final_score.unwrap_or(self.score)
    }

    /// Record a guess for the current round.
    ///
    /// # Errors
    ///
    /// Fails with [`GameError::NotAcceptingGuesses`] if the round already has a
    /// guess, or [`GameError::AlreadyCompleted`] after the game ended.
    pub fn submit_guess(
        &mut self,
        input: GuessInput,
        answer: &DailyAnswer,
    ) -> Result<GuessOutcome, GameError> {
        let round = match self.phase() {
            GamePhase::Playing(round) => round,
            GamePhase::RoundResolved(round) => return Err(GameError::NotAcceptingGuesses(round)),
            GamePhase::Completed => return Err(GameError::AlreadyCompleted),
        };
        let correct = evaluate(&input, &answer.aircraft);
        let points = round_score(round, correct);
        self.score += points;
        self.guesses.push(Guess {
            round,
            manufacturer: input.manufacturer,
            model: input.model,
            version: input.version,
            correct,
        });
        log::debug!("round {round}: {correct:?}, +{points}");
        Ok(GuessOutcome {
            round,
            correct,
            points,
            finishes_game: correct.all() || round.is_last(),
        })
    }

    /// Move past a resolved round.
    ///
    /// # Errors
    ///
    /// Fails with [`GameError::NothingToAdvance`] while the round still awaits a
    /// guess, or [`GameError::AlreadyCompleted`] after the game ended.
    pub fn advance(&mut self) -> Result<Advance, GameError> {
        let round = match self.phase() {
            GamePhase::RoundResolved(round) => round,
            GamePhase::Playing(round) => return Err(GameError::NothingToAdvance(round)),
            GamePhase::Completed => return Err(GameError::AlreadyCompleted),
        };
        match round.next() {
            Some(next) if !self.won() => {
                self.round = next;
                Ok(Advance::NextRound(next))
            }
            _ => {
                self.completed = true;
                self.final_score = Some(self.score);
                log::info!("puzzle {} complete with {} points", self.seed, self.score);
                Ok(Advance::Completed {
                    final_score: self.score,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Aircraft;

    fn answer() -> DailyAnswer {
        DailyAnswer {
            seed: DaySeed::from_ymd(2024, 5, 1),
            index: 0,
            aircraft: Aircraft::with_default_image("Cessna", "172", "Skyhawk"),
            offset_x: 12.5,
            offset_y: 80.0,
        }
    }

    fn wrong() -> GuessInput {
        GuessInput::new("Piper", "Cherokee", "Six")
    }

    #[test]
    fn fresh_state_is_playing_round_one() {
        let state = RoundState::new(DaySeed::from_ymd(2024, 5, 1));
        assert_eq!(state.phase(), GamePhase::Playing(Round::FIRST));
        assert_eq!(state.score, 0);
        assert!(state.is_consistent());
    }

    #[test]
    fn guess_then_advance_moves_to_next_round() {
        let answer = answer();
        let mut state = RoundState::new(answer.seed);
        let outcome = state.submit_guess(wrong(), &answer).unwrap();
        assert!(!outcome.finishes_game);
        assert_eq!(state.phase(), GamePhase::RoundResolved(Round::FIRST));
        assert!(state.is_consistent());

        let next = state.advance().unwrap();
        assert_eq!(next, Advance::NextRound(Round::new(2).unwrap()));
        assert_eq!(state.phase(), GamePhase::Playing(Round::new(2).unwrap()));
        assert_eq!(state.guesses.len(), 1);
    }

    #[test]
    fn double_submit_and_premature_advance_are_rejected() {
        let answer = answer();
        let mut state = RoundState::new(answer.seed);
        assert_eq!(
            state.advance(),
            Err(GameError::NothingToAdvance(Round::FIRST))
        );
        state.submit_guess(wrong(), &answer).unwrap();
        assert_eq!(
            state.submit_guess(wrong(), &answer),
            Err(GameError::NotAcceptingGuesses(Round::FIRST))
        );
    }

    #[test]
    fn first_round_win_scores_five_hundred() {
        let answer = answer();
        let mut state = RoundState::new(answer.seed);
        let outcome = state
            .submit_guess(GuessInput::new("Cessna", "172", "Skyhawk"), &answer)
            .unwrap();
        assert_eq!(outcome.points, 500);
        assert!(outcome.finishes_game);
        assert_eq!(
            state.advance(),
            Ok(Advance::Completed { final_score: 500 })
        );
        assert!(state.won());
        assert_eq!(state.phase(), GamePhase::Completed);
        assert_eq!(
            state.submit_guess(wrong(), &answer),
            Err(GameError::AlreadyCompleted)
        );
        assert_eq!(state.advance(), Err(GameError::AlreadyCompleted));
    }

    #[test]
    fn restore_discards_foreign_days() {
        let answer = answer();
        let mut state = RoundState::new(answer.seed);
        state.submit_guess(wrong(), &answer).unwrap();
        state.advance().unwrap();

        let same_day = RoundState::restore(Some(state.clone()), answer.seed);
        assert_eq!(same_day, state);

        let tomorrow = DaySeed::from_ymd(2024, 5, 2);
        let next_day = RoundState::restore(Some(state), tomorrow);
        assert_eq!(next_day, RoundState::new(tomorrow));
    }

    #[test]
    fn restore_discards_tampered_records() {
        let seed = DaySeed::from_ymd(2024, 5, 1);
        let mut state = RoundState::new(seed);
        state.round = Round::new(3).unwrap();
        assert!(!state.is_consistent());
        assert_eq!(RoundState::restore(Some(state), seed), RoundState::new(seed));
    }

    #[test]
    fn serializes_with_legacy_field_names() {
        let answer = answer();
        let mut state = RoundState::new(answer.seed);
        state.submit_guess(wrong(), &answer).unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["date"], 20_240_501);
        assert_eq!(json["round"], 1);
        assert_eq!(json["guesses"][0]["correct"]["manufacturer"], false);
        assert!(json.get("finalScore").is_none());

        state.advance().unwrap();
        for _ in 2..=5 {
            state.submit_guess(wrong(), &answer).unwrap();
            state.advance().unwrap();
        }
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["finalScore"], 0);
        assert_eq!(json["completed"], true);
    }
}
