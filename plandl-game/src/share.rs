//! Plain-text result summary for clipboard and native share.
use std::fmt::Write;

use crate::constants::{MAX_ROUNDS, SHARE_HIT, SHARE_MISS, SHARE_TITLE};
use crate::state::RoundState;

/// Build the share message, one symbol row per guess.
#[must_use]
pub fn share_text(state: &RoundState, page_url: Option<&str>) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{SHARE_TITLE} {}", state.seed);
    let _ = writeln!(text, "Score: {}", state.display_score());
    let _ = writeln!(text, "Rounds: {}/{MAX_ROUNDS}", state.guesses.len());
    text.push('\n');
    for guess in &state.guesses {
        for hit in guess.correct.fields() {
            text.push_str(if hit { SHARE_HIT } else { SHARE_MISS });
        }
        text.push('\n');
    }
    if let Some(url) = page_url.filter(|u| !u.is_empty()) {
        let _ = write!(text, "\nPlay at: {url}");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Aircraft;
    use crate::evaluator::GuessInput;
    use crate::seed::DaySeed;
    use crate::selector::DailyAnswer;

    #[test]
    fn grid_marks_each_field() {
        let answer = DailyAnswer {
            seed: DaySeed::from_ymd(2024, 1, 15),
            index: 0,
            aircraft: Aircraft::with_default_image("Cessna", "172", "Skyhawk"),
            offset_x: 0.0,
            offset_y: 0.0,
        };
        let mut state = RoundState::new(answer.seed);
        state
            .submit_guess(GuessInput::new("Cessna", "150", "Standard"), &answer)
            .unwrap();
        state.advance().unwrap();
        state
            .submit_guess(GuessInput::new("Cessna", "172", "Skyhawk"), &answer)
            .unwrap();
        state.advance().unwrap();

        let text = share_text(&state, Some("https://plandl.example/"));
        let expected = "Plandl \u{2708}\u{fe0f} 20240115\n\
                        Score: 400\n\
                        Rounds: 2/5\n\
                        \n\
                        \u{1f7e9}\u{1f7e5}\u{1f7e5}\n\
                        \u{1f7e9}\u{1f7e9}\u{1f7e9}\n\
                        \n\
                        Play at: https://plandl.example/";
        assert_eq!(text, expected);
    }

    #[test]
    fn omits_link_without_url() {
        let state = RoundState::new(DaySeed::from_ymd(2024, 1, 15));
        let text = share_text(&state, None);
        assert!(text.ends_with("Rounds: 0/5\n\n"));
        assert!(!text.contains("Play at"));
    }
}
