use crate::game::{DailyAnswer, RoundState};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub state: RoundState,
    pub answer: DailyAnswer,
    pub countdown: AttrValue,
    pub on_share: Callback<()>,
    #[prop_or_default]
    pub share_status: Option<AttrValue>,
}

/// Reveal screen shown once the day's game is over.
#[function_component(GameOver)]
pub fn game_over(p: &Props) -> Html {
    let plane = &p.answer.aircraft;
    let headline = if p.state.won() {
        "You got it!"
    } else {
        "Better luck tomorrow"
    };
    let on_share = {
        let cb = p.on_share.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section id="game-over" class="game-over" aria-live="polite">
            <h2>{ headline }</h2>
            <p class="final-score">{ "Final score: " }<strong id="final-score">{ p.state.display_score().to_string() }</strong></p>
            <dl class="answer">
                <dt>{ "Manufacturer" }</dt><dd id="answer-manufacturer">{ plane.manufacturer.clone() }</dd>
                <dt>{ "Model" }</dt><dd id="answer-model">{ plane.model.clone() }</dd>
                <dt>{ "Version" }</dt><dd id="answer-version">{ plane.version.clone() }</dd>
            </dl>
            if let Some(credit) = plane.attribution.as_deref() {
                <p id="attribution" class="muted">{ format!("Photo: {credit}") }</p>
            }
            <button id="share-results" class="btn" onclick={on_share}>{ "Share Results" }</button>
            if let Some(status) = p.share_status.clone() {
                <p class="share-status" role="status">{ status }</p>
            }
            <p class="next-puzzle">{ "Next plane in " }<span id="countdown">{ p.countdown.clone() }</span></p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Aircraft, DaySeed, GuessInput};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn finished(attribution: Option<&str>) -> Props {
        let mut aircraft = Aircraft::with_default_image("Lockheed", "SR-71", "Blackbird");
        aircraft.attribution = attribution.map(str::to_string);
        let answer = DailyAnswer {
            seed: DaySeed::from_ymd(2024, 9, 1),
            index: 0,
            aircraft,
            offset_x: 50.0,
            offset_y: 50.0,
        };
        let mut state = RoundState::new(answer.seed);
        state
            .submit_guess(GuessInput::new("Lockheed", "SR-71", "Blackbird"), &answer)
            .unwrap();
        state.advance().unwrap();
        Props {
            state,
            answer,
            countdown: "05:04:03".into(),
            on_share: Callback::noop(),
            share_status: None,
        }
    }

    #[test]
    fn reveals_answer_and_score() {
        let html = block_on(
            LocalServerRenderer::<GameOver>::with_props(finished(Some("NASA / Public domain")))
                .render(),
        );
        assert!(html.contains("You got it!"));
        assert!(html.contains("500"));
        assert!(html.contains("Blackbird"));
        assert!(html.contains("Photo: NASA / Public domain"));
        assert!(html.contains("05:04:03"));
    }

    #[test]
    fn hides_missing_attribution() {
        let html = block_on(LocalServerRenderer::<GameOver>::with_props(finished(None)).render());
        assert!(!html.contains("Photo:"));
    }
}
