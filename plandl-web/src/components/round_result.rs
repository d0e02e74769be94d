use crate::game::Guess;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub guess: Guess,
    pub finishes_game: bool,
    pub on_next: Callback<()>,
}

fn result_row(label: &str, value: &str, correct: bool) -> Html {
    let class = classes!("result-row", if correct { "correct" } else { "incorrect" });
    html! {
        <div {class}>
            <span class="result-label">{ label.to_string() }</span>
            <span class="result-value">{ value.to_string() }</span>
        </div>
    }
}

/// Per-field verdict for the round just played.
#[function_component(RoundResult)]
pub fn round_result(p: &Props) -> Html {
    let g = &p.guess;
    let on_next = {
        let cb = p.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let label = if p.finishes_game {
        "Finish Game"
    } else {
        "Next Round"
    };
    html! {
        <section id="results-section" class="results-section" aria-live="polite">
            { result_row("Manufacturer", &g.manufacturer, g.correct.manufacturer) }
            { result_row("Model", &g.model, g.correct.model) }
            { result_row("Version", &g.version, g.correct.version) }
            <button id="next-round" class="btn" onclick={on_next}>{ label }</button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Correctness, Round};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn guess(all: bool) -> Guess {
        Guess {
            round: Round::FIRST,
            manufacturer: "Cessna".into(),
            model: "150".into(),
            version: "Standard".into(),
            correct: Correctness {
                manufacturer: true,
                model: all,
                version: all,
            },
        }
    }

    #[test]
    fn marks_rows_and_labels_button() {
        let props = Props {
            guess: guess(false),
            finishes_game: false,
            on_next: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<RoundResult>::with_props(props).render());
        assert_eq!(html.matches("result-row correct").count(), 1);
        assert_eq!(html.matches("result-row incorrect").count(), 2);
        assert!(html.contains("Next Round"));

        let props = Props {
            guess: guess(true),
            finishes_game: true,
            on_next: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<RoundResult>::with_props(props).render());
        assert!(html.contains("Finish Game"));
    }
}
