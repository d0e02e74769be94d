use crate::game::Round;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct Props {
    pub round: Round,
    pub score: u32,
}

#[function_component(GameInfo)]
pub fn game_info(p: &Props) -> Html {
    html! {
        <section class="game-info" aria-label="Round status">
            <span class="info-round">{ format!("Round {}/5", p.round) }</span>
            <span class="info-multiplier">{ format!("Multiplier x{}", p.round.multiplier()) }</span>
            <span class="info-score">{ format!("Score {}", p.score) }</span>
        </section>
    }
}
