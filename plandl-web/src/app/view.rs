use crate::components::{GameInfo, GameOver, GuessForm, PlaneImage, RoundResult};
use crate::game::{Catalog, DailySession, GamePhase, GuessDraft, GuessInput};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Default)]
pub struct GameScreenProps {
    #[prop_or_default]
    pub session: Option<DailySession>,
    #[prop_or_default]
    pub catalog: Option<Rc<Catalog>>,
    #[prop_or_default]
    pub load_error: Option<AttrValue>,
    #[prop_or_default]
    pub draft: GuessDraft,
    #[prop_or_default]
    pub countdown: AttrValue,
    #[prop_or_default]
    pub share_status: Option<AttrValue>,
    #[prop_or_default]
    pub on_manufacturer: Callback<Option<String>>,
    #[prop_or_default]
    pub on_model: Callback<Option<String>>,
    #[prop_or_default]
    pub on_version: Callback<Option<String>>,
    #[prop_or_default]
    pub on_submit: Callback<GuessInput>,
    #[prop_or_default]
    pub on_next: Callback<()>,
    #[prop_or_default]
    pub on_share: Callback<()>,
}

/// Whole game page, switching panels on the session phase.
#[function_component(GameScreen)]
pub fn game_screen(p: &GameScreenProps) -> Html {
    if let Some(message) = p.load_error.clone() {
        return html! {
            <main class="plandl">
                <div id="load-error" class="error-panel" role="alert">{ message }</div>
            </main>
        };
    }
    let (Some(session), Some(catalog)) = (p.session.as_ref(), p.catalog.clone()) else {
        return html! {
            <main class="plandl">
                <p id="loading" class="muted" aria-busy="true">{ "Loading today's plane..." }</p>
            </main>
        };
    };

    let state = session.state();
    let panel = match session.phase() {
        GamePhase::Playing(_) => html! {
            <GuessForm
                {catalog}
                draft={p.draft.clone()}
                on_manufacturer={p.on_manufacturer.clone()}
                on_model={p.on_model.clone()}
                on_version={p.on_version.clone()}
                on_submit={p.on_submit.clone()}
            />
        },
        GamePhase::RoundResolved(round) => match state.last_guess() {
            Some(guess) => html! {
                <RoundResult
                    guess={guess.clone()}
                    finishes_game={guess.is_correct() || round.is_last()}
                    on_next={p.on_next.clone()}
                />
            },
            None => Html::default(),
        },
        GamePhase::Completed => html! {
            <GameOver
                state={state.clone()}
                answer={session.answer().clone()}
                countdown={p.countdown.clone()}
                on_share={p.on_share.clone()}
                share_status={p.share_status.clone()}
            />
        },
    };
    let info = if matches!(session.phase(), GamePhase::Completed) {
        Html::default()
    } else {
        html! { <GameInfo round={state.round} score={state.score} /> }
    };

    html! {
        <main class="plandl">
            <h1 class="title">{ "Plandl" }</h1>
            <PlaneImage frame={session.frame()} />
            { info }
            { panel }
        </main>
    }
}
