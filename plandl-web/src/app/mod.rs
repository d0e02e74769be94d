#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

pub mod bootstrap;
#[cfg(target_arch = "wasm32")]
pub mod handlers;
pub mod state;
pub mod transitions;
pub mod view;

pub use view::{GameScreen, GameScreenProps};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);
    bootstrap::use_countdown(&app_state);

    html! {
        <GameScreen
            session={(*app_state.session).clone()}
            catalog={(*app_state.catalog).clone()}
            load_error={(*app_state.load_error).clone()}
            draft={(*app_state.draft).clone()}
            countdown={(*app_state.countdown).clone()}
            share_status={(*app_state.share_status).clone()}
            on_manufacturer={handlers::build_manufacturer(&app_state)}
            on_model={handlers::build_model(&app_state)}
            on_version={handlers::build_version(&app_state)}
            on_submit={handlers::build_submit(&app_state)}
            on_next={handlers::build_next(&app_state)}
            on_share={handlers::build_share(&app_state)}
        />
    }
}
