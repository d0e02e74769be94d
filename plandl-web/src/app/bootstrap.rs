#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

use crate::game::{DailySession, DaySeed, GameEngine, GameStorage};

pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load game data. Please refresh the page.";

/// Open today's session on a freshly built engine.
///
/// # Errors
///
/// Returns a printable reason if the catalog is empty or storage is unreadable.
pub fn open_today<S: GameStorage>(
    engine: &GameEngine<S>,
    today: DaySeed,
) -> Result<DailySession, String> {
    let session = engine.start_day(today).map_err(|e| e.to_string())?;
    log::info!(
        "puzzle {today} ready: round {}, phase {:?}",
        session.state().round,
        session.phase()
    );
    Ok(session)
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let engine_handle = app_state.engine.clone();
    let catalog_handle = app_state.catalog.clone();
    let session_handle = app_state.session.clone();
    let error_handle = app_state.load_error.clone();

    use_effect_with((), move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            let started = crate::game::fetch_catalog(crate::game::CATALOG_URL)
                .await
                .map_err(|e| e.to_string())
                .and_then(|catalog| {
                    let engine = crate::game::create_web_game_engine(catalog);
                    let session = open_today(&engine, crate::dom::today_seed())?;
                    Ok((engine, session))
                });
            match started {
                Ok((engine, session)) => {
                    catalog_handle.set(Some(std::rc::Rc::new(engine.catalog().clone())));
                    engine_handle.set(Some(std::rc::Rc::new(engine)));
                    session_handle.set(Some(session));
                }
                Err(reason) => {
                    crate::dom::console_error(&format!("Failed to load planes: {reason}"));
                    error_handle.set(Some(AttrValue::from(LOAD_FAILURE_MESSAGE)));
                }
            }
        });
        || {}
    });
}

/// Refresh the next-puzzle countdown every second.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_countdown(app_state: &AppState) {
    let countdown = app_state.countdown.clone();
    use_effect_with((), move |_| {
        let refresh = move || {
            let label = crate::game::countdown_label(crate::dom::local_time());
            countdown.set(AttrValue::from(label));
        };
        refresh();
        let interval = crate::dom::Interval::start(1000, refresh).ok();
        move || drop(interval)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Aircraft, Catalog, GamePhase, MemoryStorage, Round};

    #[test]
    fn opens_fresh_session_from_catalog() {
        let catalog = Catalog::from_aircraft(vec![Aircraft::with_default_image(
            "Piper", "J-3", "Cub",
        )]);
        let engine = GameEngine::new(catalog, MemoryStorage::new());
        let session = open_today(&engine, DaySeed::from_ymd(2024, 7, 4)).unwrap();
        assert_eq!(session.phase(), GamePhase::Playing(Round::FIRST));
        assert_eq!(session.answer().aircraft.model, "J-3");
    }

    #[test]
    fn empty_catalog_reports_reason() {
        let engine = GameEngine::new(Catalog::empty(), MemoryStorage::new());
        let err = open_today(&engine, DaySeed::from_ymd(2024, 7, 4)).unwrap_err();
        assert!(err.contains("no aircraft"));
    }
}
