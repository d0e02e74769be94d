use crate::game::{Catalog, DailySession, GameEngine, GuessDraft, WebGameStorage};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub engine: UseStateHandle<Option<Rc<GameEngine<WebGameStorage>>>>,
    pub catalog: UseStateHandle<Option<Rc<Catalog>>>,
    pub session: UseStateHandle<Option<DailySession>>,
    pub load_error: UseStateHandle<Option<AttrValue>>,
    pub draft: UseStateHandle<GuessDraft>,
    pub countdown: UseStateHandle<AttrValue>,
    pub share_status: UseStateHandle<Option<AttrValue>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        engine: use_state(|| None::<Rc<GameEngine<WebGameStorage>>>),
        catalog: use_state(|| None::<Rc<Catalog>>),
        session: use_state(|| None::<DailySession>),
        load_error: use_state(|| None::<AttrValue>),
        draft: use_state(GuessDraft::default),
        countdown: use_state(AttrValue::default),
        share_status: use_state(|| None::<AttrValue>),
    }
}
