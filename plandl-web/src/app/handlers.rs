use crate::app::state::AppState;
use crate::app::transitions;
use crate::game::{GuessDraft, GuessInput, share_text};
use yew::prelude::*;

fn update_draft(
    state: &AppState,
    apply: fn(&mut GuessDraft, Option<String>),
) -> Callback<Option<String>> {
    let draft_handle = state.draft.clone();
    Callback::from(move |value: Option<String>| {
        let mut draft = (*draft_handle).clone();
        apply(&mut draft, value);
        draft_handle.set(draft);
    })
}

pub fn build_manufacturer(state: &AppState) -> Callback<Option<String>> {
    update_draft(state, GuessDraft::select_manufacturer)
}

pub fn build_model(state: &AppState) -> Callback<Option<String>> {
    update_draft(state, GuessDraft::select_model)
}

pub fn build_version(state: &AppState) -> Callback<Option<String>> {
    update_draft(state, GuessDraft::select_version)
}

pub fn build_submit(state: &AppState) -> Callback<GuessInput> {
    let engine_handle = state.engine.clone();
    let session_handle = state.session.clone();
    Callback::from(move |input: GuessInput| {
        let (Some(engine), Some(held)) = (&*engine_handle, &*session_handle) else {
            return;
        };
        match transitions::submit(engine, held, input) {
            Ok(session) => session_handle.set(Some(session)),
            Err(err) => crate::dom::console_error(&format!("Guess rejected: {err}")),
        }
    })
}

pub fn build_next(state: &AppState) -> Callback<()> {
    let engine_handle = state.engine.clone();
    let session_handle = state.session.clone();
    let draft_handle = state.draft.clone();
    Callback::from(move |()| {
        let (Some(engine), Some(held)) = (&*engine_handle, &*session_handle) else {
            return;
        };
        match transitions::advance(engine, held) {
            Ok(session) => {
                draft_handle.set(GuessDraft::default());
                session_handle.set(Some(session));
            }
            Err(err) => crate::dom::console_error(&format!("Cannot advance: {err}")),
        }
    })
}

pub fn build_share(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let status_handle = state.share_status.clone();
    Callback::from(move |()| {
        let Some(session) = (*session_handle).as_ref() else {
            return;
        };
        let text = share_text(session.state(), crate::dom::page_url().as_deref());
        let status_handle = status_handle.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let message = match crate::share::deliver(&text).await {
                Ok(channel) => channel.status_message(),
                Err(reason) => {
                    crate::dom::console_error(&format!("Share failed: {reason}"));
                    "Unable to share results"
                }
            };
            status_handle.set(Some(AttrValue::from(message)));
        });
    })
}
