use crate::game::{Catalog, GuessDraft, GuessInput};
use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub draft: GuessDraft,
    pub on_manufacturer: Callback<Option<String>>,
    pub on_model: Callback<Option<String>>,
    pub on_version: Callback<Option<String>>,
    pub on_submit: Callback<GuessInput>,
}

fn select_value(e: &Event) -> Option<String> {
    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
    (!value.is_empty()).then_some(value)
}

fn render_options(placeholder: &str, options: &[String], selected: Option<&str>) -> Html {
    html! {
        <>
            <option value="" selected={selected.is_none()}>{ placeholder.to_string() }</option>
            { for options.iter().map(|opt| html! {
                <option value={opt.clone()} selected={selected == Some(opt.as_str())}>{ opt.clone() }</option>
            }) }
        </>
    }
}

/// Cascading manufacturer / model / version dropdowns.
#[function_component(GuessForm)]
pub fn guess_form(p: &Props) -> Html {
    let manufacturers = p.catalog.manufacturers();
    let models = p.draft.model_options(&p.catalog);
    let versions = p.draft.version_options(&p.catalog);
    let ready = p.draft.complete();

    let on_manufacturer = {
        let cb = p.on_manufacturer.clone();
        Callback::from(move |e: Event| cb.emit(select_value(&e)))
    };
    let on_model = {
        let cb = p.on_model.clone();
        Callback::from(move |e: Event| cb.emit(select_value(&e)))
    };
    let on_version = {
        let cb = p.on_version.clone();
        Callback::from(move |e: Event| cb.emit(select_value(&e)))
    };
    let on_submit = {
        let cb = p.on_submit.clone();
        let ready = ready.clone();
        Callback::from(move |_| {
            if let Some(guess) = ready.clone() {
                cb.emit(guess);
            }
        })
    };

    html! {
        <section id="input-section" class="input-section" aria-label="Your guess">
            <select id="manufacturer" aria-label="Manufacturer" onchange={on_manufacturer}>
                { render_options("Select manufacturer...", &manufacturers, p.draft.manufacturer.as_deref()) }
            </select>
            <select id="model" aria-label="Model" disabled={p.draft.manufacturer.is_none()} onchange={on_model}>
                { render_options("Select model...", &models, p.draft.model.as_deref()) }
            </select>
            <select id="version" aria-label="Version" disabled={p.draft.model.is_none()} onchange={on_version}>
                { render_options("Select version...", &versions, p.draft.version.as_deref()) }
            </select>
            <button id="submit-guess" class="btn" disabled={ready.is_none()} onclick={on_submit}>
                { "Submit Guess" }
            </button>
        </section>
    }
}
