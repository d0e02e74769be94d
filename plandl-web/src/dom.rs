use chrono::NaiveTime;
use js_sys::Date;
use plandl_game::DaySeed;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Response, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Fetch `url` and return its body as text, rejecting non-2xx responses.
///
/// # Errors
/// Returns an error if the request fails, the status is not OK, or the body cannot be read.
#[allow(clippy::future_not_send)]
pub async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let response = fetch_response(url).await?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "GET {url} returned {}",
            response.status()
        )));
    }
    let body = JsFuture::from(response.text()?).await?;
    body.as_string()
        .ok_or_else(|| JsValue::from_str("response body was not text"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Current page URL, used in the share text.
#[must_use]
pub fn page_url() -> Option<String> {
    window().and_then(|win| win.location().href().ok())
}

/// Seed for the player's local calendar date.
#[must_use]
pub fn today_seed() -> DaySeed {
    let now = Date::new_0();
    DaySeed::from_ymd(now.get_full_year(), now.get_month() + 1, now.get_date())
}

/// Local wall-clock time, to the millisecond.
#[must_use]
pub fn local_time() -> NaiveTime {
    let now = Date::new_0();
    NaiveTime::from_hms_milli_opt(
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds(),
        now.get_milliseconds(),
    )
    .unwrap_or(NaiveTime::MIN)
}

/// A running `setInterval` timer, cleared on drop.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    /// Call `tick` every `period_ms` milliseconds.
    ///
    /// # Errors
    /// Returns an error if no window is available or the timer cannot be scheduled.
    pub fn start(period_ms: i32, tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let closure = Closure::<dyn FnMut()>::new(tick);
        let id = win.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}
