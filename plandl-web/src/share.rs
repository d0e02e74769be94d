use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlTextAreaElement, ShareData};

/// How the share text reached the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareChannel {
    Native,
    Clipboard,
}

impl ShareChannel {
    #[must_use]
    pub const fn status_message(self) -> &'static str {
        match self {
            Self::Native => "Shared!",
            Self::Clipboard => "Results copied to clipboard!",
        }
    }
}

/// Offer `text` to the native share sheet, falling back to the clipboard.
///
/// # Errors
///
/// Returns a message when neither channel works.
#[allow(clippy::future_not_send)]
pub async fn deliver(text: &str) -> Result<ShareChannel, String> {
    if native_share(text).await.is_ok() {
        return Ok(ShareChannel::Native);
    }
    if clipboard_write(text).await.is_ok() {
        return Ok(ShareChannel::Clipboard);
    }
    fallback_copy(text).map(|()| ShareChannel::Clipboard)
}

#[allow(clippy::future_not_send)]
async fn native_share(text: &str) -> Result<(), JsValue> {
    let win = dom::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let navigator = win.navigator();
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("share"))? {
        return Err(JsValue::from_str("navigator.share unsupported"));
    }
    let data = ShareData::new();
    data.set_text(text);
    JsFuture::from(navigator.share_with_data(&data)).await?;
    Ok(())
}

#[allow(clippy::future_not_send)]
async fn clipboard_write(text: &str) -> Result<(), JsValue> {
    let win = dom::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    JsFuture::from(win.navigator().clipboard().write_text(text)).await?;
    Ok(())
}

fn fallback_copy(text: &str) -> Result<(), String> {
    let Some(document) = dom::document() else {
        return Err("Document unavailable".to_string());
    };
    let textarea = document
        .create_element("textarea")
        .map_err(|_| "Failed to create textarea".to_string())?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| "Failed to cast to textarea".to_string())?;

    textarea.set_value(text);

    if let Ok(style) = js_sys::Reflect::get(&textarea, &"style".into()) {
        let _ = js_sys::Reflect::set(&style, &"position".into(), &"fixed".into());
        let _ = js_sys::Reflect::set(&style, &"opacity".into(), &"0".into());
    }

    let Some(body) = document.body() else {
        return Err("Document body unavailable".to_string());
    };
    body.append_child(&textarea)
        .map_err(|_| "Failed to append textarea".to_string())?;
    textarea.select();
    let copied = js_sys::Reflect::get(&document, &"execCommand".into())
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .and_then(|f| f.call1(&document, &"copy".into()).ok())
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    body.remove_child(&textarea)
        .map_err(|_| "Failed to remove textarea".to_string())?;
    if copied {
        Ok(())
    } else {
        Err("Copy command rejected".to_string())
    }
}
