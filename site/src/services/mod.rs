//! Browser integrations behind the wallet core's capability traits
//!
//! - [`plug`] - Plug extension injected at `window.ic.plug`
//! - [`identity`] - Internet Identity through the `AuthClient` SDK
//! - [`clipboard`] - `navigator.clipboard`

pub mod clipboard;
pub mod identity;
pub mod plug;

pub use clipboard::BrowserClipboard;
pub use identity::InternetIdentityProvider;
pub use plug::PlugProvider;

use wasm_bindgen::JsValue;

/// Best-effort readable message from a rejected promise
pub(crate) fn js_error_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
