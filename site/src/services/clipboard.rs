//! `navigator.clipboard` binding

use async_trait::async_trait;
use lib_wallet::{Clipboard, Result, WalletError};
use wasm_bindgen::prelude::*;

use super::js_error_message;

#[wasm_bindgen(inline_js = "
export async function copyText(text) {
    if (!navigator.clipboard) {
        throw new Error('Clipboard API not available');
    }
    await navigator.clipboard.writeText(text);
}
")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn copyText(text: &str) -> std::result::Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        copyText(text)
            .await
            .map_err(|err| WalletError::Clipboard(js_error_message(&err)))?;
        Ok(())
    }
}
