//! Plug wallet bindings
//!
//! Plug injects its API at `window.ic.plug`. The object may appear after the
//! page loaded (extension installed mid-session), so every call looks it up
//! again instead of caching it.

use async_trait::async_trait;
use lib_wallet::{ConnectOutcome, ConnectRequest, ProviderHandle, ProviderKind, Result, WalletError};
use wasm_bindgen::prelude::*;

use super::js_error_message;

#[wasm_bindgen(inline_js = "
function plug() {
    return (window.ic && window.ic.plug) ? window.ic.plug : null;
}

export function isPlugInstalled() {
    return plug() !== null;
}

export async function plugIsConnected() {
    const adapter = plug();
    if (!adapter) {
        return false;
    }
    return await adapter.isConnected();
}

export async function plugRequestConnect(whitelist, host) {
    const adapter = plug();
    if (!adapter) {
        throw new Error('Plug wallet not found');
    }
    return await adapter.requestConnect({ whitelist, host });
}

export async function plugGetPrincipal() {
    const adapter = plug();
    if (!adapter) {
        throw new Error('Plug wallet not found');
    }
    const principal = await adapter.getPrincipal();
    return principal ? principal.toString() : '';
}

export async function plugDisconnect() {
    const adapter = plug();
    if (adapter) {
        await adapter.disconnect();
    }
}
")]
extern "C" {
    fn isPlugInstalled() -> bool;

    #[wasm_bindgen(catch)]
    async fn plugIsConnected() -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn plugRequestConnect(whitelist: JsValue, host: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn plugGetPrincipal() -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn plugDisconnect() -> std::result::Result<JsValue, JsValue>;
}

/// Probe used by the availability detector
pub fn is_plug_installed() -> bool {
    isPlugInstalled()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlugProvider;

impl PlugProvider {
    fn failed(err: JsValue) -> WalletError {
        WalletError::call_failed(ProviderKind::InjectedExtension, js_error_message(&err))
    }
}

#[async_trait(?Send)]
impl ProviderHandle for PlugProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::InjectedExtension
    }

    fn is_available(&self) -> bool {
        is_plug_installed()
    }

    async fn is_authenticated(&self) -> Result<bool> {
        let connected = plugIsConnected().await.map_err(Self::failed)?;
        Ok(connected.as_bool().unwrap_or(false))
    }

    async fn request_connect(&self, request: &ConnectRequest) -> Result<ConnectOutcome> {
        let whitelist = serde_wasm_bindgen::to_value(&request.whitelist)
            .map_err(|e| WalletError::call_failed(ProviderKind::InjectedExtension, e.to_string()))?;

        let approved = plugRequestConnect(whitelist, &request.host)
            .await
            .map_err(Self::failed)?;

        if approved.as_bool().unwrap_or(false) {
            Ok(ConnectOutcome::Approved)
        } else {
            Ok(ConnectOutcome::Declined)
        }
    }

    async fn request_disconnect(&self) -> Result<()> {
        plugDisconnect().await.map_err(Self::failed)?;
        Ok(())
    }

    async fn account_id(&self) -> Result<String> {
        let principal = plugGetPrincipal().await.map_err(Self::failed)?;
        Ok(principal.as_string().unwrap_or_default())
    }
}
