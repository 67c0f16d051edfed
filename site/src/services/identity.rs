//! Internet Identity bindings
//!
//! The `AuthClient` SDK is loaded lazily as an ES module the first time it is
//! needed. `login` opens the identity provider; when the provider redirects
//! instead of using a popup the promise never settles on this page, and the
//! session is picked up by the resume on the next load.

use async_trait::async_trait;
use lib_wallet::{ConnectOutcome, ConnectRequest, ProviderHandle, ProviderKind, Result, WalletError};
use wasm_bindgen::prelude::*;

use super::js_error_message;

#[wasm_bindgen(inline_js = "
const AUTH_CLIENT_MODULE = 'https://esm.sh/@dfinity/auth-client@2.1.3';
let clientPromise = null;

function authClient() {
    if (!clientPromise) {
        clientPromise = import(AUTH_CLIENT_MODULE)
            .then((module) => module.AuthClient.create())
            .catch((error) => {
                clientPromise = null;
                throw error;
            });
    }
    return clientPromise;
}

export async function iiIsAuthenticated() {
    const client = await authClient();
    return await client.isAuthenticated();
}

export async function iiLogin(identityProvider, maxTimeToLive) {
    const client = await authClient();
    return await new Promise((resolve, reject) => {
        client.login({
            identityProvider,
            maxTimeToLive,
            onSuccess: () => resolve(true),
            onError: (reason) => {
                if (reason === 'UserInterrupt') {
                    resolve(false);
                } else {
                    reject(new Error(reason || 'Internet Identity login failed'));
                }
            },
        });
    });
}

export async function iiPrincipal() {
    const client = await authClient();
    return client.getIdentity().getPrincipal().toText();
}

export async function iiLogout() {
    const client = await authClient();
    await client.logout();
}
")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn iiIsAuthenticated() -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn iiLogin(identity_provider: &str, max_time_to_live: u64) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn iiPrincipal() -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn iiLogout() -> std::result::Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InternetIdentityProvider;

impl InternetIdentityProvider {
    fn failed(err: JsValue) -> WalletError {
        WalletError::call_failed(ProviderKind::RedirectIdentity, js_error_message(&err))
    }
}

#[async_trait(?Send)]
impl ProviderHandle for InternetIdentityProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::RedirectIdentity
    }

    /// Reached over the network; there is nothing to install
    fn is_available(&self) -> bool {
        true
    }

    async fn is_authenticated(&self) -> Result<bool> {
        // First call constructs the client, so failures here are initialization failures
        let authenticated = iiIsAuthenticated().await.map_err(|err| {
            WalletError::init_failed(ProviderKind::RedirectIdentity, js_error_message(&err))
        })?;
        Ok(authenticated.as_bool().unwrap_or(false))
    }

    async fn request_connect(&self, request: &ConnectRequest) -> Result<ConnectOutcome> {
        let approved = iiLogin(&request.identity_provider, request.max_time_to_live_nanos())
            .await
            .map_err(Self::failed)?;

        if approved.as_bool().unwrap_or(false) {
            Ok(ConnectOutcome::Approved)
        } else {
            Ok(ConnectOutcome::Declined)
        }
    }

    async fn request_disconnect(&self) -> Result<()> {
        iiLogout().await.map_err(Self::failed)?;
        Ok(())
    }

    async fn account_id(&self) -> Result<String> {
        let principal = iiPrincipal().await.map_err(Self::failed)?;
        Ok(principal.as_string().unwrap_or_default())
    }
}
