//! Session resume
//!
//! Runs once per page load. A redirect login started on an earlier load
//! finishes here: the identity client reports the session as authenticated
//! and the widget comes up connected without user interaction.
//!
//! Failures degrade to the next provider and finally to `Disconnected`; they
//! are logged, never shown.

use crate::controller::{fetch_account_id, ConnectionController};
use crate::error::Result;
use crate::state::{AccountId, ConnectionSnapshot, ConnectionState, ProviderKind};

/// Redirect sessions win over the extension
const RESUME_ORDER: [ProviderKind; 2] = [ProviderKind::RedirectIdentity, ProviderKind::InjectedExtension];

impl ConnectionController {
    /// Resume a prior session. Only the first call does anything; later calls
    /// return the current snapshot.
    pub async fn initialize(&self) -> ConnectionSnapshot {
        if !self.transition(ConnectionState::Initializing) {
            log::debug!("[SESSION] Already initialized ({})", self.state().status());
            return self.snapshot();
        }

        let next = match self.resume_session().await {
            Some((account_id, provider)) => {
                log::info!("[SESSION] Resumed {} session: {}", provider, account_id);
                ConnectionState::Connected { account_id, provider }
            }
            None => ConnectionState::Disconnected,
        };
        self.transition(next);
        self.snapshot()
    }

    async fn resume_session(&self) -> Option<(AccountId, ProviderKind)> {
        for kind in RESUME_ORDER {
            match self.resume_with(kind).await {
                Ok(Some(account_id)) => return Some((account_id, kind)),
                Ok(None) => log::debug!("[SESSION] No {} session", kind),
                Err(err) => log::warn!("[SESSION] {}", err),
            }
        }
        None
    }

    async fn resume_with(&self, kind: ProviderKind) -> Result<Option<AccountId>> {
        let Some(provider) = self.providers().get(kind) else {
            return Ok(None);
        };

        // The identity client is constructed on demand; only the extension needs a probe
        if kind == ProviderKind::InjectedExtension && !self.detector().is_available(kind) {
            return Ok(None);
        }

        if !provider.is_authenticated().await? {
            return Ok(None);
        }
        fetch_account_id(&*provider).await.map(Some)
    }
}
