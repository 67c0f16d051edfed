//! # Provider Handles
//!
//! [`ProviderHandle`] is the capability set every wallet integration exposes
//! to the controller. The site implements it twice over JavaScript bindings
//! (Plug and Internet Identity); tests implement it with in-memory mocks.
//!
//! Futures are `?Send`: browser promises live on the single UI thread.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::state::ProviderKind;

/// Parameters of a connect call. Each provider reads the fields it needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectRequest {
    /// Canister allow-list for the injected extension
    pub whitelist: Vec<String>,
    /// Network endpoint for the injected extension
    pub host: String,
    /// Identity provider URL for the redirect login
    pub identity_provider: String,
    /// Requested redirect session lifetime
    pub max_time_to_live: Duration,
}

impl ConnectRequest {
    /// Session lifetime in nanoseconds, the unit the identity client expects
    pub fn max_time_to_live_nanos(&self) -> u64 {
        u64::try_from(self.max_time_to_live.as_nanos()).unwrap_or(u64::MAX)
    }
}

/// What the user did with the connection prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectOutcome {
    Approved,
    Declined,
}

#[async_trait(?Send)]
pub trait ProviderHandle {
    fn kind(&self) -> ProviderKind;

    /// Probe the environment; never fails, false when the provider is absent
    fn is_available(&self) -> bool;

    /// Whether a session from an earlier page load is still valid
    async fn is_authenticated(&self) -> Result<bool>;

    /// Ask the user to connect. A redirect-based provider may never resolve
    /// because the page navigates away.
    async fn request_connect(&self, request: &ConnectRequest) -> Result<ConnectOutcome>;

    async fn request_disconnect(&self) -> Result<()>;

    /// Raw account identifier of the authenticated session
    async fn account_id(&self) -> Result<String>;
}

/// Registered providers, at most one per kind
#[derive(Clone, Default)]
pub struct ProviderSet {
    handles: Vec<Rc<dyn ProviderHandle>>,
}

impl ProviderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle, replacing any earlier handle of the same kind
    pub fn insert(&mut self, handle: Rc<dyn ProviderHandle>) {
        let kind = handle.kind();
        self.handles.retain(|existing| existing.kind() != kind);
        self.handles.push(handle);
    }

    pub fn get(&self, kind: ProviderKind) -> Option<Rc<dyn ProviderHandle>> {
        self.handles.iter().find(|h| h.kind() == kind).cloned()
    }

    pub fn kinds(&self) -> Vec<ProviderKind> {
        self.handles.iter().map(|h| h.kind()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub(ProviderKind, bool);

    #[async_trait(?Send)]
    impl ProviderHandle for Stub {
        fn kind(&self) -> ProviderKind {
            self.0
        }
        fn is_available(&self) -> bool {
            self.1
        }
        async fn is_authenticated(&self) -> Result<bool> {
            Ok(false)
        }
        async fn request_connect(&self, _request: &ConnectRequest) -> Result<ConnectOutcome> {
            Ok(ConnectOutcome::Declined)
        }
        async fn request_disconnect(&self) -> Result<()> {
            Ok(())
        }
        async fn account_id(&self) -> Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_insert_replaces_same_kind() {
        let mut set = ProviderSet::new();
        assert!(set.is_empty());

        set.insert(Rc::new(Stub(ProviderKind::InjectedExtension, false)));
        set.insert(Rc::new(Stub(ProviderKind::RedirectIdentity, true)));
        set.insert(Rc::new(Stub(ProviderKind::InjectedExtension, true)));

        assert_eq!(set.kinds().len(), 2);
        assert!(set.get(ProviderKind::InjectedExtension).unwrap().is_available());
    }

    #[test]
    fn test_max_time_to_live_nanos() {
        let request = ConnectRequest {
            whitelist: vec![],
            host: String::new(),
            identity_provider: String::new(),
            max_time_to_live: Duration::from_secs(1),
        };
        assert_eq!(request.max_time_to_live_nanos(), 1_000_000_000);
    }
}
