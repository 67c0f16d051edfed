//! # Connection Controller
//!
//! Owns the single [`ConnectionState`] of a widget instance and is the only
//! thing that mutates it (together with the session resume in
//! [`crate::session`]).
//!
//! ## Concurrency
//!
//! Everything runs on one thread. The state lives in a `RefCell` that is never
//! borrowed across an `.await`. Overlapping calls are serialized by the state
//! machine alone: `connect` only starts from `Disconnected`, so a click while
//! a connect is pending is ignored rather than queued.
//!
//! ## Failure Policy
//!
//! Provider failures never escape. `connect` reverts to `Disconnected` and
//! reports a [`ConnectFailure`]; `disconnect` always clears local state even
//! when the provider logout fails.

use std::cell::RefCell;
use std::rc::Rc;

use crate::clipboard::{Clipboard, NoClipboard};
use crate::config::WalletConfig;
use crate::detector::Detector;
use crate::error::{ConnectFailure, Result, WalletError};
use crate::notify::{LogSink, Notification, NotificationSink, WalletEvent};
use crate::provider::{ConnectOutcome, ProviderHandle, ProviderSet};
use crate::state::{AccountId, ConnectionResult, ConnectionSnapshot, ConnectionState, ProviderKind};

type SnapshotListener = Rc<dyn Fn(&ConnectionSnapshot)>;

pub struct ConnectionController {
    config: WalletConfig,
    providers: ProviderSet,
    detector: Detector,
    notifier: Rc<dyn NotificationSink>,
    clipboard: Rc<dyn Clipboard>,
    state: RefCell<ConnectionState>,
    listeners: RefCell<Vec<SnapshotListener>>,
}

pub struct ControllerBuilder {
    config: WalletConfig,
    providers: ProviderSet,
    detector: Option<Detector>,
    notifier: Option<Rc<dyn NotificationSink>>,
    clipboard: Option<Rc<dyn Clipboard>>,
}

impl ControllerBuilder {
    pub fn provider(mut self, handle: Rc<dyn ProviderHandle>) -> Self {
        self.providers.insert(handle);
        self
    }

    /// Replace the availability probe (defaults to asking each provider)
    pub fn detector(mut self, probe: impl Fn(ProviderKind) -> bool + 'static) -> Self {
        self.detector = Some(Detector::new(probe));
        self
    }

    pub fn notifier(mut self, sink: Rc<dyn NotificationSink>) -> Self {
        self.notifier = Some(sink);
        self
    }

    pub fn clipboard(mut self, clipboard: Rc<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn build(self) -> ConnectionController {
        let detector = self
            .detector
            .unwrap_or_else(|| Detector::from_providers(&self.providers));

        ConnectionController {
            config: self.config,
            providers: self.providers,
            detector,
            notifier: self.notifier.unwrap_or_else(|| Rc::new(LogSink)),
            clipboard: self.clipboard.unwrap_or_else(|| Rc::new(NoClipboard)),
            state: RefCell::new(ConnectionState::Uninitialized),
            listeners: RefCell::new(Vec::new()),
        }
    }
}

impl ConnectionController {
    pub fn builder(config: WalletConfig) -> ControllerBuilder {
        ControllerBuilder {
            config,
            providers: ProviderSet::new(),
            detector: None,
            notifier: None,
            clipboard: None,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    pub fn snapshot(&self) -> ConnectionSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn is_available(&self, kind: ProviderKind) -> bool {
        self.detector.is_available(kind)
    }

    /// Call `listener` with every snapshot published from now on.
    ///
    /// May be called from inside a listener; the new listener sees the next
    /// publish, not the current one.
    pub fn subscribe(&self, listener: impl Fn(&ConnectionSnapshot) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Connect with the given provider.
    ///
    /// Ignored (`AlreadyActive`) unless the state is `Disconnected`. A
    /// redirect login may never resolve here; the next page load resumes it.
    pub async fn connect(&self, kind: ProviderKind) -> ConnectionResult {
        let current = self.state.borrow().status();
        if !self.transition(ConnectionState::Connecting) {
            log::debug!("[WALLET] Ignoring connect({}) while {}", kind, current);
            return ConnectionResult::failed(ConnectFailure::AlreadyActive);
        }
        self.emit(Notification::new(WalletEvent::Connecting(kind)));

        match self.try_connect(kind).await {
            Ok(account_id) => self.finish_connect(kind, account_id),
            Err(err) => {
                let failure = ConnectFailure::from(&err);
                self.transition(ConnectionState::Disconnected);

                let notification = match failure {
                    ConnectFailure::ProviderUnavailable => {
                        log::warn!("[WALLET] {}", err);
                        let notification = Notification::new(WalletEvent::ProviderMissing(kind));
                        match self.config.install_url(kind) {
                            Some(url) => notification.with_link(url),
                            None => notification,
                        }
                    }
                    ConnectFailure::UserCancelled => {
                        log::info!("[WALLET] {} connection declined", kind);
                        Notification::new(WalletEvent::Cancelled(kind))
                    }
                    _ => {
                        log::error!("[WALLET] Error connecting to {}: {}", kind, err);
                        Notification::new(WalletEvent::ConnectFailed(kind))
                    }
                };
                self.emit(notification);
                ConnectionResult::failed(failure)
            }
        }
    }

    fn finish_connect(&self, kind: ProviderKind, account_id: AccountId) -> ConnectionResult {
        let result = ConnectionResult::connected(&account_id);
        let next = ConnectionState::Connected {
            account_id,
            provider: kind,
        };
        if !self.transition(next) {
            log::error!(
                "[WALLET] {} approved but state moved to {} meanwhile",
                kind,
                self.state.borrow().status()
            );
            self.emit(Notification::new(WalletEvent::ConnectFailed(kind)));
            return ConnectionResult::failed(ConnectFailure::ConnectionFailed);
        }

        log::info!("[WALLET] Connected via {}: {}", kind, result.account_id.as_deref().unwrap_or_default());
        self.emit(Notification::new(WalletEvent::Connected(kind)));
        result
    }

    async fn try_connect(&self, kind: ProviderKind) -> Result<AccountId> {
        if !self.detector.is_available(kind) {
            return Err(WalletError::ProviderUnavailable(kind));
        }
        let provider = self
            .providers
            .get(kind)
            .ok_or(WalletError::ProviderUnavailable(kind))?;

        let request = self.config.connect_request();
        match provider.request_connect(&request).await? {
            ConnectOutcome::Approved => fetch_account_id(&*provider).await,
            ConnectOutcome::Declined => Err(WalletError::UserCancelled),
        }
    }

    /// Disconnect the active session. Returns false (and does nothing) unless
    /// connected; local state is cleared even if the provider logout fails.
    pub async fn disconnect(&self) -> bool {
        let provider = self.state.borrow().provider();
        let Some(kind) = provider else {
            log::debug!("[WALLET] Ignoring disconnect while {}", self.state.borrow().status());
            return false;
        };

        // Clear first: a second click during the logout call finds nothing to do
        self.transition(ConnectionState::Disconnected);

        if let Some(handle) = self.providers.get(kind) {
            if let Err(err) = handle.request_disconnect().await {
                log::warn!("[WALLET] Error disconnecting from {}: {}", kind, err);
            }
        }

        self.emit(Notification::new(WalletEvent::Disconnected));
        true
    }

    /// Copy the connected account id to the clipboard. No-op (false) unless connected.
    pub async fn copy_account_id(&self) -> bool {
        let account_id = self.state.borrow().account_id().cloned();
        let Some(account_id) = account_id else {
            return false;
        };

        match self.clipboard.write_text(account_id.as_str()).await {
            Ok(()) => {
                self.emit(Notification::new(WalletEvent::AccountCopied));
                true
            }
            Err(err) => {
                log::warn!("[WALLET] {}", err);
                self.emit(Notification::new(WalletEvent::CopyFailed));
                false
            }
        }
    }

    pub(crate) fn providers(&self) -> &ProviderSet {
        &self.providers
    }

    pub(crate) fn detector(&self) -> &Detector {
        &self.detector
    }

    /// Move to `next` if the state machine allows it and publish the snapshot
    pub(crate) fn transition(&self, next: ConnectionState) -> bool {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            if !state.can_transition_to(&next) {
                return false;
            }
            log::debug!("[WALLET] {} -> {}", state.status(), next.status());
            *state = next;
            state.snapshot()
        };

        // Listeners may subscribe while being called
        let listeners: Vec<SnapshotListener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
        true
    }

    fn emit(&self, notification: Notification) {
        self.notifier.notify(notification);
    }
}

pub(crate) async fn fetch_account_id(provider: &dyn ProviderHandle) -> Result<AccountId> {
    let raw = provider.account_id().await?;
    AccountId::parse(raw)
        .ok_or_else(|| WalletError::call_failed(provider.kind(), "provider returned an empty account id"))
}
