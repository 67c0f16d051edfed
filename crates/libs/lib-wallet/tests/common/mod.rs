//! Test doubles for the wallet connection core

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use lib_wallet::{
    Clipboard, ConnectOutcome, ConnectRequest, ConnectionController, ConnectionSnapshot, Notification,
    NotificationKind, NotificationSink, ProviderHandle, ProviderKind, Result, WalletConfig, WalletError,
};

/// Scripted answer to `request_connect`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectScript {
    Approve,
    Decline,
    Fail,
}

pub struct MockProvider {
    kind: ProviderKind,
    pub available: Cell<bool>,
    pub authenticated: Cell<bool>,
    pub init_fails: Cell<bool>,
    pub connect: Cell<ConnectScript>,
    pub account: RefCell<String>,
    pub account_fails: Cell<bool>,
    pub disconnect_fails: Cell<bool>,
    pending: RefCell<Option<oneshot::Receiver<ConnectOutcome>>>,
    pub calls: RefCell<Vec<&'static str>>,
    pub last_request: RefCell<Option<ConnectRequest>>,
}

impl MockProvider {
    pub fn new(kind: ProviderKind) -> Rc<Self> {
        Rc::new(Self {
            kind,
            available: Cell::new(true),
            authenticated: Cell::new(false),
            init_fails: Cell::new(false),
            connect: Cell::new(ConnectScript::Approve),
            account: RefCell::new("abc-123".to_string()),
            account_fails: Cell::new(false),
            disconnect_fails: Cell::new(false),
            pending: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
            last_request: RefCell::new(None),
        })
    }

    pub fn plug() -> Rc<Self> {
        Self::new(ProviderKind::InjectedExtension)
    }

    pub fn identity() -> Rc<Self> {
        Self::new(ProviderKind::RedirectIdentity)
    }

    pub fn with_account(self: Rc<Self>, account: &str) -> Rc<Self> {
        self.set_account(account);
        self
    }

    pub fn set_account(&self, account: &str) {
        *self.account.borrow_mut() = account.to_string();
    }

    /// Make the next `request_connect` wait until the returned sender fires
    pub fn hold_connect(&self) -> oneshot::Sender<ConnectOutcome> {
        let (tx, rx) = oneshot::channel();
        *self.pending.borrow_mut() = Some(rx);
        tx
    }

    pub fn called(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == name).count()
    }

    fn record(&self, name: &'static str) {
        self.calls.borrow_mut().push(name);
    }
}

#[async_trait(?Send)]
impl ProviderHandle for MockProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn is_available(&self) -> bool {
        self.available.get()
    }

    async fn is_authenticated(&self) -> Result<bool> {
        self.record("is_authenticated");
        if self.init_fails.get() {
            return Err(WalletError::init_failed(self.kind, "client construction failed"));
        }
        Ok(self.authenticated.get())
    }

    async fn request_connect(&self, request: &ConnectRequest) -> Result<ConnectOutcome> {
        self.record("request_connect");
        *self.last_request.borrow_mut() = Some(request.clone());

        let pending = self.pending.borrow_mut().take();
        if let Some(rx) = pending {
            return rx
                .await
                .map_err(|_| WalletError::call_failed(self.kind, "connect abandoned"));
        }

        match self.connect.get() {
            ConnectScript::Approve => {
                self.authenticated.set(true);
                Ok(ConnectOutcome::Approved)
            }
            ConnectScript::Decline => Ok(ConnectOutcome::Declined),
            ConnectScript::Fail => Err(WalletError::call_failed(self.kind, "request rejected")),
        }
    }

    async fn request_disconnect(&self) -> Result<()> {
        self.record("request_disconnect");
        self.authenticated.set(false);
        if self.disconnect_fails.get() {
            return Err(WalletError::call_failed(self.kind, "logout failed"));
        }
        Ok(())
    }

    async fn account_id(&self) -> Result<String> {
        self.record("account_id");
        if self.account_fails.get() {
            return Err(WalletError::call_failed(self.kind, "getPrincipal rejected"));
        }
        Ok(self.account.borrow().clone())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub notifications: RefCell<Vec<Notification>>,
}

impl RecordingSink {
    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.notifications.borrow().iter().map(|n| n.kind).collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.notifications.borrow_mut().clear();
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: RefCell<Vec<String>>,
    pub fails: Cell<bool>,
}

#[async_trait(?Send)]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        self.writes.borrow_mut().push(text.to_string());
        if self.fails.get() {
            return Err(WalletError::Clipboard("permission denied".to_string()));
        }
        Ok(())
    }
}

/// Controller wired to mocks, plus handles to inspect them
pub struct Harness {
    pub controller: ConnectionController,
    pub plug: Rc<MockProvider>,
    pub identity: Rc<MockProvider>,
    pub sink: Rc<RecordingSink>,
    pub clipboard: Rc<RecordingClipboard>,
    pub published: Rc<RefCell<Vec<ConnectionSnapshot>>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_providers(MockProvider::plug(), MockProvider::identity())
    }

    pub fn with_providers(plug: Rc<MockProvider>, identity: Rc<MockProvider>) -> Self {
        let sink = Rc::new(RecordingSink::default());
        let clipboard = Rc::new(RecordingClipboard::default());
        let controller = ConnectionController::builder(WalletConfig::default())
            .provider(plug.clone())
            .provider(identity.clone())
            .notifier(sink.clone())
            .clipboard(clipboard.clone())
            .build();

        let published = Rc::new(RefCell::new(Vec::new()));
        let recorder = published.clone();
        controller.subscribe(move |snapshot: &ConnectionSnapshot| recorder.borrow_mut().push(snapshot.clone()));

        Self {
            controller,
            plug,
            identity,
            sink,
            clipboard,
            published,
        }
    }

    /// Harness already past startup in `Disconnected`
    pub async fn ready() -> Self {
        let harness = Self::new();
        harness.controller.initialize().await;
        harness.published.borrow_mut().clear();
        harness.sink.clear();
        harness
    }
}

/// account id present iff connected, provider kind present iff connected
pub fn assert_snapshot_invariant(snapshot: &ConnectionSnapshot) {
    let connected = snapshot.is_connected();
    assert_eq!(
        snapshot.account_id.as_deref().is_some_and(|id| !id.is_empty()),
        connected,
        "account id / status mismatch: {:?}",
        snapshot
    );
    assert_eq!(snapshot.provider_kind.is_some(), connected, "provider / status mismatch: {:?}", snapshot);
}
