//! Wallet state management
//!
//! One [`ConnectionController`] per page. Every widget instance (navbar,
//! mobile menu, wallet section) reads the same snapshot signal and sends its
//! clicks to the same controller.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_wallet::{ConnectionController, ConnectionSnapshot, ProviderKind};

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub snapshot: RwSignal<ConnectionSnapshot>,
    controller: StoredValue<Rc<ConnectionController>, LocalStorage>,
}

impl WalletContext {
    pub fn new(controller: Rc<ConnectionController>) -> Self {
        let snapshot = RwSignal::new(controller.snapshot());
        controller.subscribe(move |next: &ConnectionSnapshot| snapshot.set(next.clone()));

        Self {
            snapshot,
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.snapshot.with(|s| s.is_connected())
    }

    pub fn is_busy(&self) -> bool {
        self.snapshot.with(|s| s.is_busy())
    }

    pub fn is_available(&self, kind: ProviderKind) -> bool {
        self.controller.with_value(|c| c.is_available(kind))
    }

    /// Resume a previous session; called once from the app root
    pub fn initialize(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            let snapshot = controller.initialize().await;
            log::info!("[WALLET] Startup finished: {}", snapshot.status);
        });
    }

    pub fn connect(&self, kind: ProviderKind) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            let result = controller.connect(kind).await;
            if let Some(reason) = result.reason {
                log::debug!("[WALLET] connect({}) finished without a session: {:?}", kind, reason);
            }
        });
    }

    pub fn disconnect(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.disconnect().await;
        });
    }

    pub fn copy_account_id(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.copy_account_id().await;
        });
    }
}

pub fn provide_wallet_context(controller: Rc<ConnectionController>) -> WalletContext {
    let context = WalletContext::new(controller);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
