//! Toast queue
//!
//! Wallet notifications land here and are dismissed automatically after
//! [`TOAST_DURATION_MS`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_wallet::Notification;
use uuid::Uuid;

use crate::utils::constants::TOAST_DURATION_MS;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    pub toasts: RwSignal<Vec<Toast>>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn push(&self, notification: Notification) {
        let id = Uuid::new_v4();
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        let context = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            context.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        // The signal is gone once the app unmounts
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toast_context() -> ToastContext {
    let context = ToastContext::new();
    provide_context(context);
    context
}

pub fn use_toast_context() -> ToastContext {
    expect_context::<ToastContext>()
}
