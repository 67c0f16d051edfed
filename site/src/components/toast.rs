//! Toast surface for wallet notifications

use leptos::prelude::*;
use lib_wallet::WalletEvent;

use crate::state::toast::{use_toast_context, Toast};

#[component]
pub fn Toaster() -> impl IntoView {
    let context = use_toast_context();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || context.toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let context = use_toast_context();
    let id = toast.id;
    let notification = toast.notification;

    let link_label = match notification.event {
        WalletEvent::ProviderMissing(kind) => format!("Install {} Wallet", kind.name()),
        _ => "Learn more".to_string(),
    };
    let link = notification.link.map(|href| {
        view! {
            <a class="toast-link" href=href target="_blank" rel="noopener noreferrer">
                {link_label}
            </a>
        }
    });

    view! {
        <div class=format!("toast toast-{}", notification.kind.as_str()) role="status">
            <div class="toast-body">
                <p class="toast-title">{notification.title}</p>
                <p class="toast-description">{notification.description}</p>
                {link}
            </div>
            <button class="toast-close" aria-label="Close" on:click=move |_| context.dismiss(id)>
                "×"
            </button>
        </div>
    }
}
