//! Connect Wallet widget
//!
//! Button plus a small menu. Disconnected, the menu picks a provider;
//! connected, it offers copy and disconnect. Several instances can be on the
//! page at once and all of them render the same controller.

use leptos::ev;
use leptos::prelude::*;
use lib_wallet::ProviderKind;

use crate::state::wallet::use_wallet_context;
use crate::utils::format::widget_label;

#[component]
pub fn ConnectWallet(#[prop(optional)] full_width: bool) -> impl IntoView {
    let wallet = use_wallet_context();
    let (menu_open, set_menu_open) = signal(false);

    let toggle_menu = move |_: ev::MouseEvent| {
        if wallet.is_busy() {
            return;
        }
        set_menu_open.update(|open| *open = !*open);
    };

    let button_class = move || {
        let mut class = String::from("btn wallet-button");
        if wallet.snapshot.with(|s| s.is_connected()) {
            class.push_str(" wallet-button-connected");
        }
        if full_width {
            class.push_str(" btn-block");
        }
        class
    };

    view! {
        <div class="wallet-widget">
            <button
                class=button_class
                disabled=move || wallet.snapshot.with(|s| s.is_busy())
                on:click=toggle_menu
            >
                <Show when=move || wallet.snapshot.with(|s| s.is_busy())>
                    <span class="spinner"></span>
                </Show>
                {move || wallet.snapshot.with(widget_label)}
            </button>

            <Show when=move || menu_open.get()>
                {move || {
                    if wallet.is_connected() {
                        view! { <AccountMenu on_close=set_menu_open/> }.into_any()
                    } else {
                        view! { <ProviderPicker on_close=set_menu_open/> }.into_any()
                    }
                }}
            </Show>
        </div>
    }
}

#[component]
fn AccountMenu(on_close: WriteSignal<bool>) -> impl IntoView {
    let wallet = use_wallet_context();

    let provider_name = move || {
        wallet
            .snapshot
            .with(|s| s.provider_kind.map(|kind| kind.name()).unwrap_or_default())
    };

    view! {
        <div class="wallet-menu" role="menu">
            <p class="wallet-menu-label">{provider_name}</p>
            <button
                class="wallet-menu-item"
                on:click=move |_| {
                    on_close.set(false);
                    wallet.copy_account_id();
                }
            >
                "Copy address"
            </button>
            <button
                class="wallet-menu-item wallet-menu-danger"
                on:click=move |_| {
                    on_close.set(false);
                    wallet.disconnect();
                }
            >
                "Disconnect"
            </button>
        </div>
    }
}

/// Provider list. Availability is probed each time the picker opens, so an
/// extension installed after page load shows up without a reload.
#[component]
fn ProviderPicker(on_close: WriteSignal<bool>) -> impl IntoView {
    let wallet = use_wallet_context();

    let entries = ProviderKind::ALL
        .into_iter()
        .map(|kind| {
            // Still clickable when missing: the click produces the install prompt
            let hint = if wallet.is_available(kind) { "" } else { "Not installed" };
            view! {
                <button
                    class="wallet-menu-item"
                    on:click=move |_| {
                        on_close.set(false);
                        wallet.connect(kind);
                    }
                >
                    <span>{kind.name()}</span>
                    <span class="wallet-menu-hint">{hint}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="wallet-menu" role="menu">
            {entries}
            <button class="wallet-menu-item" disabled=true>
                <span>"Stoic"</span>
                <span class="wallet-menu-hint">"Coming soon"</span>
            </button>
        </div>
    }
}
