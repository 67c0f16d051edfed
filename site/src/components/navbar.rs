//! Navigation Bar Component
//!
//! Transparent over the hero, solid once the page scrolls past
//! [`NAV_SCROLL_THRESHOLD_PX`]. Below the desktop breakpoint the links move
//! into a slide-in menu.

use leptos::ev;
use leptos::prelude::*;

use super::ConnectWallet;
use crate::utils::constants::{GITHUB_URL, NAV_LINKS, NAV_SCROLL_THRESHOLD_PX};

#[component]
pub fn Navbar() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(scroll_y > NAV_SCROLL_THRESHOLD_PX);
    });
    on_cleanup(move || handle.remove());

    let close_menu = move |_: ev::MouseEvent| set_menu_open.set(false);

    view! {
        <nav class=move || if scrolled.get() { "navbar navbar-scrolled" } else { "navbar" }>
            <div class="navbar-inner">
                <a href="#" class="nav-logo">
                    "Inda"<span class="text-accent">"social"</span>
                </a>

                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|&(name, href)| view! { <a class="nav-link" href=href>{name}</a> })
                        .collect_view()}
                    <a class="nav-link" href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                </div>

                <div class="nav-wallet">
                    <ConnectWallet/>
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <div class=move || if menu_open.get() { "mobile-menu mobile-menu-open" } else { "mobile-menu" }>
                {NAV_LINKS
                    .iter()
                    .map(|&(name, href)| {
                        view! { <a class="mobile-link" href=href on:click=close_menu>{name}</a> }
                    })
                    .collect_view()}
                <a class="mobile-link" href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                    "GitHub"
                </a>
                <div class="mobile-wallet">
                    <ConnectWallet full_width=true/>
                </div>
            </div>
        </nav>
    }
}
