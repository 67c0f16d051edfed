use leptos::prelude::*;

use crate::utils::constants::{GITHUB_URL, NAV_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div>
                    <span class="nav-logo">"Inda"<span class="text-accent">"social"</span></span>
                    <p class="footer-text">"Decentralized social on the Internet Computer."</p>
                </div>
                <div class="footer-links">
                    {NAV_LINKS
                        .iter()
                        .map(|&(name, href)| view! { <a href=href>{name}</a> })
                        .collect_view()}
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">"GitHub"</a>
                </div>
            </div>
        </footer>
    }
}
