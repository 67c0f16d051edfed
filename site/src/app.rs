//! Indasocial landing site - Leptos frontend
//!
//! Wires the browser integrations into one wallet controller and mounts the
//! landing page.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};
use lib_wallet::{ConnectionController, Notification, NotificationSink};

use crate::components::{Navbar, Toaster};
use crate::pages::IndexPage;
use crate::services::{BrowserClipboard, InternetIdentityProvider, PlugProvider};
use crate::state::toast::provide_toast_context;
use crate::state::wallet::provide_wallet_context;
use crate::utils::constants::site_config;

#[component]
pub fn App() -> impl IntoView {
    let toasts = provide_toast_context();

    let notifier: Rc<dyn NotificationSink> = Rc::new(move |notification: Notification| {
        log::debug!("[WALLET] {}: {}", notification.kind.as_str(), notification.title);
        toasts.push(notification);
    });

    let controller = ConnectionController::builder(site_config())
        .provider(Rc::new(PlugProvider))
        .provider(Rc::new(InternetIdentityProvider))
        .notifier(notifier)
        .clipboard(Rc::new(BrowserClipboard))
        .build();

    let wallet = provide_wallet_context(Rc::new(controller));
    wallet.initialize();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=IndexPage/>
                </Routes>
                <Toaster/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="card">
                <h1 class="section-title">"404 - Page Not Found"</h1>
                <p class="section-text">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn btn-primary">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
