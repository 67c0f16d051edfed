//! Wallet section: a second connect widget next to the Internet Computer pitch

use leptos::prelude::*;

use super::{ConnectWallet, ScrollReveal};
use crate::utils::constants::DFINITY_URL;
use crate::utils::format::reveal_delay;

const WALLET_POINTS: &[(&str, &str, &str)] = &[
    (
        "▣",
        "Secure Authentication",
        "Connect with Internet Identity or Plug for secure and seamless authentication",
    ),
    (
        "⌬",
        "Web3 Integration",
        "Directly interact with Internet Computer canisters and smart contracts",
    ),
    (
        "⛨",
        "Self-Custody",
        "Maintain complete control of your digital assets with non-custodial wallet solutions",
    ),
];

#[component]
pub fn WalletSection() -> impl IntoView {
    view! {
        <section id="wallet" class="section section-tinted">
            <div class="container">
                <div class="section-header">
                    <ScrollReveal>
                        <span class="pill">"Internet Computer"</span>
                    </ScrollReveal>
                    <ScrollReveal animation="slide-up" delay=200>
                        <h2 class="section-title">
                            "Connect to the " <span class="text-accent">"Internet Computer"</span>
                        </h2>
                    </ScrollReveal>
                    <ScrollReveal delay=400>
                        <p class="section-text">
                            "Experience the power of true decentralization with DFINITY's Internet Computer. \
                             Connect your wallet to interact with the platform and access exclusive features."
                        </p>
                    </ScrollReveal>
                    <ScrollReveal delay=600>
                        <div class="wallet-section-widget">
                            <ConnectWallet/>
                        </div>
                    </ScrollReveal>
                </div>

                <div class="grid grid-3 narrow">
                    {WALLET_POINTS
                        .iter()
                        .enumerate()
                        .map(|(index, &(icon, title, description))| {
                            view! {
                                <ScrollReveal delay=reveal_delay(300, index, 150)>
                                    <div class="card">
                                        <div class="icon-badge">{icon}</div>
                                        <h3 class="card-title">{title}</h3>
                                        <p class="card-text">{description}</p>
                                        <a class="card-link" href=DFINITY_URL target="_blank" rel="noreferrer">
                                            "Learn more →"
                                        </a>
                                    </div>
                                </ScrollReveal>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="section-footer">
                    <ScrollReveal delay=800>
                        <span class="pill pill-muted">"Powered by the Internet Computer Protocol"</span>
                    </ScrollReveal>
                </div>
            </div>
        </section>
    }
}
