use leptos::prelude::*;

use super::ScrollReveal;
use crate::utils::format::reveal_delay;

const TOKEN_UTILITIES: &[(&str, &str)] = &[
    ("Reward Mechanism", "Content creators earn tokens based on engagement and quality"),
    ("Governance", "Token holders participate in protocol decisions and voting"),
    ("Utility", "Access premium features and services across the platform"),
];

#[component]
pub fn TokenSection() -> impl IntoView {
    view! {
        <section id="token" class="section section-dark">
            <div class="container split">
                <div>
                    <ScrollReveal>
                        <span class="pill pill-dark">"INDA Token"</span>
                    </ScrollReveal>
                    <ScrollReveal animation="slide-up" delay=200>
                        <h2 class="section-title">
                            "The Economy of the " <span class="text-accent">"Decentralized Social"</span>
                        </h2>
                    </ScrollReveal>
                    <ScrollReveal delay=300>
                        <p class="section-text">
                            "INDA is the token that rewards the content creators and its users, making possible \
                             a new decentralized social economy on the Internet Computer Protocol."
                        </p>
                    </ScrollReveal>

                    <ul class="token-list">
                        {TOKEN_UTILITIES
                            .iter()
                            .enumerate()
                            .map(|(index, &(title, description))| {
                                view! {
                                    <li>
                                        <ScrollReveal animation="slide-up" delay=reveal_delay(400, index, 100)>
                                            <h4>{title}</h4>
                                            <p>{description}</p>
                                        </ScrollReveal>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <ScrollReveal animation="scale-up" delay=300>
                    <div class="token-orb">
                        <span>"INDA"</span>
                        <div class="token-tag token-tag-top">"ϟ Fast Transactions"</div>
                        <div class="token-tag token-tag-bottom">"⛨ Secure & Trustless"</div>
                    </div>
                </ScrollReveal>
            </div>
        </section>
    }
}
