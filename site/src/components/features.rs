use leptos::prelude::*;

use super::{FeatureCard, ScrollReveal};
use crate::utils::format::reveal_delay;

/// (icon, title, description)
const FEATURES: &[(&str, &str, &str)] = &[
    (
        "◎",
        "INDA Token",
        "The native token that powers the entire ecosystem and enables decentralized monetization for creators.",
    ),
    (
        "☷",
        "Community Governance",
        "Token holders participate in platform governance, voting on key decisions and protocol upgrades.",
    ),
    (
        "⛨",
        "Secure & Decentralized",
        "Built on Internet Computer Protocol for maximum security, censorship resistance, and true ownership.",
    ),
    (
        "▥",
        "Transparent Economics",
        "Clear token distribution model with allocated percentages for ecosystem growth and sustainability.",
    ),
    (
        "⇄",
        "Interoperability",
        "Seamlessly connect with other ICP applications and services through native integrations.",
    ),
    (
        "ϟ",
        "Instant Rewards",
        "Creators and users earn tokens in real-time for valuable contributions to the network.",
    ),
];

#[component]
pub fn FeatureSection() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <div class="container">
                <div class="section-header">
                    <ScrollReveal>
                        <span class="pill">"Core Features"</span>
                    </ScrollReveal>
                    <ScrollReveal animation="slide-up" delay=200>
                        <h2 class="section-title">
                            "Building the Future of Social with " <span class="text-accent">"ICP"</span>
                        </h2>
                    </ScrollReveal>
                    <ScrollReveal delay=400>
                        <p class="section-text">
                            "Indasocial combines decentralized technology with user-friendly experience to \
                             create a new standard for social platforms powered by Internet Computer."
                        </p>
                    </ScrollReveal>
                </div>

                <div class="grid grid-3">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, &(icon, title, description))| {
                            view! {
                                <FeatureCard
                                    icon=icon
                                    title=title
                                    description=description
                                    delay=reveal_delay(0, index, 100)
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
