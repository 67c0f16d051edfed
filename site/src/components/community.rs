use leptos::prelude::*;

use super::ScrollReveal;
use crate::utils::format::reveal_delay;

/// (icon, figure, label)
const STATS: &[(&str, &str, &str)] = &[
    ("☷", "10K+", "Community Members"),
    ("✪", "5+", "Ecosystem Partners"),
    ("▥", "$2M+", "Early Funding"),
    ("◍", "15+", "Countries Represented"),
];

#[component]
pub fn CommunitySection() -> impl IntoView {
    view! {
        <section id="community" class="section section-tinted">
            <div class="container">
                <div class="section-header">
                    <ScrollReveal>
                        <span class="pill">"Join Us"</span>
                    </ScrollReveal>
                    <ScrollReveal animation="slide-up" delay=200>
                        <h2 class="section-title">
                            "Be Part of Our " <span class="text-accent">"Community"</span>
                        </h2>
                    </ScrollReveal>
                    <ScrollReveal delay=400>
                        <p class="section-text">
                            "Join thousands of early adopters shaping the future of decentralized social on \
                             Internet Computer Protocol."
                        </p>
                    </ScrollReveal>
                </div>

                <div class="grid grid-4">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(index, &(icon, figure, label))| {
                            view! {
                                <ScrollReveal delay=reveal_delay(0, index, 100)>
                                    <div class="card stat-card">
                                        <div class="icon-badge">{icon}</div>
                                        <h3 class="stat-figure">{figure}</h3>
                                        <p class="card-text">{label}</p>
                                    </div>
                                </ScrollReveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
