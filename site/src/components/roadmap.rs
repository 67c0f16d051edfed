use leptos::prelude::*;

use super::ScrollReveal;
use crate::utils::format::{milestone_class, reveal_delay};

/// (title, description, status)
const MILESTONES: &[(&str, &str, &str)] = &[
    (
        "Q1 2023: Research & Planning",
        "Market research, competitive analysis, and project planning. Initial architecture design.",
        "Completed",
    ),
    (
        "Q2 2023: MVP Development",
        "Development of core platform features and token smart contract.",
        "Completed",
    ),
    (
        "Q3 2023: Private Beta",
        "Limited release to early users and testers. Gathering feedback and making improvements.",
        "In Progress",
    ),
    (
        "Q4 2023: Token Launch",
        "INDA token official launch with initial distribution events.",
        "Upcoming",
    ),
    (
        "Q1 2024: Public Platform Launch",
        "Full platform release with complete feature set for all users.",
        "Upcoming",
    ),
];

#[component]
pub fn RoadmapSection() -> impl IntoView {
    view! {
        <section id="roadmap" class="section">
            <div class="container">
                <div class="section-header">
                    <ScrollReveal>
                        <span class="pill">"Development Plan"</span>
                    </ScrollReveal>
                    <ScrollReveal animation="slide-up" delay=200>
                        <h2 class="section-title">
                            "Our " <span class="text-accent">"Roadmap"</span> " to Decentralized Social"
                        </h2>
                    </ScrollReveal>
                    <ScrollReveal delay=400>
                        <p class="section-text">
                            "Follow our journey as we build and deploy Indasocial on the Internet Computer \
                             Protocol ecosystem."
                        </p>
                    </ScrollReveal>
                </div>

                <div class="timeline">
                    {MILESTONES
                        .iter()
                        .enumerate()
                        .map(|(index, &(title, description, status))| {
                            let side = if index % 2 == 0 { "timeline-item left" } else { "timeline-item right" };
                            view! {
                                <div class=side>
                                    <ScrollReveal animation="slide-up" delay=reveal_delay(0, index, 100)>
                                        <div class="card">
                                            <span class=milestone_class(status)>{status}</span>
                                            <h3 class="card-title">{title}</h3>
                                            <p class="card-text">{description}</p>
                                        </div>
                                    </ScrollReveal>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
