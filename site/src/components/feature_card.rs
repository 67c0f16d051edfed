use leptos::prelude::*;

use super::ScrollReveal;

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] delay: u32,
) -> impl IntoView {
    view! {
        <ScrollReveal animation="slide-up" delay=delay>
            <div class="card feature-card">
                <div class="icon-badge">{icon}</div>
                <h3 class="card-title">{title}</h3>
                <p class="card-text">{description}</p>
            </div>
        </ScrollReveal>
    }
}
