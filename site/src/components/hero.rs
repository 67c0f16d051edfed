use leptos::prelude::*;

use super::ScrollReveal;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="container hero-inner">
                <ScrollReveal>
                    <span class="pill pill-dark">"Built on the Internet Computer"</span>
                </ScrollReveal>
                <ScrollReveal animation="slide-up" delay=200>
                    <h1 class="hero-title">
                        "The Future of " <span class="text-accent">"Decentralized Social"</span>
                    </h1>
                </ScrollReveal>
                <ScrollReveal delay=400>
                    <p class="hero-text">
                        "Indasocial rewards creators and their communities with the INDA token. \
                         Own your content, your audience and your earnings."
                    </p>
                </ScrollReveal>
                <ScrollReveal animation="slide-up" delay=600>
                    <div class="hero-actions">
                        <a class="btn btn-primary" href="#wallet">"Get Started"</a>
                        <a class="btn btn-outline" href="#features">"Learn More"</a>
                    </div>
                </ScrollReveal>
            </div>
        </section>
    }
}
