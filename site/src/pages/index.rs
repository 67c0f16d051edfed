//! Landing page

use leptos::prelude::*;

use crate::components::{
    CommunitySection, FeatureSection, Footer, Hero, RoadmapSection, TokenSection, WalletSection,
};

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <main class="landing">
            <Hero/>
            <FeatureSection/>
            <WalletSection/>
            <TokenSection/>
            <RoadmapSection/>
            <CommunitySection/>
        </main>
        <Footer/>
    }
}
