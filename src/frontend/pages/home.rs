use leptos::prelude::*;

use crate::frontend::components::{Footer, HomepageFeatures, Nav};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Nav/>

            <section class="hero">
                <h1 class="hero-title">"VibeAuracle"</h1>
                <p class="hero-tagline">
                    "A keyboard-centric interface that unifies the terminal, the IDE, "
                    "and the AI assistant into a single system-aware experience."
                </p>
                <div class="hero-actions">
                    <a href="/docs/getting-started" class="btn-primary">
                        "Get Started"
                    </a>
                    <a
                        href="https://github.com/nathfavour/vibeauracle"
                        target="_blank"
                        class="btn-ghost"
                    >
                        "View on GitHub"
                    </a>
                </div>
            </section>

            <HomepageFeatures/>

            <Footer/>
        </div>
    }
}
