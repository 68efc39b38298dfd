use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer-brand">"VibeAuracle"</p>
            <p class="footer-tagline">
                "Distributed, system-intimate AI engineering."
            </p>
            <p class="footer-legal">"Copyright 2026 nathfavour. MIT License."</p>
        </footer>
    }
}
