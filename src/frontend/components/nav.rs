use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <a href="/" class="nav-brand">
                <span class="nav-logo">"\u{25C9}"</span>
                <span class="nav-title">"VibeAuracle"</span>
            </a>
            <div class="nav-links">
                <a href="/#features">"Features"</a>
                <a href="/docs/getting-started">"Docs"</a>
                <a
                    href="https://github.com/nathfavour/vibeauracle"
                    target="_blank"
                    class="btn-ghost"
                >
                    "GitHub"
                </a>
            </div>
        </nav>
    }
}
