use leptos::prelude::*;

/// Home indicator bar pinned to the bottom of the screen. Visual only.
#[component]
pub fn HomeIndicator() -> impl IntoView {
    view! {
        <div class="home-indicator" role="contentinfo" aria-label="Home indicator">
            <div class="bar"></div>
        </div>
    }
}
