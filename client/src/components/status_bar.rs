//! Decorative phone status bar drawn above the Sign-In screen.

use leptos::prelude::*;

/// Clock readout shown in the status bar. Fixed; matches the design reference.
pub const STATUS_BAR_TIME: &str = "19:27";

/// Status bar with a clock and cell/wifi/battery glyphs. Carries no behavior.
#[component]
pub fn StatusBar() -> impl IntoView {
    view! {
        <div class="status-bar" role="banner" aria-label="Status bar">
            <div class="time">{STATUS_BAR_TIME}</div>
            <div class="icons" aria-hidden="true">
                <span class="cell"></span>
                <span class="wifi"></span>
                <span class="battery">
                    <span class="level"></span>
                </span>
            </div>
        </div>
    }
}
