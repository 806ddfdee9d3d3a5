//! Sign-In screen: email/password form with a visibility toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns its `SignInState` and hands notices to the `NotifierHandle`
//! found in context. Submitting never leaves the page: a valid submit only
//! shows the progress placeholder.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use crate::components::home_indicator::HomeIndicator;
use crate::components::social_sign_in::{SocialDivider, SocialSignIn};
use crate::components::status_bar::StatusBar;
use crate::state::sign_in::{PasswordVisibility, SignInState, SubmitOutcome};
use crate::util::notify::NotifierHandle;

/// True for the key that submits the form from inside either input.
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Class list for the password field wrapper.
pub fn password_field_class(visibility: PasswordVisibility) -> &'static str {
    if visibility.is_plain() { "input-field password show" } else { "input-field password" }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let form = RwSignal::new(SignInState::default());
    let notifier = use_context::<NotifierHandle>().unwrap_or_default();

    let submit = Callback::new(move |()| {
        let outcome = form.with_untracked(|state| state.submit(notifier.notifier()));
        if outcome == SubmitOutcome::Pending {
            leptos::logging::log!("sign-in placeholder: no authentication backend");
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key()) {
            ev.prevent_default();
            submit.run(());
        }
    };

    let visibility = move || form.with(|state| state.visibility);

    view! {
        <div class="screen" role="main" aria-label="Sign In screen">
            <StatusBar/>

            <div class="title-group" aria-label="Title Area">
                <h1 class="hello">"Hello,"</h1>
                <div class="welcome">"Welcome Back!"</div>
            </div>

            <div class="input-field email" aria-label="Email input field">
                <label class="label" for="email">"Email"</label>
                <div class="control">
                    <input
                        id="email"
                        class="input"
                        type="email"
                        placeholder="Enter Email"
                        autocomplete="username"
                        inputmode="email"
                        prop:value=move || form.with(|state| state.email.clone())
                        on:input=move |ev| form.update(|state| state.update_email(event_target_value(&ev)))
                        on:keydown=on_keydown
                    />
                </div>
            </div>

            <div class=move || password_field_class(visibility()) aria-label="Password input field">
                <label class="label" for="password">"Enter Password"</label>
                <div class="password-wrapper">
                    <input
                        id="password"
                        type=move || visibility().input_type()
                        placeholder="Enter Password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|state| state.password.clone())
                        on:input=move |ev| form.update(|state| state.update_password(event_target_value(&ev)))
                        on:keydown=on_keydown
                    />
                    <button
                        class="toggle-pass"
                        type="button"
                        aria-label=move || visibility().toggle_label()
                        on:click=move |_| form.update(SignInState::toggle_visibility)
                    ></button>
                </div>
            </div>

            <a href="#" class="forgot-password">"Forgot Password?"</a>

            <button
                class="btn-primary sign-in-btn"
                id="btn-sign-in"
                type="button"
                aria-label="Sign In"
                on:click=move |_| submit.run(())
            >
                <span class="sr-only">"Sign In"</span>
                <span class="btn-text">"Sign In"</span>
                <span class="icon-arrow" aria-hidden="true"></span>
            </button>

            <SocialDivider/>
            <SocialSignIn/>

            <div class="signup-text">
                "Don’t have an account? "
                <a href="#" class="signup-link" aria-label="Sign up">"Sign up"</a>
            </div>

            <HomeIndicator/>
        </div>
    }
}
