//! Social-provider sign-in buttons.
//!
//! The buttons render with their accessible labels but have no click
//! handlers: there is no provider integration behind them.

#[cfg(test)]
#[path = "social_sign_in_test.rs"]
mod social_sign_in_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    pub const ALL: [Self; 2] = [Self::Google, Self::Facebook];

    pub fn aria_label(self) -> &'static str {
        match self {
            Self::Google => "Sign in with Google",
            Self::Facebook => "Sign in with Facebook",
        }
    }

    fn button_class(self) -> &'static str {
        match self {
            Self::Google => "social-btn social-google",
            Self::Facebook => "social-btn social-facebook",
        }
    }
}

/// Divider line with the "Or Sign in With" caption.
#[component]
pub fn SocialDivider() -> impl IntoView {
    view! {
        <div class="divider" role="separator" aria-label="Or sign in with">
            <span class="line"></span>
            <span class="text">"Or Sign in With"</span>
            <span class="line"></span>
        </div>
    }
}

#[component]
pub fn SocialButton(provider: SocialProvider) -> impl IntoView {
    let icon = match provider {
        SocialProvider::Google => view! { <span class="g-icon" aria-hidden="true"></span> }.into_any(),
        SocialProvider::Facebook => view! { <span class="fb-icon" aria-hidden="true">"f"</span> }.into_any(),
    };

    view! {
        <button type="button" class=provider.button_class() aria-label=provider.aria_label()>
            {icon}
        </button>
    }
}

/// Both provider buttons in display order.
#[component]
pub fn SocialSignIn() -> impl IntoView {
    SocialProvider::ALL
        .into_iter()
        .map(|provider| view! { <SocialButton provider=provider/> })
        .collect_view()
}
