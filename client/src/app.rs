//! Root application component and the SSR document shell.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::sign_in::SignInPage;
use crate::util::notify::NotifierHandle;

/// Path of the compiled stylesheet for the given output name and pkg dir.
pub fn stylesheet_href(options: &LeptosOptions) -> String {
    format!("/{}/{}.css", options.site_pkg_dir, options.output_name)
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let stylesheet = stylesheet_href(&options);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" id="leptos" href=stylesheet/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Mounts the Sign-In screen as the only view and provides the notifier it
/// reports through.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(NotifierHandle::default());

    view! {
        <Title text="Sign In"/>

        <Router>
            <div class="App">
                <Routes fallback=|| view! { <SignInPage/> }>
                    <Route path=StaticSegment("") view=SignInPage/>
                </Routes>
            </div>
        </Router>
    }
}
