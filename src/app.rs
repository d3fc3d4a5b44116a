use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::ApiConfig;
use crate::core::api::{META_BACKEND_URL, META_REQUEST_TIMEOUT_MS};
use crate::ui::pages::{HomePage, LoginPage, NotFoundPage, PrivatePage, SignupPage};
use crate::ui::{Navbar, provide_auth_context};

/// Document shell. The API settings are handed to the browser as meta tags.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_BACKEND_URL content=api.base_url.clone()/>
                <meta name=META_REQUEST_TIMEOUT_MS content=api.timeout_ms().to_string()/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Single auth store for the whole app
    provide_auth_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/authgate.css"/>

        <Title text="Authgate"/>

        <Router>
            <div class="min-h-screen bg-theme-primary flex flex-col">
                <Navbar />
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/signup") view=SignupPage/>
                    <Route path=path!("/private") view=PrivatePage/>
                </Routes>
            </div>
        </Router>
    }
}
