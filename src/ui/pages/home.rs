//! Home page component
//!
//! Landing content plus the greeting served by the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::flows::{self, Route};
use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_context();

    // Effects only run in the browser, so the greeting is never fetched during SSR
    Effect::new(move |_| {
        spawn_local(async move {
            let api = auth.api();
            flows::load_greeting(&api, &auth).await;
        });
    });

    let greeting = move || auth.state.with(|s| s.message.clone());

    view! {
        <main class="flex-1 flex items-center justify-center p-4">
            <div class="max-w-2xl text-center space-y-6">
                <h1 class="text-4xl font-bold text-theme-primary">"Welcome to Authgate"</h1>
                <p class="text-lg text-theme-secondary">
                    "Sign in to reach your private area."
                </p>

                {move || greeting().map(|message| view! {
                    <p class="text-sm text-theme-tertiary" data-testid="greeting">{message}</p>
                })}

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    {move || if auth.is_authenticated() {
                        view! {
                            <A
                                href=Route::Private.path()
                                attr:class="inline-flex items-center gap-2 px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                            >
                                <Icon name=icons::LOCK class="w-4 h-4" />
                                "Open private area"
                            </A>
                        }.into_any()
                    } else {
                        view! {
                            <A
                                href=Route::Login.path()
                                attr:class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                            >
                                "Sign In"
                            </A>
                            <A
                                href=Route::Signup.path()
                                attr:class="px-6 py-3 border border-theme text-theme-primary hover:bg-theme-secondary font-medium rounded-lg transition-colors"
                            >
                                "Create an account"
                            </A>
                        }.into_any()
                    }}
                </div>
            </div>
        </main>
    }
}
