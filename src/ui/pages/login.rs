//! Login page component
//!
//! A standalone page for user login, redirects to the private page on success.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::flows::{self, Route};
use crate::ui::auth::{LoginForm, use_auth_context};
use crate::ui::common::SuccessMessage;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();

    // Set once a login submitted here succeeds
    let submitted = RwSignal::new(None::<Route>);

    auth.clear_notice_on_cleanup();

    Effect::new(move |_| {
        let target = auth
            .state
            .with(|state| flows::login_page_redirect(submitted.get(), state));
        if let Some(route) = target {
            let navigate = use_navigate();
            navigate(route.path(), Default::default());
        }
    });

    let on_success = move |route: Route| submitted.set(Some(route));

    let on_signup_click = move |_| {
        let navigate = use_navigate();
        navigate(Route::Signup.path(), Default::default());
    };

    view! {
        <main class="flex-1 flex items-center justify-center p-4">
            <div class="w-full max-w-md space-y-4">
                <SuccessMessage message=auth.notice />
                <div class="w-full bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
                    <LoginForm
                        on_success=Callback::new(on_success)
                        on_signup_click=Callback::new(on_signup_click)
                    />
                </div>
            </div>
        </main>
    }
}
