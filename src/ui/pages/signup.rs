//! Signup page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::flows::Route;
use crate::ui::auth::SignupForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    let on_success = move |route: Route| {
        let navigate = use_navigate();
        navigate(route.path(), Default::default());
    };

    let on_login_click = move |_| {
        let navigate = use_navigate();
        navigate(Route::Login.path(), Default::default());
    };

    view! {
        <main class="flex-1 flex items-center justify-center p-4">
            <div class="w-full max-w-md bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
                <SignupForm
                    on_success=Callback::new(on_success)
                    on_login_click=Callback::new(on_login_click)
                />
            </div>
        </main>
    }
}
