//! Login form component
//!
//! Email and password form that signs the user in against the backend.

use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth_context;
use crate::core::flows::{self, CancelToken, Route, SubmitOutcome};
use crate::core::{FieldErrors, FormField as Field, LoginRequest};
use crate::ui::common::{ErrorMessage, FormField, PasswordField};
use crate::ui::icon::{Icon, icons};

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback with the route to open after a successful login
    #[prop(optional, into)]
    on_success: Option<Callback<Route>>,
    /// Callback to switch to the signup form
    #[prop(optional, into)]
    on_signup_click: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::new());

    // Responses arriving after the form is gone are dropped
    let cancel = StoredValue::new(CancelToken::new());
    on_cleanup(move || cancel.get_value().cancel());

    let field_error = move |field: Field| {
        Signal::derive(move || field_errors.with(|errors| errors.message(field)))
    };

    let on_field_input = move |field: Field, target: RwSignal<String>| {
        Callback::new(move |value: String| {
            target.set(value);
            field_errors.update(|errors| errors.clear(field));
            auth.clear_error();
        })
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest::new(email.get_untracked(), password.get_untracked());
        let cancel = cancel.get_value();

        spawn_local(async move {
            let api = auth.api();
            match flows::submit_login(&api, &auth, &request, &cancel).await {
                SubmitOutcome::Invalid(errors) => field_errors.set(errors),
                SubmitOutcome::Redirect { to, notice } => {
                    field_errors.set(FieldErrors::new());
                    auth.notice.set(Some(notice));
                    if let Some(callback) = on_success {
                        callback.run(to);
                    }
                }
                SubmitOutcome::Failed(message) => {
                    logging::warn!("Login failed: {}", message);
                }
                SubmitOutcome::Busy | SubmitOutcome::Cancelled => {}
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6" novalidate>
            // Header
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">
                    "Welcome Back"
                </h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Sign in to your account to continue"
                </p>
            </div>

            // Global error message
            <ErrorMessage error=Signal::derive(move || auth.auth_error()) />

            <FormField
                label="Email"
                name="email"
                required=true
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com"
                value=email
                on_input=on_field_input(Field::Email, email)
                error=field_error(Field::Email)
            />

            <PasswordField
                autocomplete="current-password"
                placeholder="Enter your password"
                value=password
                on_input=on_field_input(Field::Password, password)
                error=field_error(Field::Password)
            />

            // Submit button
            <button
                type="submit"
                class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                       text-white font-medium rounded-lg
                       focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-primary
                       disabled:opacity-50 disabled:cursor-not-allowed
                       transition-colors"
                disabled=move || auth.is_loading()
            >
                {move || {
                    if auth.is_loading() {
                        view! {
                            <span class="flex items-center justify-center">
                                <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4 text-white" />
                                "Signing in..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span class="block">"Sign In"</span> }.into_any()
                    }
                }}
            </button>

            // Signup link
            <div class="text-center text-sm text-theme-secondary">
                "Don't have an account? "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| {
                        if let Some(callback) = on_signup_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Sign up"
                </button>
            </div>
        </form>
    }
}
