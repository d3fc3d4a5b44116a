//! Signup form component
//!
//! Creates an account. The new user is sent to the login page rather than
//! being signed in.

use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth_context;
use crate::core::flows::{self, CancelToken, Route, SubmitOutcome};
use crate::core::validation::MIN_PASSWORD_LENGTH;
use crate::core::{FieldErrors, FormField as Field, SignupRequest};
use crate::ui::common::{ErrorMessage, FormField, PasswordField};
use crate::ui::icon::{Icon, icons};

/// Signup form component
#[component]
pub fn SignupForm(
    /// Callback with the route to open once the account exists
    #[prop(optional, into)]
    on_success: Option<Callback<Route>>,
    /// Callback to switch to the login form
    #[prop(optional, into)]
    on_login_click: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::new());

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

    // Names are optional and never carry a field error
    let on_name_input = move |target: RwSignal<String>| {
        Callback::new(move |value: String| target.set(value))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = SignupRequest::new(
            email.get_untracked(),
            password.get_untracked(),
            &first_name.get_untracked(),
            &last_name.get_untracked(),
        );
        let cancel = cancel.get_value();

        spawn_local(async move {
            let api = auth.api();
            match flows::submit_signup(&api, &auth, &request, &cancel).await {
                SubmitOutcome::Invalid(errors) => field_errors.set(errors),
                SubmitOutcome::Redirect { to, notice } => {
                    field_errors.set(FieldErrors::new());
                    auth.notice.set(Some(notice));
                    if let Some(callback) = on_success {
                        callback.run(to);
                    }
                }
                SubmitOutcome::Failed(message) => {
                    logging::warn!("Signup failed: {}", message);
                }
                SubmitOutcome::Busy | SubmitOutcome::Cancelled => {}
            }
        });
    };

    let password_hint = format!("At least {} characters", MIN_PASSWORD_LENGTH);

    view! {
        <form on:submit=on_submit class="space-y-5" novalidate>
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">
                    "Create an Account"
                </h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Sign up to get started"
                </p>
            </div>

            <ErrorMessage error=Signal::derive(move || auth.auth_error()) />

            <div class="grid grid-cols-2 gap-4">
                <FormField
                    label="First name"
                    name="first_name"
                    autocomplete="given-name"
                    value=first_name
                    on_input=on_name_input(first_name)
                />
                <FormField
                    label="Last name"
                    name="last_name"
                    autocomplete="family-name"
                    value=last_name
                    on_input=on_name_input(last_name)
                />
            </div>

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

            <div>
                <PasswordField
                    autocomplete="new-password"
                    placeholder="Create a password"
                    value=password
                    on_input=on_field_input(Field::Password, password)
                    error=field_error(Field::Password)
                />
                <p class="mt-1 text-xs text-theme-tertiary">{password_hint}</p>
            </div>

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
                                "Creating account..."
                            </span>
                        }.into_any()
                    } else {
                        view! {
                            <span class="flex items-center justify-center">
                                <Icon name=icons::USER_PLUS class="-ml-1 mr-2 h-4 w-4" />
                                "Sign Up"
                            </span>
                        }.into_any()
                    }
                }}
            </button>

            <div class="text-center text-sm text-theme-secondary">
                "Already have an account? "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| {
                        if let Some(callback) = on_login_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Sign in"
                </button>
            </div>
        </form>
    }
}
