//! Private page component
//!
//! Guarded page: the held token is checked against the backend before the
//! profile is shown. Rejected tokens send the user back to login, while a
//! lost connection keeps the session and shows an error screen.

use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::flows::{self, CancelToken, PrivateOutcome, Route};
use crate::core::{PrivateGrant, UserRecord};
use crate::ui::auth::use_auth_context;
use crate::ui::common::{LoadingSpinner, SuccessMessage};
use crate::ui::icon::{Icon, icons};

/// What the page is currently showing
#[derive(Debug, Clone, PartialEq)]
enum PrivateView {
    Checking,
    Granted(PrivateGrant),
    Offline(String),
}

/// Private page component
#[component]
pub fn PrivatePage() -> impl IntoView {
    let auth = use_auth_context();
    let view_state = RwSignal::new(PrivateView::Checking);
    let started = RwSignal::new(false);

    let cancel = StoredValue::new(CancelToken::new());
    on_cleanup(move || cancel.get_value().cancel());
    auth.clear_notice_on_cleanup();

    let go_to = move |route: Route| {
        let navigate = use_navigate();
        navigate(route.path(), Default::default());
    };

    // Verify once, after the session has been read from storage
    Effect::new(move |_| {
        if !auth.hydrated.get() || started.get_untracked() {
            return;
        }
        started.set(true);

        let cancel = cancel.get_value();
        spawn_local(async move {
            let api = auth.api();
            match flows::verify_private(&api, &auth, &cancel).await {
                PrivateOutcome::Granted(grant) => view_state.set(PrivateView::Granted(grant)),
                PrivateOutcome::Redirect(route) => go_to(route),
                PrivateOutcome::Offline(message) => {
                    logging::warn!("Private page offline: {}", message);
                    view_state.set(PrivateView::Offline(message));
                }
                PrivateOutcome::Cancelled => {}
            }
        });
    });

    let handle_logout = move |_| {
        let redirect = flows::logout(&auth);
        auth.notice.set(Some(redirect.notice));
        go_to(redirect.to);
    };

    view! {
        <main class="flex-1 max-w-4xl w-full mx-auto px-4 py-8">
            {move || match view_state.get() {
                PrivateView::Checking => view! {
                    <LoadingSpinner message="Checking your session..." />
                }.into_any(),
                PrivateView::Offline(message) => view! {
                    <OfflineScreen message=message on_back=Callback::new(move |_| go_to(Route::Login)) />
                }.into_any(),
                PrivateView::Granted(grant) => {
                    // The grant's user is fresher than the stored one
                    let user = grant.user.clone().or_else(|| auth.user());
                    view! {
                        <div class="space-y-6">
                            <SuccessMessage message=auth.notice />

                            {grant.message.clone().map(|message| view! {
                                <p class="text-sm text-theme-secondary">{message}</p>
                            })}

                            {user.map(|user| view! { <ProfileCard user=user /> })}

                            {grant.logged_in_as.clone().map(|who| view! {
                                <p class="text-xs text-theme-tertiary">"Signed in as " {who}</p>
                            })}

                            <button
                                class="inline-flex items-center gap-2 px-4 py-2 text-sm font-medium text-red-500
                                       border border-red-300 dark:border-red-700 rounded-lg
                                       hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors"
                                on:click=handle_logout
                            >
                                <Icon name=icons::LOGOUT class="w-4 h-4" />
                                "Sign Out"
                            </button>
                        </div>
                    }.into_any()
                }
            }}
        </main>
    }
}

/// Profile summary
#[component]
fn ProfileCard(user: UserRecord) -> impl IntoView {
    let full_name = user
        .full_name()
        .unwrap_or_else(|| "Not specified".to_string());
    let (status, status_class) = if user.is_active {
        ("Active", "bg-green-100 text-green-700 dark:bg-green-900/30 dark:text-green-300")
    } else {
        ("Inactive", "bg-gray-100 text-gray-600 dark:bg-gray-800 dark:text-gray-400")
    };

    view! {
        <section class="bg-theme-secondary/30 rounded-xl p-6 border border-theme">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-lg font-semibold text-theme-primary">"Your Profile"</h2>
                <span class=format!("px-2 py-0.5 text-xs font-medium rounded-full {}", status_class)>
                    {status}
                </span>
            </div>

            <dl class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                <div>
                    <dt class="text-sm font-medium text-theme-secondary">"Name"</dt>
                    <dd class="mt-1 text-theme-primary">{full_name}</dd>
                </div>
                <div>
                    <dt class="text-sm font-medium text-theme-secondary">"Email"</dt>
                    <dd class="mt-1 text-theme-primary truncate">{user.email.clone()}</dd>
                </div>
                <div>
                    <dt class="text-sm font-medium text-theme-secondary">"User ID"</dt>
                    <dd class="mt-1 text-theme-primary font-mono">{format!("#{}", user.id)}</dd>
                </div>
            </dl>
        </section>
    }
}

/// Full-screen error shown when the backend cannot be reached
#[component]
fn OfflineScreen(message: String, on_back: Callback<()>) -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex flex-col items-center justify-center text-center">
            <div class="w-20 h-20 mb-6 bg-theme-secondary rounded-full flex items-center justify-center">
                <Icon name=icons::WIFI_OFF class="w-10 h-10" />
            </div>
            <h2 class="text-2xl font-semibold text-theme-primary mb-2">{message}</h2>
            <p class="text-theme-secondary mb-8 max-w-md">
                "The server could not be reached. Your session has been kept."
            </p>
            <button
                class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                on:click=move |_| on_back.run(())
            >
                "Back to login"
            </button>
        </div>
    }
}
