//! Inline alert banners for form errors and notices

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success notice that the user can close
#[component]
pub fn SuccessMessage(
    /// Notice signal - shown when Some, set to None on dismiss
    message: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="success-message" role="status">
                <Icon name=icons::CHECK class="icon-text"/>
                <span class="flex-1">{move || message.get().unwrap_or_default()}</span>
                <button
                    type="button"
                    class="text-theme-tertiary hover:text-theme-secondary"
                    on:click=move |_| message.set(None)
                >
                    <Icon name=icons::X class="h-4 w-4"/>
                </button>
            </div>
        </Show>
    }
}
