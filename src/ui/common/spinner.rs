use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Centered spinner shown while a page is waiting on the backend
#[component]
pub fn LoadingSpinner(
    /// Text under the spinner, announced to screen readers
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex flex-col items-center justify-center gap-3" role="status" aria-live="polite">
            <Icon name=icons::LOADER class="h-8 w-8 animate-spin" />
            <p class="text-sm text-theme-secondary">{message}</p>
        </div>
    }
}
