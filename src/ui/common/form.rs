use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled input with an optional per-field error
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Input id and name
    name: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: RwSignal<String>,
    /// Called with the new value on every keystroke
    on_input: Callback<String>,
    /// Optional error message to display
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=name class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                type=input_type
                id=name
                name=name
                autocomplete=autocomplete
                class="input-base"
                class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div class="flex items-center text-sm text-theme-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn PasswordField(
    #[prop(default = "Password")]
    label: &'static str,
    #[prop(default = "password")]
    name: &'static str,
    /// "current-password" on login, "new-password" on signup
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    value: RwSignal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let show_password = RwSignal::new(false);

    view! {
        <div class="space-y-1.5">
            <label for=name class="label">
                {label}
                <span class="text-red-500 ml-0.5">"*"</span>
            </label>
            <div class="relative">
                <input
                    type=move || if show_password.get() { "text" } else { "password" }
                    id=name
                    name=name
                    autocomplete=autocomplete
                    class="input-base pr-10"
                    class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                    on:click=move |_| show_password.update(|v| *v = !*v)
                >
                    {move || {
                        if show_password.get() {
                            view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                        }
                    }}
                </button>
            </div>
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div class="flex items-center text-sm text-theme-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}
