//! User menu component
//!
//! Shows sign in / sign up links when logged out, or the user's name with a
//! dropdown (private page, sign out) when a session is held.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::use_auth_context;
use crate::core::UserRecord;
use crate::core::flows::{self, Route};
use crate::ui::icon::{Icon, icons};

/// User menu component for the header
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();

    // Dropdown open state
    let menu_open = RwSignal::new(false);

    let handle_logout = move |_| {
        menu_open.set(false);
        let redirect = flows::logout(&auth);
        auth.notice.set(Some(redirect.notice));
        let navigate = use_navigate();
        navigate(redirect.to.path(), Default::default());
    };

    view! {
        <div class="relative">
            {move || match auth.user() {
                None => view! {
                    <div class="flex items-center gap-2">
                        <A
                            href=Route::Login.path()
                            attr:class="px-3 py-1.5 text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                        >
                            "Sign In"
                        </A>
                        <A
                            href=Route::Signup.path()
                            attr:class="px-3 py-1.5 text-sm font-medium text-white bg-accent-primary hover:bg-accent-primary-hover rounded-lg transition-colors"
                        >
                            "Sign Up"
                        </A>
                    </div>
                }.into_any(),
                Some(user) => {
                    let name = user.display_name();
                    view! {
                        <div class="relative">
                            <button
                                class="flex items-center gap-2 p-1 rounded-lg hover:bg-theme-secondary transition-colors"
                                on:click=move |_| menu_open.update(|v| *v = !*v)
                            >
                                <UserAvatar user=user.clone() size=32 />
                                <span class="hidden sm:block text-sm font-medium text-theme-primary max-w-[120px] truncate">
                                    {name}
                                </span>
                                <div class="flex items-center justify-center h-4 w-4 text-theme-tertiary transition-transform duration-200" class=("rotate-180", move || menu_open.get())>
                                    <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
                                </div>
                            </button>

                            <Show when=move || menu_open.get()>
                                <div class="absolute right-0 mt-2 w-56 bg-theme-primary rounded-lg shadow-lg border border-theme py-1 z-50">
                                    <div class="px-4 py-3 border-b border-theme">
                                        <p class="text-sm font-medium text-theme-primary truncate">
                                            {user.full_name().unwrap_or_else(|| user.display_name())}
                                        </p>
                                        <p class="text-xs text-theme-tertiary truncate">
                                            {user.email.clone()}
                                        </p>
                                    </div>

                                    <div class="py-1">
                                        <A
                                            href=Route::Private.path()
                                            attr:class="w-full px-4 py-2 text-sm text-left text-theme-primary hover:bg-theme-secondary transition-colors flex items-center gap-2"
                                        >
                                            <Icon name=icons::LOCK class="h-4 w-4" />
                                            "Private area"
                                        </A>
                                    </div>

                                    <div class="border-t border-theme my-1"></div>

                                    <div class="py-1">
                                        <button
                                            class="w-full px-4 py-2 text-sm text-left text-red-500
                                                   hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors
                                                   flex items-center gap-2"
                                            on:click=handle_logout
                                        >
                                            <Icon name=icons::LOGOUT class="h-4 w-4" />
                                            "Sign Out"
                                        </button>
                                    </div>
                                </div>
                            </Show>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

/// Round badge with the user's initial
#[component]
pub fn UserAvatar(
    user: UserRecord,
    /// Avatar size in pixels
    #[prop(default = 32)]
    size: u32,
) -> impl IntoView {
    let name = user.display_name();
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    let size_style = format!(
        "width: {}px; height: {}px; min-width: {}px; min-height: {}px;",
        size, size, size, size
    );
    let font_size = if size >= 40 { "text-lg" } else { "text-sm" };

    // Consistent color per account
    let hash = user
        .email
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_add(b as u32));
    let colors = [
        "bg-blue-500",
        "bg-green-500",
        "bg-yellow-500",
        "bg-red-500",
        "bg-purple-500",
        "bg-pink-500",
        "bg-indigo-500",
        "bg-teal-500",
    ];
    let color = colors[(hash as usize) % colors.len()];

    view! {
        <div
            class=format!("{} rounded-full flex items-center justify-center text-white font-medium {}", color, font_size)
            style=size_style
        >
            {initial}
        </div>
    }
}
