//! TopHeader component - admin top navigation bar.
//!
//! Contains:
//! - Application title
//! - Links to the admin lists
//! - Logout button

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    // Admin content switches to the login prompt as soon as the token is gone
    let logout = move |_| do_logout(set_auth_state);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"LookHub Admin"</span>
            </div>

            <nav class="top-header__nav">
                <A href="/admin/looks" attr:class="top-header__link">"Луки"</A>
                <A href="/admin/clothes" attr:class="top-header__link">"Одежда"</A>
                <A href="/" attr:class="top-header__link">"Витрина"</A>
            </nav>

            <div class="top-header__actions">
                <Show when=move || auth_state.get().is_authenticated()>
                    <button
                        class="top-header__icon-btn"
                        on:click=logout
                        title="Выйти"
                    >
                        {icon("logout")}
                        "Выйти"
                    </button>
                </Show>
            </div>
        </div>
    }
}
