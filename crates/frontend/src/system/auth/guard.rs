use leptos::prelude::*;
use leptos_router::components::A;

use super::context::use_auth;

/// Админский контент без токена заменяется приглашением войти
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let signed_in = move || auth_state.with(|state| state.is_authenticated());

    view! {
        <Show
            when=signed_in
            fallback=|| view! {
                <div class="alert alert--warning">
                    "Для работы с админ-панелью нужно войти. "
                    <A href="/admin/login">"Войти"</A>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
