use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::api_utils::ApiError;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::{api, context::complete_login, context::use_auth};

/// Куда попадает администратор после входа
pub const AFTER_LOGIN_PATH: &str = "/admin/looks";

/// Текст ошибки входа для пользователя
pub fn login_error_text(error: &ApiError) -> String {
    match error.status() {
        Some(401) | Some(403) => "Ошибка входа: неверный логин или пароль".to_string(),
        _ => format!("Ошибка входа: {}", error),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);

        let credentials = (username.get_untracked(), password.get_untracked());
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::login(credentials.0, credentials.1).await;
            busy.set(false);
            match result {
                Ok(response) => {
                    log::info!("Admin login succeeded");
                    complete_login(set_auth_state, response.api_token);
                    navigate(AFTER_LOGIN_PATH, Default::default());
                }
                Err(e) => {
                    log::error!("Admin login failed: {}", e);
                    error.set(Some(login_error_text(&e)));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="sys_login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <form class="login-box" on:submit=on_submit>
                    <h1>"LookHub"</h1>
                    <h2>"Вход в админ-панель"</h2>

                    {move || error.get().map(|text| view! { <div class="error-message">{text}</div> })}

                    <div class="form-group">
                        <label for="username">"Логин"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Пароль"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Вход..." } else { "Войти" }}
                    </button>
                </form>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_text() {
        assert_eq!(
            login_error_text(&ApiError::Status { status: 401 }),
            "Ошибка входа: неверный логин или пароль"
        );
        let text = login_error_text(&ApiError::Status { status: 500 });
        assert!(text.starts_with("Ошибка входа: "));
        assert!(text.contains("500"));
    }
}
