//! Состояние входа администратора, общее для всего приложения.
//!
//! Токен не проверяется при старте: если он истёк, первый защищённый
//! вызов API вернёт 401 и страница покажет ошибку.

use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub api_token: Option<String>,
}

impl AuthState {
    pub fn signed_in(api_token: String) -> Self {
        Self {
            api_token: Some(api_token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.api_token.is_some()
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let initial = storage::get_api_token().map(AuthState::signed_in).unwrap_or_default();
    log::debug!("Auth state restored, signed in: {}", initial.is_authenticated());

    let (auth_state, set_auth_state) = signal(initial);
    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Доступ к состоянию входа; вызывается только внутри `AuthProvider`
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");
    (auth_state, set_auth_state)
}

pub fn complete_login(set_auth_state: WriteSignal<AuthState>, api_token: String) {
    storage::save_api_token(&api_token);
    set_auth_state.set(AuthState::signed_in(api_token));
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_api_token();
    set_auth_state.set(AuthState::default());
    log::info!("Admin logged out");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state() {
        assert!(!AuthState::default().is_authenticated());
        assert!(AuthState::signed_in("token".to_string()).is_authenticated());
    }
}
