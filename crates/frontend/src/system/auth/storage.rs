//! Токен API в `localStorage`.
//!
//! Токен переживает перезагрузку страницы и общий для всех вкладок.
//! Недоступное хранилище ведёт себя как пустое.

use web_sys::{window, Storage};

pub const API_TOKEN_KEY: &str = "api_token";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Пустая строка в хранилище считается отсутствием токена
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}

pub fn get_api_token() -> Option<String> {
    non_empty(local_storage()?.get_item(API_TOKEN_KEY).ok()?)
}

pub fn save_api_token(token: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, API token not persisted");
        return;
    };
    if let Err(e) = storage.set_item(API_TOKEN_KEY, token) {
        log::error!("Failed to persist API token: {:?}", e);
    }
}

pub fn clear_api_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(API_TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_absent() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some("abc".to_string())), Some("abc".to_string()));
    }
}
