//! API utilities for frontend-backend communication
//!
//! Provides the API base URL, the shared error type and thin JSON helpers over
//! `gloo_net`. Every call site gets a `Result<T, ApiError>`; the error's
//! `Display` text is what the page shows to the user.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::system::auth::storage;

/// Ошибки обращения к REST API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Запрос не дошёл до сервера или не удалось прочитать ответ
    #[error("Ошибка сети: {0}")]
    Network(String),
    /// Сервер ответил статусом вне диапазона 2xx
    #[error("HTTP error! Status: {status}")]
    Status { status: u16 },
    /// Не-2xx ответ с поясняющим `detail` в теле
    #[error("{detail} (HTTP {status})")]
    Rejected { status: u16, detail: String },
    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),
    #[error("Не выполнен вход: токен API отсутствует")]
    MissingToken,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } | ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Проверка HTTP-статуса: всё вне 2xx считается ошибкой
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { status })
    }
}

/// Get the base URL for API requests
///
/// The backend serves the API from the same origin as the pages, so this is
/// simply `window.location.origin`.
///
/// # Returns
/// - Origin like "http://localhost:8000"
/// - Empty string if window is not available (relative URLs still work)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/looks/12");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Absolute URL for an image reference returned by the API.
///
/// Absolute `http(s)` URLs pass through; relative paths are joined to `base`.
pub fn resolve_image_url(base: &str, url: &str) -> String {
    if url.is_empty() || url.starts_with("http") {
        url.to_string()
    } else {
        format!("{}{}", base, url)
    }
}

fn auth_header() -> Result<String, ApiError> {
    storage::get_api_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(ApiError::MissingToken)
}

fn with_auth(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    Ok(builder.header("Authorization", &auth_header()?))
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    check_status(response.status())?;
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET` без авторизации с разбором JSON
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", path);
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(ensure_ok(response)?).await
}

/// `POST` JSON-тела с bearer-токеном
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("POST {}", path);
    let response = with_auth(Request::post(&api_url(path)).header("Accept", "application/json"))?
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(ensure_ok(response)?).await
}

/// `PATCH` с bearer-токеном; тело содержит только изменённые поля
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("PATCH {}", path);
    let response = with_auth(Request::patch(&api_url(path)).header("Accept", "application/json"))?
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(ensure_ok(response)?).await
}

/// `POST` без тела с bearer-токеном. Если сервер вернул `{ "detail": ... }`,
/// текст попадает в ошибку.
pub async fn post_authorized<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    log::debug!("POST {}", path);
    let response = with_auth(Request::post(&api_url(path)).header("Accept", "application/json"))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if check_status(status).is_err() {
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("detail").and_then(|d| d.as_str()).map(str::to_string));
        return Err(match detail {
            Some(detail) => ApiError::Rejected { status, detail },
            None => ApiError::Status { status },
        });
    }
    decode(response).await
}

/// `DELETE` с bearer-токеном; тело ответа игнорируется
pub async fn delete(path: &str) -> Result<(), ApiError> {
    log::debug!("DELETE {}", path);
    let response = with_auth(Request::delete(&api_url(path)).header("Accept", "application/json"))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert_eq!(check_status(404), Err(ApiError::Status { status: 404 }));
        assert_eq!(check_status(500), Err(ApiError::Status { status: 500 }));
    }

    #[test]
    fn test_status_message_contains_code() {
        let err = check_status(503).unwrap_err();
        assert!(err.to_string().contains("503"));
        assert_eq!(err.status(), Some(503));

        let rejected = ApiError::Rejected {
            status: 400,
            detail: "Лук не проверен".to_string(),
        };
        assert_eq!(rejected.to_string(), "Лук не проверен (HTTP 400)");
    }

    #[test]
    fn test_resolve_image_url() {
        let base = "http://localhost:8000";
        assert_eq!(
            resolve_image_url(base, "/images/a.png"),
            "http://localhost:8000/images/a.png"
        );
        assert_eq!(
            resolve_image_url(base, "https://cdn.example/a.png"),
            "https://cdn.example/a.png"
        );
        assert_eq!(resolve_image_url(base, ""), "");
    }
}
