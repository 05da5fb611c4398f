use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, check_status, ApiError};

/// Вход администратора.
///
/// Эндпоинт принимает `application/x-www-form-urlencoded` и возвращает токен
/// для последующих вызовов API.
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    let body = serde_qs::to_string(&request).map_err(|e| ApiError::Decode(e.to_string()))?;

    let response = Request::post(&api_url("/admin/login"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .body(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(response.status())?;

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
