use serde::{Deserialize, Serialize};

/// Учётные данные администратора (отправляются как form-urlencoded)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Ответ `POST /admin/login`: токен для вызовов API из браузера
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub api_token: String,
}
