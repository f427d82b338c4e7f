use contracts::system::auth::{LoginData, LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api::client::api_base;
use crate::shared::api::ApiError;

/// Login with the admin password. The backend has a single admin account,
/// so the request carries no username.
pub async fn login(password: String) -> Result<LoginData, ApiError> {
    let request = LoginRequest { password };

    let response = Request::post(&format!("{}/admin/login", api_base()))
        .json(&request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.status() == 401 {
        return Err(ApiError::Validation("Incorrect password".to_string()));
    }
    if !response.ok() {
        return Err(ApiError::Server {
            status: response.status(),
            message: None,
        });
    }

    let body = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    match body.data {
        Some(data) if body.success => Ok(data),
        _ => Err(ApiError::Validation(
            body.message.unwrap_or_else(|| "Login failed".to_string()),
        )),
    }
}
