// ============================================================================
// AUTH SERVICE - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================

use gloo_net::http::Request;

use crate::models::LoginResponse;
use crate::services::error::ApiError;
use crate::utils::BACKEND_URL;

/// Autentica contra el backend con credenciales form-encoded y devuelve
/// el token emitido.
pub async fn perform_login(username: &str, password: &str) -> Result<String, ApiError> {
    let url = format!("{}/login/", BACKEND_URL);
    let body = format!(
        "username={}&password={}",
        url_encode(username),
        url_encode(password)
    );

    log::info!("🔐 Iniciando sesión para usuario: {}", username);

    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<LoginResponse>()
            .await
            .ok()
            .and_then(|r| r.message)
            .unwrap_or_else(|| "Invalid credentials".to_string());
        log::error!("❌ Login fallido ({}): {}", status, message);
        return Err(ApiError::Http { status, message });
    }

    let login: LoginResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    match login.token {
        Some(token) => {
            log::info!("✅ Login exitoso: {}", username);
            Ok(token)
        }
        None => Err(ApiError::Decode("respuesta de login sin token".to_string())),
    }
}

fn url_encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}
