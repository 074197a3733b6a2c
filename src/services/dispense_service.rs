// ============================================================================
// DISPENSE SERVICE - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================

use gloo_net::http::Request;

use crate::models::DispenseStatus;
use crate::services::error::ApiError;
use crate::utils::BACKEND_URL;

/// Estado actual del dispensador físico.
pub async fn fetch_dispense_status() -> Result<DispenseStatus, ApiError> {
    let url = format!("{}/api/dispense/status", BACKEND_URL);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }

    response
        .json::<DispenseStatus>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pide al backend volver `dispensed` a false para no re-notificar el
/// mismo dispensado en el siguiente tick.
pub async fn reset_dispense() -> Result<(), ApiError> {
    let url = format!("{}/api/dispense/reset/", BACKEND_URL);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }

    log::info!("🔄 Dispensador reseteado");
    Ok(())
}
