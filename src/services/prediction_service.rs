// ============================================================================
// PREDICTION SERVICE - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::models::{LogsPayload, PredictionLogEntry, SampleType};
use crate::services::error::ApiError;
use crate::utils::BACKEND_URL;

/// Sube una muestra al endpoint de predicción como multipart
/// `{file, type, id}`. El backend responde JSON propio que aquí solo se
/// loguea; a la vista le basta el status.
pub async fn submit_sample(
    file: &File,
    sample_type: SampleType,
    validation_id: u32,
) -> Result<(), ApiError> {
    let url = format!("{}/api/getprediction/", BACKEND_URL);
    let form = build_upload_form(file, sample_type, validation_id)?;

    log::info!(
        "📤 Subiendo muestra: {} (type={}, id={})",
        file.name(),
        sample_type.as_str(),
        sample_type.transmitted_id(validation_id)
    );

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let error = ApiError::from_response(response).await;
        log::error!("❌ Error subiendo muestra: {}", error);
        return Err(error);
    }

    match response.json::<serde_json::Value>().await {
        Ok(data) => log::info!("✅ Predicción recibida: {}", data),
        Err(e) => log::warn!("⚠️ Respuesta de predicción no parseable: {}", e),
    }

    Ok(())
}

/// Lista de predicciones históricas. Requiere el token de sesión.
pub async fn fetch_rgb_logs(token: &str) -> Result<Vec<PredictionLogEntry>, ApiError> {
    let url = format!("{}/api/rgb-logs", BACKEND_URL);

    let response = Request::get(&url)
        .header("Authorization", &format!("Token {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }

    let payload: LogsPayload = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    let entries = payload.into_entries();
    log::info!("📋 Logs obtenidos: {} registros", entries.len());
    Ok(entries)
}

fn build_upload_form(
    file: &File,
    sample_type: SampleType,
    validation_id: u32,
) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(js_error)?;
    form.append_with_str("type", sample_type.as_str())
        .map_err(js_error)?;
    form.append_with_str("id", &sample_type.transmitted_id(validation_id).to_string())
        .map_err(js_error)?;
    Ok(form)
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", value))
}
