use gloo_net::http::Response;
use thiserror::Error;

/// Taxonomía de fallos de red del cliente. Los errores de validación
/// local (campos vacíos, archivo sin seleccionar) se cortan en las vistas
/// antes de llegar aquí.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Respuesta no-2xx del backend.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    /// El fetch en sí falló (sin respuesta).
    #[error("Network error: {0}")]
    Network(String),
    /// Respuesta 2xx con cuerpo que no parsea.
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }

    /// Construye el error de una respuesta no-2xx, usando el `message`
    /// del cuerpo cuando el backend lo manda.
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| response.status_text());
        ApiError::Http { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_message() {
        let error = ApiError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn only_401_counts_as_unauthorized() {
        let unauthorized = ApiError::Http {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        let forbidden = ApiError::Http {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!forbidden.is_unauthorized());
        assert!(!ApiError::Network("offline".to_string()).is_unauthorized());
    }
}
