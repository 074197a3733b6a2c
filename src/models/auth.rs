use serde::{Deserialize, Serialize};

/// Respuesta del endpoint de login.
///
/// En éxito el backend devuelve `{token}`; en fallo devuelve `{message}`
/// con el motivo. Ambos campos son opcionales porque la misma estructura
/// parsea las dos variantes.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_payload() {
        let response: LoginResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(response.token.as_deref(), Some("abc123"));
        assert!(response.message.is_none());
    }

    #[test]
    fn parses_failure_payload() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
        assert!(response.token.is_none());
        assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
    }
}
