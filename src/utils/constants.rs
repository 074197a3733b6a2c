/// URL base del backend de predicción.
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000 (por defecto)
/// - Producción: via BACKEND_URL env var (ver build.rs / .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Clave de localStorage donde persiste el token de sesión.
pub const STORAGE_KEY_TOKEN: &str = "leatherdyebot_token";
