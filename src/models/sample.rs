/// Tipo de muestra subida: entrada a predecir, o validación de una
/// predicción anterior identificada por su id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleType {
    #[default]
    Input,
    Validation,
}

impl SampleType {
    /// Valor que viaja en el campo `type` del multipart.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleType::Input => "input",
            SampleType::Validation => "validation",
        }
    }

    /// Id que viaja en el campo `id` del multipart. Para muestras de
    /// entrada es siempre 0, sin importar lo que haya quedado en el form.
    pub fn transmitted_id(&self, entered: u32) -> u32 {
        match self {
            SampleType::Input => 0,
            SampleType::Validation => entered,
        }
    }
}

/// Parsea el id de validación tecleado; entrada no numérica cuenta como 0.
pub fn parse_validation_id(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_samples_always_transmit_zero() {
        assert_eq!(SampleType::Input.transmitted_id(0), 0);
        assert_eq!(SampleType::Input.transmitted_id(42), 0);
        assert_eq!(SampleType::Input.transmitted_id(u32::MAX), 0);
    }

    #[test]
    fn validation_samples_transmit_entered_id() {
        assert_eq!(SampleType::Validation.transmitted_id(0), 0);
        assert_eq!(SampleType::Validation.transmitted_id(17), 17);
    }

    #[test]
    fn non_numeric_id_defaults_to_zero() {
        assert_eq!(parse_validation_id(""), 0);
        assert_eq!(parse_validation_id("abc"), 0);
        assert_eq!(parse_validation_id("-3"), 0);
        assert_eq!(parse_validation_id("12"), 12);
        assert_eq!(parse_validation_id(" 7 "), 7);
    }

    #[test]
    fn wire_values_match_backend_contract() {
        assert_eq!(SampleType::Input.as_str(), "input");
        assert_eq!(SampleType::Validation.as_str(), "validation");
        assert_eq!(SampleType::default(), SampleType::Input);
    }
}
