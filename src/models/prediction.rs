use serde::{Deserialize, Serialize};

/// Registro histórico de una predicción de color.
///
/// El backend es el dueño de estos datos; el cliente solo lee snapshots
/// y los muestra en el orden en que llegan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionLogEntry {
    pub id: i64,
    #[serde(default)]
    pub predicted: Vec<f64>,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    #[serde(default)]
    pub difference: Vec<f64>,
    #[serde(default)]
    pub is_validated: bool,
    pub timestamp: String,
}

impl PredictionLogEntry {
    /// Estilo inline para el swatch de color de la fila.
    pub fn swatch_style(&self) -> String {
        format!(
            "background-color: rgb({}, {}, {})",
            self.red, self.green, self.blue
        )
    }
}

/// El backend responde `{"logs": [...]}` en la variante canónica, pero
/// algunos despliegues devuelven el array pelado. Aceptamos ambas formas.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LogsPayload {
    Wrapped { logs: Vec<PredictionLogEntry> },
    Bare(Vec<PredictionLogEntry>),
}

impl LogsPayload {
    pub fn into_entries(self) -> Vec<PredictionLogEntry> {
        match self {
            LogsPayload::Wrapped { logs } => logs,
            LogsPayload::Bare(logs) => logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"logs": [{"id":1, "predicted":[10,20,30], "red":10, "green":20, "blue":30, "difference":[1,2,3], "is_validated":true, "timestamp":"2025-01-01T00:00:00Z"}]}"#;

    #[test]
    fn parses_wrapped_payload() {
        let payload: LogsPayload = serde_json::from_str(SAMPLE).unwrap();
        let entries = payload.into_entries();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.id, 1);
        assert_eq!(entry.predicted, vec![10.0, 20.0, 30.0]);
        assert_eq!((entry.red, entry.green, entry.blue), (10, 20, 30));
        assert_eq!(entry.difference, vec![1.0, 2.0, 3.0]);
        assert!(entry.is_validated);
        assert_eq!(entry.timestamp, "2025-01-01T00:00:00Z");
    }

    #[test]
    fn parses_bare_array_payload() {
        let bare = r#"[{"id":7, "red":0, "green":128, "blue":255, "timestamp":"2025-02-02T12:00:00Z"}]"#;
        let payload: LogsPayload = serde_json::from_str(bare).unwrap();
        let entries = payload.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 7);
        assert!(!entries[0].is_validated);
        assert!(entries[0].predicted.is_empty());
    }

    #[test]
    fn swatch_style_matches_row_color() {
        let payload: LogsPayload = serde_json::from_str(SAMPLE).unwrap();
        let entry = &payload.into_entries()[0];
        assert_eq!(entry.swatch_style(), "background-color: rgb(10, 20, 30)");
    }
}
