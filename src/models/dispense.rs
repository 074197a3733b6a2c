use serde::{Deserialize, Serialize};

/// Estado transitorio del dispensador físico de tinte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DispenseStatus {
    #[serde(default)]
    pub dispensed: bool,
}

impl DispenseStatus {
    /// Un tick del poller debe notificar y pedir reset exactamente cuando
    /// el backend reporta `dispensed == true`. El reset deja el estado
    /// remoto en `false`, así el siguiente tick no vuelve a notificar.
    pub fn needs_reset(&self) -> bool {
        self.dispensed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_status_payload() {
        let status: DispenseStatus = serde_json::from_str(r#"{"dispensed": true}"#).unwrap();
        assert!(status.dispensed);

        let status: DispenseStatus = serde_json::from_str(r#"{"dispensed": false}"#).unwrap();
        assert!(!status.dispensed);
    }

    #[test]
    fn tick_sequence_resets_exactly_once() {
        let ticks = [false, true, false].map(|dispensed| DispenseStatus { dispensed });
        let resets = ticks.iter().filter(|s| s.needs_reset()).count();
        assert_eq!(resets, 1);
    }
}
