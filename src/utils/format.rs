use chrono::DateTime;

/// Formatea un timestamp ISO-8601 del backend para mostrarlo en la tabla.
/// Si no parsea, se muestra el string crudo tal cual llegó.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(datetime) => datetime.format("%d/%m/%Y %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso8601_timestamps() {
        assert_eq!(
            format_timestamp("2025-01-01T00:00:00Z"),
            "01/01/2025 00:00:00"
        );
        assert_eq!(
            format_timestamp("2025-06-15T18:30:05+02:00"),
            "15/06/2025 18:30:05"
        );
    }

    #[test]
    fn falls_back_to_raw_string() {
        assert_eq!(format_timestamp("hace un rato"), "hace un rato");
        assert_eq!(format_timestamp(""), "");
    }
}
