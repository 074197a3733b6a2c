/// Resultado etiquetado de una operación de red, desacoplado de la
/// mecánica del fetch: las vistas renderizan avisos a partir de esta
/// enum, no de promesas.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Pending,
    Success(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_reports_in_flight() {
        assert!(FetchState::<()>::Pending.is_pending());
        assert!(!FetchState::<()>::Idle.is_pending());
        assert!(!FetchState::Success(()).is_pending());
        assert!(!FetchState::<()>::Failed("boom".to_string()).is_pending());
    }
}
