// ============================================================================
// SESSION CONTEXT - Compartir estado de sesión entre componentes
// ============================================================================
// Usa Context API de Yew para inyectar la sesión explícitamente, en vez
// de lookups globales.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session, UseSessionHandle};

/// Provider que envuelve la app y proporciona el estado de sesión.
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session_handle = use_session();

    html! {
        <ContextProvider<UseSessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Acceso al estado de sesión inyectado por el provider.
#[hook]
pub fn use_session_context() -> UseSessionHandle {
    use_context::<UseSessionHandle>().expect("SessionContextProvider no montado")
}
