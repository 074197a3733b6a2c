use yew::prelude::*;

use crate::utils::{clear_token, load_token, save_token};

/// Estado de sesión compartido por contexto. El token lo escriben solo
/// los callbacks de login/logout; el resto de la app lo lee.
#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    token: UseStateHandle<Option<String>>,
    pub login: Callback<String>,
    pub logout: Callback<()>,
}

impl UseSessionHandle {
    pub fn token(&self) -> Option<String> {
        (*self.token).clone()
    }

    /// Chequeo síncrono, evaluado en cada render: un token borrado surte
    /// efecto en la siguiente navegación.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    // El token de una sesión anterior sobrevive recargas vía localStorage
    let token = use_state(load_token);

    let login = {
        let token = token.clone();
        Callback::from(move |new_token: String| {
            if let Err(e) = save_token(&new_token) {
                log::error!("❌ Error persistiendo token: {}", e);
            }
            token.set(Some(new_token));
        })
    };

    let logout = {
        let token = token.clone();
        Callback::from(move |_| {
            if let Err(e) = clear_token() {
                log::error!("❌ Error limpiando token: {}", e);
            }
            log::info!("👋 Logout");
            token.set(None);
        })
    };

    UseSessionHandle {
        token,
        login,
        logout,
    }
}
