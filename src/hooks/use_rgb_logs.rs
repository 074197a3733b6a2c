use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::session_context::use_session_context;
use crate::models::{FetchState, PredictionLogEntry};
use crate::services::fetch_rgb_logs;

/// Carga la lista de logs al montar la vista. Cada montaje dispara un
/// fetch fresco; la lista nunca se cachea entre navegaciones.
#[hook]
pub fn use_rgb_logs() -> UseStateHandle<FetchState<Vec<PredictionLogEntry>>> {
    let state = use_state(|| FetchState::Idle);
    let session = use_session_context();

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let mounted = Rc::new(Cell::new(true));
            let token = session.token().unwrap_or_default();

            state.set(FetchState::Pending);
            {
                let mounted = mounted.clone();
                let state = state.clone();
                let session = session.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = fetch_rgb_logs(&token).await;

                    // La vista ya se desmontó: el resultado se descarta
                    if !mounted.get() {
                        log::info!("ℹ️ Vista de logs desmontada, resultado descartado");
                        return;
                    }

                    match result {
                        Ok(logs) => {
                            state.set(FetchState::Success(logs));
                        }
                        Err(e) if e.is_unauthorized() => {
                            log::error!("❌ Token rechazado (401), cerrando sesión");
                            state.set(FetchState::Failed(e.to_string()));
                            session.logout.emit(());
                        }
                        Err(e) => {
                            log::error!("❌ Error obteniendo logs: {}", e);
                            state.set(FetchState::Failed(e.to_string()));
                        }
                    }
                });
            }

            move || mounted.set(false)
        });
    }

    state
}
