use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::services::{fetch_dispense_status, reset_dispense};

const POLL_INTERVAL_MS: u32 = 3_000;

/// Poller del dispensador físico: cada 3 segundos consulta el estado y,
/// si hubo dispensado, notifica una sola vez y resetea el estado remoto.
/// Los fallos de un tick se loguean y se descartan; el intervalo sigue
/// con la misma cadencia, sin backoff.
#[hook]
pub fn use_dispense_poller() {
    let interval_handle = use_mut_ref(|| None::<Interval>);
    let in_flight = use_mut_ref(|| false);

    use_effect_with((), move |_| {
        let tick_in_flight = in_flight.clone();
        let interval = Interval::new(POLL_INTERVAL_MS, move || {
            // Un tick que aún no resolvió no se solapa con el siguiente
            if *tick_in_flight.borrow() {
                return;
            }
            *tick_in_flight.borrow_mut() = true;

            let tick_in_flight = tick_in_flight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                poll_once().await;
                *tick_in_flight.borrow_mut() = false;
            });
        });

        *interval_handle.borrow_mut() = Some(interval);
        log::info!("⏰ Poller de dispensado activo cada {} ms", POLL_INTERVAL_MS);

        move || {
            // Cleanup: el timer se cancela al desmontar la vista anfitriona
            *interval_handle.borrow_mut() = None;
        }
    });
}

async fn poll_once() {
    match fetch_dispense_status().await {
        Ok(status) if status.needs_reset() => {
            log::info!("✅ Dispensado completado, notificando y reseteando");
            notify_dispensed();
            if let Err(e) = reset_dispense().await {
                log::error!("❌ Error reseteando dispensador: {}", e);
            }
        }
        Ok(_) => {}
        Err(e) => {
            log::error!("❌ Error consultando dispensador: {}", e);
        }
    }
}

fn notify_dispensed() {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message("✅ Dye dispensed! You can collect your sample.");
    }
}
