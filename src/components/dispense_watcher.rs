use yew::prelude::*;

use crate::hooks::use_dispense_poller;

/// Componente sin UI que mantiene vivo el poller del dispensador mientras
/// la app está montada, sin importar qué vista esté activa.
#[function_component(DispenseWatcher)]
pub fn dispense_watcher() -> Html {
    use_dispense_poller();
    html! {}
}
