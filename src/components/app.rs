use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::DispenseWatcher;
use crate::hooks::SessionContextProvider;
use crate::routes::{switch, Route};

/// Raíz de la app: provider de sesión + router + poller del dispensador.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <BrowserRouter>
                <DispenseWatcher />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionContextProvider>
    }
}
