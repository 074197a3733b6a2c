use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session_context;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Envoltorio de vistas protegidas: sin token no se renderizan los hijos,
/// se redirige al login. El chequeo corre en cada render, sin cachear la
/// decisión.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session_context();

    if session.is_authenticated() {
        html! { <>{ props.children.clone() }</> }
    } else {
        log::info!("🔒 Navegación sin sesión, redirigiendo a login");
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}
