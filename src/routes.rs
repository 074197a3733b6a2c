use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{InputForm, LoginScreen, RequireAuth, RgbLogViewer};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/rgblog")]
    RgbLog,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Mapea rutas a vistas; las protegidas van envueltas en el guard.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <RequireAuth>
                <InputForm />
            </RequireAuth>
        },
        Route::RgbLog => html! {
            <RequireAuth>
                <RgbLogViewer />
            </RequireAuth>
        },
        Route::Login => html! { <LoginScreen /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}
