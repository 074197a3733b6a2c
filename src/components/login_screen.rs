use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session_context;
use crate::models::FetchState;
use crate::routes::Route;
use crate::services::{perform_login, ApiError};

/// Espera antes de redirigir tras un login exitoso, para que el aviso de
/// éxito alcance a verse.
const REDIRECT_DELAY_MS: u32 = 1_500;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let status = use_state(|| FetchState::Idle);
    let session = use_session_context();
    let navigator = use_navigator().expect("router no montado");

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let status = status.clone();
        let session = session.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let username = username_input.value();
                let password = password_input.value();

                // Validación local: sin credenciales completas no hay request
                if let Err(message) = validate_credentials(&username, &password) {
                    status.set(FetchState::Failed(message.to_string()));
                    return;
                }

                let status = status.clone();
                let session = session.clone();
                let navigator = navigator.clone();

                status.set(FetchState::Pending);
                wasm_bindgen_futures::spawn_local(async move {
                    match perform_login(&username, &password).await {
                        Ok(token) => {
                            session.login.emit(token);
                            status.set(FetchState::Success(()));

                            Timeout::new(REDIRECT_DELAY_MS, move || {
                                navigator.push(&Route::Home);
                            })
                            .forget();
                        }
                        Err(ApiError::Http { message, .. }) => {
                            status.set(FetchState::Failed(format!("❌ {}", message)));
                        }
                        Err(e) => {
                            log::error!("❌ Error de conexión en login: {}", e);
                            status.set(FetchState::Failed(
                                "🚨 Server error. Try again later.".to_string(),
                            ));
                        }
                    }
                });
            }
        })
    };

    let notice = match &*status {
        FetchState::Idle => html! {},
        FetchState::Pending => html! { <p class="status">{"Logging in..."}</p> },
        FetchState::Success(_) => html! { <p class="status success">{"✅ Login successful!"}</p> },
        FetchState::Failed(message) => html! { <p class="status error">{message.clone()}</p> },
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🎨"}</div>
                    </div>
                    <h1>{"Smart LeatherDyeBot"}</h1>
                    <p>{"Sign in to continue"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            placeholder="👤 Username"
                            ref={username_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="🔑 Password"
                            ref={password_ref}
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={status.is_pending()}>
                        {"Login"}
                    </button>

                    { notice }
                </form>
            </div>
        </div>
    }
}

fn validate_credentials(username: &str, password: &str) -> Result<(), &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err("⚠️ Please enter both fields");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_are_rejected_locally() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("admin", "").is_err());
        assert!(validate_credentials("", "").is_err());
        assert!(validate_credentials("admin", "secret").is_ok());
    }
}
