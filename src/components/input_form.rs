use web_sys::{File, HtmlInputElement, Url};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::{parse_validation_id, FetchState, SampleType};
use crate::routes::Route;
use crate::services::{submit_sample, ApiError};

/// Formulario de subida de muestras: archivo + tipo de muestra + id de
/// validación. En éxito el form vuelve exactamente al estado inicial; en
/// fallo se conservan archivo y selecciones para reintentar.
#[function_component(InputForm)]
pub fn input_form() -> Html {
    let file_input_ref = use_node_ref();
    let selected_file = use_state(|| None::<File>);
    let sample_type = use_state(SampleType::default);
    let validation_id = use_state(|| 0u32);
    let preview_url = use_state(|| None::<String>);
    let submission = use_state(|| FetchState::Idle);
    let navigator = use_navigator().expect("router no montado");

    let on_file_change = {
        let selected_file = selected_file.clone();
        let preview_url = preview_url.clone();
        let submission = submission.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = match e.target_dyn_into() {
                Some(input) => input,
                None => return,
            };
            let file = input.files().and_then(|files| files.get(0));

            // El preview anterior se revoca al elegir otro archivo
            if let Some(old) = (*preview_url).clone() {
                let _ = Url::revoke_object_url(&old);
            }

            let preview = file.as_ref().and_then(|f| {
                if f.type_().starts_with("image/") {
                    Url::create_object_url_with_blob(f).ok()
                } else {
                    None
                }
            });

            preview_url.set(preview);
            selected_file.set(file);
            submission.set(FetchState::Idle);
        })
    };

    let on_select_input = {
        let sample_type = sample_type.clone();
        let validation_id = validation_id.clone();
        Callback::from(move |_: Event| {
            sample_type.set(SampleType::Input);
            // Al volver a input, el id de validación pierde sentido
            validation_id.set(0);
        })
    };

    let on_select_validation = {
        let sample_type = sample_type.clone();
        Callback::from(move |_: Event| {
            sample_type.set(SampleType::Validation);
        })
    };

    let on_id_input = {
        let validation_id = validation_id.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                validation_id.set(parse_validation_id(&input.value()));
            }
        })
    };

    let on_submit = {
        let file_input_ref = file_input_ref.clone();
        let selected_file = selected_file.clone();
        let sample_type = sample_type.clone();
        let validation_id = validation_id.clone();
        let preview_url = preview_url.clone();
        let submission = submission.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if submission.is_pending() {
                return;
            }

            // Validación local: sin archivo no hay request
            let file = match (*selected_file).clone() {
                Some(file) => file,
                None => {
                    submission.set(FetchState::Failed(
                        "⚠️ Please select a file to upload.".to_string(),
                    ));
                    return;
                }
            };

            let current_type = *sample_type;
            let current_id = *validation_id;

            let file_input_ref = file_input_ref.clone();
            let selected_file = selected_file.clone();
            let sample_type = sample_type.clone();
            let validation_id = validation_id.clone();
            let preview_url = preview_url.clone();
            let submission = submission.clone();

            submission.set(FetchState::Pending);
            wasm_bindgen_futures::spawn_local(async move {
                match submit_sample(&file, current_type, current_id).await {
                    Ok(()) => {
                        // Éxito: todos los campos vuelven al estado inicial
                        if let Some(url) = (*preview_url).clone() {
                            let _ = Url::revoke_object_url(&url);
                        }
                        if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }
                        selected_file.set(None);
                        sample_type.set(SampleType::Input);
                        validation_id.set(0);
                        preview_url.set(None);
                        submission.set(FetchState::Success(()));
                    }
                    Err(e) => {
                        let message = match &e {
                            ApiError::Network(_) => {
                                "❌ An error occurred. Check your connection.".to_string()
                            }
                            other => format!("❌ Upload failed: {}", other),
                        };
                        submission.set(FetchState::Failed(message));
                    }
                }
            });
        })
    };

    let on_go_dashboard = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::RgbLog);
        })
    };

    let notice = match &*submission {
        FetchState::Idle => html! {},
        FetchState::Pending => html! { <p class="status">{"Processing..."}</p> },
        FetchState::Success(_) => {
            html! { <p class="status success">{"✅ Sample uploaded successfully!"}</p> }
        }
        FetchState::Failed(message) => html! { <p class="status error">{message.clone()}</p> },
    };

    html! {
        <div class="upload-container">
            <h2>{"🎨 Smart LeatherDyeBot - Color Prediction"}</h2>
            <form class="upload-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="file-input">{"Upload Photo"}</label>
                    <input
                        id="file-input"
                        type="file"
                        accept="image/*"
                        ref={file_input_ref}
                        onchange={on_file_change}
                    />
                </div>

                {
                    if let Some(url) = (*preview_url).clone() {
                        html! {
                            <div class="preview-container">
                                <img src={url} alt="Preview" class="preview-image" />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="radio-group">
                    <label>
                        <input
                            type="radio"
                            name="sample-type"
                            value="input"
                            checked={*sample_type == SampleType::Input}
                            onchange={on_select_input}
                        />
                        <span class="radio-label">{"Input Sample"}</span>
                    </label>
                    <label>
                        <input
                            type="radio"
                            name="sample-type"
                            value="validation"
                            checked={*sample_type == SampleType::Validation}
                            onchange={on_select_validation}
                        />
                        <span class="radio-label">{"Validation Sample"}</span>
                    </label>
                </div>

                {
                    if *sample_type == SampleType::Validation {
                        html! {
                            <div class="form-group">
                                <label for="validation-id">{"Validation Sample ID"}</label>
                                <input
                                    id="validation-id"
                                    type="number"
                                    min="0"
                                    value={validation_id.to_string()}
                                    oninput={on_id_input}
                                />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <button type="submit" class="btn-submit" disabled={submission.is_pending()}>
                    {"🚀 Submit Sample"}
                </button>
                <button type="button" class="btn-dashboard" onclick={on_go_dashboard}>
                    {"Go to Dashboard"}
                </button>

                { notice }
            </form>
        </div>
    }
}
