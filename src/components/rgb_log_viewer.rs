use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_rgb_logs;
use crate::models::{FetchState, PredictionLogEntry};
use crate::routes::Route;
use crate::utils::format_timestamp;

/// Dashboard de predicciones: una tabla con los logs tal como los manda
/// el backend, sin reordenar ni paginar.
#[function_component(RgbLogViewer)]
pub fn rgb_log_viewer() -> Html {
    let logs = use_rgb_logs();
    let navigator = use_navigator().expect("router no montado");

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::Home);
        })
    };

    let body = match &*logs {
        FetchState::Idle | FetchState::Pending => html! {
            <p class="status">{"Loading logs..."}</p>
        },
        FetchState::Failed(message) => html! {
            <p class="status error">{format!("❌ {}", message)}</p>
        },
        FetchState::Success(entries) => html! {
            <>
                <p class="status success">{format!("✅ {} predictions loaded", entries.len())}</p>
                <table class="log-table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Red"}</th>
                            <th>{"Green"}</th>
                            <th>{"Blue"}</th>
                            <th>{"Swatch"}</th>
                            <th>{"Validated"}</th>
                            <th>{"Timestamp"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for entries.iter().map(render_row) }
                    </tbody>
                </table>
            </>
        },
    };

    html! {
        <div class="dashboard">
            <div class="dashboard-card">
                <h2>{"🎨 RGB Log Dashboard"}</h2>
                { body }
                <button type="button" class="btn-back" onclick={on_back}>
                    {"Back to Upload"}
                </button>
            </div>
        </div>
    }
}

fn render_row(entry: &PredictionLogEntry) -> Html {
    html! {
        <tr key={entry.id}>
            <td>{entry.id}</td>
            <td>{entry.red}</td>
            <td>{entry.green}</td>
            <td>{entry.blue}</td>
            <td><div class="swatch" style={entry.swatch_style()}></div></td>
            <td>{ if entry.is_validated { "✓" } else { "-" } }</td>
            <td>{format_timestamp(&entry.timestamp)}</td>
        </tr>
    }
}
