pub mod app;
pub mod dispense_watcher;
pub mod input_form;
pub mod login_screen;
pub mod rgb_log_viewer;
pub mod route_guard;

pub use app::App;
pub use dispense_watcher::DispenseWatcher;
pub use input_form::InputForm;
pub use login_screen::LoginScreen;
pub use rgb_log_viewer::RgbLogViewer;
pub use route_guard::RequireAuth;
