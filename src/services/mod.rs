pub mod auth_service;
pub mod dispense_service;
pub mod error;
pub mod prediction_service;

pub use auth_service::perform_login;
pub use dispense_service::{fetch_dispense_status, reset_dispense};
pub use error::ApiError;
pub use prediction_service::{fetch_rgb_logs, submit_sample};
