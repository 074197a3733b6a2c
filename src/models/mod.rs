pub mod auth;
pub mod dispense;
pub mod fetch_state;
pub mod prediction;
pub mod sample;

pub use auth::LoginResponse;
pub use dispense::DispenseStatus;
pub use fetch_state::FetchState;
pub use prediction::{LogsPayload, PredictionLogEntry};
pub use sample::{parse_validation_id, SampleType};
