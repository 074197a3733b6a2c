pub mod session_context;
pub mod use_dispense_poller;
pub mod use_rgb_logs;
pub mod use_session;

pub use session_context::{use_session_context, SessionContextProvider};
pub use use_dispense_poller::use_dispense_poller;
pub use use_rgb_logs::use_rgb_logs;
pub use use_session::{use_session, UseSessionHandle};
