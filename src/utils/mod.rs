pub mod constants;
pub mod format;
pub mod storage;

pub use constants::BACKEND_URL;
pub use format::format_timestamp;
pub use storage::{clear_token, load_token, save_token};
