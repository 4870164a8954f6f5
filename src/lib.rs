pub mod api;
pub mod error;
pub mod ui;

// Re-export commonly used items
pub use api::{fetch_meme, fetch_meme_from, MemeRecord};
pub use error::{ApiError, ApiResult};
