//! API client for the external meme service

pub mod meme;

// Re-exports for public API convenience
pub use meme::{fetch_meme, fetch_meme_from, fetch_meme_from_async, MemeRecord, MEME_API_BASE};
