//! OpenAI chat completions.
pub mod client;
pub mod config;
pub mod types;

/// Default v1 API base url.
pub const API_BASE: &str = "https://api.openai.com/v1";
