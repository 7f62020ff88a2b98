//! Google Gemini `generateContent`.
pub mod client;
pub mod config;
pub mod types;

pub const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Auth header key.
const AUTHORIZATION_HEADER_KEY: &str = "x-goog-api-key";
