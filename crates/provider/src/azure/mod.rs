//! Azure-hosted OpenAI deployments.
pub mod client;
pub mod config;

/// Used when neither the environment nor the caller pins an API version.
pub const DEFAULT_API_VERSION: &str = "2024-02-01";
/// Auth header key.
const AUTHORIZATION_HEADER_KEY: &str = "api-key";
