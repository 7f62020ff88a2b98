use serde::Deserialize;

use crate::api_key::ApiKey;

/// Configuration for the Anthropic client.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub anthropic_api_key: ApiKey,
    pub model: String,
    pub temperature: f32,
}
