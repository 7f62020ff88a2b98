use serde::Deserialize;

use crate::api_key::ApiKey;

/// Construction parameters, keyed as the builder resolves them.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub openai_api_key: ApiKey,
    pub model_name: String,
    pub temperature: f32,
}
