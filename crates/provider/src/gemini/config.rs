use serde::Deserialize;

use crate::api_key::ApiKey;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub google_api_key: ApiKey,
    pub model: String,
    pub temperature: f32,
}
