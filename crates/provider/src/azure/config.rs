use serde::Deserialize;

use crate::api_key::ApiKey;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub api_key: ApiKey,
    pub azure_endpoint: String,
    pub azure_deployment: String,
    #[serde(default)]
    pub api_version: Option<String>,
    pub temperature: f32,
    #[serde(default)]
    pub model_name: Option<String>,
}
