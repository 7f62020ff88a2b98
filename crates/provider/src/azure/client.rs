use reqwest::header::{HeaderMap, HeaderValue};
use rchat_types::completion::{Request, Response};

use super::{AUTHORIZATION_HEADER_KEY, DEFAULT_API_VERSION};
use crate::azure::config::Config;
use crate::error::{ConfigurationError, Error};
use crate::openai::types::{ChatRequest, ChatResponse};
use crate::Provider;

#[derive(Debug)]
pub struct Client {
    config: Config,
    caller: rchat_caller::Client,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(config.api_key.expose()).map_err(|source| {
            ConfigurationError::Header {
                provider: Provider::AzureOpenAi,
                source,
            }
        })?;
        api_key.set_sensitive(true);
        headers.insert(AUTHORIZATION_HEADER_KEY, api_key);
        let caller = rchat_caller::Client::new(headers);
        Ok(Self { config, caller })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The deployment's chat completions endpoint.
    pub fn url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.azure_endpoint.trim_end_matches('/'),
            self.config.azure_deployment,
            self.config
                .api_version
                .as_deref()
                .unwrap_or(DEFAULT_API_VERSION),
        )
    }

    pub async fn complete(&self, request: &Request) -> Result<Response, rchat_caller::Error> {
        // The deployment fixes the model; `model_name` is only sent when given.
        let body = ChatRequest::new(
            request,
            self.config.model_name.clone(),
            self.config.temperature,
        );
        let response: ChatResponse = self.caller.post(&self.url(), body).await?;
        Ok(response.into())
    }
}
