use reqwest::header::{HeaderMap, HeaderValue};
use rchat_types::completion::{Request, Response};

use crate::anthropic::config::Config;
use crate::anthropic::types::{MessagesRequest, MessagesResponse};
use crate::anthropic::{API_BASE, API_VERSION, API_VERSION_HEADER_KEY, AUTHORIZATION_HEADER_KEY};
use crate::error::{ConfigurationError, Error};
use crate::Provider;

#[derive(Debug)]
pub struct Client {
    config: Config,
    api_base: String,
    caller: rchat_caller::Client,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(config.anthropic_api_key.expose()).map_err(
            |source| ConfigurationError::Header {
                provider: Provider::Claude,
                source,
            },
        )?;
        api_key.set_sensitive(true);
        headers.insert(AUTHORIZATION_HEADER_KEY, api_key);
        headers.insert(API_VERSION_HEADER_KEY, HeaderValue::from_static(API_VERSION));
        let caller = rchat_caller::Client::new(headers);
        Ok(Self {
            config,
            api_base: API_BASE.to_string(),
            caller,
        })
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn complete(&self, request: &Request) -> Result<Response, rchat_caller::Error> {
        let body = MessagesRequest::new(request, &self.config.model, self.config.temperature);
        tracing::debug!("request: {:?}", body);
        let response: MessagesResponse = self
            .caller
            .post(&format!("{}/v1/messages", self.api_base), body)
            .await?;
        Ok(response.into())
    }
}
