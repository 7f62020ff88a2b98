use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use rchat_types::completion::{Request, Response};

use crate::error::{ConfigurationError, Error};
use crate::openai::config::Config;
use crate::openai::types::{ChatRequest, ChatResponse};
use crate::openai::API_BASE;
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
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.openai_api_key.expose()))
            .map_err(|source| ConfigurationError::Header {
                provider: Provider::OpenAi,
                source,
            })?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        let caller = rchat_caller::Client::new(headers);
        Ok(Self {
            config,
            api_base: API_BASE.to_string(),
            caller,
        })
    }

    /// Points the client at a compatible endpoint instead of [`API_BASE`].
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn complete(&self, request: &Request) -> Result<Response, rchat_caller::Error> {
        let body = ChatRequest::new(
            request,
            Some(self.config.model_name.clone()),
            self.config.temperature,
        );
        let response: ChatResponse = self
            .caller
            .post(&format!("{}/chat/completions", self.api_base), body)
            .await?;
        Ok(response.into())
    }
}
