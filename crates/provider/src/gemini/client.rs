use reqwest::header::{HeaderMap, HeaderValue};
use rchat_types::completion::{Request, Response};

use super::{API_BASE, AUTHORIZATION_HEADER_KEY};
use crate::error::{ConfigurationError, Error};
use crate::gemini::config::Config;
use crate::gemini::types::{GenerateContentRequest, GenerateContentResponse};
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
        let mut api_key = HeaderValue::from_str(config.google_api_key.expose()).map_err(
            |source| ConfigurationError::Header {
                provider: Provider::Gemini,
                source,
            },
        )?;
        api_key.set_sensitive(true);
        headers.insert(AUTHORIZATION_HEADER_KEY, api_key);
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

    pub fn url(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.api_base, model)
    }

    pub async fn complete(&self, request: &Request) -> Result<Response, rchat_caller::Error> {
        let model = request.model.as_deref().unwrap_or(&self.config.model);
        let body = GenerateContentRequest::new(request, self.config.temperature);
        let response: GenerateContentResponse = self.caller.post(&self.url(model), body).await?;
        Ok(response.into_response(model))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use rchat_types::completion::StopReason;

    fn client() -> Client {
        Client::new(Config {
            google_api_key: "g-key".into(),
            model: "gemini-pro".into(),
            temperature: 0.7,
        })
        .unwrap()
    }

    #[test]
    fn test_url() {
        let client = client();
        let expected =
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";
        assert_eq!(client.url("gemini-pro"), expected);
        assert_eq!(client.url("models/gemini-pro"), expected);
    }

    #[tokio::test]
    async fn test_complete_on_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .and(header("x-goog-api-key", "g-key"))
            .and(body_partial_json(json!({
                "contents": [{"role": "user", "parts": [{"text": "hello"}]}],
                "generationConfig": {"temperature": 0.7}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "hi"}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 1, "candidatesTokenCount": 1}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client()
            .with_api_base(format!("{}/v1beta", server.uri()))
            .complete(&"hello".into())
            .await
            .unwrap();
        assert_eq!(response.text(), "hi");
        assert_eq!(response.model, "gemini-pro");
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
    }
}
