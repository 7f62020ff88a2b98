use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{map_deserialization_error, map_error_body, Error};
use super::{CLIENT_ID, CLIENT_ID_HEADER_KEY};

#[derive(Debug, Clone)]
pub struct Client {
    pub http_client: reqwest::Client,
    pub backoff: backoff::ExponentialBackoff,
    pub headers: HeaderMap,
}

impl Client {
    /// Wraps vendor auth headers with the JSON and client-id headers every call needs.
    pub fn new(mut headers: HeaderMap) -> Self {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Ok(client_id) = HeaderValue::from_str(CLIENT_ID.as_str()) {
            headers.insert(CLIENT_ID_HEADER_KEY, client_id);
        }
        Self {
            http_client: reqwest::Client::new(),
            backoff: Default::default(),
            headers,
        }
    }

    pub fn with_backoff(mut self, backoff: backoff::ExponentialBackoff) -> Self {
        self.backoff = backoff;
        self
    }

    pub async fn post<I, O>(&self, uri: &str, request: I) -> Result<O, Error>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        tracing::debug!("POST {}", uri);
        let request = self
            .http_client
            .post(uri)
            .headers(self.headers.clone())
            .body(serde_json::to_vec(&request)?)
            .build()?;

        self.execute(request).await
    }

    /// Sends `request`, retrying with backoff while the vendor answers 429.
    async fn execute<O>(&self, request: reqwest::Request) -> Result<O, Error>
    where
        O: DeserializeOwned,
    {
        let client = self.http_client.clone();

        backoff::future::retry(self.backoff.clone(), || async {
            // Byte bodies always clone; a streaming body would not be retryable.
            let attempt = request
                .try_clone()
                .ok_or_else(|| Error::InvalidArgument("request body is not cloneable".into()))
                .map_err(backoff::Error::Permanent)?;
            let response = client
                .execute(attempt)
                .await
                .map_err(Error::Reqwest)
                .map_err(backoff::Error::Permanent)?;

            let status = response.status();
            let bytes = response
                .bytes()
                .await
                .map_err(Error::Reqwest)
                .map_err(backoff::Error::Permanent)?;

            if !status.is_success() {
                let err = map_error_body(status.as_u16(), bytes.as_ref());

                // Retry if rate limited
                if status.as_u16() == 429 {
                    tracing::warn!("rate limited, retrying: {}", err);
                    return Err(backoff::Error::Transient {
                        err,
                        retry_after: None,
                    });
                } else {
                    return Err(backoff::Error::Permanent(err));
                }
            }

            let response: O = serde_json::from_slice(bytes.as_ref())
                .map_err(|e| map_deserialization_error(e, bytes.as_ref()))
                .map_err(backoff::Error::Permanent)?;
            Ok(response)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        answer: String,
    }

    fn quick_backoff() -> backoff::ExponentialBackoff {
        backoff::ExponentialBackoff {
            initial_interval: Duration::from_millis(10),
            max_interval: Duration::from_millis(50),
            max_elapsed_time: Some(Duration::from_secs(2)),
            ..Default::default()
        }
    }

    fn client() -> Client {
        Client::new(HeaderMap::new()).with_backoff(quick_backoff())
    }

    #[test]
    fn test_default_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("secret"));
        let client = Client::new(headers);
        assert_eq!(client.headers["x-api-key"], "secret");
        assert_eq!(client.headers[CONTENT_TYPE], "application/json");
        assert_eq!(client.headers[ACCEPT], "application/json");
        assert!(client.headers.contains_key(CLIENT_ID_HEADER_KEY));
    }

    #[tokio::test]
    async fn test_post_sends_json_with_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(header("content-type", "application/json"))
            .and(header(CLIENT_ID_HEADER_KEY, CLIENT_ID.as_str()))
            .and(body_json(json!({"question": "ping"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "pong"})))
            .expect(1)
            .mount(&server)
            .await;

        let echo: Echo = client()
            .post(&format!("{}/echo", server.uri()), json!({"question": "ping"}))
            .await
            .unwrap();
        assert_eq!(echo.answer, "pong");
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_rate_limit_is_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"message": "Rate limit reached", "type": "requests"}
            })))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "later"})))
            .expect(1)
            .mount(&server)
            .await;

        let echo: Echo = client()
            .post(&format!("{}/echo", server.uri()), json!({}))
            .await
            .unwrap();
        assert_eq!(echo.answer, "later");
        assert!(logs_contain("rate limited, retrying"));
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "message": "Invalid 'messages': empty array.",
                    "type": "invalid_request_error",
                    "param": "messages",
                    "code": "empty_array"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = client()
            .post::<_, Echo>(&format!("{}/echo", server.uri()), json!({}))
            .await
            .unwrap_err();
        let Error::ApiError(api) = err else {
            panic!("expected api error");
        };
        assert_eq!(api.r#type.as_deref(), Some("invalid_request_error"));
        assert_eq!(api.message, "Invalid 'messages': empty array.");
        server.verify().await;
    }

    #[tokio::test]
    async fn test_unrecognised_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client()
            .post::<_, Echo>(&server.uri(), json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Status { status: 502, ref body } if body == "bad gateway"));
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
            .mount(&server)
            .await;

        let err = client()
            .post::<_, Echo>(&server.uri(), json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::JsonDeserialize(_)));
    }
}
