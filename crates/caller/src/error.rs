//! Definition of errors used in the library.
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying error from reqwest library after an API call was made
    #[error("http error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// The vendor returned an error object with details of the failure
    #[error("{0}")]
    ApiError(ApiError),
    /// Non-success status whose body was not a recognisable error object
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    /// Error when a response cannot be deserialized into a Rust type
    #[error("failed to deserialize api response: {0}")]
    JsonDeserialize(serde_json::Error),
    #[error("failed to serialize request: {0}")]
    JsonSerialize(#[from] serde_json::Error),
    #[error("invalid args: {0}")]
    InvalidArgument(String),
}

/// Error object returned by the vendor APIs.
///
/// OpenAI and Azure put the category in `type`, Gemini in `status`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(rename = "type", alias = "status")]
    pub r#type: Option<String>,
    pub param: Option<serde_json::Value>,
    pub code: Option<serde_json::Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.r#type {
            Some(kind) => write!(f, "{}: {}", kind, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Every supported vendor wraps its error object in an `error` field.
#[derive(Debug, Deserialize)]
pub struct WrappedError {
    pub error: ApiError,
}

pub(crate) fn map_deserialization_error(e: serde_json::Error, bytes: &[u8]) -> Error {
    tracing::error!(
        "failed deserialization of: {}",
        String::from_utf8_lossy(bytes)
    );
    Error::JsonDeserialize(e)
}

/// Decode the body of a non-success response.
pub(crate) fn map_error_body(status: u16, bytes: &[u8]) -> Error {
    match serde_json::from_slice::<WrappedError>(bytes) {
        Ok(wrapped) => Error::ApiError(wrapped.error),
        Err(_) => Error::Status {
            status,
            body: String::from_utf8_lossy(bytes).into_owned(),
        },
    }
}
