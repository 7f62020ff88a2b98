use rchat_types::completion::{Request, Response};
use serde::{Deserialize, Serialize};

use error::Error;

pub mod anthropic;
pub mod api_key;
pub mod azure;
pub mod builder;
pub mod config;
pub mod env;
pub mod error;
pub mod gemini;
pub mod openai;
pub mod options;

pub use builder::ProviderBuilder;

/// Vendor backends a [`ProviderBuilder`] can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "azure_openai")]
    AzureOpenAi,
    Claude,
    Gemini,
    Grok,
}

impl Provider {
    pub const ALL: [Provider; 5] = [
        Self::OpenAi,
        Self::AzureOpenAi,
        Self::Claude,
        Self::Gemini,
        Self::Grok,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::AzureOpenAi => "azure_openai",
            Self::Claude => "claude",
            Self::Gemini => "gemini",
            Self::Grok => "grok",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown provider: {s}"))
    }
}

/// A configured chat-completion client.
#[derive(Debug)]
pub enum Client {
    OpenAi(openai::client::Client),
    AzureOpenAi(azure::client::Client),
    Anthropic(anthropic::client::Client),
    Gemini(gemini::client::Client),
}

impl Client {
    pub fn provider(&self) -> Provider {
        match self {
            Self::OpenAi(_) => Provider::OpenAi,
            Self::AzureOpenAi(_) => Provider::AzureOpenAi,
            Self::Anthropic(_) => Provider::Claude,
            Self::Gemini(_) => Provider::Gemini,
        }
    }

    pub async fn complete<R>(&self, request: R) -> Result<Response, Error>
    where
        R: Into<Request>,
    {
        let request = request.into();
        Ok(match self {
            Self::OpenAi(client) => client.complete(&request).await,
            Self::AzureOpenAi(client) => client.complete(&request).await,
            Self::Anthropic(client) => client.complete(&request).await,
            Self::Gemini(client) => client.complete(&request).await,
        }?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_names() {
        for provider in Provider::ALL {
            assert_eq!(provider.as_str().parse::<Provider>(), Ok(provider));
            assert_eq!(
                serde_json::to_value(provider).unwrap(),
                serde_json::json!(provider.as_str())
            );
        }
        assert_eq!("Azure_OpenAI".parse::<Provider>(), Ok(Provider::AzureOpenAi));
        assert!("mistral".parse::<Provider>().is_err());
    }
}
