use crate::Provider;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("{0} support not implemented")]
    Unsupported(Provider),

    #[error("caller error: {0}")]
    Caller(#[from] rchat_caller::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("missing {} in environment", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("no provider configured; select one first")]
    NoProvider,

    #[error("invalid {provider} configuration: {source}")]
    Invalid {
        provider: Provider,
        source: serde_json::Error,
    },

    #[error("invalid {provider} temperature {value}; must be a finite number")]
    Temperature { provider: Provider, value: f64 },

    #[error("invalid {provider} header value: {source}")]
    Header {
        provider: Provider,
        source: reqwest::header::InvalidHeaderValue,
    },
}

impl Error {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}
