use crate::config::ConfigMap;
use crate::env::{self, Env, ProcessEnv};
use crate::error::{ConfigurationError, Error};
use crate::options::{AzureOpenAiOptions, ClaudeOptions, GeminiOptions, GrokOptions, OpenAiOptions};
use crate::{anthropic, azure, gemini, openai, Client, Provider};

/// Selects a provider, resolves its credentials and builds a [`Client`].
///
/// Credentials are read when a provider is selected. A failed selection
/// leaves the builder untouched; a successful one replaces whatever was
/// selected before. The builder can be reused after [`ProviderBuilder::build`].
///
/// ```no_run
/// use rchat_provider::{builder::ProviderBuilder, options::OpenAiOptions};
///
/// let client = ProviderBuilder::new()
///     .with_openai(OpenAiOptions::default().model_name("gpt-4").temperature(0.2))?
///     .build()?;
/// # Ok::<(), rchat_provider::error::Error>(())
/// ```
pub struct ProviderBuilder<E = ProcessEnv> {
    env: E,
    selection: Option<(Provider, ConfigMap)>,
}

// The environment holds raw credentials and is never printed.
impl<E> std::fmt::Debug for ProviderBuilder<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderBuilder")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl ProviderBuilder<ProcessEnv> {
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl Default for ProviderBuilder<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Env> ProviderBuilder<E> {
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            selection: None,
        }
    }

    pub fn provider(&self) -> Option<Provider> {
        self.selection.as_ref().map(|(provider, _)| *provider)
    }

    pub fn config(&self) -> Option<&ConfigMap> {
        self.selection.as_ref().map(|(_, config)| config)
    }

    pub fn with_openai(&mut self, options: OpenAiOptions) -> Result<&mut Self, Error> {
        self.select_keyed(
            Provider::OpenAi,
            env::OPENAI_API_KEY,
            "openai_api_key",
            "model_name",
            options.model_name,
            options.temperature,
        )
    }

    pub fn with_azure_openai(&mut self, options: AzureOpenAiOptions) -> Result<&mut Self, Error> {
        check_temperature(Provider::AzureOpenAi, options.temperature)?;
        let mut missing = Vec::new();
        let api_key = self.require(env::AZURE_OPENAI_API_KEY, &mut missing);
        let endpoint = self.require(env::AZURE_OPENAI_ENDPOINT, &mut missing);
        let deployment = match options.deployment_name.filter(|name| !name.is_empty()) {
            Some(name) => Some(name),
            None => self.require(env::AZURE_OPENAI_DEPLOYMENT_NAME, &mut missing),
        };
        let api_version = self.env.non_empty(env::AZURE_OPENAI_API_VERSION);

        let (Some(api_key), Some(endpoint), Some(deployment)) = (api_key, endpoint, deployment)
        else {
            return Err(ConfigurationError::Missing(missing).into());
        };

        let mut config = ConfigMap::new();
        config
            .insert("api_key", api_key)
            .insert("azure_endpoint", endpoint)
            .insert("azure_deployment", deployment)
            .insert_opt("api_version", api_version)
            .insert("temperature", options.temperature)
            .insert_opt("model_name", options.model_name);
        Ok(self.select(Provider::AzureOpenAi, config))
    }

    pub fn with_claude(&mut self, options: ClaudeOptions) -> Result<&mut Self, Error> {
        self.select_keyed(
            Provider::Claude,
            env::ANTHROPIC_API_KEY,
            "anthropic_api_key",
            "model",
            options.model,
            options.temperature,
        )
    }

    pub fn with_gemini(&mut self, options: GeminiOptions) -> Result<&mut Self, Error> {
        self.select_keyed(
            Provider::Gemini,
            env::GOOGLE_API_KEY,
            "google_api_key",
            "model",
            options.model,
            options.temperature,
        )
    }

    /// Grok credentials are validated like any other, but [`ProviderBuilder::build`]
    /// refuses to construct a client for it.
    pub fn with_grok(&mut self, options: GrokOptions) -> Result<&mut Self, Error> {
        self.select_keyed(
            Provider::Grok,
            env::GROK_API_KEY,
            "grok_api_key",
            "model",
            options.model,
            options.temperature,
        )
    }

    /// Constructs the client for the most recent successful selection.
    pub fn build(&self) -> Result<Client, Error> {
        let (provider, config) = self
            .selection
            .as_ref()
            .ok_or(ConfigurationError::NoProvider)?;
        tracing::debug!("building {} client", provider);

        let client = match provider {
            Provider::OpenAi => Client::OpenAi(openai::client::Client::new(config.decode(*provider)?)?),
            Provider::AzureOpenAi => {
                Client::AzureOpenAi(azure::client::Client::new(config.decode(*provider)?)?)
            }
            Provider::Claude => {
                Client::Anthropic(anthropic::client::Client::new(config.decode(*provider)?)?)
            }
            Provider::Gemini => Client::Gemini(gemini::client::Client::new(config.decode(*provider)?)?),
            Provider::Grok => return Err(Error::Unsupported(Provider::Grok)),
        };
        Ok(client)
    }

    fn require(&self, name: &'static str, missing: &mut Vec<&'static str>) -> Option<String> {
        let value = self.env.non_empty(name);
        if value.is_none() {
            missing.push(name);
        }
        value
    }

    fn select_keyed(
        &mut self,
        provider: Provider,
        env_var: &'static str,
        key: &'static str,
        model_key: &'static str,
        model: String,
        temperature: f64,
    ) -> Result<&mut Self, Error> {
        check_temperature(provider, temperature)?;
        let mut missing = Vec::new();
        let Some(api_key) = self.require(env_var, &mut missing) else {
            return Err(ConfigurationError::Missing(missing).into());
        };

        let mut config = ConfigMap::new();
        config
            .insert(key, api_key)
            .insert(model_key, model)
            .insert("temperature", temperature);
        Ok(self.select(provider, config))
    }

    fn select(&mut self, provider: Provider, config: ConfigMap) -> &mut Self {
        tracing::debug!(
            "selected {} with {:?}",
            provider,
            config.keys().collect::<Vec<_>>()
        );
        self.selection = Some((provider, config));
        self
    }
}

/// Vendor configs carry an `f32`, so anything that does not narrow to a finite
/// `f32` is rejected before it reaches the map.
fn check_temperature(provider: Provider, value: f64) -> Result<(), ConfigurationError> {
    if (value as f32).is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::Temperature { provider, value })
    }
}
