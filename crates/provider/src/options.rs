//! Per-provider selection options.
//!
//! Defaults follow each vendor's common model and sampling temperature.

#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiOptions {
    pub model_name: String,
    pub temperature: f64,
}

impl Default for OpenAiOptions {
    fn default() -> Self {
        Self {
            model_name: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
        }
    }
}

impl OpenAiOptions {
    pub fn model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

/// `deployment_name`, when set, wins over `AZURE_OPENAI_DEPLOYMENT_NAME`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AzureOpenAiOptions {
    pub deployment_name: Option<String>,
    pub model_name: Option<String>,
    pub temperature: f64,
}

impl AzureOpenAiOptions {
    pub fn deployment_name(mut self, deployment_name: impl Into<String>) -> Self {
        self.deployment_name = Some(deployment_name.into());
        self
    }

    pub fn model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClaudeOptions {
    pub model: String,
    pub temperature: f64,
}

impl Default for ClaudeOptions {
    fn default() -> Self {
        Self {
            model: "claude-2".to_string(),
            temperature: 0.7,
        }
    }
}

impl ClaudeOptions {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiOptions {
    pub model: String,
    pub temperature: f64,
}

impl Default for GeminiOptions {
    fn default() -> Self {
        Self {
            model: "gemini-pro".to_string(),
            temperature: 0.7,
        }
    }
}

impl GeminiOptions {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrokOptions {
    pub model: String,
    pub temperature: f64,
}

impl Default for GrokOptions {
    fn default() -> Self {
        Self {
            model: "grok-1".to_string(),
            temperature: 0.7,
        }
    }
}

impl GrokOptions {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}
