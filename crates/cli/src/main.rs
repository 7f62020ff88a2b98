mod error;

use clap::{Parser, Subcommand};
use rchat_provider::env::Env;
use rchat_provider::options::{
    AzureOpenAiOptions, ClaudeOptions, GeminiOptions, GrokOptions, OpenAiOptions,
};
use rchat_provider::{Provider, ProviderBuilder};
use rchat_tools::WeatherTool;
use rchat_types::completion::{Request, DEFAULT_MAX_TOKENS};
use rchat_types::message::Message;

use error::Error;

#[derive(Parser)]
#[command(name = "rchat", about = "Chat with any configured LLM provider")]
struct Args {
    /// Where to write logs; filtering follows RUST_LOG.
    #[arg(long, global = true)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send a single prompt and print the reply.
    Chat(ChatArgs),
    /// Look up mock weather for a location.
    Weather {
        location: String,
        /// Read weather data from this JSON file instead of the bundled set.
        #[arg(long)]
        data: Option<String>,
    },
}

#[derive(clap::Args)]
struct ChatArgs {
    /// openai, azure_openai, claude, gemini or grok
    #[arg(short, long, default_value = "openai")]
    provider: Provider,

    #[arg(short, long)]
    model: Option<String>,

    #[arg(short, long)]
    temperature: Option<f64>,

    /// Azure deployment; overrides AZURE_OPENAI_DEPLOYMENT_NAME.
    #[arg(long)]
    deployment: Option<String>,

    #[arg(long)]
    system: Option<String>,

    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: usize,

    #[arg(required = true)]
    prompt: Vec<String>,
}

impl ChatArgs {
    fn configure<E: Env>(&self, builder: &mut ProviderBuilder<E>) -> Result<(), Error> {
        match self.provider {
            Provider::OpenAi => {
                let mut options = OpenAiOptions::default();
                if let Some(model) = &self.model {
                    options = options.model_name(model);
                }
                if let Some(temperature) = self.temperature {
                    options = options.temperature(temperature);
                }
                builder.with_openai(options)?;
            }
            Provider::AzureOpenAi => {
                let mut options = AzureOpenAiOptions::default();
                if let Some(deployment) = &self.deployment {
                    options = options.deployment_name(deployment);
                }
                if let Some(model) = &self.model {
                    options = options.model_name(model);
                }
                if let Some(temperature) = self.temperature {
                    options = options.temperature(temperature);
                }
                builder.with_azure_openai(options)?;
            }
            Provider::Claude => {
                let mut options = ClaudeOptions::default();
                if let Some(model) = &self.model {
                    options = options.model(model);
                }
                if let Some(temperature) = self.temperature {
                    options = options.temperature(temperature);
                }
                builder.with_claude(options)?;
            }
            Provider::Gemini => {
                let mut options = GeminiOptions::default();
                if let Some(model) = &self.model {
                    options = options.model(model);
                }
                if let Some(temperature) = self.temperature {
                    options = options.temperature(temperature);
                }
                builder.with_gemini(options)?;
            }
            Provider::Grok => {
                let mut options = GrokOptions::default();
                if let Some(model) = &self.model {
                    options = options.model(model);
                }
                if let Some(temperature) = self.temperature {
                    options = options.temperature(temperature);
                }
                builder.with_grok(options)?;
            }
        }
        Ok(())
    }

    fn request(&self) -> Request {
        let mut builder = Request::builder();
        if let Some(system) = &self.system {
            builder = builder.message(Message::system(system.as_str()));
        }
        builder
            .message(self.prompt.join(" "))
            .max_tokens(self.max_tokens)
            .build()
    }

    async fn execute(&self) -> Result<(), Error> {
        let mut builder = ProviderBuilder::new();
        self.configure(&mut builder)?;
        let client = builder.build()?;
        tracing::debug!("sending prompt to {}", client.provider());
        let response = client.complete(self.request()).await?;
        println!("{}", response.text());
        Ok(())
    }
}

impl Args {
    async fn execute(&self) -> Result<(), Error> {
        tracing::debug!("Executing command");
        match &self.command {
            Command::Chat(chat) => chat.execute().await,
            Command::Weather { location, data } => {
                let tool = match data {
                    Some(path) => WeatherTool::load(path)?,
                    None => WeatherTool::bundled()?,
                };
                println!("{}", tool.get_weather(location)?.summary);
                Ok(())
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: failed to load .env file: {e}");
        }
    }
    let args = Args::parse();
    rchat_utils::logging::init_logger(args.log_file.as_deref())?;
    args.execute().await
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn chat_args(argv: &[&str]) -> ChatArgs {
        let args = Args::try_parse_from(argv).unwrap();
        match args.command {
            Command::Chat(chat) => chat,
            Command::Weather { .. } => panic!("expected chat"),
        }
    }

    #[test]
    fn test_parse_chat() {
        let chat = chat_args(&[
            "rchat", "chat", "-p", "claude", "-m", "claude-3-haiku", "-t", "0.2", "how", "is",
            "bangalore?",
        ]);
        assert_eq!(chat.provider, Provider::Claude);
        assert_eq!(chat.model.as_deref(), Some("claude-3-haiku"));
        assert_eq!(chat.temperature, Some(0.2));

        let request = chat.request();
        assert_eq!(request.messages, vec![Message::user("how is bangalore?")]);
        assert_eq!(request.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_parse_rejects_unknown_provider() {
        assert!(Args::try_parse_from(["rchat", "chat", "-p", "mistral", "hi"]).is_err());
    }

    #[test]
    fn test_configure_applies_overrides() {
        let chat = chat_args(&[
            "rchat",
            "chat",
            "-p",
            "azure_openai",
            "--deployment",
            "cli-deployment",
            "hello",
        ]);
        let env = HashMap::from([
            ("AZURE_OPENAI_API_KEY".to_string(), "az-key".to_string()),
            (
                "AZURE_OPENAI_ENDPOINT".to_string(),
                "https://example.openai.azure.com".to_string(),
            ),
        ]);
        let mut builder = ProviderBuilder::with_env(env);
        chat.configure(&mut builder).unwrap();
        assert_eq!(builder.provider(), Some(Provider::AzureOpenAi));
        assert_eq!(
            builder
                .config()
                .and_then(|c| c.get("azure_deployment"))
                .and_then(|v| v.as_str()),
            Some("cli-deployment")
        );
    }

    #[test]
    fn test_parse_weather() {
        let args = Args::try_parse_from(["rchat", "weather", "Bangalore"]).unwrap();
        assert!(matches!(args.command, Command::Weather { ref location, data: None } if location == "Bangalore"));
    }
}
