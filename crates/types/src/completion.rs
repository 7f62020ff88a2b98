use serde::{Deserialize, Serialize};

use crate::message::Message;

pub const DEFAULT_MAX_TOKENS: usize = 1024;

/// A vendor-neutral chat completion request.
///
/// `model` and `temperature` override whatever the client was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub messages: Vec<Message>,
    pub model: Option<String>,
    pub max_tokens: usize,
    pub stop_sequences: Option<Vec<String>>,
    pub temperature: Option<f32>,
}

impl Request {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    /// Splits out system messages, joining them with blank lines.
    pub fn split_system(&self) -> (Option<String>, Vec<&Message>) {
        let (system, rest): (Vec<&Message>, Vec<&Message>) = self
            .messages
            .iter()
            .partition(|m| m.role == crate::message::Role::System);
        let system = if system.is_empty() {
            None
        } else {
            Some(
                system
                    .iter()
                    .map(|m| m.content.as_str())
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            )
        };
        (system, rest)
    }
}

impl From<&str> for Request {
    fn from(prompt: &str) -> Self {
        RequestBuilder::new().message(prompt).build()
    }
}

impl From<String> for Request {
    fn from(prompt: String) -> Self {
        RequestBuilder::new().message(prompt).build()
    }
}

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    messages: Vec<Message>,
    model: Option<String>,
    max_tokens: usize,
    stop_sequences: Option<Vec<String>>,
    temperature: Option<f32>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self {
            messages: vec![],
            model: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            stop_sequences: None,
            temperature: None,
        }
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    pub fn message(mut self, message: impl Into<Message>) -> Self {
        self.messages.push(message.into());
        self
    }

    pub fn messages(mut self, messages: Vec<Message>) -> Self {
        self.messages.extend(messages);
        self
    }

    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn stop_sequences(mut self, stop_sequences: Option<Vec<String>>) -> Self {
        self.stop_sequences = stop_sequences;
        self
    }

    pub fn temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn build(self) -> Request {
        Request {
            messages: self.messages,
            model: self.model,
            max_tokens: self.max_tokens,
            stop_sequences: self.stop_sequences,
            temperature: self.temperature,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Usage {
    pub input_tokens: usize,
    pub output_tokens: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Content {
    pub text: String,
    #[serde(rename = "type")]
    pub type_: String,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            type_: "text".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    MaxTokens,
    StopSequence,
    EndTurn,
    ToolUse,
    ContentFilter,
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Serialize)]
pub struct Response {
    pub id: String,
    pub model: String,
    pub content: Vec<Content>,
    pub stop_reason: Option<StopReason>,
    pub usage: Usage,
}

impl Response {
    /// All text blocks concatenated.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("")
    }

    pub fn message(&self) -> Message {
        Message::assistant(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;

    #[test]
    fn test_builder_defaults() {
        let request = Request::builder().message("hello").build();
        assert_eq!(request.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(request.messages, vec![Message::user("hello")]);
        assert!(request.model.is_none());
        assert!(request.temperature.is_none());
    }

    #[test]
    fn test_split_system() {
        let request = Request::builder()
            .message(Message::system("be brief"))
            .message("hi")
            .message(Message::system("be kind"))
            .build();
        let (system, rest) = request.split_system();
        assert_eq!(system.as_deref(), Some("be brief\n\nbe kind"));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].role, Role::User);
    }

    #[test]
    fn test_response_text() {
        let response = Response {
            id: "1".into(),
            model: "m".into(),
            content: vec![Content::text("Hello, "), Content::text("world")],
            stop_reason: Some(StopReason::EndTurn),
            usage: Usage::default(),
        };
        assert_eq!(response.text(), "Hello, world");
        assert_eq!(response.message(), Message::assistant("Hello, world"));
    }

    #[test]
    fn test_unknown_stop_reason() {
        let reason: StopReason = serde_json::from_str("\"refusal\"").unwrap();
        assert_eq!(reason, StopReason::Other);
    }
}
